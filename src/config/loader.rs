//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! engine configuration from YAML files.

use std::fs;
use std::path::Path;

use chrono_tz::Tz;

use crate::error::{EngineError, EngineResult};
use crate::models::Unit;
use crate::roster::PositionTable;

use super::types::{EngineSettings, RosterConfig, UnitsConfig};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and exposes the position table, unit list and reporting timezone.
///
/// # Directory Structure
///
/// ```text
/// config/roster/
/// ├── settings.yaml   # Engine settings (reporting timezone)
/// ├── positions.yaml  # Category-defining position identifiers
/// └── units.yaml      # Configured units (uuid + display name)
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/roster").unwrap();
/// println!("Timezone: {}", loader.timezone());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RosterConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if a required file is missing.
    /// - [`EngineError::ConfigParseError`] if a file contains invalid
    ///   YAML or a required field is missing.
    /// - [`EngineError::InvalidTimezone`] if the configured timezone is
    ///   not a recognised IANA identifier.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<EngineSettings>(&path.join("settings.yaml"))?;
        let positions = Self::load_yaml::<PositionTable>(&path.join("positions.yaml"))?;
        let units_config = Self::load_yaml::<UnitsConfig>(&path.join("units.yaml"))?;

        let timezone: Tz =
            settings
                .timezone
                .parse()
                .map_err(|_| EngineError::InvalidTimezone {
                    name: settings.timezone.clone(),
                })?;

        let config = RosterConfig::new(positions, units_config.units, timezone);
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Returns the position classification table.
    pub fn positions(&self) -> &PositionTable {
        self.config.positions()
    }

    /// Returns the configured units in report order.
    pub fn units(&self) -> &[Unit] {
        self.config.units()
    }

    /// Returns the reporting timezone.
    pub fn timezone(&self) -> Tz {
        self.config.timezone()
    }
}
