//! Configuration types for the roster engine.
//!
//! This module contains the strongly-typed configuration structures
//! that are deserialized from YAML configuration files.

use chrono_tz::Tz;
use serde::Deserialize;

use crate::models::Unit;
use crate::roster::PositionTable;

/// Engine settings file structure (`settings.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// IANA timezone name anchoring all period boundaries.
    pub timezone: String,
}

/// Unit list file structure (`units.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct UnitsConfig {
    /// The configured units, in report order.
    pub units: Vec<Unit>,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    /// Position classification table.
    positions: PositionTable,
    /// Configured units, in report order.
    units: Vec<Unit>,
    /// Reporting timezone.
    timezone: Tz,
}

impl RosterConfig {
    /// Creates a new RosterConfig from its component parts.
    pub fn new(positions: PositionTable, units: Vec<Unit>, timezone: Tz) -> Self {
        Self {
            positions,
            units,
            timezone,
        }
    }

    /// Returns the position classification table.
    pub fn positions(&self) -> &PositionTable {
        &self.positions
    }

    /// Returns the configured units in report order.
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Returns the reporting timezone.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }
}
