//! Configuration loading and management for the roster engine.
//!
//! This module loads the engine's reference data from YAML files: the
//! position classification table, the configured unit list, and engine
//! settings such as the reporting timezone.
//!
//! # Example
//!
//! ```no_run
//! use roster_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/roster").unwrap();
//! println!("Reporting on {} units", config.units().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineSettings, RosterConfig, UnitsConfig};
