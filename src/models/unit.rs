//! Retail unit model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A retail location the engine reports on.
///
/// The configured unit list is the driving set of the weekly merge:
/// every configured unit appears in the output exactly once, and raw
/// records for unconfigured units are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Opaque identifier of the unit.
    pub uuid: Uuid,
    /// Display name used in reports.
    pub name: String,
}
