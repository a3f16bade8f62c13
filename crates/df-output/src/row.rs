//! Plain data rows written by log backends.

use df_core::DroneId;

/// One drone's movement in one turn: where it ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    pub drone: DroneId,
    /// The new location: a hub name, or a connection name during a
    /// restricted transit.
    pub location: String,
}

impl MoveRecord {
    /// The movement-log token for this record, `D<id>-<location>`.
    pub fn token(&self) -> String {
        format!("{}-{}", self.drone, self.location)
    }
}
