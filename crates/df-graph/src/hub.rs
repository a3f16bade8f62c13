//! Hub record.

use df_core::ZoneType;

/// A node of the graph: a named location drones can stand on between turns.
///
/// Hubs are created once at graph-build time and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hub {
    /// Unique non-empty name.  Never contains the edge-name separator.
    pub name: String,

    /// Grid position used by display layers.  The routing core ignores it.
    pub coord: (i32, i32),

    /// Travel policy for this hub.
    pub zone: ZoneType,

    /// Occupancy ceiling: how many drones may stand here simultaneously.
    /// At least 1.  The goal hub is exempt from this ceiling at runtime.
    pub max_drones: u32,
}
