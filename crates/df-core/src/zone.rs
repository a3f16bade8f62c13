//! Hub zone classification and the per-zone travel-cost table.
//!
//! The cost table is the single authority on what a zone means to the
//! routing layers:
//!
//! | Zone       | Step cost | Meaning                                        |
//! |------------|-----------|------------------------------------------------|
//! | Normal     | 1         | ordinary one-turn hop                          |
//! | Priority   | 1         | ordinary one-turn hop; wins cost ties          |
//! | Restricted | 2         | two-turn transit through the approaching edge  |
//! | Blocked    | —         | impassable; never appears in a candidate list  |

/// Per-hub policy flag governing how (and whether) drones may enter a hub.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZoneType {
    /// Ordinary hub (default state).
    #[default]
    Normal,
    /// Ordinary hub that wins ties against equal-cost non-priority routes.
    Priority,
    /// Entering costs two turns: one on the approaching connection, one on
    /// the hub itself.
    Restricted,
    /// Impassable.  Route mapping filters blocked hubs out entirely.
    Blocked,
}

impl ZoneType {
    /// Turns needed to step onto a hub of this zone, or `None` when the hub
    /// is impassable.
    #[inline]
    pub fn step_cost(self) -> Option<u32> {
        match self {
            ZoneType::Normal | ZoneType::Priority => Some(1),
            ZoneType::Restricted => Some(2),
            ZoneType::Blocked => None,
        }
    }

    /// `true` for any zone a drone may stand on.
    #[inline]
    pub fn is_passable(self) -> bool {
        self.step_cost().is_some()
    }

    /// `true` for the tie-winning zone.
    #[inline]
    pub fn is_priority(self) -> bool {
        matches!(self, ZoneType::Priority)
    }

    /// `true` for the two-turn-transit zone.
    #[inline]
    pub fn is_restricted(self) -> bool {
        matches!(self, ZoneType::Restricted)
    }

    /// Human-readable label, useful for log lines and CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            ZoneType::Normal     => "normal",
            ZoneType::Priority   => "priority",
            ZoneType::Restricted => "restricted",
            ZoneType::Blocked    => "blocked",
        }
    }
}

impl std::fmt::Display for ZoneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
