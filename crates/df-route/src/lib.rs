//! `df-route` — reverse-cost route mapping.
//!
//! Starting from the goal hub, [`map_routes`] floods the graph outward and
//! builds, for every hub, an ordered list of *candidates*: the locations a
//! drone standing there should consider stepping onto next, ranked by
//! minimum remaining distance with priority zones winning ties.
//!
//! Restricted hubs get special treatment: crossing into one takes two turns,
//! so the approaching connection is promoted to a first-class waypoint with
//! its own (single-entry) candidate list.  The scheduler then never needs a
//! separate code path — a restricted crossing is just two ordinary one-step
//! moves through the edge.
//!
//! Mapping never fails.  A start hub with no candidates after mapping means
//! the goal is unreachable; callers must check before scheduling.

pub mod mapper;
pub mod table;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use mapper::map_routes;
pub use table::{Hop, RouteTable, Waypoint};
