//! `df-graph` — the immutable hub-and-connection graph consumed by the
//! routing layers.
//!
//! # Data layout
//!
//! Hubs and connections live in owning arenas in declaration order;
//! cross-references between them are **names**, not pointers.  Name keys keep
//! the graph trivially cloneable and let occupancy maps, candidate tables,
//! and the movement log all share one flat location namespace (a connection
//! name doubles as an addressable location during restricted transits).
//!
//! Adjacency is precomputed per hub, in connection declaration order — the
//! order is observable downstream (it breaks candidate ties), so it is part
//! of the graph's contract, not an implementation detail.
//!
//! Graphs are validated once at [`GraphBuilder::build`] and immutable
//! thereafter.

pub mod connection;
pub mod error;
pub mod graph;
pub mod hub;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use connection::Connection;
pub use error::{GraphError, GraphResult};
pub use graph::{Graph, GraphBuilder};
pub use hub::Hub;
