//! `df-core` — foundational types for the `droneflow` routing engine.
//!
//! This crate is a dependency of every other `df-*` crate.  It intentionally
//! has no `df-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                 |
//! |-----------|----------------------------------------------------------|
//! | [`ids`]   | `DroneId`                                                |
//! | [`zone`]  | `ZoneType` and the per-zone step-cost table              |
//! | [`name`]  | Location-name vocabulary shared by hubs and connections  |
//! | [`error`] | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod name;
pub mod zone;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::DroneId;
pub use name::EDGE_SEPARATOR;
pub use zone::ZoneType;
