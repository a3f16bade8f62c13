//! `df-sched` — the constrained multi-drone scheduler.
//!
//! Consumes a validated [`df_graph::Graph`] and a [`df_route::RouteTable`]
//! and advances the whole fleet one discrete turn at a time until every
//! drone stands on the goal hub, recording a deep-copy snapshot of the
//! occupancy map after every turn.
//!
//! # What lives here
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`scheduler`] | `Scheduler`, `Drone` — the turn loop                |
//! | [`state`]     | `TurnState` — the location → drones occupancy map   |
//! | [`history`]   | `History` — append-only sequence of snapshots       |
//! | [`config`]    | `ScheduleConfig` — the turn bound                   |
//! | [`observer`]  | `ScheduleObserver`, `NoopObserver` — progress hooks |
//! | [`error`]     | `ScheduleError`, `ScheduleResult`                   |
//!
//! # Model
//!
//! The engine is single-threaded and fully synchronous.  Drones are
//! conceptually advanced simultaneously within a turn; in practice they are
//! committed one at a time in creation order, with per-turn edge usage
//! staged in a scratch map.  Earlier drones see the in-progress state and
//! may consume — or free — capacity that later drones observe.  This is the
//! intended behavior and makes every schedule deterministic.

pub mod config;
pub mod error;
pub mod history;
pub mod observer;
pub mod scheduler;
pub mod state;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ScheduleConfig;
pub use error::{ScheduleError, ScheduleResult};
pub use history::History;
pub use observer::{NoopObserver, ScheduleObserver};
pub use scheduler::{Drone, Scheduler};
pub use state::TurnState;
