//! Scheduler error type.
//!
//! Capacity contention is never an error — drones wait.  Errors are either
//! the unreachable-goal sentinel checked before any turn runs, the
//! configured turn bound, or internal invariants that indicate a bug rather
//! than a bad map.

use thiserror::Error;

/// Errors produced by `df-sched`.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The candidate table gives the start hub no way toward the goal.
    /// Surfaced by the constructor; the turn loop never runs.
    #[error("no path from start hub {start:?} to goal hub {end:?}")]
    UnreachableGoal { start: String, end: String },

    /// A committed candidate resolved to no connection.  Internal invariant;
    /// indicates a corrupt candidate table.
    #[error("no connection resolves the step from {from:?} to {to:?}")]
    MissingConnection { from: String, to: String },

    /// A drone stands on a connection that has no onward route.  Internal
    /// invariant; indicates a corrupt candidate table.
    #[error("connection {0:?} has no onward route")]
    EmptyTransitRoute(String),

    /// The run exceeded [`ScheduleConfig::max_turns`](crate::ScheduleConfig).
    #[error("schedule still incomplete after {0} turns")]
    TurnLimitExceeded(u64),
}

/// Shorthand result type for `df-sched` operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
