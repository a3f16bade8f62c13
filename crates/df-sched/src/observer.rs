//! Schedule observer trait for progress reporting.

/// Callbacks invoked by [`Scheduler::run`](crate::Scheduler::run) at turn
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl ScheduleObserver for ProgressPrinter {
///     fn on_turn_end(&mut self, turn: u64, moved: usize) {
///         println!("turn {turn}: {moved} drones moved");
///     }
/// }
/// ```
pub trait ScheduleObserver {
    /// Called at the very start of each turn, before any drone is advanced.
    fn on_turn_start(&mut self, _turn: u64) {}

    /// Called after a turn's snapshot is recorded.  `moved` is the number
    /// of drones that changed location this turn.
    fn on_turn_end(&mut self, _turn: u64, _moved: usize) {}

    /// Called once when every drone stands on the goal hub.
    fn on_complete(&mut self, _turns: u64) {}
}

/// A [`ScheduleObserver`] that does nothing.  Use when you need to call
/// `run` but don't want progress callbacks.
pub struct NoopObserver;

impl ScheduleObserver for NoopObserver {}
