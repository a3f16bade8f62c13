//! Scheduler configuration.

/// Per-run configuration.
///
/// Typically loaded from a TOML/JSON file by the application layer and
/// passed to [`Scheduler::with_config`](crate::Scheduler::with_config);
/// [`Default`] is right for well-formed maps.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleConfig {
    /// Abort the run after this many turns.
    ///
    /// A connected graph with positive capacities always terminates; the
    /// bound exists to surface broken inputs as an error instead of an
    /// endless loop.
    pub max_turns: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self { max_turns: 100_000 }
    }
}
