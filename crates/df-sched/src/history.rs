//! Append-only record of the schedule.

use crate::TurnState;

/// The ordered sequence of occupancy snapshots produced by a run.
///
/// `states()[0]` is the initial configuration (the whole fleet on the start
/// hub); `states()[k]` is the state after turn `k`.  Entries are deep
/// copies — nothing in a recorded state aliases the scheduler's live map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct History {
    states: Vec<TurnState>,
}

impl History {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Snapshot `state` and append it.
    pub(crate) fn record(&mut self, state: &TurnState) {
        self.states.push(state.clone());
    }

    /// All snapshots in turn order.
    pub fn states(&self) -> &[TurnState] {
        &self.states
    }

    /// The initial configuration.
    ///
    /// # Panics
    /// Panics if the history is empty (a completed run never is).
    pub fn initial(&self) -> &TurnState {
        &self.states[0]
    }

    /// The terminal configuration.
    ///
    /// # Panics
    /// Panics if the history is empty (a completed run never is).
    pub fn final_state(&self) -> &TurnState {
        self.states.last().expect("history of a completed run is never empty")
    }

    /// Number of turns played (one less than the number of snapshots).
    pub fn turns(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl std::ops::Index<usize> for History {
    type Output = TurnState;

    fn index(&self, turn: usize) -> &TurnState {
        &self.states[turn]
    }
}
