//! The `LogWriter` trait implemented by all backend writers.

use crate::{MoveRecord, OutputResult};

/// Trait implemented by the text and CSV movement-log writers.
pub trait LogWriter {
    /// Write the movements of one turn.  `moves` may be empty (a turn where
    /// every drone held position); backends decide how to represent that.
    fn write_turn(&mut self, turn: u64, moves: &[MoveRecord]) -> OutputResult<()>;

    /// Flush underlying sinks.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
