//! Text movement-log backend.
//!
//! One line per turn: the `D<id>-<location>` token of every drone that
//! moved, space-separated, newline-terminated.  A turn where every drone
//! held position emits a bare newline, so line `k` of the output always
//! corresponds to turn `k`.

use std::io::Write;

use crate::writer::LogWriter;
use crate::{MoveRecord, OutputResult};

/// Writes the movement log to any [`io::Write`](std::io::Write) sink.
pub struct TextLogWriter<W: Write> {
    out: W,
    finished: bool,
}

impl<W: Write> TextLogWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Unwrap the inner sink (e.g. to inspect an in-memory buffer).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LogWriter for TextLogWriter<W> {
    fn write_turn(&mut self, _turn: u64, moves: &[MoveRecord]) -> OutputResult<()> {
        let line = moves
            .iter()
            .map(MoveRecord::token)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
