//! CSV movement-log backend.
//!
//! One `turn,drone,location` row per movement — a long-format table that
//! loads straight into analysis tools.  Turns without movement produce no
//! rows.

use std::fs::File;
use std::path::Path;

use ::csv::Writer;

use crate::writer::LogWriter;
use crate::{MoveRecord, OutputResult};

/// Writes the movement log to a CSV file.
pub struct CsvLogWriter {
    writer: Writer<File>,
    finished: bool,
}

impl CsvLogWriter {
    /// Create (or truncate) the CSV file at `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record(["turn", "drone", "location"])?;
        Ok(Self { writer, finished: false })
    }
}

impl LogWriter for CsvLogWriter {
    fn write_turn(&mut self, turn: u64, moves: &[MoveRecord]) -> OutputResult<()> {
        for record in moves {
            self.writer.write_record(&[
                turn.to_string(),
                record.drone.to_string(),
                record.location.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}
