//! `df-output` — movement-log writers for the droneflow routing engine.
//!
//! A completed schedule is a [`df_sched::History`]; this crate turns it into
//! the per-turn movement log.  Extraction is a pure function
//! ([`turn_moves`]); rendering goes through the [`LogWriter`] trait with two
//! backends:
//!
//! | Backend           | Output                                                |
//! |-------------------|-------------------------------------------------------|
//! | [`TextLogWriter`] | one line per turn of `D<id>-<location>` tokens        |
//! | [`CsvLogWriter`]  | `turn,drone,location` rows                            |
//!
//! # Usage
//!
//! ```rust,ignore
//! use df_output::{render_log, write_log, TextLogWriter};
//!
//! let history = scheduler.run(&mut NoopObserver)?;
//! let log = render_log(&history);                       // in-memory String
//! write_log(&history, &mut TextLogWriter::new(file))?;  // any io::Write
//! ```

pub mod csv;
pub mod error;
pub mod movement;
pub mod row;
pub mod text;
pub mod writer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use crate::csv::CsvLogWriter;
pub use error::{OutputError, OutputResult};
pub use movement::{render_log, turn_moves, write_log};
pub use row::MoveRecord;
pub use text::TextLogWriter;
pub use writer::LogWriter;
