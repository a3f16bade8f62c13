//! Movement extraction and convenience rendering.

use df_core::DroneId;
use df_sched::{History, TurnState};

use crate::{LogWriter, MoveRecord, OutputResult, TextLogWriter};

/// Every drone id present in `state`, in fleet order.
fn fleet_ids(state: &TurnState) -> Vec<DroneId> {
    let mut ids: Vec<DroneId> = state
        .locations()
        .flat_map(|location| state.occupants(location).iter().copied())
        .collect();
    ids.sort_unstable();
    ids
}

/// Per-turn movements extracted from `history`.
///
/// Element `k` lists, in fleet order, every drone whose location in state
/// `k + 1` differs from its location in state `k`.  Drones that held
/// position do not appear.  The result has `history.turns()` elements.
pub fn turn_moves(history: &History) -> Vec<Vec<MoveRecord>> {
    let states = history.states();
    let ids = match states.first() {
        Some(initial) => fleet_ids(initial),
        None => return Vec::new(),
    };

    states
        .windows(2)
        .map(|window| {
            ids.iter()
                .filter_map(|&drone| {
                    let before = window[0].location_of(drone);
                    let after = window[1].location_of(drone)?;
                    (before != Some(after)).then(|| MoveRecord {
                        drone,
                        location: after.to_owned(),
                    })
                })
                .collect()
        })
        .collect()
}

/// Drive `writer` with every turn of `history`, then finish it.
pub fn write_log<W: LogWriter>(history: &History, writer: &mut W) -> OutputResult<()> {
    for (k, moves) in turn_moves(history).iter().enumerate() {
        writer.write_turn(k as u64 + 1, moves)?;
    }
    writer.finish()
}

/// Render the whole movement log as an in-memory string, one line per turn.
pub fn render_log(history: &History) -> String {
    let mut writer = TextLogWriter::new(Vec::new());
    // Writing to a Vec<u8> cannot fail.
    let _ = write_log(history, &mut writer);
    String::from_utf8(writer.into_inner()).unwrap_or_default()
}
