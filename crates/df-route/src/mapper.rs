//! The reverse-cost breadth-first mapper.
//!
//! # Algorithm
//!
//! A FIFO flood from the goal.  Each dequeued `(hub, cost)` record means
//! "standing on `hub`, the goal is `cost` steps away"; for every passable,
//! not-yet-visited neighbor `n` we record the reverse step — from `n`,
//! stepping onto `hub` leaves `cost + 1` remaining — and enqueue `n`.
//! A hub is marked visited only after all its neighbors were examined, and
//! neighbors are never re-enqueued from an already-visited origin, so each
//! origin expands once.  After every dequeue all lists are re-ranked, which
//! keeps the `(cost, priority)` order correct even when a later wave
//! improves an earlier entry.
//!
//! Crossing into a restricted hub takes two turns, so the step is split:
//! the connection itself becomes a waypoint whose single candidate is the
//! restricted hub (`cost + 1`), and the origin's candidate targets the
//! connection at `cost + 2`.  The scheduler sees two ordinary moves.
//!
//! Cost: O((V + E) · V log V) worst case — the resort after every dequeue
//! dominates.  Acceptable for the small maps this engine targets.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use df_graph::Graph;

use crate::table::{Hop, RouteTable, Waypoint};

/// Build the candidate table for `graph` by reverse flood from its goal.
///
/// Never fails.  If `graph.start()` ends up with an empty candidate list the
/// goal is unreachable from the start; callers must check before scheduling.
pub fn map_routes(graph: &Graph) -> RouteTable {
    let mut table = RouteTable::with_hubs(graph);
    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut queue: VecDeque<(String, u32)> = VecDeque::new();
    queue.push_back((graph.end().name.clone(), 0));

    while let Some((src_name, cost)) = queue.pop_front() {
        // A second dequeue of the same hub still records reverse steps for
        // its unvisited neighbors but must not re-expand the flood.
        let expand = !visited.contains(&src_name);

        let Some(src) = graph.hub(&src_name) else {
            // Queue entries only ever name hubs.
            debug_assert!(false, "dequeued unknown hub {src_name:?}");
            continue;
        };

        for (neighbor, conn) in graph.neighbors(&src_name) {
            if !neighbor.zone.is_passable() || visited.contains(&neighbor.name) {
                continue;
            }

            if src.zone.is_restricted() {
                // Two-turn transit: hold on the connection, then enter.
                table.save(&conn.name, Hop { target: Waypoint::from_hub(src), cost: cost + 1 });
                table.save(
                    &neighbor.name,
                    Hop { target: Waypoint::from_connection(conn), cost: cost + 2 },
                );
            } else {
                table.save(&neighbor.name, Hop { target: Waypoint::from_hub(src), cost: cost + 1 });
            }

            if expand {
                queue.push_back((neighbor.name.clone(), cost + 1));
            }
        }

        visited.insert(src_name);
        table.resort();
    }

    log::debug!(
        "mapped {} locations from goal {:?} ({} hubs)",
        table.len(),
        graph.end().name,
        graph.hub_count(),
    );
    table
}
