//! The `Scheduler` struct and its turn loop.

use rustc_hash::FxHashMap;

use df_core::DroneId;
use df_graph::{Connection, Graph};
use df_route::{map_routes, Hop, RouteTable};

use crate::{
    History, ScheduleConfig, ScheduleError, ScheduleObserver, ScheduleResult, TurnState,
};

// ── Drone ─────────────────────────────────────────────────────────────────────

/// One mobile token of the fleet.
///
/// The `location` is always a name from the graph's flat namespace: a hub
/// name between ordinary turns, or a connection name for the holding turn
/// of a restricted transit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Drone {
    pub id: DroneId,
    pub location: String,
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

/// The turn-based fleet scheduler.
///
/// Holds the graph, the candidate table, the fleet, the live occupancy map,
/// and the restricted-hub reservation counts.  [`run`](Self::run) drives the
/// loop to completion and returns the recorded [`History`]:
///
/// 1. reset the per-turn connection-usage scratch map;
/// 2. advance drones in creation order — drones on a connection complete
///    their transit, drones on a hub scan their ranked candidates for the
///    first admissible one (or stay put);
/// 3. snapshot the state into the history.
///
/// Within a turn, earlier drones commit first and later drones observe the
/// partially-advanced state; combined with the fixed candidate order this
/// makes the full schedule deterministic for a given graph.
#[derive(Debug)]
pub struct Scheduler {
    /// Per-run configuration (turn bound).
    pub config: ScheduleConfig,

    graph: Graph,
    routes: RouteTable,
    drones: Vec<Drone>,
    state: TurnState,

    /// Restricted-hub name → drones currently holding a booked slot: they
    /// stand on an approaching connection and will arrive next turn.
    reserved: FxHashMap<String, u32>,
}

impl Scheduler {
    /// Map routes for `graph` and set up a scheduler with the default
    /// configuration.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::UnreachableGoal`] if the mapped table leaves the
    /// start hub without candidates.
    pub fn new(graph: Graph) -> ScheduleResult<Self> {
        Self::with_config(graph, ScheduleConfig::default())
    }

    /// Map routes for `graph` and set up a scheduler with `config`.
    pub fn with_config(graph: Graph, config: ScheduleConfig) -> ScheduleResult<Self> {
        let routes = map_routes(&graph);
        Self::with_routes(graph, routes, config)
    }

    /// Set up a scheduler over a precomputed candidate table.
    ///
    /// The whole fleet is placed on the start hub and `history[0]` of the
    /// eventual run will reflect exactly that.
    pub fn with_routes(
        graph: Graph,
        routes: RouteTable,
        config: ScheduleConfig,
    ) -> ScheduleResult<Self> {
        let start = graph.start().name.clone();
        if routes.candidates(&start).is_empty() {
            return Err(ScheduleError::UnreachableGoal {
                start,
                end: graph.end().name.clone(),
            });
        }

        let mut state = TurnState::for_graph(&graph);
        let drones: Vec<Drone> = DroneId::fleet(graph.nb_drones())
            .map(|id| {
                state.place(&start, id);
                Drone { id, location: start.clone() }
            })
            .collect();

        let reserved = graph
            .hubs()
            .filter(|h| h.zone.is_restricted())
            .map(|h| (h.name.clone(), 0))
            .collect();

        Ok(Self { config, graph, routes, drones, state, reserved })
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The candidate table the scheduler consults — also the interface
    /// downstream renderers consume.
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// The fleet in creation (and iteration) order.
    pub fn drones(&self) -> &[Drone] {
        &self.drones
    }

    /// The live occupancy map.
    pub fn state(&self) -> &TurnState {
        &self.state
    }

    // ── Run loop ──────────────────────────────────────────────────────────

    /// Advance turns until every drone stands on the goal hub, recording a
    /// snapshot per turn.  Calls observer hooks at every turn boundary; use
    /// [`NoopObserver`](crate::NoopObserver) if you don't need callbacks.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::TurnLimitExceeded`] when the configured bound is
    /// hit, or an internal-invariant error on a corrupt candidate table.
    pub fn run<O: ScheduleObserver>(&mut self, observer: &mut O) -> ScheduleResult<History> {
        let goal = self.graph.end().name.clone();
        let fleet = self.drones.len();

        let mut history = History::new();
        history.record(&self.state);

        let mut turn: u64 = 0;
        while self.state.occupancy(&goal) < fleet {
            turn += 1;
            if turn > self.config.max_turns {
                return Err(ScheduleError::TurnLimitExceeded(self.config.max_turns));
            }

            observer.on_turn_start(turn);
            let moved = self.advance_turn()?;
            history.record(&self.state);
            observer.on_turn_end(turn, moved);
            log::trace!("turn {turn}: {moved} of {fleet} drones moved");
        }

        log::debug!("schedule complete: {fleet} drones in {turn} turns");
        observer.on_complete(turn);
        Ok(history)
    }

    /// Play one turn: advance every drone once, in creation order.
    ///
    /// Returns the number of drones that changed location.
    fn advance_turn(&mut self) -> ScheduleResult<usize> {
        // Explicit field borrows so the borrow checker sees disjoint access:
        // the candidate table is read-only while state, fleet, and
        // reservations mutate.
        let Scheduler { graph, routes, drones, state, reserved, .. } = self;

        // Per-turn flow usage, one counter per connection.
        let mut con_used: FxHashMap<String, u32> = graph
            .connections()
            .map(|c| (c.name.clone(), 0))
            .collect();

        let mut moved = 0;
        for drone in drones.iter_mut() {
            let location = drone.location.clone();

            if graph.hub(&location).is_none() {
                // On a connection: complete the restricted transit.  The
                // waypoint's single candidate is the far hub, whose slot was
                // booked when the drone stepped onto the edge.
                let hop = routes
                    .candidates(&location)
                    .first()
                    .ok_or_else(|| ScheduleError::EmptyTransitRoute(location.clone()))?;
                let target = hop.target.name.clone();

                if let Some(count) = reserved.get_mut(&target) {
                    debug_assert!(*count > 0, "transit completion without a reservation");
                    *count = count.saturating_sub(1);
                }

                move_drone(state, drone, &target);
                bump_usage(&mut con_used, &location);
                moved += 1;
                continue;
            }

            if step_from_hub(graph, routes, state, reserved, &mut con_used, drone, &location)? {
                moved += 1;
            }
        }

        debug_assert_eq!(state.drone_count(), drones.len(), "a drone left the state map");
        Ok(moved)
    }
}

// ── Per-drone move selection ──────────────────────────────────────────────────

/// Scan the ranked candidates of `hub_name` and commit the first admissible
/// move for `drone`.  Returns `false` when the drone stays put this turn.
fn step_from_hub(
    graph: &Graph,
    routes: &RouteTable,
    state: &mut TurnState,
    reserved: &mut FxHashMap<String, u32>,
    con_used: &mut FxHashMap<String, u32>,
    drone: &mut Drone,
    hub_name: &str,
) -> ScheduleResult<bool> {
    let candidates = routes.candidates(hub_name);

    for (idx, hop) in candidates.iter().enumerate() {
        let conn = resolve_connection(graph, hub_name, hop)?;

        if !admit(graph, state, reserved, con_used, conn, hop, hub_name) {
            continue;
        }

        // Queue behind the best route unless this detour is actually faster
        // than the expected wait.
        if idx > 0 && wait_time(graph, routes, state, &candidates[0]) < i64::from(hop.cost) {
            continue;
        }

        let conn_name = conn.name.clone();
        move_drone(state, drone, &hop.target.name);
        bump_usage(con_used, &conn_name);
        return Ok(true);
    }

    Ok(false)
}

/// The connection a candidate actually crosses: the direct edge from the
/// current hub, or — when the candidate is an edge waypoint — the connection
/// the waypoint itself names.
fn resolve_connection<'g>(
    graph: &'g Graph,
    from: &str,
    hop: &Hop,
) -> ScheduleResult<&'g Connection> {
    graph
        .connection_between(from, &hop.target.name)
        .or_else(|| graph.connection(&hop.target.name))
        .ok_or_else(|| ScheduleError::MissingConnection {
            from: from.to_owned(),
            to: hop.target.name.clone(),
        })
}

/// The validity check: may `drone` step from `from_hub` onto `hop.target`
/// through `conn` this turn?
///
/// Admission requires a free slot on the target (the goal is exempt — it
/// only accumulates), a free crossing on the connection this turn, and —
/// when the target is an edge waypoint — a bookable slot on the restricted
/// hub behind it.  The booking is taken here, on admission.
fn admit(
    graph: &Graph,
    state: &TurnState,
    reserved: &mut FxHashMap<String, u32>,
    con_used: &FxHashMap<String, u32>,
    conn: &Connection,
    hop: &Hop,
    from_hub: &str,
) -> bool {
    if !graph.is_end(&hop.target.name)
        && state.occupancy(&hop.target.name) >= hop.target.max_drones as usize
    {
        return false;
    }

    if con_used.get(&conn.name).copied().unwrap_or(0) >= conn.max_link_capacity {
        return false;
    }

    if hop.target.is_edge() {
        // Entering a restricted transit: book the far hub now so the
        // two-turn crossing cannot overcommit it.
        let Some(dst) = conn.far_endpoint(from_hub) else {
            return false;
        };
        let Some(dst_hub) = graph.hub(dst) else {
            return false;
        };
        let count = reserved.entry(dst.to_owned()).or_insert(0);
        if *count >= dst_hub.max_drones {
            return false;
        }
        *count += 1;
    }

    true
}

/// Expected turns until the best candidate clears: its remaining cost plus
/// the queue already standing on it, less the capacity of the connection it
/// drains through.  When the best target has no onward candidate or no
/// resolvable drain connection the wait is unbounded and detours are always
/// permitted.
fn wait_time(graph: &Graph, routes: &RouteTable, state: &TurnState, best: &Hop) -> i64 {
    let queued = state.occupancy(&best.target.name) as i64;
    let base = i64::from(best.cost) + queued;

    let Some(next) = routes.candidates(&best.target.name).first() else {
        return i64::MAX;
    };
    match graph.connection_between(&best.target.name, &next.target.name) {
        Some(conn) => base - i64::from(conn.max_link_capacity),
        None => i64::MAX,
    }
}

/// Rebucket `drone` under `target` and update its location field.
fn move_drone(state: &mut TurnState, drone: &mut Drone, target: &str) {
    state.displace(&drone.location, drone.id);
    drone.location = target.to_owned();
    state.place(target, drone.id);
}

/// Count one crossing of `conn_name` in this turn's scratch map.
fn bump_usage(con_used: &mut FxHashMap<String, u32>, conn_name: &str) {
    if let Some(used) = con_used.get_mut(conn_name) {
        *used += 1;
    } else {
        debug_assert!(false, "usage bump for unknown connection {conn_name:?}");
    }
}
