//! Integration tests for df-sched.
//!
//! Scenario graphs are hand-crafted and small; every assertion on turn
//! counts or intermediate states was derived by stepping the turn rules by
//! hand, so a diff here means the engine's observable schedule changed.

#[cfg(test)]
mod helpers {
    use df_core::{DroneId, ZoneType};
    use df_graph::{Graph, GraphBuilder};

    use crate::{History, NoopObserver, Scheduler};

    pub fn run(graph: Graph) -> History {
        Scheduler::new(graph)
            .unwrap()
            .run(&mut NoopObserver)
            .unwrap()
    }

    /// Fork with a priority branch, three drones:
    ///
    /// ```text
    ///                  ┌─ path_a ─┐
    /// start — junction             goal     (path_b is a priority zone)
    ///                  └─ path_b ─┘
    /// ```
    pub fn fork3() -> Graph {
        let mut b = GraphBuilder::new();
        b.add_hub("start", (0, 0), ZoneType::Normal, 3);
        b.add_hub("junction", (1, 0), ZoneType::Normal, 1);
        b.add_hub("path_a", (2, 1), ZoneType::Normal, 1);
        b.add_hub("path_b", (2, -1), ZoneType::Priority, 1);
        b.add_hub("goal", (3, 0), ZoneType::Normal, 1);
        b.connect("start", "junction", 1);
        b.connect("junction", "path_a", 1);
        b.connect("junction", "path_b", 1);
        b.connect("path_a", "goal", 1);
        b.connect("path_b", "goal", 1);
        b.build("start", "goal", 3).unwrap()
    }

    /// `start — narrow(restricted) — goal`, caps 1.
    pub fn restricted_corridor(nb_drones: u32, start_cap: u32) -> Graph {
        let mut b = GraphBuilder::new();
        b.add_hub("start", (0, 0), ZoneType::Normal, start_cap);
        b.add_hub("narrow", (1, 0), ZoneType::Restricted, 1);
        b.add_hub("goal", (2, 0), ZoneType::Normal, 1);
        b.connect("start", "narrow", 1);
        b.connect("narrow", "goal", 1);
        b.build("start", "goal", nb_drones).unwrap()
    }

    // ── Property assertions ───────────────────────────────────────────────

    /// Property: no non-goal hub over its ceiling, no connection over its
    /// flow capacity, in any recorded state.
    pub fn assert_capacity_safe(graph: &Graph, history: &History) {
        for (turn, state) in history.states().iter().enumerate() {
            for hub in graph.hubs() {
                if graph.is_end(&hub.name) {
                    continue;
                }
                assert!(
                    state.occupancy(&hub.name) <= hub.max_drones as usize,
                    "turn {turn}: hub {} over ceiling",
                    hub.name,
                );
            }
            for conn in graph.connections() {
                assert!(
                    state.occupancy(&conn.name) <= conn.max_link_capacity as usize,
                    "turn {turn}: connection {} over capacity",
                    conn.name,
                );
            }
        }
    }

    /// Property: every state holds the whole fleet, each drone exactly once.
    pub fn assert_conservation(graph: &Graph, history: &History) {
        for (turn, state) in history.states().iter().enumerate() {
            assert_eq!(
                state.drone_count(),
                graph.nb_drones() as usize,
                "turn {turn}: fleet miscounted",
            );
            for id in DroneId::fleet(graph.nb_drones()) {
                assert!(
                    state.location_of(id).is_some(),
                    "turn {turn}: {id} missing",
                );
            }
        }
    }

    /// Property: between consecutive states a drone stays, steps to an
    /// adjacent hub, steps onto a touching connection, or steps off a
    /// connection onto one of its endpoints.
    pub fn assert_no_teleport(graph: &Graph, history: &History) {
        for window in history.states().windows(2) {
            for id in DroneId::fleet(graph.nb_drones()) {
                let before = window[0].location_of(id).unwrap();
                let after = window[1].location_of(id).unwrap();
                if before == after {
                    continue;
                }
                let legal = graph.connection_between(before, after).is_some()
                    || graph.connection(after).is_some_and(|c| c.touches(before))
                    || graph.connection(before).is_some_and(|c| c.touches(after));
                assert!(legal, "{id} teleported from {before} to {after}");
            }
        }
    }

    /// Property: drones never leave the goal, and arrival order is stable.
    pub fn assert_goal_accumulates(graph: &Graph, history: &History) {
        let goal = &graph.end().name;
        for window in history.states().windows(2) {
            let before = window[0].occupants(goal);
            let after = window[1].occupants(goal);
            assert!(
                after.starts_with(before),
                "goal bucket shrank or reordered: {before:?} → {after:?}",
            );
        }
    }
}

// ── Scenario seeds ────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use df_core::{DroneId, ZoneType};
    use df_graph::GraphBuilder;

    use super::helpers;

    #[test]
    fn trivial_two_hub() {
        let mut b = GraphBuilder::new();
        b.add_hub("a", (0, 0), ZoneType::Normal, 1);
        b.add_hub("b", (1, 0), ZoneType::Normal, 1);
        b.connect("a", "b", 1);
        let history = helpers::run(b.build("a", "b", 1).unwrap());

        assert_eq!(history.turns(), 1);
        assert_eq!(history[0].occupants("a"), [DroneId(1)]);
        assert!(history[0].occupants("b").is_empty());
        assert!(history[1].occupants("a").is_empty());
        assert_eq!(history[1].occupants("b"), [DroneId(1)]);
    }

    #[test]
    fn fork_routes_through_the_priority_branch() {
        let graph = helpers::fork3();
        let history = helpers::run(graph);

        assert_eq!(history.turns(), 5);
        assert_eq!(
            history.final_state().occupants("goal"),
            [DroneId(1), DroneId(2), DroneId(3)],
        );
        // The priority branch drains one drone per turn, so the normal
        // branch is never worth the detour.
        for state in history.states() {
            assert!(state.occupants("path_a").is_empty());
        }
        // First drone crosses the priority hub on turn 2.
        assert_eq!(history[2].occupants("path_b"), [DroneId(1)]);
    }

    #[test]
    fn linear_bottleneck_pipelines_one_drone_per_turn() {
        let mut b = GraphBuilder::new();
        b.add_hub("start", (0, 0), ZoneType::Normal, 3);
        b.add_hub("mid", (1, 0), ZoneType::Normal, 1);
        b.add_hub("goal", (2, 0), ZoneType::Normal, 1);
        b.connect("start", "mid", 1);
        b.connect("mid", "goal", 1);
        let graph = b.build("start", "goal", 3).unwrap();
        let history = helpers::run(graph.clone());

        // The bottleneck frees every turn, so after the first turn one drone
        // enters it while the previous one leaves: 4 turns for 3 drones.
        assert_eq!(history.turns(), 4);
        // Late drones queue on the start hub until the bottleneck frees.
        assert_eq!(history[1].occupants("start"), [DroneId(2), DroneId(3)]);
        assert_eq!(history[2].occupants("start"), [DroneId(3)]);
        helpers::assert_capacity_safe(&graph, &history);
    }

    #[test]
    fn restricted_transit_takes_three_turns() {
        let history = helpers::run(helpers::restricted_corridor(1, 1));

        assert_eq!(history.turns(), 3);
        // Turn 1: onto the connection.  Turn 2: onto the restricted hub.
        // Turn 3: onto the goal.
        assert_eq!(history[1].occupants("start-narrow"), [DroneId(1)]);
        assert_eq!(history[2].occupants("narrow"), [DroneId(1)]);
        assert_eq!(history[3].occupants("goal"), [DroneId(1)]);
    }

    #[test]
    fn restricted_corridor_serializes_two_drones() {
        let graph = helpers::restricted_corridor(2, 2);
        let history = helpers::run(graph.clone());

        // The second drone may not enter the connection while the first
        // occupies it, nor cross it the turn the first steps off (the
        // crossing already used the link's flow for that turn).
        assert_eq!(history.turns(), 5);
        assert_eq!(history[2].occupants("start"), [DroneId(2)]);
        assert_eq!(history[3].occupants("start-narrow"), [DroneId(2)]);
        helpers::assert_capacity_safe(&graph, &history);
        helpers::assert_no_teleport(&graph, &history);
    }

    #[test]
    fn blocked_hub_forces_the_detour() {
        let mut b = GraphBuilder::new();
        b.add_hub("start", (0, 0), ZoneType::Normal, 1);
        b.add_hub("wall", (1, 0), ZoneType::Blocked, 1);
        b.add_hub("detour", (1, 1), ZoneType::Normal, 1);
        b.add_hub("goal", (2, 0), ZoneType::Normal, 1);
        b.connect("start", "wall", 1);
        b.connect("start", "detour", 1);
        b.connect("wall", "goal", 1);
        b.connect("detour", "goal", 1);
        let history = helpers::run(b.build("start", "goal", 1).unwrap());

        assert_eq!(history.turns(), 2);
        assert_eq!(history[1].occupants("detour"), [DroneId(1)]);
        for state in history.states() {
            assert!(state.occupants("wall").is_empty());
        }
    }

    #[test]
    fn link_capacity_batches_goal_arrivals() {
        let mut b = GraphBuilder::new();
        b.add_hub("start", (0, 0), ZoneType::Normal, 5);
        b.add_hub("goal", (1, 0), ZoneType::Normal, 1);
        b.connect("start", "goal", 2);
        let history = helpers::run(b.build("start", "goal", 5).unwrap());

        // Two drones cross per turn; the goal itself has no ceiling.
        assert_eq!(history.turns(), 3);
        assert_eq!(history[1].occupancy("goal"), 2);
        assert_eq!(history[2].occupancy("goal"), 4);
        assert_eq!(history[3].occupancy("goal"), 5);
    }
}

// ── Wait-versus-detour policy ─────────────────────────────────────────────────

#[cfg(test)]
mod wait_rule {
    use df_core::{DroneId, ZoneType};
    use df_graph::GraphBuilder;

    use super::helpers;

    #[test]
    fn queues_when_waiting_beats_the_detour() {
        // Two routes out of start: via mid (2 turns left) or via d1 (3).
        // With mid occupied, the expected wait (2 + 1 − 1 = 2) still beats
        // the detour cost, so the second drone holds.
        let mut b = GraphBuilder::new();
        b.add_hub("start", (0, 0), ZoneType::Normal, 2);
        b.add_hub("mid", (1, 0), ZoneType::Normal, 1);
        b.add_hub("d1", (1, 1), ZoneType::Normal, 1);
        b.add_hub("d2", (2, 1), ZoneType::Normal, 1);
        b.add_hub("goal", (2, 0), ZoneType::Normal, 1);
        b.connect("d2", "goal", 1);
        b.connect("d1", "d2", 1);
        b.connect("start", "d1", 1);
        b.connect("start", "mid", 1);
        b.connect("mid", "goal", 1);
        let graph = b.build("start", "goal", 2).unwrap();
        let history = helpers::run(graph.clone());

        assert_eq!(history.turns(), 3);
        assert_eq!(history[1].occupants("start"), [DroneId(2)]);
        for state in history.states() {
            assert!(state.occupants("d1").is_empty(), "detour was taken");
        }
    }

    #[test]
    fn detours_when_the_branch_is_equally_good() {
        // Two equal-cost branches; with the priority one occupied the wait
        // (2 + 1 − 1 = 2) no longer undercuts the detour cost of 2, so the
        // second drone takes the other branch.
        let mut b = GraphBuilder::new();
        b.add_hub("junction", (0, 0), ZoneType::Normal, 2);
        b.add_hub("via_a", (1, 1), ZoneType::Normal, 1);
        b.add_hub("via_b", (1, -1), ZoneType::Priority, 1);
        b.add_hub("goal", (2, 0), ZoneType::Normal, 1);
        b.connect("junction", "via_a", 1);
        b.connect("junction", "via_b", 1);
        b.connect("via_a", "goal", 1);
        b.connect("via_b", "goal", 1);
        let graph = b.build("junction", "goal", 2).unwrap();
        let history = helpers::run(graph.clone());

        assert_eq!(history.turns(), 2);
        assert_eq!(history[1].occupants("via_b"), [DroneId(1)]);
        assert_eq!(history[1].occupants("via_a"), [DroneId(2)]);
    }
}

// ── Quantified properties ─────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use super::helpers;

    #[test]
    fn fork_run_is_safe_and_conservative() {
        let graph = helpers::fork3();
        let history = helpers::run(graph.clone());

        helpers::assert_capacity_safe(&graph, &history);
        helpers::assert_conservation(&graph, &history);
        helpers::assert_no_teleport(&graph, &history);
        helpers::assert_goal_accumulates(&graph, &history);
    }

    #[test]
    fn restricted_run_is_safe_and_conservative() {
        let graph = helpers::restricted_corridor(3, 3);
        let history = helpers::run(graph.clone());

        helpers::assert_capacity_safe(&graph, &history);
        helpers::assert_conservation(&graph, &history);
        helpers::assert_no_teleport(&graph, &history);
        helpers::assert_goal_accumulates(&graph, &history);
    }

    #[test]
    fn identical_graphs_produce_identical_histories() {
        let a = helpers::run(helpers::fork3());
        let b = helpers::run(helpers::fork3());
        assert_eq!(a, b);
    }
}

// ── Errors, configuration, observers ──────────────────────────────────────────

#[cfg(test)]
mod runner {
    use df_core::ZoneType;
    use df_graph::GraphBuilder;

    use super::helpers;
    use crate::{NoopObserver, ScheduleConfig, ScheduleError, ScheduleObserver, Scheduler};

    #[test]
    fn unreachable_goal_is_rejected_before_running() {
        let mut b = GraphBuilder::new();
        b.add_hub("island", (0, 0), ZoneType::Normal, 1);
        b.add_hub("goal", (5, 0), ZoneType::Normal, 1);
        let graph = b.build("island", "goal", 1).unwrap();

        let err = Scheduler::new(graph).unwrap_err();
        assert!(matches!(err, ScheduleError::UnreachableGoal { .. }));
    }

    #[test]
    fn turn_bound_aborts_an_unfinished_run() {
        let graph = helpers::restricted_corridor(1, 1); // needs 3 turns
        let mut sched =
            Scheduler::with_config(graph, ScheduleConfig { max_turns: 1 }).unwrap();
        let err = sched.run(&mut NoopObserver).unwrap_err();
        assert!(matches!(err, ScheduleError::TurnLimitExceeded(1)));
    }

    #[derive(Default)]
    struct CountingObserver {
        starts: u64,
        ends: u64,
        moved_total: usize,
        completed_at: Option<u64>,
    }

    impl ScheduleObserver for CountingObserver {
        fn on_turn_start(&mut self, _turn: u64) {
            self.starts += 1;
        }
        fn on_turn_end(&mut self, _turn: u64, moved: usize) {
            self.ends += 1;
            self.moved_total += moved;
        }
        fn on_complete(&mut self, turns: u64) {
            self.completed_at = Some(turns);
        }
    }

    #[test]
    fn observer_sees_every_turn_boundary() {
        let mut sched = Scheduler::new(helpers::fork3()).unwrap();
        let mut obs = CountingObserver::default();
        let history = sched.run(&mut obs).unwrap();

        assert_eq!(obs.starts, history.turns() as u64);
        assert_eq!(obs.ends, history.turns() as u64);
        assert_eq!(obs.completed_at, Some(history.turns() as u64));
        // 3 drones × 3 hops each along the fork.
        assert_eq!(obs.moved_total, 9);
    }

    #[test]
    fn scheduler_exposes_routes_and_fleet() {
        let sched = Scheduler::new(helpers::fork3()).unwrap();
        assert_eq!(sched.drones().len(), 3);
        assert_eq!(
            sched.routes().ranked("junction").collect::<Vec<_>>(),
            vec![("path_b", 2), ("path_a", 2)],
        );
        assert!(sched.drones().iter().all(|d| d.location == "start"));
        assert_eq!(sched.state().occupancy("start"), 3);
    }
}
