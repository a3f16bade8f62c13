//! The candidate table and its element types.

use rustc_hash::FxHashMap;

use df_core::name::is_edge_name;
use df_core::ZoneType;
use df_graph::{Connection, Graph, Hub};

// ── Waypoint ──────────────────────────────────────────────────────────────────

/// A location a candidate steps onto: a real hub, or a connection promoted
/// to a holding slot for a restricted approach.
///
/// Carries exactly what the scheduler's validity check needs — the name, the
/// zone, and the occupancy ceiling — so the scheduler never has to care
/// which kind it is looking at.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    /// Hub name, or connection name for an edge waypoint.
    pub name: String,

    /// Zone of the underlying hub.  Edge waypoints report `Restricted`
    /// (they only exist on restricted approaches) and never win a
    /// priority tie.
    pub zone: ZoneType,

    /// Occupancy ceiling: `max_drones` for a hub, `max_link_capacity` for
    /// an edge waypoint.
    pub max_drones: u32,
}

impl Waypoint {
    /// Waypoint standing for a real hub.
    pub fn from_hub(hub: &Hub) -> Self {
        Self {
            name: hub.name.clone(),
            zone: hub.zone,
            max_drones: hub.max_drones,
        }
    }

    /// Waypoint standing for a connection on a restricted approach.
    pub fn from_connection(conn: &Connection) -> Self {
        Self {
            name: conn.name.clone(),
            zone: ZoneType::Restricted,
            max_drones: conn.max_link_capacity,
        }
    }

    /// `true` if this waypoint is a connection rather than a hub.
    ///
    /// Hub names never contain the edge separator, so the name alone decides.
    #[inline]
    pub fn is_edge(&self) -> bool {
        is_edge_name(&self.name)
    }
}

// ── Hop ───────────────────────────────────────────────────────────────────────

/// One ranked candidate: step onto `target`; `cost` turns remain from the
/// target to the goal.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hop {
    pub target: Waypoint,
    pub cost: u32,
}

// ── RouteTable ────────────────────────────────────────────────────────────────

/// Mapping from location name to its ordered candidate list.
///
/// Every hub has an entry (possibly empty); edge waypoints introduced for
/// restricted approaches have single-entry lists pointing at their far hub.
/// List order is the scheduler's preference order.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteTable {
    inner: FxHashMap<String, Vec<Hop>>,
}

impl RouteTable {
    /// Empty table with a (so far empty) entry for every hub of `graph`.
    pub fn with_hubs(graph: &Graph) -> Self {
        Self {
            inner: graph
                .hubs()
                .map(|h| (h.name.clone(), Vec::new()))
                .collect(),
        }
    }

    /// Ranked candidates for `location`, best first.  Empty for unknown
    /// names, the goal hub, and hubs cut off from the goal.
    pub fn candidates(&self, location: &str) -> &[Hop] {
        self.inner.get(location).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `(next_hop_name, remaining_cost)` pairs for `location`, in preference
    /// order — the view downstream renderers consume.
    pub fn ranked(&self, location: &str) -> impl Iterator<Item = (&str, u32)> {
        self.candidates(location)
            .iter()
            .map(|hop| (hop.target.name.as_str(), hop.cost))
    }

    /// All location names with an entry (hubs plus edge waypoints).
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Number of entries (hubs plus edge waypoints).
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Record that from `from` one may step onto `hop.target`.
    ///
    /// Merge rule: a second record with the same target keeps the smaller
    /// cost; targets are never duplicated within one list.
    pub(crate) fn save(&mut self, from: &str, hop: Hop) {
        let list = self.inner.entry(from.to_owned()).or_default();
        match list.iter_mut().find(|h| h.target.name == hop.target.name) {
            Some(existing) => existing.cost = existing.cost.min(hop.cost),
            None => list.push(hop),
        }
    }

    /// Re-rank every list by `(cost, priority-first)`.
    ///
    /// The sort is stable, so candidates tying on both keys keep their
    /// insertion order (connection declaration order).
    pub(crate) fn resort(&mut self) {
        for list in self.inner.values_mut() {
            list.sort_by_key(|hop| (hop.cost, !hop.target.zone.is_priority()));
        }
    }
}
