//! The per-turn occupancy map.

use rustc_hash::FxHashMap;

use df_core::DroneId;
use df_graph::Graph;

/// Occupancy of every location — hubs and connections alike — at one turn
/// boundary.
///
/// Every drone id appears in exactly one bucket.  A clone of a `TurnState`
/// is a full deep copy of the observable occupancy, which is what makes
/// history snapshots safe against later in-place mutation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    buckets: FxHashMap<String, Vec<DroneId>>,
}

impl TurnState {
    /// Empty state with a bucket for every hub and every connection of
    /// `graph`.
    pub fn for_graph(graph: &Graph) -> Self {
        let mut buckets = FxHashMap::default();
        for hub in graph.hubs() {
            buckets.insert(hub.name.clone(), Vec::new());
        }
        for conn in graph.connections() {
            buckets.insert(conn.name.clone(), Vec::new());
        }
        Self { buckets }
    }

    /// Drones at `location`, in arrival order.  Empty for unknown names.
    pub fn occupants(&self, location: &str) -> &[DroneId] {
        self.buckets.get(location).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of drones at `location`.
    #[inline]
    pub fn occupancy(&self, location: &str) -> usize {
        self.occupants(location).len()
    }

    /// Total number of drones across all buckets.
    pub fn drone_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// All location names with a bucket.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// The location currently holding `drone`, if any.
    ///
    /// Linear scan over buckets; fine for the small fleets this engine
    /// targets, and only serializers need it.
    pub fn location_of(&self, drone: DroneId) -> Option<&str> {
        self.buckets
            .iter()
            .find(|(_, drones)| drones.contains(&drone))
            .map(|(name, _)| name.as_str())
    }

    /// Append `drone` to the bucket at `location`.
    pub(crate) fn place(&mut self, location: &str, drone: DroneId) {
        self.buckets.entry(location.to_owned()).or_default().push(drone);
    }

    /// Remove `drone` from the bucket at `location`, keeping arrival order.
    pub(crate) fn displace(&mut self, location: &str, drone: DroneId) {
        if let Some(bucket) = self.buckets.get_mut(location) {
            if let Some(pos) = bucket.iter().position(|&d| d == drone) {
                bucket.remove(pos);
            }
        }
    }
}
