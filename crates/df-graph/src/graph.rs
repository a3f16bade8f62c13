//! Graph arena and builder.

use rustc_hash::{FxHashMap, FxHashSet};

use df_core::name::validate_hub_name;
use df_core::ZoneType;

use crate::{Connection, GraphError, GraphResult, Hub};

// ── Graph ─────────────────────────────────────────────────────────────────────

/// The validated, immutable routing graph: hubs, connections, the designated
/// start and end hubs, and the fleet size.
///
/// Do not construct directly; use [`GraphBuilder`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    start: String,
    end: String,
    nb_drones: u32,

    /// Hub arena in declaration order.
    hubs: Vec<Hub>,
    /// Connection arena in declaration order.
    connections: Vec<Connection>,

    /// Name → index into `hubs`.
    hub_index: FxHashMap<String, usize>,
    /// Name → index into `connections`.
    conn_index: FxHashMap<String, usize>,

    /// Per-hub `(far hub index, connection index)` pairs, in connection
    /// declaration order.  Indexed like `hubs`.
    adjacency: Vec<Vec<(u32, u32)>>,
}

impl Graph {
    // ── Designated hubs and fleet ─────────────────────────────────────────

    /// The hub every drone starts on.
    pub fn start(&self) -> &Hub {
        &self.hubs[self.hub_index[&self.start]]
    }

    /// The goal hub.
    pub fn end(&self) -> &Hub {
        &self.hubs[self.hub_index[&self.end]]
    }

    /// Number of drones in the fleet.  At least 1.
    #[inline]
    pub fn nb_drones(&self) -> u32 {
        self.nb_drones
    }

    /// `true` if `name` is the goal hub's name.
    #[inline]
    pub fn is_end(&self, name: &str) -> bool {
        self.end == name
    }

    // ── Arena access ──────────────────────────────────────────────────────

    pub fn hub_count(&self) -> usize {
        self.hubs.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Look up a hub by name.
    pub fn hub(&self, name: &str) -> Option<&Hub> {
        self.hub_index.get(name).map(|&i| &self.hubs[i])
    }

    /// Look up a connection by its derived name.
    pub fn connection(&self, name: &str) -> Option<&Connection> {
        self.conn_index.get(name).map(|&i| &self.connections[i])
    }

    /// The connection joining `a` and `b` (in either order), if any.
    pub fn connection_between(&self, a: &str, b: &str) -> Option<&Connection> {
        self.neighbors(a).find(|(hub, _)| hub.name == b).map(|(_, c)| c)
    }

    /// Hubs in declaration order.
    pub fn hubs(&self) -> impl Iterator<Item = &Hub> {
        self.hubs.iter()
    }

    /// Connections in declaration order.
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter()
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Neighbors of `hub`, each paired with the connection reaching it, in
    /// connection declaration order.
    ///
    /// Declaration order is observable downstream: it seeds candidate-list
    /// insertion order, which breaks ties among equal-cost candidates.
    pub fn neighbors<'a>(
        &'a self,
        hub: &str,
    ) -> impl Iterator<Item = (&'a Hub, &'a Connection)> + 'a {
        let pairs: &[(u32, u32)] = match self.hub_index.get(hub) {
            Some(&i) => &self.adjacency[i],
            None => &[],
        };
        pairs
            .iter()
            .map(|&(h, c)| (&self.hubs[h as usize], &self.connections[c as usize]))
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`Graph`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts hubs and connections in any order and validates the
/// whole graph contract at `build()` time — the upstream map parser is
/// expected to have enforced it already, but the constructors guard it
/// anyway.
///
/// # Example
///
/// ```
/// use df_core::ZoneType;
/// use df_graph::GraphBuilder;
///
/// let mut b = GraphBuilder::new();
/// b.add_hub("depot", (0, 0), ZoneType::Normal, 2);
/// b.add_hub("relay", (3, 1), ZoneType::Priority, 1);
/// b.connect("depot", "relay", 1);
/// let graph = b.build("depot", "relay", 2).unwrap();
/// assert_eq!(graph.hub_count(), 2);
/// assert_eq!(graph.connection_between("relay", "depot").unwrap().name, "depot-relay");
/// ```
#[derive(Default)]
pub struct GraphBuilder {
    hubs: Vec<Hub>,
    links: Vec<RawLink>,
}

struct RawLink {
    a: String,
    b: String,
    capacity: u32,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a hub.  Validation happens at `build()`.
    pub fn add_hub(
        &mut self,
        name: impl Into<String>,
        coord: (i32, i32),
        zone: ZoneType,
        max_drones: u32,
    ) -> &mut Self {
        self.hubs.push(Hub {
            name: name.into(),
            coord,
            zone,
            max_drones,
        });
        self
    }

    /// Declare an undirected connection between `a` and `b`.
    pub fn connect(
        &mut self,
        a: impl Into<String>,
        b: impl Into<String>,
        capacity: u32,
    ) -> &mut Self {
        self.links.push(RawLink {
            a: a.into(),
            b: b.into(),
            capacity,
        });
        self
    }

    /// Validate everything and produce the immutable [`Graph`].
    ///
    /// # Errors
    ///
    /// Any violation of the graph contract: empty or malformed names,
    /// duplicate hubs or connection pairs, self-loops, unknown endpoints,
    /// capacities below 1, unknown start/end, or a fleet size below 1.
    pub fn build(self, start: &str, end: &str, nb_drones: u32) -> GraphResult<Graph> {
        if nb_drones < 1 {
            return Err(GraphError::FleetSize(nb_drones));
        }

        // ── Hubs: names valid and unique, ceilings at least 1 ─────────────
        let mut hub_index = FxHashMap::default();
        for (i, hub) in self.hubs.iter().enumerate() {
            validate_hub_name(&hub.name)?;
            if hub.max_drones < 1 {
                return Err(GraphError::HubCapacity {
                    hub: hub.name.clone(),
                    got: hub.max_drones,
                });
            }
            if hub_index.insert(hub.name.clone(), i).is_some() {
                return Err(GraphError::DuplicateHub(hub.name.clone()));
            }
        }

        if !hub_index.contains_key(start) {
            return Err(GraphError::UnknownStart(start.to_owned()));
        }
        if !hub_index.contains_key(end) {
            return Err(GraphError::UnknownEnd(end.to_owned()));
        }

        // ── Connections: endpoints known and distinct, pairs unique ───────
        let mut connections = Vec::with_capacity(self.links.len());
        let mut conn_index = FxHashMap::default();
        let mut seen_pairs = FxHashSet::default();
        let mut adjacency = vec![Vec::new(); self.hubs.len()];

        for (i, link) in self.links.into_iter().enumerate() {
            let &a_idx = hub_index
                .get(&link.a)
                .ok_or_else(|| GraphError::UnknownEndpoint(link.a.clone()))?;
            let &b_idx = hub_index
                .get(&link.b)
                .ok_or_else(|| GraphError::UnknownEndpoint(link.b.clone()))?;
            if a_idx == b_idx {
                return Err(GraphError::SelfLoop(link.a));
            }

            let pair = if link.a <= link.b {
                (link.a.clone(), link.b.clone())
            } else {
                (link.b.clone(), link.a.clone())
            };
            if !seen_pairs.insert(pair) {
                return Err(GraphError::DuplicateConnection { a: link.a, b: link.b });
            }

            let conn = Connection::new(link.a, link.b, link.capacity);
            if conn.max_link_capacity < 1 {
                return Err(GraphError::LinkCapacity {
                    name: conn.name.clone(),
                    got: conn.max_link_capacity,
                });
            }

            adjacency[a_idx].push((b_idx as u32, i as u32));
            adjacency[b_idx].push((a_idx as u32, i as u32));
            conn_index.insert(conn.name.clone(), i);
            connections.push(conn);
        }

        Ok(Graph {
            start: start.to_owned(),
            end: end.to_owned(),
            nb_drones,
            hubs: self.hubs,
            connections,
            hub_index,
            conn_index,
            adjacency,
        })
    }
}
