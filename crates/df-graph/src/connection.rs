//! Connection record.

use df_core::name::edge_name;

/// An undirected edge between two distinct hubs.
///
/// The derived `name` (`<a>-<b>`, in endpoint declaration order) is a
/// first-class location: a drone crossing into a restricted hub spends one
/// turn standing on the connection itself, addressed by this name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Connection {
    /// Unique derived name, `<a>-<b>`.
    pub name: String,

    /// Endpoint hub names in declaration order.
    pub endpoints: (String, String),

    /// Simultaneous-flow ceiling: how many drones may traverse (or occupy)
    /// this connection in one turn.  At least 1.
    pub max_link_capacity: u32,
}

impl Connection {
    /// Construct a connection between `a` and `b`, deriving its name.
    pub fn new(a: impl Into<String>, b: impl Into<String>, max_link_capacity: u32) -> Self {
        let a = a.into();
        let b = b.into();
        Self {
            name: edge_name(&a, &b),
            endpoints: (a, b),
            max_link_capacity,
        }
    }

    /// `true` if `hub` is one of the two endpoints.
    #[inline]
    pub fn touches(&self, hub: &str) -> bool {
        self.endpoints.0 == hub || self.endpoints.1 == hub
    }

    /// The endpoint opposite `from`, or `None` if `from` is not an endpoint.
    pub fn far_endpoint(&self, from: &str) -> Option<&str> {
        if self.endpoints.0 == from {
            Some(&self.endpoints.1)
        } else if self.endpoints.1 == from {
            Some(&self.endpoints.0)
        } else {
            None
        }
    }
}
