//! Location-name vocabulary.
//!
//! Hubs and connections share one flat string namespace: a drone's location
//! is always a name, whether it is standing on a hub or in transit on a
//! connection.  A connection's name is derived from its endpoints as
//! `<a>-<b>`, so the separator character is reserved and hub names must not
//! contain it.  That single rule is what keeps the namespace unambiguous.

use crate::{CoreError, CoreResult};

/// Separator used to derive a connection's name from its endpoint hubs.
pub const EDGE_SEPARATOR: char = '-';

/// Derive the connection name for the endpoint pair `(a, b)`, in declaration
/// order.
#[inline]
pub fn edge_name(a: &str, b: &str) -> String {
    format!("{a}{EDGE_SEPARATOR}{b}")
}

/// `true` if `name` denotes a connection rather than a hub.
///
/// Valid because hub names are validated never to contain the separator.
#[inline]
pub fn is_edge_name(name: &str) -> bool {
    name.contains(EDGE_SEPARATOR)
}

/// Split a connection name back into its endpoint hub names.
///
/// Returns `None` for hub names (no separator present).
#[inline]
pub fn split_edge_name(name: &str) -> Option<(&str, &str)> {
    name.split_once(EDGE_SEPARATOR)
}

/// Check that `name` is usable as a hub name: non-empty and free of the
/// reserved separator.
pub fn validate_hub_name(name: &str) -> CoreResult<()> {
    if name.is_empty() {
        return Err(CoreError::EmptyName);
    }
    if name.contains(EDGE_SEPARATOR) {
        return Err(CoreError::ReservedSeparator { name: name.to_owned() });
    }
    Ok(())
}
