//! Identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A vertex identifier.
///
/// Vertices are identified solely by a dense integer id in `[0, n)` where
/// `n` is the vertex count fixed at graph construction. There is no separate
/// vertex object; every per-vertex record in the library is a vector indexed
/// by `VertexId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(u32);

impl VertexId {
    /// Creates a vertex id from its raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Creates a vertex id from a dense array index.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Returns the id as a dense array index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VertexId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        let v = VertexId::from_index(42);
        assert_eq!(v.index(), 42);
        assert_eq!(v, VertexId::new(42));
    }

    #[test]
    fn test_ordering_follows_raw_id() {
        assert!(VertexId::new(1) < VertexId::new(2));
        assert_eq!(format!("{}", VertexId::new(7)), "7");
    }
}
