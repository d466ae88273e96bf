//! # Arbor
//!
//! Adjacency-list graph algorithms: traversal, shortest paths, and spanning
//! trees.
//!
//! Build an [`AdjacencyGraph`] (or a dense [`WeightMatrix`]) once, then run
//! read-only algorithm passes over it: BFS/DFS, Dijkstra over a pluggable
//! priority queue, Kruskal and Prim, strongly connected components, and
//! Floyd–Warshall with path reconstruction. Every pass returns freshly
//! allocated per-vertex records and never mutates its input.
//!
//! ## Quick Start
//!
//! ```rust
//! use arbor::{AdjacencyGraph, VertexId};
//!
//! let g = AdjacencyGraph::undirected(5).with_weighted_edges(
//!     &[(0, 1), (0, 2), (1, 3), (2, 3)],
//!     &[1.0, 7.0, 4.0, 3.0],
//! )?;
//!
//! let paths = g.dijkstra_binary_heap(VertexId::new(0))?;
//! assert_eq!(paths[3].distance, 5.0);
//! assert_eq!(paths[3].predecessor, Some(VertexId::new(1)));
//! assert!(!paths[4].is_reached());
//! # Ok::<(), arbor::Error>(())
//! ```
//!
//! ## Choosing a priority queue
//!
//! Dijkstra and Prim are generic over [`IndexedPriorityQueue`].
//! [`BinaryHeapPq`] gives O((V+E) log V) and wins on sparse graphs;
//! [`ArrayPq`] gives O(V² + E) and wins once the graph gets dense. The
//! `dijkstra_binary_heap`/`dijkstra_array` helpers pick for you.

// Re-export the main graph API
pub use arbor_core::{
    AdjacencyGraph, AllPairsShortestPaths, ArrayPq, BinaryHeapPq, DfsNode, DisjointSets, Edge,
    IndexedPriorityQueue, PathNode, WeightMatrix,
};

// Re-export core types - you'll need these for ids and error handling
pub use arbor_common::{Error, Result, VertexId};
