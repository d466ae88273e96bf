//! Adjacency-list graph model and algorithms.
//!
//! [`AdjacencyGraph`] is one concrete type covering the four classic graph
//! flavors through composition: a `directed` capability flag, and weights
//! that are always carried (1.0 when the caller doesn't supply one). The
//! algorithms are read-only passes split across submodules:
//!
//! - `traversal` - BFS, DFS with finish hooks, topological sort
//! - `shortest_path` - Dijkstra over a pluggable priority queue
//! - `mst` - Kruskal (over a disjoint-set collaborator) and Prim
//! - `scc` - strongly connected components

mod mst;
mod scc;
mod shortest_path;
mod traversal;

pub use mst::DisjointSets;
pub use traversal::{DfsNode, PathNode};

use arbor_common::{Error, Result, VertexId};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A single edge record as reported by [`AdjacencyGraph::edges`] and the
/// MST algorithms.
///
/// For an undirected graph the endpoints are in canonical order (`u < v`);
/// for a directed graph `u` is the source and `v` the target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint (source for directed graphs).
    pub u: VertexId,
    /// Second endpoint (target for directed graphs).
    pub v: VertexId,
    /// Edge weight; 1.0 for edges added without one.
    pub weight: f64,
}

/// One adjacency entry: the far endpoint and the edge weight.
#[derive(Debug, Clone, Copy)]
struct Neighbor {
    target: VertexId,
    weight: f64,
}

/// Per-vertex adjacency chain. Most vertices in sparse graphs have only a
/// handful of neighbors; the inline capacity keeps those off the heap.
#[derive(Debug, Clone, Default)]
struct AdjacencyList {
    entries: SmallVec<[Neighbor; 4]>,
}

impl AdjacencyList {
    fn push(&mut self, target: VertexId, weight: f64) {
        self.entries.push(Neighbor { target, weight });
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn iter(&self) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.entries.iter().map(|n| (n.target, n.weight))
    }
}

/// An adjacency-list graph over dense vertex ids `[0, n)`.
///
/// The vertex count is fixed at construction; edges are added incrementally
/// and never removed. An undirected edge is stored in both endpoint lists
/// with the same weight; a directed edge stores only the forward entry and
/// bumps the target's in-degree counter.
///
/// Algorithms never mutate the graph they are given: each returns freshly
/// allocated per-vertex records. The type is not internally synchronized;
/// callers must not mutate a graph while an algorithm is reading it.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    adj: Vec<AdjacencyList>,
    /// Incrementally maintained in-degree counters; empty for undirected
    /// graphs, where in-degree equals degree.
    in_degrees: Vec<usize>,
    directed: bool,
    edge_count: usize,
}

impl AdjacencyGraph {
    /// Creates an undirected graph with `vertex_count` vertices and no
    /// edges.
    #[must_use]
    pub fn undirected(vertex_count: usize) -> Self {
        Self::with_kind(vertex_count, false)
    }

    /// Creates a directed graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn directed(vertex_count: usize) -> Self {
        Self::with_kind(vertex_count, true)
    }

    fn with_kind(vertex_count: usize, directed: bool) -> Self {
        Self {
            adj: vec![AdjacencyList::default(); vertex_count],
            in_degrees: if directed { vec![0; vertex_count] } else { Vec::new() },
            directed,
            edge_count: 0,
        }
    }

    /// Adds the given edges with unit weight, consuming and returning the
    /// graph builder-style.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if any endpoint is not a vertex of this graph.
    pub fn with_edges(mut self, edges: &[(u32, u32)]) -> Result<Self> {
        for &(u, v) in edges {
            self.add_edge(VertexId::new(u), VertexId::new(v))?;
        }
        Ok(self)
    }

    /// Adds the given edges with parallel weights, consuming and returning
    /// the graph builder-style.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the lists differ in length; `OutOfRange` if any
    /// endpoint is not a vertex of this graph.
    pub fn with_weighted_edges(mut self, edges: &[(u32, u32)], weights: &[f64]) -> Result<Self> {
        if edges.len() != weights.len() {
            return Err(Error::InvalidInput(format!(
                "weights length {} != edges length {}",
                weights.len(),
                edges.len()
            )));
        }
        for (&(u, v), &w) in edges.iter().zip(weights) {
            self.add_weighted_edge(VertexId::new(u), VertexId::new(v), w)?;
        }
        Ok(self)
    }

    /// Adds an edge with unit weight.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if either endpoint is not a vertex of this graph.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        self.add_weighted_edge(u, v, 1.0)
    }

    /// Adds an edge with the given weight. Undirected graphs store the
    /// entry in both endpoint lists; directed graphs store the forward
    /// entry and bump `v`'s in-degree.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if either endpoint is not a vertex of this graph. Both
    /// endpoints are validated before anything is written, so a failed call
    /// leaves no partial edge behind.
    pub fn add_weighted_edge(&mut self, u: VertexId, v: VertexId, weight: f64) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.adj[u.index()].push(v, weight);
        if self.directed {
            self.in_degrees[v.index()] += 1;
        } else {
            self.adj[v.index()].push(u, weight);
        }
        self.edge_count += 1;
        Ok(())
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Returns the number of edges added so far.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` for a directed graph.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the degree of `v`: the adjacency-list length for an
    /// undirected graph, out-degree plus in-degree for a directed one.
    ///
    /// Panics if `v` is not a vertex of this graph.
    #[must_use]
    pub fn degree(&self, v: VertexId) -> usize {
        if self.directed {
            self.out_degree(v) + self.in_degree(v)
        } else {
            self.adj[v.index()].len()
        }
    }

    /// Returns the number of edges leaving `v`.
    ///
    /// Panics if `v` is not a vertex of this graph.
    #[must_use]
    pub fn out_degree(&self, v: VertexId) -> usize {
        self.adj[v.index()].len()
    }

    /// Returns the number of edges entering `v`. Equal to [`degree`] for an
    /// undirected graph.
    ///
    /// Panics if `v` is not a vertex of this graph.
    ///
    /// [`degree`]: Self::degree
    #[must_use]
    pub fn in_degree(&self, v: VertexId) -> usize {
        if self.directed {
            self.in_degrees[v.index()]
        } else {
            self.adj[v.index()].len()
        }
    }

    /// Returns an iterator over `(neighbor, weight)` pairs of `v`, in
    /// insertion order.
    ///
    /// Panics if `v` is not a vertex of this graph.
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.adj[v.index()].iter()
    }

    /// Returns the adjacency entry of `u` at `position`, if any. Positional
    /// access is what lets the iterative DFS keep a resumable cursor per
    /// stack frame.
    pub(crate) fn nth_neighbor(&self, u: VertexId, position: usize) -> Option<(VertexId, f64)> {
        self.adj[u.index()]
            .entries
            .get(position)
            .map(|n| (n.target, n.weight))
    }

    /// Returns every edge of the graph.
    ///
    /// An undirected edge is reported exactly once, in canonical `u < v`
    /// direction, regardless of the redundant adjacency storage. A directed
    /// graph reports every stored arc. Undirected self-loops have no
    /// canonical direction and are not reported.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (u, list) in self.adj.iter().enumerate() {
            let u = VertexId::from_index(u);
            for (v, weight) in list.iter() {
                if self.directed || v > u {
                    edges.push(Edge { u, v, weight });
                }
            }
        }
        edges
    }

    /// Returns the transpose: every arc reversed, weights preserved. The
    /// transpose of an undirected graph is an equal copy.
    #[must_use]
    pub fn transpose(&self) -> Self {
        if !self.directed {
            return self.clone();
        }
        let mut transposed = Self::directed(self.vertex_count());
        for (u, list) in self.adj.iter().enumerate() {
            let u = VertexId::from_index(u);
            for (v, weight) in list.iter() {
                transposed.adj[v.index()].push(u, weight);
                transposed.in_degrees[u.index()] += 1;
            }
        }
        transposed.edge_count = self.edge_count;
        transposed
    }

    pub(crate) fn check_vertex(&self, v: VertexId) -> Result<()> {
        if v.index() >= self.adj.len() {
            return Err(Error::OutOfRange {
                vertex: v.index(),
                vertex_count: self.adj.len(),
            });
        }
        Ok(())
    }

    pub(crate) fn require_undirected(&self, operation: &str) -> Result<()> {
        if self.directed {
            return Err(Error::InvalidInput(format!(
                "{operation} requires an undirected graph"
            )));
        }
        Ok(())
    }

    pub(crate) fn require_directed(&self, operation: &str) -> Result<()> {
        if !self.directed {
            return Err(Error::InvalidInput(format!(
                "{operation} requires a directed graph"
            )));
        }
        Ok(())
    }
}
