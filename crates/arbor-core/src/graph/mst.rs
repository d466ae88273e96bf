//! Minimum spanning trees (Kruskal, Prim).

use arbor_common::{Result, VertexId};

use super::{AdjacencyGraph, Edge};
use crate::pq::{BinaryHeapPq, IndexedPriorityQueue};

/// The disjoint-set forest consumed by [`AdjacencyGraph::mst_kruskal`].
///
/// Kruskal's algorithm treats this as a black box and relies only on the
/// standard union-find semantics: `find` returns a representative that is
/// equal for two elements iff they are in the same set, and `union` merges
/// the sets containing its arguments. Arbor does not ship an
/// implementation; the caller supplies one covering `[0, vertex_count)`.
pub trait DisjointSets {
    /// Returns the representative of the set containing `x`.
    fn find(&mut self, x: usize) -> usize;

    /// Merges the sets containing `x` and `y`.
    fn union(&mut self, x: usize, y: usize);
}

impl AdjacencyGraph {
    /// Kruskal's minimum spanning tree.
    ///
    /// Edges are taken in ascending weight order (stable, so equal weights
    /// resolve in canonical edge-list order) and kept whenever `forest`
    /// says their endpoints are not yet connected. For a graph with `c`
    /// connected components the result is a spanning forest of
    /// `vertex_count - c` edges.
    ///
    /// `forest` must be fresh: every vertex in its own singleton set.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a directed graph.
    #[tracing::instrument(skip(self, forest), fields(vertices = self.vertex_count()))]
    pub fn mst_kruskal<D: DisjointSets>(&self, forest: &mut D) -> Result<Vec<Edge>> {
        self.require_undirected("minimum spanning tree")?;

        let mut edges = self.edges();
        edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

        let mut tree = Vec::new();
        for edge in edges {
            if forest.find(edge.u.index()) != forest.find(edge.v.index()) {
                forest.union(edge.u.index(), edge.v.index());
                tree.push(edge);
            }
        }
        Ok(tree)
    }

    /// Prim's minimum spanning tree grown from `root`, using the
    /// binary-heap queue.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a directed graph; `OutOfRange` if `root` is not
    /// a vertex of this graph.
    pub fn mst_prim(&self, root: VertexId) -> Result<Vec<Edge>> {
        self.mst_prim_with(root, BinaryHeapPq::new(self.vertex_count()))
    }

    /// Prim's minimum spanning tree over any queue satisfying the shared
    /// [`IndexedPriorityQueue`] contract (the same seam Dijkstra uses).
    ///
    /// Every vertex is enqueued keyed by its cheapest known connection to
    /// the growing tree (`root` at 0, the rest at +∞). Extracting a vertex
    /// fixes its parent edge; its neighbors' keys are then lowered to the
    /// connecting edge weight where that is an improvement. The result is
    /// the edge set `{(parent[v], v)}`. A vertex with no connection to the
    /// tree is extracted at +∞ and becomes the parentless root of a new
    /// tree, so a disconnected graph yields a spanning forest of
    /// `vertex_count - c` edges, matching Kruskal.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a directed graph; `OutOfRange` if `root` is not
    /// a vertex of this graph.
    #[tracing::instrument(skip(self, queue), fields(vertices = self.vertex_count()))]
    pub fn mst_prim_with<Q: IndexedPriorityQueue>(
        &self,
        root: VertexId,
        mut queue: Q,
    ) -> Result<Vec<Edge>> {
        self.require_undirected("minimum spanning tree")?;
        self.check_vertex(root)?;
        debug_assert!(queue.is_empty());

        let n = self.vertex_count();
        let mut parent: Vec<Option<VertexId>> = vec![None; n];
        let mut key: Vec<f64> = vec![f64::INFINITY; n];

        queue.insert(root, 0.0);
        let rest: Vec<(VertexId, f64)> = (0..n)
            .filter(|&u| u != root.index())
            .map(|u| (VertexId::from_index(u), f64::INFINITY))
            .collect();
        queue.insert_all(&rest);

        while let Some(u) = queue.extract_min() {
            for (v, w) in self.neighbors(u) {
                if queue.priority(v).is_some_and(|current| w < current) {
                    parent[v.index()] = Some(u);
                    key[v.index()] = w;
                    queue.change_priority(v, w);
                }
            }
        }

        let tree = parent
            .iter()
            .enumerate()
            .filter_map(|(child, &p)| {
                p.map(|u| Edge {
                    u,
                    v: VertexId::from_index(child),
                    weight: key[child],
                })
            })
            .collect();
        Ok(tree)
    }
}
