//! Single-source shortest paths (Dijkstra).

use arbor_common::{Result, VertexId};

use super::{AdjacencyGraph, PathNode};
use crate::pq::{ArrayPq, BinaryHeapPq, IndexedPriorityQueue};

impl AdjacencyGraph {
    /// Dijkstra's algorithm from `source`, using the supplied priority
    /// queue.
    ///
    /// The routine is parametric purely over the
    /// [`IndexedPriorityQueue`] contract: the same relaxation logic runs in
    /// O((V+E) log V) with [`BinaryHeapPq`] and O(V² + E) with [`ArrayPq`],
    /// which is the whole point of the abstraction. `queue` must be empty,
    /// with a universe covering this graph's vertices.
    ///
    /// Tentative distances live only in the queue while the algorithm runs;
    /// each vertex's result record is written once, at extraction, so there
    /// is no shadow distance array to fall out of sync.
    ///
    /// Returns one [`PathNode`] per vertex; unreached vertices keep an
    /// infinite distance and no predecessor.
    ///
    /// Edge weights must be non-negative; negative weights silently produce
    /// wrong distances (they are not detected).
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `source` is not a vertex of this graph.
    #[tracing::instrument(skip(self, queue), fields(vertices = self.vertex_count()))]
    pub fn shortest_paths<Q: IndexedPriorityQueue>(
        &self,
        source: VertexId,
        mut queue: Q,
    ) -> Result<Vec<PathNode>> {
        self.check_vertex(source)?;
        debug_assert!(queue.is_empty());

        let n = self.vertex_count();
        let mut nodes = vec![PathNode::unreached(); n];

        queue.insert(source, 0.0);
        let rest: Vec<(VertexId, f64)> = (0..n)
            .filter(|&u| u != source.index())
            .map(|u| (VertexId::from_index(u), f64::INFINITY))
            .collect();
        queue.insert_all(&rest);

        while let Some(u) = queue.peek_min() {
            // The priority must be read before extraction removes it.
            let du = queue.priority(u).unwrap_or(f64::INFINITY);
            let _ = queue.extract_min();
            nodes[u.index()].distance = du;

            if du.is_infinite() {
                // Everything still queued is unreachable; nothing relaxes.
                continue;
            }
            for (v, w) in self.neighbors(u) {
                if let Some(dv) = queue.priority(v) {
                    let through_u = du + w;
                    if through_u < dv {
                        nodes[v.index()].predecessor = Some(u);
                        queue.change_priority(v, through_u);
                    }
                }
            }
        }

        tracing::trace!(
            reached = nodes.iter().filter(|n| n.is_reached()).count(),
            "dijkstra settled all vertices"
        );
        Ok(nodes)
    }

    /// Dijkstra's algorithm backed by the binary-heap queue. Preferred for
    /// sparse graphs.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `source` is not a vertex of this graph.
    pub fn dijkstra_binary_heap(&self, source: VertexId) -> Result<Vec<PathNode>> {
        self.shortest_paths(source, BinaryHeapPq::new(self.vertex_count()))
    }

    /// Dijkstra's algorithm backed by the flat-array queue. Preferred for
    /// dense graphs.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `source` is not a vertex of this graph.
    pub fn dijkstra_array(&self, source: VertexId) -> Result<Vec<PathNode>> {
        self.shortest_paths(source, ArrayPq::new(self.vertex_count()))
    }

    /// Single-source shortest paths in a directed acyclic graph.
    ///
    /// Relaxes each vertex's outgoing edges once, in topological order,
    /// which needs no priority queue and allows negative edge weights
    /// (there can be no negative cycle in a DAG). O(V + E).
    ///
    /// The graph must be acyclic: a cyclic input produces an ordering that
    /// is not topological and the resulting distances are meaningless (use
    /// Dijkstra there instead).
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an undirected graph; `OutOfRange` if `source` is
    /// not a vertex of this graph.
    #[tracing::instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn dag_shortest_paths(&self, source: VertexId) -> Result<Vec<PathNode>> {
        let order = self.topological_sort()?;
        self.check_vertex(source)?;

        let mut nodes = vec![PathNode::unreached(); self.vertex_count()];
        nodes[source.index()].distance = 0.0;

        for u in order {
            let du = nodes[u.index()].distance;
            if du.is_infinite() {
                continue;
            }
            for (v, w) in self.neighbors(u) {
                let through_u = du + w;
                if through_u < nodes[v.index()].distance {
                    nodes[v.index()].distance = through_u;
                    nodes[v.index()].predecessor = Some(u);
                }
            }
        }
        Ok(nodes)
    }
}
