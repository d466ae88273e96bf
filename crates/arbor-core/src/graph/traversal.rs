//! Breadth-first and depth-first traversal.

use std::collections::VecDeque;

use arbor_common::{Result, VertexId};
use serde::{Deserialize, Serialize};

use super::AdjacencyGraph;

/// Per-vertex record produced by [`AdjacencyGraph::bfs`] and the Dijkstra
/// entry points, indexed by vertex id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathNode {
    /// Distance from the source; [`f64::INFINITY`] when unreached.
    pub distance: f64,
    /// Predecessor on a shortest path; `None` for the source and for
    /// unreached vertices.
    pub predecessor: Option<VertexId>,
}

impl PathNode {
    pub(crate) fn unreached() -> Self {
        Self {
            distance: f64::INFINITY,
            predecessor: None,
        }
    }

    /// Returns `true` if the vertex was reached from the source.
    #[must_use]
    pub fn is_reached(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Per-vertex record produced by [`AdjacencyGraph::dfs`], indexed by vertex
/// id.
///
/// Discovery and finish timestamps come from a single counter shared across
/// the whole depth-first forest, so they range over `[1, 2n]` and nest like
/// parentheses: a vertex's interval contains the intervals of all its tree
/// descendants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DfsNode {
    /// Timestamp when the vertex was first discovered.
    pub discovery: u32,
    /// Timestamp when the vertex's adjacency was exhausted.
    pub finish: u32,
    /// Parent in the depth-first forest; `None` for roots.
    pub predecessor: Option<VertexId>,
}

impl AdjacencyGraph {
    /// Breadth-first search from `source`.
    ///
    /// Returns one [`PathNode`] per vertex. Distances count edges and are
    /// assigned in non-decreasing order of queue removal; vertices the
    /// search never reaches keep an infinite distance and no predecessor.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `source` is not a vertex of this graph.
    #[tracing::instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn bfs(&self, source: VertexId) -> Result<Vec<PathNode>> {
        self.check_vertex(source)?;
        let mut nodes = vec![PathNode::unreached(); self.vertex_count()];
        nodes[source.index()].distance = 0.0;

        let mut queue = VecDeque::from([source]);
        while let Some(u) = queue.pop_front() {
            let next = nodes[u.index()].distance + 1.0;
            for (v, _) in self.neighbors(u) {
                if nodes[v.index()].distance.is_infinite() {
                    nodes[v.index()].distance = next;
                    nodes[v.index()].predecessor = Some(u);
                    queue.push_back(v);
                }
            }
        }
        Ok(nodes)
    }

    /// Depth-first search over the whole graph.
    ///
    /// Equivalent to [`dfs_with`] with a no-op finish hook.
    ///
    /// [`dfs_with`]: Self::dfs_with
    #[must_use]
    pub fn dfs(&self) -> Vec<DfsNode> {
        self.dfs_with(|_| {})
    }

    /// Depth-first search, calling `on_finish` exactly once per vertex at
    /// the moment its finish time is assigned.
    ///
    /// Vertices are tried as roots in id order, so the result covers every
    /// vertex even in a disconnected graph. The traversal is iterative: an
    /// explicit stack of `(vertex, cursor)` frames replaces the call stack,
    /// so graph diameter never translates into recursion depth. The
    /// timestamp clock is owned by this call.
    pub fn dfs_with<F: FnMut(VertexId)>(&self, mut on_finish: F) -> Vec<DfsNode> {
        let n = self.vertex_count();
        let mut nodes = vec![DfsNode::default(); n];
        let mut time = 0u32;
        let mut stack: Vec<(VertexId, usize)> = Vec::new();

        for root in 0..n {
            // discovery == 0 marks a vertex not yet visited.
            if nodes[root].discovery != 0 {
                continue;
            }
            let root = VertexId::from_index(root);
            time += 1;
            nodes[root.index()].discovery = time;
            stack.push((root, 0));

            while let Some(frame) = stack.last_mut() {
                let (u, cursor) = *frame;
                match self.nth_neighbor(u, cursor) {
                    Some((child, _)) => {
                        frame.1 += 1;
                        if nodes[child.index()].discovery == 0 {
                            nodes[child.index()].predecessor = Some(u);
                            time += 1;
                            nodes[child.index()].discovery = time;
                            stack.push((child, 0));
                        }
                    }
                    None => {
                        time += 1;
                        nodes[u.index()].finish = time;
                        on_finish(u);
                        stack.pop();
                    }
                }
            }
        }
        nodes
    }

    /// Topological sort: vertices in reverse order of DFS finish time.
    ///
    /// For a DAG, every arc points forward in the returned order. Cyclic
    /// inputs still produce a full ordering (this is what the SCC pass
    /// relies on), just not an acyclic one.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an undirected graph.
    #[tracing::instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn topological_sort(&self) -> Result<Vec<VertexId>> {
        self.require_directed("topological sort")?;
        let mut order = Vec::with_capacity(self.vertex_count());
        self.dfs_with(|v| order.push(v));
        order.reverse();
        Ok(order)
    }
}
