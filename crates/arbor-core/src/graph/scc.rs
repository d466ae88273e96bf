//! Strongly connected components.

use arbor_common::utils::hash::FxHashSet;
use arbor_common::{Result, VertexId};

use super::AdjacencyGraph;

impl AdjacencyGraph {
    /// Strongly connected components of a directed graph.
    ///
    /// The classic two-pass algorithm: a first DFS produces the reverse
    /// finish-time order (via [`topological_sort`]), then a second pass
    /// over the transpose, choosing roots in that order, collects each
    /// search tree's vertices as one component. The returned sets are
    /// disjoint and their union is every vertex; singleton components are
    /// included.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an undirected graph.
    ///
    /// [`topological_sort`]: Self::topological_sort
    #[tracing::instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn scc(&self) -> Result<Vec<FxHashSet<VertexId>>> {
        let order = self.topological_sort()?;
        let transpose = self.transpose();

        let mut discovered = vec![false; self.vertex_count()];
        let mut components = Vec::new();
        let mut stack: Vec<VertexId> = Vec::new();

        for root in order {
            if discovered[root.index()] {
                continue;
            }
            // Flood the transpose from this root; everything newly reached
            // belongs to the root's component.
            let mut component = FxHashSet::default();
            discovered[root.index()] = true;
            stack.push(root);
            while let Some(u) = stack.pop() {
                component.insert(u);
                for (v, _) in transpose.neighbors(u) {
                    if !discovered[v.index()] {
                        discovered[v.index()] = true;
                        stack.push(v);
                    }
                }
            }
            components.push(component);
        }

        tracing::trace!(components = components.len(), "scc complete");
        Ok(components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_common::Error;

    fn v(id: u32) -> VertexId {
        VertexId::new(id)
    }

    fn component_of(components: &[FxHashSet<VertexId>], vertex: VertexId) -> &FxHashSet<VertexId> {
        components
            .iter()
            .find(|c| c.contains(&vertex))
            .expect("every vertex is in some component")
    }

    #[test]
    fn test_two_cycles_and_a_bridge() {
        // {0,1,2} -> {3,4}, plus isolated 5.
        let g = AdjacencyGraph::directed(6)
            .with_edges(&[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 3)])
            .unwrap();
        let components = g.scc().unwrap();

        assert_eq!(components.len(), 3);
        assert_eq!(component_of(&components, v(0)).len(), 3);
        assert!(component_of(&components, v(0)).contains(&v(2)));
        assert_eq!(component_of(&components, v(3)).len(), 2);
        assert_eq!(component_of(&components, v(5)).len(), 1);
    }

    #[test]
    fn test_components_partition_the_vertices() {
        let g = AdjacencyGraph::directed(8)
            .with_edges(&[
                (0, 1),
                (1, 2),
                (2, 0),
                (3, 1),
                (3, 2),
                (3, 4),
                (4, 3),
                (5, 2),
                (5, 6),
                (6, 5),
                (6, 7),
                (7, 7),
            ])
            .unwrap();
        let components = g.scc().unwrap();

        let mut seen: Vec<VertexId> = components.iter().flatten().copied().collect();
        assert_eq!(seen.len(), 8, "components must be disjoint");
        seen.sort_unstable();
        let expected: Vec<VertexId> = (0..8).map(VertexId::from_index).collect();
        assert_eq!(seen, expected, "components must cover every vertex");

        // The known component structure of this graph (CLRS 22.5 shape).
        assert_eq!(component_of(&components, v(0)).len(), 3);
        assert_eq!(component_of(&components, v(3)).len(), 2);
        assert_eq!(component_of(&components, v(5)).len(), 2);
        assert_eq!(component_of(&components, v(7)).len(), 1);
    }

    #[test]
    fn test_dag_yields_all_singletons() {
        let g = AdjacencyGraph::directed(4)
            .with_edges(&[(0, 1), (0, 2), (1, 3), (2, 3)])
            .unwrap();
        let components = g.scc().unwrap();
        assert_eq!(components.len(), 4);
        assert!(components.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn test_scc_rejects_undirected() {
        let g = AdjacencyGraph::undirected(2);
        assert!(matches!(g.scc(), Err(Error::InvalidInput(_))));
    }
}
