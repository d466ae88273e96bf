//! Dense weight matrix and Floyd–Warshall all-pairs shortest paths.
//!
//! [`WeightMatrix`] is the dense counterpart to the adjacency-list graph:
//! an n×n weight table with 0 on the diagonal and +∞ for non-edges. It
//! pays O(n²) memory for O(1) edge lookup, which is the right trade for
//! [`WeightMatrix::floyd_warshall`]'s O(n³) sweep.

use arbor_common::{Error, Result, VertexId};
use serde::{Deserialize, Serialize};

/// A weighted graph stored as a dense n×n matrix.
///
/// `w[i][j]` is the weight of the edge `i -> j`, `f64::INFINITY` when no
/// such edge exists, and 0 on the diagonal. The undirected variant keeps
/// the matrix symmetric by writing both cells on every insertion. Rows are
/// independently owned vectors; nothing shares storage with the copies the
/// solver works on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightMatrix {
    w: Vec<Vec<f64>>,
    directed: bool,
}

impl WeightMatrix {
    /// Creates an edgeless undirected matrix of `size` vertices.
    #[must_use]
    pub fn undirected(size: usize) -> Self {
        Self::with_kind(size, false)
    }

    /// Creates an edgeless directed matrix of `size` vertices.
    #[must_use]
    pub fn directed(size: usize) -> Self {
        Self::with_kind(size, true)
    }

    fn with_kind(size: usize, directed: bool) -> Self {
        let w = (0..size)
            .map(|i| {
                (0..size)
                    .map(|j| if i == j { 0.0 } else { f64::INFINITY })
                    .collect()
            })
            .collect();
        Self { w, directed }
    }

    /// Adds the given edges with parallel weights, consuming and returning
    /// the matrix builder-style.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the lists differ in length; `OutOfRange` if any
    /// endpoint is out of range.
    pub fn with_weighted_edges(mut self, edges: &[(u32, u32)], weights: &[f64]) -> Result<Self> {
        if edges.len() != weights.len() {
            return Err(Error::InvalidInput(format!(
                "weights length {} != edges length {}",
                weights.len(),
                edges.len()
            )));
        }
        for (&(u, v), &w) in edges.iter().zip(weights) {
            self.add_edge(VertexId::new(u), VertexId::new(v), w)?;
        }
        Ok(self)
    }

    /// Sets the weight of the edge `u -> v` (and `v -> u` when
    /// undirected). Re-adding an edge overwrites its weight. A self-loop
    /// is ignored: the diagonal stays 0.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if either endpoint is out of range.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: f64) -> Result<()> {
        let size = self.w.len();
        for vertex in [u, v] {
            if vertex.index() >= size {
                return Err(Error::OutOfRange {
                    vertex: vertex.index(),
                    vertex_count: size,
                });
            }
        }
        if u == v {
            return Ok(());
        }
        self.w[u.index()][v.index()] = weight;
        if !self.directed {
            self.w[v.index()][u.index()] = weight;
        }
        Ok(())
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn size(&self) -> usize {
        self.w.len()
    }

    /// Returns `true` for a directed matrix.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the weight of `u -> v`: 0 on the diagonal, +∞ for a
    /// non-edge.
    ///
    /// Panics if either endpoint is out of range.
    #[must_use]
    pub fn weight(&self, u: VertexId, v: VertexId) -> f64 {
        self.w[u.index()][v.index()]
    }

    /// Floyd–Warshall all-pairs shortest paths.
    ///
    /// Runs the classic triple loop over intermediate vertex `k`, row `i`,
    /// column `j` on an independent copy of the weight matrix (rows are
    /// cloned recursively; this matrix is never written) and returns two
    /// freshly allocated n×n tables: distances, and the predecessor table
    /// recording for each pair the **last intermediate vertex** whose
    /// inclusion strictly improved the path. `None` there means the best
    /// path is the direct edge (or the pair is unreachable — the distance
    /// table disambiguates).
    ///
    /// Weights may be negative as long as no negative cycle exists.
    #[tracing::instrument(skip(self), fields(size = self.size()))]
    #[must_use]
    pub fn floyd_warshall(&self) -> AllPairsShortestPaths {
        let n = self.w.len();
        // Vec<Vec<_>>::clone clones row by row: a genuinely deep copy.
        let mut dist = self.w.clone();
        let mut pred: Vec<Vec<Option<VertexId>>> = vec![vec![None; n]; n];

        for k in 0..n {
            for i in 0..n {
                let dik = dist[i][k];
                if dik.is_infinite() {
                    continue;
                }
                for j in 0..n {
                    let through_k = dik + dist[k][j];
                    if through_k < dist[i][j] {
                        dist[i][j] = through_k;
                        pred[i][j] = Some(VertexId::from_index(k));
                    }
                }
            }
        }
        AllPairsShortestPaths { dist, pred }
    }
}

/// The output of [`WeightMatrix::floyd_warshall`]: the distance matrix D
/// and the predecessor matrix P.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllPairsShortestPaths {
    dist: Vec<Vec<f64>>,
    pred: Vec<Vec<Option<VertexId>>>,
}

impl AllPairsShortestPaths {
    /// Returns the shortest-path weight from `s` to `t`, +∞ when no path
    /// exists.
    ///
    /// Panics if either vertex is out of range.
    #[must_use]
    pub fn distance(&self, s: VertexId, t: VertexId) -> f64 {
        self.dist[s.index()][t.index()]
    }

    /// Returns the last intermediate vertex that improved the `s -> t`
    /// path, `None` when the best path is the direct edge (or none
    /// exists).
    ///
    /// Panics if either vertex is out of range.
    #[must_use]
    pub fn intermediate(&self, s: VertexId, t: VertexId) -> Option<VertexId> {
        self.pred[s.index()][t.index()]
    }

    /// Returns the full distance matrix.
    #[must_use]
    pub fn dist_matrix(&self) -> &[Vec<f64>] {
        &self.dist
    }

    /// Reconstructs the shortest path from `s` to `t`.
    ///
    /// Returns the path weight and the vertex sequence from `s` to `t`
    /// inclusive. An intermediate entry `k` splits the pair into `s -> k`
    /// and `k -> t`, each reconstructed recursively; a `None` entry is a
    /// direct edge. When no path exists the result is `(+∞, [])`; the path
    /// from a vertex to itself is `(0, [s])`.
    ///
    /// Panics if either vertex is out of range.
    #[must_use]
    pub fn path(&self, s: VertexId, t: VertexId) -> (f64, Vec<VertexId>) {
        let weight = self.distance(s, t);
        if weight.is_infinite() {
            return (f64::INFINITY, Vec::new());
        }
        let mut path = vec![s];
        self.push_tail(s, t, &mut path);
        (weight, path)
    }

    /// Appends the vertices after `s` on the `s..=t` path.
    fn push_tail(&self, s: VertexId, t: VertexId, path: &mut Vec<VertexId>) {
        if s == t {
            return;
        }
        match self.pred[s.index()][t.index()] {
            None => path.push(t),
            Some(k) => {
                self.push_tail(s, k, path);
                self.push_tail(k, t, path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: u32) -> VertexId {
        VertexId::new(id)
    }

    // The worked example as a directed matrix: arcs (0,1,1), (0,2,7),
    // (1,3,4), (2,3,3), (3,2,8), vertex 4 isolated.
    fn example_matrix() -> WeightMatrix {
        WeightMatrix::directed(5)
            .with_weighted_edges(
                &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 2)],
                &[1.0, 7.0, 4.0, 3.0, 8.0],
            )
            .unwrap()
    }

    #[test]
    fn test_construction_invariants() {
        let m = example_matrix();
        for i in 0..5 {
            assert_eq!(m.weight(v(i), v(i)), 0.0);
        }
        assert_eq!(m.weight(v(0), v(1)), 1.0);
        assert!(m.weight(v(1), v(0)).is_infinite());
        assert!(m.weight(v(0), v(4)).is_infinite());
    }

    #[test]
    fn test_undirected_matrix_is_symmetric() {
        let m = WeightMatrix::undirected(4)
            .with_weighted_edges(&[(0, 1), (1, 3), (2, 3)], &[1.5, 2.5, 3.5])
            .unwrap();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(m.weight(v(i), v(j)), m.weight(v(j), v(i)));
            }
        }
    }

    #[test]
    fn test_self_loop_keeps_diagonal_zero() {
        let mut m = WeightMatrix::undirected(3);
        m.add_edge(v(1), v(1), 42.0).unwrap();
        assert_eq!(m.weight(v(1), v(1)), 0.0);
    }

    #[test]
    fn test_length_mismatch_is_invalid_input() {
        let result = WeightMatrix::undirected(3).with_weighted_edges(&[(0, 1)], &[1.0, 2.0]);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_floyd_warshall_distances() {
        let m = example_matrix();
        let apsp = m.floyd_warshall();

        assert_eq!(apsp.distance(v(0), v(0)), 0.0);
        assert_eq!(apsp.distance(v(0), v(1)), 1.0);
        assert_eq!(apsp.distance(v(0), v(2)), 7.0);
        // 0 -> 1 -> 3 beats 0 -> 2 -> 3.
        assert_eq!(apsp.distance(v(0), v(3)), 5.0);
        assert!(apsp.distance(v(0), v(4)).is_infinite());
        // 1 -> 3 -> 2 is the only route from 1 to 2.
        assert_eq!(apsp.distance(v(1), v(2)), 12.0);
    }

    #[test]
    fn test_floyd_warshall_does_not_mutate_input() {
        let m = example_matrix();
        let before = m.clone();
        let _ = m.floyd_warshall();
        assert_eq!(m, before);
    }

    #[test]
    fn test_diagonal_stays_zero_in_distances() {
        let m = WeightMatrix::undirected(4)
            .with_weighted_edges(&[(0, 1), (1, 2), (2, 3)], &[1.0, 1.0, 1.0])
            .unwrap();
        let apsp = m.floyd_warshall();
        for i in 0..4 {
            assert_eq!(apsp.distance(v(i), v(i)), 0.0);
        }
    }

    #[test]
    fn test_symmetric_distances_for_undirected_input() {
        let m = WeightMatrix::undirected(5)
            .with_weighted_edges(&[(0, 1), (1, 2), (2, 3), (3, 4), (0, 4)], &[2.0, 3.0, 1.0, 4.0, 9.0])
            .unwrap();
        let apsp = m.floyd_warshall();
        for i in 0..5 {
            for j in 0..5 {
                assert_eq!(apsp.distance(v(i), v(j)), apsp.distance(v(j), v(i)));
            }
        }
    }

    #[test]
    fn test_path_reconstruction() {
        let m = example_matrix();
        let apsp = m.floyd_warshall();

        let (weight, path) = apsp.path(v(0), v(3));
        assert_eq!(weight, 5.0);
        assert_eq!(path, vec![v(0), v(1), v(3)]);

        let (weight, path) = apsp.path(v(1), v(2));
        assert_eq!(weight, 12.0);
        assert_eq!(path, vec![v(1), v(3), v(2)]);

        // Reconstructed edges re-sum to the reported weight.
        let total: f64 = path.windows(2).map(|e| m.weight(e[0], e[1])).sum();
        assert_eq!(total, weight);

        let (weight, path) = apsp.path(v(0), v(4));
        assert!(weight.is_infinite());
        assert!(path.is_empty());

        let (weight, path) = apsp.path(v(2), v(2));
        assert_eq!(weight, 0.0);
        assert_eq!(path, vec![v(2)]);
    }

    #[test]
    fn test_direct_edge_has_no_intermediate() {
        let m = example_matrix();
        let apsp = m.floyd_warshall();
        assert_eq!(apsp.intermediate(v(0), v(1)), None);
        assert_eq!(apsp.intermediate(v(0), v(3)), Some(v(1)));
    }
}
