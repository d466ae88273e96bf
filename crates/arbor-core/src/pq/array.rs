//! Flat-array priority queue with linear-scan extraction.

use arbor_common::VertexId;

use super::IndexedPriorityQueue;

/// An indexed priority queue backed by membership flags and a priority
/// array.
///
/// `insert` and `change_priority` are O(1); `peek_min`/`extract_min` scan
/// the whole universe in O(n). On dense graphs, where Dijkstra performs a
/// decrease-key per edge, this trades the heap's per-edge log factor for a
/// per-vertex scan and comes out ahead once E approaches V².
#[derive(Debug, Clone)]
pub struct ArrayPq {
    /// Membership flag per element of the universe.
    present: Vec<bool>,
    /// Priority per element; only meaningful where `present` is set.
    priorities: Vec<f64>,
    len: usize,
}

impl ArrayPq {
    /// Creates an empty queue for elements in `[0, universe)`.
    #[must_use]
    pub fn new(universe: usize) -> Self {
        Self {
            present: vec![false; universe],
            priorities: vec![f64::INFINITY; universe],
            len: 0,
        }
    }

    /// Returns the size of the element universe.
    #[must_use]
    pub fn universe(&self) -> usize {
        self.present.len()
    }
}

impl IndexedPriorityQueue for ArrayPq {
    fn len(&self) -> usize {
        self.len
    }

    fn insert(&mut self, element: VertexId, priority: f64) -> bool {
        debug_assert!(element.index() < self.present.len());
        if self.present[element.index()] {
            return false;
        }
        self.present[element.index()] = true;
        self.priorities[element.index()] = priority;
        self.len += 1;
        true
    }

    fn peek_min(&self) -> Option<VertexId> {
        // Strict comparison keeps the lowest id among equal priorities,
        // which fixes the tie-break deterministically.
        let mut min: Option<usize> = None;
        for (element, &present) in self.present.iter().enumerate() {
            if present && min.is_none_or(|m| self.priorities[element] < self.priorities[m]) {
                min = Some(element);
            }
        }
        min.map(VertexId::from_index)
    }

    fn extract_min(&mut self) -> Option<VertexId> {
        let min = self.peek_min()?;
        self.present[min.index()] = false;
        self.len -= 1;
        Some(min)
    }

    fn contains(&self, element: VertexId) -> bool {
        debug_assert!(element.index() < self.present.len());
        self.present[element.index()]
    }

    fn priority(&self, element: VertexId) -> Option<f64> {
        debug_assert!(element.index() < self.present.len());
        if self.present[element.index()] {
            Some(self.priorities[element.index()])
        } else {
            None
        }
    }

    fn change_priority(&mut self, element: VertexId, priority: f64) -> bool {
        debug_assert!(element.index() < self.present.len());
        if !self.present[element.index()] {
            return false;
        }
        self.priorities[element.index()] = priority;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: u32) -> VertexId {
        VertexId::new(id)
    }

    #[test]
    fn test_ties_extract_lowest_id_first() {
        let mut q = ArrayPq::new(8);
        assert_eq!(q.universe(), 8);
        q.insert(v(5), 3.0);
        q.insert(v(2), 3.0);
        q.insert(v(7), 3.0);

        assert_eq!(q.extract_min(), Some(v(2)));
        assert_eq!(q.extract_min(), Some(v(5)));
        assert_eq!(q.extract_min(), Some(v(7)));
    }

    #[test]
    fn test_extraction_skips_removed_elements() {
        let mut q = ArrayPq::new(4);
        q.insert(v(0), 1.0);
        q.insert(v(1), 2.0);
        q.insert(v(2), 3.0);

        assert_eq!(q.extract_min(), Some(v(0)));
        // The stale priority slot for 0 must not be scanned again.
        assert_eq!(q.peek_min(), Some(v(1)));
        q.change_priority(v(2), 0.5);
        assert_eq!(q.extract_min(), Some(v(2)));
        assert_eq!(q.extract_min(), Some(v(1)));
        assert_eq!(q.extract_min(), None);
    }
}
