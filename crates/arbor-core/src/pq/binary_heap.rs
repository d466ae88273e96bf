//! Array-backed binary min-heap with a position table.

use arbor_common::VertexId;

use super::IndexedPriorityQueue;

/// Position-table sentinel for elements not in the heap.
const ABSENT: usize = usize::MAX;

/// An indexed priority queue backed by a binary min-heap.
///
/// Alongside the heap array it keeps a table mapping each element of the
/// universe to its current heap position, which is what makes
/// `change_priority` O(log n) and `contains` O(1). Every structural move in
/// the heap updates the table; the two are never allowed to drift.
#[derive(Debug, Clone)]
pub struct BinaryHeapPq {
    /// `(element, priority)` pairs in heap order: the priority at any
    /// position is `<=` the priorities of both children.
    heap: Vec<(VertexId, f64)>,
    /// element id -> heap position, `ABSENT` when not enqueued.
    positions: Vec<usize>,
}

impl BinaryHeapPq {
    /// Creates an empty queue for elements in `[0, universe)`.
    #[must_use]
    pub fn new(universe: usize) -> Self {
        Self {
            heap: Vec::new(),
            positions: vec![ABSENT; universe],
        }
    }

    /// Returns the size of the element universe.
    #[must_use]
    pub fn universe(&self) -> usize {
        self.positions.len()
    }

    fn parent(position: usize) -> usize {
        (position - 1) / 2
    }

    fn left(position: usize) -> usize {
        2 * position + 1
    }

    /// Moves the entry at `position` toward the root until its parent's
    /// priority is no larger. Shifts displaced parents down and writes the
    /// moving entry (and its table slot) exactly once.
    fn sift_up(&mut self, mut position: usize) {
        let current = self.heap[position];
        while position > 0 {
            let parent = Self::parent(position);
            if self.heap[parent].1 <= current.1 {
                break;
            }
            self.heap[position] = self.heap[parent];
            self.positions[self.heap[position].0.index()] = position;
            position = parent;
        }
        self.heap[position] = current;
        self.positions[current.0.index()] = position;
    }

    /// Moves the entry at `position` toward the leaves, following the
    /// smaller child, until heap order is restored.
    fn sift_down(&mut self, mut position: usize) {
        let current = self.heap[position];
        let len = self.heap.len();
        loop {
            let mut child = Self::left(position);
            if child >= len {
                break;
            }
            if child + 1 < len && self.heap[child + 1].1 < self.heap[child].1 {
                child += 1;
            }
            if self.heap[child].1 >= current.1 {
                break;
            }
            self.heap[position] = self.heap[child];
            self.positions[self.heap[position].0.index()] = position;
            position = child;
        }
        self.heap[position] = current;
        self.positions[current.0.index()] = position;
    }

    /// Restores heap order over the whole array, then rewrites the position
    /// table wholesale. The sift passes leave intermediate table entries
    /// stale; the final sweep fixes every slot.
    fn rebuild(&mut self) {
        let len = self.heap.len();
        for position in (0..len / 2).rev() {
            self.sift_down(position);
        }
        for (position, &(element, _)) in self.heap.iter().enumerate() {
            self.positions[element.index()] = position;
        }
    }
}

impl IndexedPriorityQueue for BinaryHeapPq {
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn insert(&mut self, element: VertexId, priority: f64) -> bool {
        debug_assert!(element.index() < self.positions.len());
        if self.positions[element.index()] != ABSENT {
            return false;
        }
        let position = self.heap.len();
        self.heap.push((element, priority));
        self.positions[element.index()] = position;
        self.sift_up(position);
        true
    }

    fn insert_all(&mut self, pairs: &[(VertexId, f64)]) {
        // A batch at least as large as the current contents is cheaper to
        // append and re-heapify in one O(n) pass than to sift in one by one.
        if pairs.len() >= self.heap.len() {
            for &(element, priority) in pairs {
                if self.positions[element.index()] == ABSENT {
                    // Tentative position; rebuild() assigns the real one.
                    // Marking now also drops duplicates within the batch.
                    self.positions[element.index()] = self.heap.len();
                    self.heap.push((element, priority));
                }
            }
            self.rebuild();
        } else {
            for &(element, priority) in pairs {
                self.insert(element, priority);
            }
        }
    }

    fn peek_min(&self) -> Option<VertexId> {
        self.heap.first().map(|&(element, _)| element)
    }

    fn extract_min(&mut self) -> Option<VertexId> {
        let (min_element, _) = *self.heap.first()?;
        let last = self.heap.pop()?;
        if !self.heap.is_empty() {
            self.heap[0] = last;
            self.positions[last.0.index()] = 0;
            self.sift_down(0);
        }
        self.positions[min_element.index()] = ABSENT;
        Some(min_element)
    }

    fn contains(&self, element: VertexId) -> bool {
        debug_assert!(element.index() < self.positions.len());
        self.positions[element.index()] != ABSENT
    }

    fn priority(&self, element: VertexId) -> Option<f64> {
        debug_assert!(element.index() < self.positions.len());
        let position = self.positions[element.index()];
        if position == ABSENT {
            None
        } else {
            Some(self.heap[position].1)
        }
    }

    fn change_priority(&mut self, element: VertexId, priority: f64) -> bool {
        debug_assert!(element.index() < self.positions.len());
        let position = self.positions[element.index()];
        if position == ABSENT {
            return false;
        }
        let old = self.heap[position].1;
        self.heap[position].1 = priority;
        if priority < old {
            self.sift_up(position);
        } else if priority > old {
            self.sift_down(position);
        }
        true
    }
}
