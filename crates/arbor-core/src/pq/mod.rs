//! Indexed min-priority queues over dense vertex ids.
//!
//! Both implementations accept elements drawn from a fixed universe
//! `[0, n)` declared at construction, and are drop-in substitutable behind
//! [`IndexedPriorityQueue`]. Which one wins depends on graph density:
//!
//! | Operation | [`BinaryHeapPq`] | [`ArrayPq`] |
//! |-----------------|------------------|-------------|
//! | insert | O(log n) | O(1) |
//! | peek/extract min | O(log n) | O(n) |
//! | decrease key | O(log n) | O(1) |
//! | contains | O(1) | O(1) |
//!
//! Dijkstra over the heap runs in O((V+E) log V); over the array in
//! O(V² + E). On dense graphs (E near V²) the array's constant-time
//! decrease-key amortizes better than the heap's log factor; the
//! `pq_bench` benchmark measures the crossover.

mod array;
mod binary_heap;

pub use array::ArrayPq;
pub use binary_heap::BinaryHeapPq;

use arbor_common::VertexId;

/// The contract shared by the queue implementations.
///
/// Elements are vertex ids in the universe `[0, n)` fixed when the queue is
/// constructed; passing an id outside the universe is a documented
/// precondition violation (debug-asserted, index panic in release). Lower
/// priority values are extracted first. Ties are broken arbitrarily but
/// deterministically: a fixed sequence of operations always yields the same
/// extraction order.
pub trait IndexedPriorityQueue {
    /// Returns the number of elements currently in the queue.
    fn len(&self) -> usize;

    /// Returns `true` if the queue contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds an element with the given priority.
    ///
    /// Returns `true` if the element was added, `false` if it was already
    /// present (the existing priority is kept; this is not an overwrite).
    fn insert(&mut self, element: VertexId, priority: f64) -> bool;

    /// Adds every pair whose element is not yet present.
    ///
    /// Implementations may choose a bulk rebuild when the batch dominates
    /// the current contents.
    fn insert_all(&mut self, pairs: &[(VertexId, f64)]) {
        for &(element, priority) in pairs {
            self.insert(element, priority);
        }
    }

    /// Returns the element with minimum priority without removing it, or
    /// `None` if the queue is empty.
    fn peek_min(&self) -> Option<VertexId>;

    /// Removes and returns the element with minimum priority, or `None` if
    /// the queue is empty.
    fn extract_min(&mut self) -> Option<VertexId>;

    /// Returns `true` if the element is currently in the queue.
    fn contains(&self, element: VertexId) -> bool;

    /// Returns the element's current priority, or `None` if it is not in
    /// the queue.
    fn priority(&self, element: VertexId) -> Option<f64>;

    /// Changes the priority of an element already in the queue,
    /// repositioning it as needed.
    ///
    /// Returns `false` (and does nothing) if the element is absent.
    fn change_priority(&mut self, element: VertexId, priority: f64) -> bool;
}
