//! # arbor-core
//!
//! Core layer for Arbor: graph models, priority queues, and algorithms.
//!
//! This crate provides the data structures and the read-only algorithm
//! passes over them. It depends only on `arbor-common`.
//!
//! ## Modules
//!
//! - [`graph`] - Adjacency-list graph with traversal, shortest path, MST,
//!   and strongly-connected-component algorithms
//! - [`matrix`] - Dense weight matrix and Floyd–Warshall all-pairs solver
//! - [`pq`] - Indexed min-priority queues over dense vertex ids

pub mod graph;
pub mod matrix;
pub mod pq;

// Re-export commonly used types
pub use graph::{AdjacencyGraph, DfsNode, DisjointSets, Edge, PathNode};
pub use matrix::{AllPairsShortestPaths, WeightMatrix};
pub use pq::{ArrayPq, BinaryHeapPq, IndexedPriorityQueue};
