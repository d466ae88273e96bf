//! The error type shared across Arbor crates.

use thiserror::Error;

/// Errors produced by graph construction and algorithm entry points.
///
/// Unreachable vertices are never an error: shortest path results report
/// them with an infinite distance. Errors are reserved for malformed inputs
/// caught at construction or mutation boundaries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex id outside `[0, n)` was passed to a graph of `n` vertices.
    #[error("vertex {vertex} out of range for graph with {vertex_count} vertices")]
    OutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },

    /// Structurally invalid input, such as mismatched edge/weight list
    /// lengths or an algorithm applied to the wrong graph kind.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result alias used throughout Arbor.
pub type Result<T> = std::result::Result<T, Error>;
