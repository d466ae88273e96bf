//! Core type definitions for Arbor.
//!
//! Identifier types used throughout the library. Edge weights and path
//! distances are plain `f64`; a missing edge in a dense matrix and an
//! unreached vertex in a shortest path result are both `f64::INFINITY`.

mod id;

pub use id::VertexId;
