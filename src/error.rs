//! Error types for graph construction.

use thiserror::Error;

/// Errors surfaced while building a graph from caller-supplied edges.
///
/// Construction is the only gate through which edge weights enter the
/// crate, so rejecting bad input here gives every algorithm the
/// non-negative-weights invariant without per-query re-validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// An edge carried a negative weight. Shortest-path and spanning-tree
    /// results are undefined under negative weights, so the input is
    /// rejected instead of silently miscomputed. `index` is the position
    /// of the offending triple in the supplied edge sequence.
    #[error("edge {index} has negative weight {weight}")]
    NegativeWeight { index: usize, weight: i64 },
}
