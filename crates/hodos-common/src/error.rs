//! Error taxonomy for Hodos.
//!
//! All failure modes are explicit `Result` values. In particular,
//! unreachable pairs ([`Error::NoPath`]) and negative cycles
//! ([`Error::NegativeCycle`]) are distinct, first-class outcomes: the engine
//! never leaks a numeric sentinel a caller could mistake for a real
//! distance.

use crate::types::{VertexId, Weight};
use thiserror::Error;

/// Result type used throughout Hodos.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for graph construction, solving, and queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex index outside `[0, vertex_count)` was passed in.
    ///
    /// Raised at the call that receives the index, never silently clamped.
    #[error("vertex {vertex} out of range for graph with {vertex_count} vertices")]
    InvalidVertex {
        /// The offending vertex.
        vertex: VertexId,
        /// Number of vertices in the graph.
        vertex_count: u32,
    },
    /// An edge weight too large in magnitude for distance arithmetic.
    ///
    /// Weights must stay strictly below the internal infinity sentinel in
    /// magnitude so that finite path sums remain distinguishable from
    /// "unreachable". Rejected at `add_edge`, never silently clamped.
    #[error("edge weight {weight} exceeds the supported magnitude")]
    InvalidWeight {
        /// The offending weight.
        weight: Weight,
    },
    /// The graph contains a negative-weight cycle.
    ///
    /// Shortest distances are undefined once a negative cycle exists, so
    /// distance and path queries refuse rather than return poisoned numbers.
    /// Reachability queries remain valid.
    #[error("graph contains a negative cycle; shortest distances are undefined")]
    NegativeCycle,
    /// No path exists between the queried pair.
    ///
    /// An expected outcome for disconnected pairs, not a defect.
    #[error("no path exists from {from} to {to}")]
    NoPath {
        /// Start of the queried pair.
        from: VertexId,
        /// End of the queried pair.
        to: VertexId,
    },
    /// An internal invariant was violated.
    ///
    /// Indicates a bug in matrix population, not a caller mistake. Fatal to
    /// the current computation only.
    #[error("internal consistency error: {0}")]
    InternalConsistency(String),
    /// The computation was cancelled through its [`CancelToken`].
    ///
    /// [`CancelToken`]: crate::cancel::CancelToken
    #[error("computation cancelled")]
    Cancelled,
}
