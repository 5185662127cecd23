//! Error types for the flownet library.

use thiserror::Error;

use super::VertexId;

/// All errors that can occur in the flownet library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// No edge connects the two vertices in this direction.
    #[error("No edge from vertex {tail} to vertex {head}")]
    EdgeNotFound { tail: VertexId, head: VertexId },

    /// Vertex not found by ID.
    #[error("Vertex ID {0} not found")]
    VertexNotFound(VertexId),

    /// Max-flow needs a vertex with indegree 0.
    #[error("Graph has no source vertex (indegree 0)")]
    NoSource,

    /// Max-flow needs a vertex with outdegree 0.
    #[error("Graph has no sink vertex (outdegree 0)")]
    NoSink,

    /// Source and sink are the same vertex.
    #[error("Source and sink are the same vertex: {0}")]
    SameTerminal(VertexId),

    /// Capacity below zero.
    #[error("Negative capacity {value} on edge {tail} -> {head}")]
    NegativeCapacity {
        tail: VertexId,
        head: VertexId,
        value: i64,
    },

    /// Flow below zero.
    #[error("Negative flow {value} on edge {tail} -> {head}")]
    NegativeFlow {
        tail: VertexId,
        head: VertexId,
        value: i64,
    },

    /// A capacity sum or flow total does not fit in an `i64`.
    #[error("Capacity or flow total exceeds the i64 range")]
    CapacityOverflow,

    /// Malformed `TAIL:HEAD[:CAPACITY[:FLOW]]` argument.
    #[error("Invalid edge spec: {0}")]
    InvalidEdgeSpec(String),
}

/// Convenience result type for flownet operations.
pub type FlowResult<T> = Result<T, FlowError>;
