//! Vertex, edge and error types for the flownet library.

pub mod edge;
pub mod error;
pub mod vertex;

pub use edge::{Edge, EdgeId};
pub use error::{FlowError, FlowResult};
pub use vertex::Vertex;

/// Identity of a vertex, chosen by the caller.
pub type VertexId = u64;

/// Capacity given to an edge created without an explicit one.
pub const DEFAULT_CAPACITY: i64 = 0;

/// Flow given to an edge created without an explicit one.
pub const DEFAULT_FLOW: i64 = 0;

/// Weight given to an edge created without an explicit one.
pub const DEFAULT_WEIGHT: f64 = 0.0;
