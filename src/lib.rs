//! flownet: directed graph engine for capacitated flow networks.
//!
//! Builds directed graphs incrementally, answers structural queries (degrees,
//! sources, sinks, cycles), derives residual graphs from flow assignments and
//! computes maximum s–t flow with Edmonds–Karp.

pub mod cli;
pub mod flow;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use flow::{max_flow, residual_graph, EdmondsKarp, MaxFlow};
pub use graph::{augmenting_path, is_cyclic, Graph, GraphBuilder};
pub use types::{
    Edge, EdgeId, FlowError, FlowResult, Vertex, VertexId, DEFAULT_CAPACITY, DEFAULT_FLOW,
    DEFAULT_WEIGHT,
};
