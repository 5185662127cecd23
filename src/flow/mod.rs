//! Flow algorithms: residual graphs and maximum flow.

pub mod edmonds_karp;
pub mod residual;

pub use edmonds_karp::{max_flow, EdmondsKarp, MaxFlow};
pub use residual::residual_graph;
