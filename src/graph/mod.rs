//! In-memory graph operations.

pub mod builder;
pub mod cycles;
pub mod flow_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use cycles::is_cyclic;
pub use flow_graph::Graph;
pub use traversal::augmenting_path;
