//! Command-line surface for the `flownet` binary.

pub mod commands;

pub use commands::{build_graph, parse_edge_spec, EdgeSpec};
