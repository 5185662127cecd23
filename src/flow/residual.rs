//! Residual graph construction.

use crate::graph::Graph;
use crate::types::FlowResult;

/// Build the residual graph of a flow assignment.
///
/// For every edge `u -> v` with capacity `c` and flow `f`, the residual graph
/// gets `c - f` units of capacity on `u -> v` when that is positive, and `f`
/// units on `v -> u` when `f` is positive. Contributions that land on the
/// same ordered pair are summed. Every vertex of `graph` is mirrored with the
/// same ID, including isolated ones. All residual flows start at zero.
///
/// The result is an independent graph; mutating it never touches `graph`.
/// Fails with [`FlowError::CapacityOverflow`](crate::FlowError::CapacityOverflow)
/// when summed contributions exceed `i64::MAX`.
pub fn residual_graph(graph: &Graph) -> FlowResult<Graph> {
    let mut residual = Graph::new();
    for vertex in graph.vertices() {
        residual.add_vertex(vertex.id());
    }

    for edge in graph.edges() {
        let spare = edge.residual_capacity();
        if spare > 0 {
            residual.add_edge(edge.tail(), edge.head()).add_capacity(spare)?;
        }
        if edge.flow() > 0 {
            residual
                .add_edge(edge.head(), edge.tail())
                .add_capacity(edge.flow())?;
        }
    }

    Ok(residual)
}
