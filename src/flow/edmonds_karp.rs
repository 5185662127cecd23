//! Maximum flow via shortest augmenting paths (Edmonds–Karp).
//!
//! The solver copies the input into a residual graph and only ever mutates
//! that copy. Residual flows are skew-symmetric: pushing `p` units along
//! `u -> v` adds `p` to that edge's flow and subtracts `p` from `v -> u`,
//! which grows the reverse residual capacity by exactly `p`.

use log::debug;

use crate::graph::{augmenting_path, Graph};
use crate::types::{EdgeId, FlowError, FlowResult, Vertex, VertexId};

use super::residual::residual_graph;

/// Result of a max-flow run.
#[derive(Debug, Clone)]
pub struct MaxFlow {
    value: i64,
    augmentations: usize,
    source: VertexId,
    sink: VertexId,
    residual: Graph,
}

impl MaxFlow {
    /// Total flow delivered from source to sink.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Number of augmenting paths that were pushed.
    pub fn augmentations(&self) -> usize {
        self.augmentations
    }

    /// The source vertex used.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// The sink vertex used.
    pub fn sink(&self) -> VertexId {
        self.sink
    }

    /// Final residual graph.
    pub fn residual(&self) -> &Graph {
        &self.residual
    }

    /// Net flow pushed along `tail -> head` by the solver.
    ///
    /// Negative when flow went the other way; zero when the residual graph
    /// has no edge between the pair. Flow already present on the input edges
    /// is not included.
    pub fn net_flow(&self, tail: VertexId, head: VertexId) -> i64 {
        self.residual
            .edge_between(tail, head)
            .map_or(0, |edge| edge.flow())
    }
}

/// Edmonds–Karp max-flow solver.
#[derive(Debug, Default, Clone, Copy)]
pub struct EdmondsKarp;

impl EdmondsKarp {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Solve between the default source and sink.
    ///
    /// The source is the lowest-ID vertex with indegree 0 that has outgoing
    /// edges; the sink is the lowest-ID vertex with outdegree 0 that has
    /// incoming edges. Isolated vertices are only used when nothing else
    /// qualifies, and the sink is never the chosen source.
    pub fn solve(&self, graph: &Graph) -> FlowResult<MaxFlow> {
        self.solve_with(graph, None, None)
    }

    /// Solve with either terminal optionally fixed; a missing one is picked
    /// as in [`EdmondsKarp::solve`].
    pub fn solve_with(
        &self,
        graph: &Graph,
        source: Option<VertexId>,
        sink: Option<VertexId>,
    ) -> FlowResult<MaxFlow> {
        let source = match source {
            Some(id) => id,
            None => pick_terminal(graph.sources(), |v| v.outdegree() > 0, sink)
                .ok_or(FlowError::NoSource)?,
        };
        let sink = match sink {
            Some(id) => id,
            None => pick_terminal(graph.sinks(), |v| v.indegree() > 0, Some(source))
                .ok_or(FlowError::NoSink)?,
        };
        self.solve_between(graph, source, sink)
    }

    /// Solve between explicit terminals.
    pub fn solve_between(
        &self,
        graph: &Graph,
        source: VertexId,
        sink: VertexId,
    ) -> FlowResult<MaxFlow> {
        if !graph.contains_vertex(source) {
            return Err(FlowError::VertexNotFound(source));
        }
        if !graph.contains_vertex(sink) {
            return Err(FlowError::VertexNotFound(sink));
        }
        if source == sink {
            return Err(FlowError::SameTerminal(source));
        }

        let mut residual = residual_graph(graph)?;
        let mut value = 0i64;
        let mut augmentations = 0usize;

        while let Some(path) = augmenting_path(&residual, source, sink) {
            let path_flow = bottleneck(&residual, &path);
            if path_flow <= 0 {
                break;
            }
            augment(&mut residual, &path, path_flow)?;

            value = value
                .checked_add(path_flow)
                .ok_or(FlowError::CapacityOverflow)?;
            augmentations += 1;
            debug!(
                "augmenting path #{augmentations}: {} edge(s), pushed {path_flow}, total {value}",
                path.len()
            );
        }

        debug!("max flow {source} -> {sink} = {value} after {augmentations} augmentation(s)");

        Ok(MaxFlow {
            value,
            augmentations,
            source,
            sink,
            residual,
        })
    }
}

/// Maximum flow value between the default terminals of `graph`.
///
/// Fails with [`FlowError::NoSource`] or [`FlowError::NoSink`] when the graph
/// has no vertex of indegree or outdegree 0, and with
/// [`FlowError::CapacityOverflow`] when the total does not fit in an `i64`.
pub fn max_flow(graph: &Graph) -> FlowResult<i64> {
    EdmondsKarp::new().solve(graph).map(|result| result.value())
}

/// Lowest-ID candidate other than `exclude`, preferring connected ones.
fn pick_terminal(
    candidates: Vec<&Vertex>,
    connected: fn(&Vertex) -> bool,
    exclude: Option<VertexId>,
) -> Option<VertexId> {
    let eligible: Vec<&Vertex> = candidates
        .into_iter()
        .filter(|v| Some(v.id()) != exclude)
        .collect();
    eligible
        .iter()
        .find(|v| connected(**v))
        .or(eligible.first())
        .map(|v| v.id())
}

/// Smallest residual capacity along the path.
fn bottleneck(residual: &Graph, path: &[EdgeId]) -> i64 {
    path.iter()
        .filter_map(|&id| residual.edge(id))
        .map(|edge| edge.residual_capacity())
        .min()
        .unwrap_or(0)
}

/// Push `amount` along every edge of the path and cancel it on the reverses.
fn augment(residual: &mut Graph, path: &[EdgeId], amount: i64) -> FlowResult<()> {
    for &id in path {
        let Some((tail, head)) = residual.edge(id).map(|e| (e.tail(), e.head())) else {
            continue;
        };
        if let Some(edge) = residual.edge_mut(id) {
            edge.push(amount)?;
        }
        // A fresh reverse edge has capacity 0, so its residual becomes `amount`.
        residual.add_edge(head, tail).push(-amount)?;
    }
    Ok(())
}
