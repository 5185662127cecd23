//! Fluent API for building flow networks.

use crate::types::{FlowResult, VertexId};

use super::Graph;

/// A pending edge: endpoints plus attributes to apply on build.
#[derive(Debug, Clone, Copy)]
struct PendingEdge {
    tail: VertexId,
    head: VertexId,
    capacity: i64,
    flow: i64,
    weight: Option<f64>,
}

/// Fluent builder for constructing a [`Graph`].
///
/// Attribute values are validated when [`GraphBuilder::build`] runs. An edge
/// listed twice keeps the attributes of its last listing.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    vertices: Vec<VertexId>,
    edges: Vec<PendingEdge>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an isolated vertex (edges create their endpoints on their own).
    pub fn vertex(&mut self, id: VertexId) -> &mut Self {
        self.vertices.push(id);
        self
    }

    /// Add an edge with a capacity and zero flow.
    pub fn edge(&mut self, tail: VertexId, head: VertexId, capacity: i64) -> &mut Self {
        self.flow_edge(tail, head, capacity, 0)
    }

    /// Add an edge with a capacity and an initial flow.
    pub fn flow_edge(
        &mut self,
        tail: VertexId,
        head: VertexId,
        capacity: i64,
        flow: i64,
    ) -> &mut Self {
        self.edges.push(PendingEdge {
            tail,
            head,
            capacity,
            flow,
            weight: None,
        });
        self
    }

    /// Set the weight of the most recently added edge.
    pub fn weight(&mut self, weight: f64) -> &mut Self {
        if let Some(last) = self.edges.last_mut() {
            last.weight = Some(weight);
        }
        self
    }

    /// Build the graph, failing on the first negative capacity or flow.
    pub fn build(&self) -> FlowResult<Graph> {
        let mut graph = Graph::new();
        for &id in &self.vertices {
            if !graph.contains_vertex(id) {
                graph.add_vertex(id);
            }
        }
        for pending in &self.edges {
            let edge = graph
                .add_edge(pending.tail, pending.head)
                .set_capacity(pending.capacity)?
                .set_flow(pending.flow)?;
            if let Some(weight) = pending.weight {
                edge.set_weight(weight);
            }
        }
        Ok(graph)
    }
}
