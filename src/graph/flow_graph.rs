//! Core graph structure: vertices plus an edge arena with adjacency indexes.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use log::warn;

use crate::types::{Edge, EdgeId, FlowError, FlowResult, Vertex, VertexId};

use super::cycles;

/// A mutable directed graph with capacitated edges.
///
/// The graph owns every vertex and edge. Vertices refer to edges by
/// [`EdgeId`] into the arena, so there are no reference cycles and dropping
/// the graph frees everything at once.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// All vertices, indexed by ID.
    vertices: BTreeMap<VertexId, Vertex>,
    /// Edge arena. A slot is `None` once its edge was detached by a vertex reset.
    edges: Vec<Option<Edge>>,
    /// Successor IDs per vertex, in edge-creation order.
    adjacency: HashMap<VertexId, Vec<VertexId>>,
    /// Vertices with indegree 0.
    sources: BTreeSet<VertexId>,
    /// Vertices with outdegree 0.
    sinks: BTreeSet<VertexId>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().flatten().count()
    }

    /// Returns `true` if a vertex with this ID exists.
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Get a vertex by ID.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// All vertices in ascending ID order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// All live edges in creation order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().flatten()
    }

    /// Get an edge by handle.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0).and_then(Option::as_ref)
    }

    /// Get an edge by handle (mutable).
    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(id.0).and_then(Option::as_mut)
    }

    /// The edge `tail -> head`, if the two vertices are directly connected.
    pub fn edge_between(&self, tail: VertexId, head: VertexId) -> Option<&Edge> {
        let id = self.vertices.get(&tail)?.edge_to(head)?;
        self.edge(id)
    }

    /// The edge `tail -> head`, or [`FlowError::EdgeNotFound`].
    ///
    /// A present edge with zero capacity is returned, not reported missing.
    pub fn find_edge(&self, tail: VertexId, head: VertexId) -> FlowResult<&Edge> {
        self.edge_between(tail, head)
            .ok_or(FlowError::EdgeNotFound { tail, head })
    }

    /// Mutable variant of [`Graph::find_edge`].
    pub fn find_edge_mut(&mut self, tail: VertexId, head: VertexId) -> FlowResult<&mut Edge> {
        let id = self
            .vertices
            .get(&tail)
            .and_then(|v| v.edge_to(head))
            .ok_or(FlowError::EdgeNotFound { tail, head })?;
        self.edge_mut(id).ok_or(FlowError::EdgeNotFound { tail, head })
    }

    /// Successor IDs of a vertex in edge-creation order.
    pub fn successors(&self, id: VertexId) -> &[VertexId] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Vertices with indegree 0, in ascending ID order.
    pub fn sources(&self) -> Vec<&Vertex> {
        self.sources
            .iter()
            .filter_map(|id| self.vertices.get(id))
            .collect()
    }

    /// Vertices with outdegree 0, in ascending ID order.
    pub fn sinks(&self) -> Vec<&Vertex> {
        self.sinks
            .iter()
            .filter_map(|id| self.vertices.get(id))
            .collect()
    }

    /// Returns `true` if the graph has at least one directed cycle.
    pub fn is_cyclic(&self) -> bool {
        cycles::is_cyclic(self)
    }

    /// Add a vertex with empty adjacency.
    ///
    /// An existing vertex with the same ID is replaced: its edges are
    /// detached from both endpoints and their arena slots are emptied.
    pub fn add_vertex(&mut self, id: VertexId) -> &Vertex {
        if let Some(old) = self.vertices.insert(id, Vertex::new(id)) {
            self.detach(&old);
        }
        self.adjacency.insert(id, Vec::new());
        self.sources.insert(id);
        self.sinks.insert(id);
        &self.vertices[&id]
    }

    /// Add the edge `tail -> head`, creating missing endpoints.
    ///
    /// If the edge already exists it is returned unchanged. Attributes are
    /// set afterwards through the returned handle.
    pub fn add_edge(&mut self, tail: VertexId, head: VertexId) -> &mut Edge {
        if !self.vertices.contains_key(&tail) {
            self.add_vertex(tail);
        }
        if !self.vertices.contains_key(&head) {
            self.add_vertex(head);
        }

        let existing = self.vertices.get(&tail).and_then(|v| v.edge_to(head));
        let id = match existing {
            Some(id) => id,
            None => self.insert_edge(tail, head),
        };

        match self.edges[id.0].as_mut() {
            Some(edge) => edge,
            // Linked handles always point at live slots.
            None => unreachable!("vertex {tail} links to detached edge {id}"),
        }
    }

    fn insert_edge(&mut self, tail: VertexId, head: VertexId) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(Some(Edge::new(id, tail, head)));

        if let Some(v) = self.vertices.get_mut(&tail) {
            v.link_out(head, id);
        }
        if let Some(v) = self.vertices.get_mut(&head) {
            v.link_in(tail, id);
        }
        self.adjacency.entry(tail).or_default().push(head);
        self.sinks.remove(&tail);
        self.sources.remove(&head);

        id
    }

    /// Remove every edge of a replaced vertex from its neighbours.
    fn detach(&mut self, old: &Vertex) {
        let id = old.id();
        let mut dropped = 0usize;

        for (head, edge) in old.outgoing() {
            dropped += usize::from(self.edges[edge.0].take().is_some());
            if head == id {
                continue;
            }
            if let Some(v) = self.vertices.get_mut(&head) {
                v.unlink_in(id);
                if v.is_source() {
                    self.sources.insert(head);
                }
            }
        }

        for (tail, edge) in old.incoming() {
            dropped += usize::from(self.edges[edge.0].take().is_some());
            if tail == id {
                continue;
            }
            if let Some(v) = self.vertices.get_mut(&tail) {
                v.unlink_out(id);
                if v.is_sink() {
                    self.sinks.insert(tail);
                }
            }
            if let Some(list) = self.adjacency.get_mut(&tail) {
                list.retain(|&w| w != id);
            }
        }

        if dropped > 0 {
            warn!("vertex {id} was re-added; detached {dropped} edge(s)");
        }
    }
}
