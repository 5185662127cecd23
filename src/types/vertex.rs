//! Graph vertices and their adjacency maps.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{EdgeId, VertexId};

/// A graph node with incoming and outgoing edges keyed by neighbour ID.
///
/// Edges live in the owning graph's arena; the maps hold handles only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vertex {
    id: VertexId,
    incoming: BTreeMap<VertexId, EdgeId>,
    outgoing: BTreeMap<VertexId, EdgeId>,
}

impl Vertex {
    pub(crate) fn new(id: VertexId) -> Self {
        Self {
            id,
            incoming: BTreeMap::new(),
            outgoing: BTreeMap::new(),
        }
    }

    /// The vertex ID.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Number of edges ending at this vertex.
    pub fn indegree(&self) -> usize {
        self.incoming.len()
    }

    /// Number of edges starting from this vertex.
    pub fn outdegree(&self) -> usize {
        self.outgoing.len()
    }

    /// Number of edges incident to this vertex. A self-loop counts twice.
    pub fn degree(&self) -> usize {
        self.indegree() + self.outdegree()
    }

    /// Returns `true` when no edge ends here.
    pub fn is_source(&self) -> bool {
        self.incoming.is_empty()
    }

    /// Returns `true` when no edge starts here.
    pub fn is_sink(&self) -> bool {
        self.outgoing.is_empty()
    }

    /// Incoming edges as `(tail, edge)` pairs, ordered by tail.
    pub fn incoming(&self) -> impl Iterator<Item = (VertexId, EdgeId)> + '_ {
        self.incoming.iter().map(|(&v, &e)| (v, e))
    }

    /// Outgoing edges as `(head, edge)` pairs, ordered by head.
    pub fn outgoing(&self) -> impl Iterator<Item = (VertexId, EdgeId)> + '_ {
        self.outgoing.iter().map(|(&v, &e)| (v, e))
    }

    /// Handle of the edge to `head`, if any.
    pub fn edge_to(&self, head: VertexId) -> Option<EdgeId> {
        self.outgoing.get(&head).copied()
    }

    /// Handle of the edge from `tail`, if any.
    pub fn edge_from(&self, tail: VertexId) -> Option<EdgeId> {
        self.incoming.get(&tail).copied()
    }

    pub(crate) fn link_out(&mut self, head: VertexId, edge: EdgeId) {
        self.outgoing.insert(head, edge);
    }

    pub(crate) fn link_in(&mut self, tail: VertexId, edge: EdgeId) {
        self.incoming.insert(tail, edge);
    }

    pub(crate) fn unlink_out(&mut self, head: VertexId) -> Option<EdgeId> {
        self.outgoing.remove(&head)
    }

    pub(crate) fn unlink_in(&mut self, tail: VertexId) -> Option<EdgeId> {
        self.incoming.remove(&tail)
    }
}
