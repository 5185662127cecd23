//! The capacitated edge struct and its arena handle.

use serde::Serialize;

use super::error::{FlowError, FlowResult};
use super::{VertexId, DEFAULT_CAPACITY, DEFAULT_FLOW, DEFAULT_WEIGHT};

/// Index of an edge in its owning graph's edge arena.
///
/// Only meaningful for the graph that handed it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EdgeId(pub(crate) usize);

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A directed, capacitated connection from `tail` to `head`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    id: EdgeId,
    tail: VertexId,
    head: VertexId,
    capacity: i64,
    flow: i64,
    weight: f64,
}

impl Edge {
    pub(crate) fn new(id: EdgeId, tail: VertexId, head: VertexId) -> Self {
        Self {
            id,
            tail,
            head,
            capacity: DEFAULT_CAPACITY,
            flow: DEFAULT_FLOW,
            weight: DEFAULT_WEIGHT,
        }
    }

    /// Arena handle of this edge.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Vertex the edge starts from.
    pub fn tail(&self) -> VertexId {
        self.tail
    }

    /// Vertex the edge points to.
    pub fn head(&self) -> VertexId {
        self.head
    }

    /// Upper bound on flow.
    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// Current flow assignment.
    ///
    /// Inside a residual graph owned by the solver this may go negative: a
    /// reverse residual edge carries the negated flow of its partner.
    pub fn flow(&self) -> i64 {
        self.flow
    }

    /// Free-form weight, not used by the flow algorithm.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Remaining capacity, `capacity - flow`.
    ///
    /// Saturates at `i64::MAX` when a residual edge's negative flow would
    /// push the difference out of range.
    pub fn residual_capacity(&self) -> i64 {
        self.capacity.saturating_sub(self.flow)
    }

    /// Returns `true` for an edge whose tail and head coincide.
    pub fn is_self_loop(&self) -> bool {
        self.tail == self.head
    }

    /// Set the capacity, rejecting negative values.
    pub fn set_capacity(&mut self, capacity: i64) -> FlowResult<&mut Self> {
        if capacity < 0 {
            return Err(FlowError::NegativeCapacity {
                tail: self.tail,
                head: self.head,
                value: capacity,
            });
        }
        self.capacity = capacity;
        Ok(self)
    }

    /// Set the flow, rejecting negative values.
    ///
    /// Flow above capacity is accepted; the residual builder then offers no
    /// forward capacity for this edge.
    pub fn set_flow(&mut self, flow: i64) -> FlowResult<&mut Self> {
        if flow < 0 {
            return Err(FlowError::NegativeFlow {
                tail: self.tail,
                head: self.head,
                value: flow,
            });
        }
        self.flow = flow;
        Ok(self)
    }

    /// Set the weight.
    pub fn set_weight(&mut self, weight: f64) -> &mut Self {
        self.weight = weight;
        self
    }

    pub(crate) fn add_capacity(&mut self, amount: i64) -> FlowResult<()> {
        self.capacity = self
            .capacity
            .checked_add(amount)
            .ok_or(FlowError::CapacityOverflow)?;
        Ok(())
    }

    /// Push `amount` units along the edge. Negative amounts cancel flow.
    pub(crate) fn push(&mut self, amount: i64) -> FlowResult<()> {
        self.flow = self
            .flow
            .checked_add(amount)
            .ok_or(FlowError::CapacityOverflow)?;
        Ok(())
    }
}
