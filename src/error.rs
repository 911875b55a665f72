//! Structural faults raised by the flow layer.
//!
//! These signal a defect in how a network was constructed or driven, not a
//! domain outcome: unfilled demand and idle agents are reported as data by
//! [`crate::assignment`], never through this type.

use thiserror::Error;

/// A structural invariant violation in a flow network or solve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowError {
    /// A vertex id outside `[0, vertex_count)`.
    #[error("vertex {vertex} is not between 0 and {}", .vertex_count.saturating_sub(1))]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    /// An edge was given a negative (or NaN) capacity.
    #[error("edge capacity must be non-negative, got {capacity}")]
    NegativeCapacity { capacity: f64 },

    /// Flow would leave `[0, capacity]`.
    #[error("flow {flow} is outside [0, {capacity}]")]
    FlowOutOfBounds { flow: f64, capacity: f64 },

    /// A residual update was given a NaN delta.
    #[error("residual flow delta is not a number")]
    InvalidDelta,

    /// A vertex that is neither endpoint of the edge it was queried on.
    #[error("vertex {vertex} is not an endpoint of edge {from}->{to}")]
    NotAnEndpoint { vertex: usize, from: usize, to: usize },

    /// A flow total does not fit the capacity type.
    #[error("flow total at vertex {vertex} overflows the capacity type")]
    FlowOverflow { vertex: usize },

    /// Source and sink are the same vertex.
    #[error("source equals sink (vertex {0})")]
    SourceIsSink(usize),

    /// The flow loaded into a network before solving is not feasible.
    #[error("initial flow is infeasible: {0}")]
    InfeasibleFlow(Infeasibility),
}

/// Why a flow failed the feasibility check.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Infeasibility {
    #[error("edge {from}->{to} carries {flow} with capacity {capacity}")]
    Capacity {
        from: usize,
        to: usize,
        flow: f64,
        capacity: f64,
    },

    #[error("excess at source is {excess}, expected {expected}")]
    SourceExcess { excess: f64, expected: f64 },

    #[error("excess at sink is {excess}, expected {expected}")]
    SinkExcess { excess: f64, expected: f64 },

    #[error("net flow out of vertex {vertex} is {excess}, expected 0")]
    Conservation { vertex: usize, excess: f64 },
}

impl From<Infeasibility> for FlowError {
    fn from(reason: Infeasibility) -> Self {
        FlowError::InfeasibleFlow(reason)
    }
}
