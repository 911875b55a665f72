//! Capacitated flow edge.

use std::fmt;

use super::Capacity;
use crate::error::FlowError;

/// Handle to an edge stored in a [`super::FlowNetwork`].
///
/// Only meaningful for the network that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Position of the edge in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A directed edge `from -> to` with a fixed capacity and a mutable flow.
///
/// Invariant: `0 <= flow <= capacity`. Flow changes only through
/// [`FlowEdge::add_residual_flow_to`], which rejects any update that
/// would break the invariant and leaves the edge untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowEdge<C = i64> {
    from: usize,
    to: usize,
    capacity: C,
    flow: C,
}

impl<C: Capacity> FlowEdge<C> {
    /// Creates an edge carrying no flow.
    pub fn new(from: usize, to: usize, capacity: C) -> Result<Self, FlowError> {
        Self::with_flow(from, to, capacity, C::ZERO)
    }

    /// Creates an edge with an initial flow.
    ///
    /// # Errors
    /// [`FlowError::NegativeCapacity`] if `capacity < 0`,
    /// [`FlowError::FlowOutOfBounds`] unless `0 <= flow <= capacity`.
    pub fn with_flow(from: usize, to: usize, capacity: C, flow: C) -> Result<Self, FlowError> {
        if capacity.is_nan() || capacity < C::ZERO {
            return Err(FlowError::NegativeCapacity {
                capacity: capacity.to_f64(),
            });
        }
        if flow.is_nan() || flow < C::ZERO || flow > capacity {
            return Err(FlowError::FlowOutOfBounds {
                flow: flow.to_f64(),
                capacity: capacity.to_f64(),
            });
        }
        Ok(Self {
            from,
            to,
            capacity,
            flow,
        })
    }

    /// Tail vertex.
    pub fn from(&self) -> usize {
        self.from
    }

    /// Head vertex.
    pub fn to(&self) -> usize {
        self.to
    }

    /// Fixed capacity.
    pub fn capacity(&self) -> C {
        self.capacity
    }

    /// Current flow.
    pub fn flow(&self) -> C {
        self.flow
    }

    /// Capacity not yet used in the forward direction.
    pub fn unused(&self) -> C {
        self.capacity - self.flow
    }

    /// The endpoint opposite `vertex`.
    pub fn other(&self, vertex: usize) -> Result<usize, FlowError> {
        if vertex == self.from {
            Ok(self.to)
        } else if vertex == self.to {
            Ok(self.from)
        } else {
            Err(self.not_an_endpoint(vertex))
        }
    }

    /// Residual capacity toward `vertex`.
    ///
    /// Toward `to` this is the unused capacity; toward `from` it is the
    /// flow already pushed, which can be cancelled.
    pub fn residual_capacity_to(&self, vertex: usize) -> Result<C, FlowError> {
        if vertex == self.from {
            Ok(self.flow)
        } else if vertex == self.to {
            Ok(self.capacity - self.flow)
        } else {
            Err(self.not_an_endpoint(vertex))
        }
    }

    /// Pushes `delta` units of residual flow toward `vertex`.
    ///
    /// Toward `to` the flow grows; toward `from` it shrinks. Results that
    /// overshoot a bound by no more than the capacity tolerance are clamped.
    pub fn add_residual_flow_to(&mut self, vertex: usize, delta: C) -> Result<(), FlowError> {
        if delta.is_nan() {
            return Err(FlowError::InvalidDelta);
        }

        let (flow, signed_delta) = if vertex == self.from {
            (self.flow.checked_sub(delta), -delta.to_f64())
        } else if vertex == self.to {
            (self.flow.checked_add(delta), delta.to_f64())
        } else {
            return Err(self.not_an_endpoint(vertex));
        };
        let Some(flow) = flow else {
            return Err(FlowError::FlowOutOfBounds {
                flow: self.flow.to_f64() + signed_delta,
                capacity: self.capacity.to_f64(),
            });
        };

        if flow < -C::TOLERANCE || flow > self.capacity + C::TOLERANCE {
            return Err(FlowError::FlowOutOfBounds {
                flow: flow.to_f64(),
                capacity: self.capacity.to_f64(),
            });
        }

        self.flow = if flow < C::ZERO {
            C::ZERO
        } else if flow > self.capacity {
            self.capacity
        } else {
            flow
        };
        Ok(())
    }

    fn not_an_endpoint(&self, vertex: usize) -> FlowError {
        FlowError::NotAnEndpoint {
            vertex,
            from: self.from,
            to: self.to,
        }
    }
}

impl<C: Capacity> fmt::Display for FlowEdge<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {}/{}", self.from, self.to, self.flow, self.capacity)
    }
}
