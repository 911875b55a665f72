//! Arena-backed flow network.

use std::fmt;

use super::{Capacity, EdgeId, FlowEdge};
use crate::error::FlowError;

/// A directed flow network over vertices `0..vertex_count`.
///
/// Edges are owned by a single arena; each vertex keeps the ids of every
/// edge touching it, in both directions.
#[derive(Debug, Clone)]
pub struct FlowNetwork<C = i64> {
    vertex_count: usize,
    edges: Vec<FlowEdge<C>>,
    adjacency: Vec<Vec<EdgeId>>,
}

impl<C: Capacity> FlowNetwork<C> {
    /// Creates an empty network with a fixed number of vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Number of vertices (V).
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges (E).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Adds an edge `from -> to` carrying no flow.
    pub fn add_edge(&mut self, from: usize, to: usize, capacity: C) -> Result<EdgeId, FlowError> {
        self.insert_edge(FlowEdge::new(from, to, capacity)?)
    }

    /// Adds an edge `from -> to` with an initial flow.
    pub fn add_edge_with_flow(
        &mut self,
        from: usize,
        to: usize,
        capacity: C,
        flow: C,
    ) -> Result<EdgeId, FlowError> {
        self.insert_edge(FlowEdge::with_flow(from, to, capacity, flow)?)
    }

    /// Adds a prebuilt edge after checking both endpoints.
    pub fn insert_edge(&mut self, edge: FlowEdge<C>) -> Result<EdgeId, FlowError> {
        self.validate_vertex(edge.from())?;
        self.validate_vertex(edge.to())?;

        let id = EdgeId(self.edges.len());
        self.adjacency[edge.from()].push(id);
        self.adjacency[edge.to()].push(id);
        self.edges.push(edge);
        Ok(id)
    }

    /// The edge behind `id`.
    ///
    /// # Panics
    /// If `id` was not issued by this network.
    pub fn edge(&self, id: EdgeId) -> &FlowEdge<C> {
        &self.edges[id.0]
    }

    /// Mutable access to the edge behind `id`.
    ///
    /// # Panics
    /// If `id` was not issued by this network.
    pub fn edge_mut(&mut self, id: EdgeId) -> &mut FlowEdge<C> {
        &mut self.edges[id.0]
    }

    /// All edges, each once, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &FlowEdge<C>)> + '_ {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }

    /// Ids of every edge touching `v`, in either direction.
    pub fn adjacent_ids(&self, v: usize) -> Result<&[EdgeId], FlowError> {
        self.validate_vertex(v)?;
        Ok(&self.adjacency[v])
    }

    /// Every edge touching `v`, in either direction.
    pub fn adjacent(
        &self,
        v: usize,
    ) -> Result<impl Iterator<Item = (EdgeId, &FlowEdge<C>)> + '_, FlowError> {
        let ids = self.adjacent_ids(v)?;
        Ok(ids.iter().map(move |&id| (id, self.edge(id))))
    }

    /// Edges leaving `v`.
    pub fn outgoing(
        &self,
        v: usize,
    ) -> Result<impl Iterator<Item = (EdgeId, &FlowEdge<C>)> + '_, FlowError> {
        Ok(self.adjacent(v)?.filter(move |(_, e)| e.from() == v))
    }

    /// Edges entering `v`.
    pub fn incoming(
        &self,
        v: usize,
    ) -> Result<impl Iterator<Item = (EdgeId, &FlowEdge<C>)> + '_, FlowError> {
        Ok(self.adjacent(v)?.filter(move |(_, e)| e.to() == v))
    }

    /// Net flow into `v` (inflow minus outflow). Self-loops cancel out.
    ///
    /// # Errors
    /// [`FlowError::FlowOverflow`] if the running total leaves the range of
    /// `C`.
    pub fn excess(&self, v: usize) -> Result<C, FlowError> {
        let mut excess = C::ZERO;
        for (_, e) in self.adjacent(v)? {
            if e.from() == e.to() {
                continue;
            }
            let next = if e.from() == v {
                excess.checked_sub(e.flow())
            } else {
                excess.checked_add(e.flow())
            };
            excess = next.ok_or(FlowError::FlowOverflow { vertex: v })?;
        }
        Ok(excess)
    }

    /// Fails unless `v` is a vertex of this network.
    pub fn validate_vertex(&self, v: usize) -> Result<(), FlowError> {
        if v < self.vertex_count {
            Ok(())
        } else {
            Err(FlowError::VertexOutOfRange {
                vertex: v,
                vertex_count: self.vertex_count,
            })
        }
    }
}

impl<C: Capacity> fmt::Display for FlowNetwork<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, ids) in self.adjacency.iter().enumerate() {
            write!(f, "{v}:")?;
            for &id in ids {
                let e = self.edge(id);
                if e.to() != v {
                    write!(f, " {e}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
