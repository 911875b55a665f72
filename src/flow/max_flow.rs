//! Edmonds-Karp maximum flow.
//!
//! # Algorithm
//!
//! 1. Breadth-first search from the source over edges with positive
//!    residual capacity toward the unvisited endpoint, recording the edge
//!    used to reach each vertex.
//! 2. If the sink was not reached, the current flow is maximum.
//! 3. Otherwise walk back from the sink, take the bottleneck residual
//!    capacity, and push it along every edge of the path.
//!
//! BFS always finds a shortest augmenting path, which bounds the number of
//! augmentations by O(V * E).
//!
//! # Complexity
//! O(V * E^2).
//!
//! # Reference
//! Edmonds & Karp (1972), J. ACM 19(2)

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::{Capacity, EdgeId, FlowNetwork};
use crate::error::{FlowError, Infeasibility};

/// Result of a maximum flow computation.
///
/// The network passed to [`MaxFlow::solve`] holds the final flow on each
/// edge; this value records the total and the minimum cut.
#[derive(Debug, Clone)]
pub struct MaxFlow<C = i64> {
    value: C,
    marked: Vec<bool>,
    augmentations: usize,
}

impl<C: Capacity> MaxFlow<C> {
    /// Pushes flow from `source` to `sink` until no augmenting path remains.
    ///
    /// The network's existing flow must be feasible (usually all zero).
    ///
    /// # Errors
    /// Returns a [`FlowError`] if either vertex is out of range, if they are
    /// equal, or if the initial flow is infeasible. Nothing is augmented in
    /// that case. [`FlowError::FlowOverflow`] if the flow value leaves the
    /// range of `C`.
    pub fn solve(network: &mut FlowNetwork<C>, source: usize, sink: usize) -> Result<Self, FlowError> {
        network.validate_vertex(source)?;
        network.validate_vertex(sink)?;
        if source == sink {
            return Err(FlowError::SourceIsSink(source));
        }

        let mut value = check_feasibility(network, source, sink)?;
        let mut augmentations = 0;

        loop {
            let search = augmenting_path(network, source, sink)?;
            let Some(bottleneck) = search.bottleneck else {
                debug!(
                    value = %value,
                    augmentations,
                    vertices = network.vertex_count(),
                    edges = network.edge_count(),
                    "max flow reached"
                );
                return Ok(Self {
                    value,
                    marked: search.marked,
                    augmentations,
                });
            };

            // Walk back from the sink; only the source has no parent edge.
            let mut length = 0;
            let mut v = sink;
            while let Some(id) = search.edge_to[v] {
                network.edge_mut(id).add_residual_flow_to(v, bottleneck)?;
                v = network.edge(id).other(v)?;
                length += 1;
            }

            value = value
                .checked_add(bottleneck)
                .ok_or(FlowError::FlowOverflow { vertex: sink })?;
            augmentations += 1;
            trace!(bottleneck = %bottleneck, length, "augmented");
        }
    }

    /// Value of the maximum flow.
    pub fn value(&self) -> C {
        self.value
    }

    /// Number of augmenting paths used.
    pub fn augmentations(&self) -> usize {
        self.augmentations
    }

    /// Whether `v` is on the source side of the minimum cut, i.e. reachable
    /// from the source in the final residual graph.
    pub fn in_cut(&self, v: usize) -> Result<bool, FlowError> {
        self.marked
            .get(v)
            .copied()
            .ok_or(FlowError::VertexOutOfRange {
                vertex: v,
                vertex_count: self.marked.len(),
            })
    }
}

/// Checks that the flow in `network` is a feasible `source -> sink` flow
/// and returns its value.
///
/// The value is the flow on edges leaving the source. Feasible means every
/// edge satisfies `0 <= flow <= capacity`, no flow enters the source, the
/// sink receives exactly the value, and every other vertex conserves flow.
pub fn check_feasibility<C: Capacity>(
    network: &FlowNetwork<C>,
    source: usize,
    sink: usize,
) -> Result<C, FlowError> {
    network.validate_vertex(source)?;
    network.validate_vertex(sink)?;

    for (_, e) in network.edges() {
        if e.flow() < -C::TOLERANCE || e.flow() > e.capacity() + C::TOLERANCE {
            debug!(edge = %e, "edge does not satisfy capacity constraints");
            return Err(Infeasibility::Capacity {
                from: e.from(),
                to: e.to(),
                flow: e.flow().to_f64(),
                capacity: e.capacity().to_f64(),
            }
            .into());
        }
    }

    let mut value = C::ZERO;
    for (_, e) in network.outgoing(source)? {
        if e.to() != source {
            value = value
                .checked_add(e.flow())
                .ok_or(FlowError::FlowOverflow { vertex: source })?;
        }
    }

    let expected = C::ZERO
        .checked_sub(value)
        .ok_or(FlowError::FlowOverflow { vertex: source })?;
    let source_excess = network.excess(source)?;
    if !within_tolerance(source_excess, expected) {
        debug!(excess = %source_excess, value = %value, "flow returns into the source");
        return Err(Infeasibility::SourceExcess {
            excess: source_excess.to_f64(),
            expected: expected.to_f64(),
        }
        .into());
    }

    let sink_excess = network.excess(sink)?;
    if !within_tolerance(sink_excess, value) {
        debug!(excess = %sink_excess, value = %value, "sink excess does not match flow value");
        return Err(Infeasibility::SinkExcess {
            excess: sink_excess.to_f64(),
            expected: value.to_f64(),
        }
        .into());
    }

    for v in 0..network.vertex_count() {
        if v == source || v == sink {
            continue;
        }
        let excess = network.excess(v)?;
        if !excess.is_negligible() {
            debug!(vertex = v, excess = %excess, "net flow is not zero");
            return Err(Infeasibility::Conservation {
                vertex: v,
                excess: excess.to_f64(),
            }
            .into());
        }
    }

    Ok(value)
}

fn within_tolerance<C: Capacity>(a: C, b: C) -> bool {
    a.checked_sub(b).is_some_and(Capacity::is_negligible)
}

struct Search<C> {
    /// Edge used to first reach each vertex.
    edge_to: Vec<Option<EdgeId>>,
    marked: Vec<bool>,
    /// Residual capacity of the path to the sink, if one was found.
    bottleneck: Option<C>,
}

fn augmenting_path<C: Capacity>(
    network: &FlowNetwork<C>,
    source: usize,
    sink: usize,
) -> Result<Search<C>, FlowError> {
    let n = network.vertex_count();
    let mut edge_to: Vec<Option<EdgeId>> = vec![None; n];
    let mut reach: Vec<Option<C>> = vec![None; n];
    let mut marked = vec![false; n];

    let mut queue = VecDeque::new();
    queue.push_back(source);
    marked[source] = true;

    while let Some(v) = queue.pop_front() {
        if marked[sink] {
            break;
        }
        for (id, e) in network.adjacent(v)? {
            let w = e.other(v)?;
            if marked[w] {
                continue;
            }
            let residual = e.residual_capacity_to(w)?;
            if residual.is_positive() {
                edge_to[w] = Some(id);
                reach[w] = Some(match reach[v] {
                    Some(b) if b <= residual => b,
                    _ => residual,
                });
                marked[w] = true;
                queue.push_back(w);
            }
        }
    }

    Ok(Search {
        edge_to,
        marked,
        bottleneck: reach[sink],
    })
}
