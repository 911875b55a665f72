//! Flow networks and maximum flow.
//!
//! Provides an arena-backed directed flow network and an Edmonds-Karp
//! maximum flow solver over it. Each edge is stored once and referenced by
//! [`EdgeId`] from the adjacency lists of both endpoints, so a residual
//! traversal can walk an edge in either direction.
//!
//! # Capacities
//!
//! Networks are generic over [`Capacity`]. `i64` gives exact arithmetic
//! (the assignment solver uses it); `f64` compares against
//! [`FLOW_TOLERANCE`] and rejects NaN.
//!
//! # References
//!
//! - Ford & Fulkerson (1956), "Maximal Flow Through a Network"
//! - Edmonds & Karp (1972), "Theoretical Improvements in Algorithmic
//!   Efficiency for Network Flow Problems"
//! - Sedgewick & Wayne (2011), "Algorithms", 4th ed., Ch. 6.4

mod capacity;
mod edge;
mod max_flow;
mod network;

pub use capacity::{Capacity, FLOW_TOLERANCE};
pub use edge::{EdgeId, FlowEdge};
pub use max_flow::{check_feasibility, MaxFlow};
pub use network::FlowNetwork;
