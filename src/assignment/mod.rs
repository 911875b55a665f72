//! Skill-constrained assignment of agents to demand.
//!
//! Matches each agent to at most one demand key it qualifies for, filling
//! as many required seats as possible, and reports what is left over on
//! both sides.
//!
//! # Algorithm
//!
//! Builds a bipartite flow network `source -> agents -> keys -> sink`
//! (agent edges capacity 1, key-to-sink edges capacity = required count)
//! and runs Edmonds-Karp maximum flow over it. The flow on each agent's
//! outgoing edges decodes to its assignment.
//!
//! The result has maximum cardinality. It is not cost-weighted: among
//! equally eligible agents the winner follows input order.
//!
//! # References
//!
//! - Ahuja, Magnanti & Orlin (1993), "Network Flows", Ch. 12.3
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 7.5

mod solver;
mod summary;

pub use solver::{solve_assignment, AssignmentSolver, SINK, SOURCE};
pub use summary::{AssignmentSummary, KeyFill};
