//! Workload-to-headcount conversion.
//!
//! Turns continuous workload estimates into integer staffing targets.
//!
//! # Algorithm
//!
//! `round_staffing` distributes a team headcount over proficiency levels
//! proportionally to work, rounding from the highest level down and
//! carrying the accumulated rounding surplus. A level whose fractional part
//! would be lost is rounded up instead when the carry cannot absorb it, so
//! senior work is never left unstaffed by rounding. If stacked round-ups
//! would overshoot the headcount by more than one, the split is redone
//! letting later levels give a seat back once the carry covers one.
//!
//! `required_demand` aggregates raw work items for a role into per
//! specialization, per level workloads and feeds them to `round_staffing`.
//!
//! # References
//!
//! - Balinski & Young (2001), "Fair Representation", Ch. 3 (apportionment)

mod rounding;
mod workload;

pub use rounding::{round_staffing, ROUNDING_TOLERANCE};
pub use workload::{optimal_headcount, required_demand, StaffingConfig, WorkItem};
