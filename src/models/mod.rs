//! Staffing domain models.
//!
//! Provides the core data types for describing what work is required,
//! who can do it, and how agents were matched to it. Domain-agnostic:
//! the same types serve software teams, hospital wards, or field crews.
//!
//! # Domain Mappings
//!
//! | u-staffing | Software studio | Hospital | Logistics |
//! |------------|-----------------|----------|-----------|
//! | DemandKey | Role/Spec/Level | Ward/Specialty/Grade | Vehicle class/Licence |
//! | Agent | Employee | Nurse | Driver |
//! | Demand | Open seats | Shift slots | Routes |
//! | AssignmentResult | Team plan | Roster | Dispatch plan |

mod agent;
mod assignment;
mod demand;

pub use agent::{capability_map, Agent, AgentProfile};
pub use assignment::AssignmentResult;
pub use demand::{total_quantity, Demand, DemandKey, Role, LEVEL_COUNT, MAX_LEVEL};
