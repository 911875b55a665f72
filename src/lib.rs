//! Staffing framework: skill-constrained assignment and headcount planning.
//!
//! Matches agents to demand expressed as (role, specialization, level) keys
//! with a maximum-flow solver, and turns outstanding work into that demand
//! by rounding a team headcount over proficiency levels top-down.
//!
//! # Modules
//!
//! - **`flow`**: Flow network, edges, and Ford-Fulkerson max flow / min cut
//! - **`models`**: Domain types: `DemandKey`, `Demand`, `Agent`,
//!   `AgentProfile`, `AssignmentResult`
//! - **`assignment`**: Demand + agents → network → assignment, shortfall, surplus
//! - **`staffing`**: Work items → headcount → per-level demand
//! - **`planner`**: Per-team settings and cooldown-gated re-planning
//! - **`validation`**: Input integrity checks (duplicates, levels, unknown skills)
//! - **`error`**: Flow and feasibility errors
//!
//! # Example
//!
//! ```
//! use u_staffing::assignment::solve_assignment;
//! use u_staffing::models::{Agent, Demand, DemandKey, Role};
//!
//! let senior = DemandKey::new(Role::Programmer, "Core", 3);
//! let demand = vec![Demand::new(senior.clone(), 2)];
//! let agents = vec![Agent::new("ada").with_skill(senior.clone())];
//!
//! let result = solve_assignment(&demand, &agents).unwrap();
//! assert_eq!(result.assignment(&"ada"), Some(&senior));
//! assert_eq!(result.shortfall_for(&senior), 1);
//! ```
//!
//! # References
//!
//! - Ford & Fulkerson (1956), "Maximal Flow Through a Network"
//! - Edmonds & Karp (1972), "Theoretical Improvements in Algorithmic
//!   Efficiency for Network Flow Problems"
//! - Sedgewick & Wayne (2011), "Algorithms", 4th ed., §6.4

pub mod assignment;
pub mod error;
pub mod flow;
pub mod models;
pub mod planner;
pub mod staffing;
pub mod validation;
