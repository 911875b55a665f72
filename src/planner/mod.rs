//! Per-team staffing plans.
//!
//! Ties the pieces together for a caller that manages several teams:
//! settings live in a caller-owned [`TeamRegistry`], and a [`TeamPlanner`]
//! per team caches its last assignment and only re-solves when its
//! cooldown has elapsed (or when forced).
//!
//! # Flow
//!
//! 1. Work items per role → [`crate::staffing::required_demand`]
//! 2. Agent profiles → [`crate::models::capability_map`]
//! 3. Demand + agents → [`crate::assignment::solve_assignment`]
//!
//! Time is a caller-supplied tick count; nothing here reads a clock.

mod registry;
mod team;

pub use registry::TeamRegistry;
pub use team::{RoleWork, TeamPlanner, TeamSettings};
