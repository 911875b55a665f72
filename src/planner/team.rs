//! Team settings and the cooldown-gated planner.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::hash::Hash;

use tracing::{debug, info};

use crate::assignment::{solve_assignment, AssignmentSummary};
use crate::error::FlowError;
use crate::models::{capability_map, AgentProfile, AssignmentResult, Demand, DemandKey, Role};
use crate::staffing::{required_demand, StaffingConfig, WorkItem};

/// Staffing settings for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamSettings {
    /// Whether the team is managed at all.
    pub active: bool,
    /// Roles whose shortfall the caller acts on.
    pub managed_roles: Vec<Role>,
    /// Minimum ticks between two solves.
    pub cooldown_ticks: u64,
    /// Headcount parameters.
    pub staffing: StaffingConfig,
}

impl Default for TeamSettings {
    fn default() -> Self {
        Self {
            active: false,
            managed_roles: Vec::new(),
            cooldown_ticks: 60,
            staffing: StaffingConfig::default(),
        }
    }
}

impl TeamSettings {
    /// Sets the active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Adds a managed role.
    pub fn with_managed_role(mut self, role: Role) -> Self {
        if !self.managed_roles.contains(&role) {
            self.managed_roles.push(role);
        }
        self
    }

    /// Sets the cooldown.
    pub fn with_cooldown(mut self, cooldown_ticks: u64) -> Self {
        self.cooldown_ticks = cooldown_ticks;
        self
    }

    /// Sets the headcount parameters.
    pub fn with_staffing(mut self, staffing: StaffingConfig) -> Self {
        self.staffing = staffing;
        self
    }

    /// Whether `role` is managed.
    pub fn manages(&self, role: &Role) -> bool {
        self.managed_roles.contains(role)
    }
}

/// Outstanding work for one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleWork {
    /// Role doing the work.
    pub role: Role,
    /// Work items.
    pub items: Vec<WorkItem>,
}

impl RoleWork {
    /// Creates a role workload.
    pub fn new(role: Role, items: Vec<WorkItem>) -> Self {
        Self { role, items }
    }
}

/// Caches one team's latest assignment.
#[derive(Debug, Clone)]
pub struct TeamPlanner<A: Eq + Hash> {
    last_solved: Option<u64>,
    demand: Vec<Demand>,
    result: AssignmentResult<A>,
}

impl<A: Eq + Hash> Default for TeamPlanner<A> {
    fn default() -> Self {
        Self {
            last_solved: None,
            demand: Vec::new(),
            result: AssignmentResult::default(),
        }
    }
}

impl<A: Clone + Eq + Hash> TeamPlanner<A> {
    /// Creates a planner with nothing cached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cooldown has elapsed at `now` (always true before the
    /// first solve).
    pub fn is_due(&self, settings: &TeamSettings, now: u64) -> bool {
        match self.last_solved {
            None => true,
            Some(last) => now.saturating_sub(last) >= settings.cooldown_ticks,
        }
    }

    /// Returns the team's assignment, re-solving if forced, if nothing is
    /// cached, or if the cooldown has elapsed.
    ///
    /// Demand is derived from `work` with the team's staffing parameters;
    /// agents are derived from `profiles` against that demand.
    pub fn plan(
        &mut self,
        settings: &TeamSettings,
        now: u64,
        force: bool,
        work: &[RoleWork],
        profiles: &[AgentProfile<A>],
    ) -> Result<&AssignmentResult<A>, FlowError> {
        if force || self.is_due(settings, now) {
            self.resolve(settings, now, work, profiles)?;
        } else {
            debug!(now, last_solved = ?self.last_solved, "plan within cooldown, reusing");
        }
        Ok(&self.result)
    }

    fn resolve(
        &mut self,
        settings: &TeamSettings,
        now: u64,
        work: &[RoleWork],
        profiles: &[AgentProfile<A>],
    ) -> Result<(), FlowError> {
        let demand: Vec<Demand> = work
            .iter()
            .flat_map(|w| required_demand(&w.role, &w.items, &settings.staffing))
            .collect();
        let keys: Vec<DemandKey> = demand.iter().map(|d| d.key.clone()).collect();
        let agents = capability_map(profiles, &keys);

        let result = solve_assignment(&demand, &agents)?;
        let summary = AssignmentSummary::new(&demand, &result);
        summary.log();
        info!(
            now,
            filled = summary.total_filled,
            required = summary.total_required,
            surplus = summary.surplus,
            "team re-planned"
        );

        self.last_solved = Some(now);
        self.demand = demand;
        self.result = result;
        Ok(())
    }

    /// The cached assignment, if any.
    pub fn result(&self) -> Option<&AssignmentResult<A>> {
        self.last_solved.map(|_| &self.result)
    }

    /// Demand used for the cached assignment.
    pub fn demand(&self) -> &[Demand] {
        &self.demand
    }

    /// Tick of the last solve.
    pub fn last_solved(&self) -> Option<u64> {
        self.last_solved
    }

    /// Drops the cache so the next [`Self::plan`] re-solves.
    pub fn invalidate(&mut self) {
        self.last_solved = None;
        self.demand.clear();
        self.result = AssignmentResult::default();
    }

    /// Shortfall of the cached assignment restricted to managed roles.
    pub fn shortfall_for_managed(&self, settings: &TeamSettings) -> BTreeMap<DemandKey, u32> {
        self.result
            .shortfall
            .iter()
            .filter(|(key, _)| settings.manages(&key.role))
            .map(|(key, &n)| (key.clone(), n))
            .collect()
    }
}
