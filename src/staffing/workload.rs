//! Workload aggregation into staffing demand.

use serde::{Deserialize, Serialize};

use tracing::debug;

use super::round_staffing;
use crate::models::{Demand, Role, LEVEL_COUNT, MAX_LEVEL};

/// Staffing parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffingConfig {
    /// Work one agent covers (same unit as [`WorkItem::work`]).
    pub throughput_per_agent: f64,
    /// Lower bound on a team's headcount.
    pub min_headcount: u32,
}

impl Default for StaffingConfig {
    fn default() -> Self {
        Self {
            throughput_per_agent: 1.0,
            min_headcount: 1,
        }
    }
}

impl StaffingConfig {
    /// Sets the per-agent throughput.
    pub fn with_throughput(mut self, throughput_per_agent: f64) -> Self {
        self.throughput_per_agent = throughput_per_agent;
        self
    }

    /// Sets the minimum headcount.
    pub fn with_min_headcount(mut self, min_headcount: u32) -> Self {
        self.min_headcount = min_headcount;
        self
    }
}

/// A unit of work requiring a specialization at some level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Specialization tag.
    pub spec: String,
    /// Required level (values above 3 are treated as 3).
    pub level: u8,
    /// Amount of work (e.g., hours, FTE-days).
    pub work: f64,
}

impl WorkItem {
    /// Creates a work item.
    pub fn new(spec: impl Into<String>, level: u8, work: f64) -> Self {
        Self {
            spec: spec.into(),
            level,
            work,
        }
    }
}

/// Headcount needed to cover `total_work`.
///
/// `ceil(max(1, ceil(total_work)) / throughput)`, but at least
/// `min_headcount`. A non-positive throughput counts as 1.
pub fn optimal_headcount(total_work: f64, config: &StaffingConfig) -> u32 {
    let work = total_work.max(0.0).ceil().max(1.0);
    let throughput = if config.throughput_per_agent > 0.0 {
        config.throughput_per_agent
    } else {
        1.0
    };
    ((work / throughput).ceil() as u32).max(config.min_headcount)
}

/// Converts a role's work items into demand.
///
/// Work is summed per specialization and level; the team headcount comes
/// from the total via [`optimal_headcount`] and each specialization's share
/// is split over levels with [`round_staffing`]. Specializations appear in
/// first-seen order, levels from highest to lowest. Items with
/// non-positive work are ignored.
pub fn required_demand(role: &Role, items: &[WorkItem], config: &StaffingConfig) -> Vec<Demand> {
    let mut specs: Vec<(&str, [f64; LEVEL_COUNT])> = Vec::new();
    let mut total_work = 0.0;

    for item in items {
        if !(item.work > 0.0) {
            continue;
        }
        let level = usize::from(item.level.min(MAX_LEVEL));
        let slot = match specs.iter().position(|(spec, _)| *spec == item.spec) {
            Some(slot) => slot,
            None => {
                specs.push((item.spec.as_str(), [0.0; LEVEL_COUNT]));
                specs.len() - 1
            }
        };
        specs[slot].1[level] += item.work;
        total_work += item.work;
    }

    if specs.is_empty() {
        return Vec::new();
    }

    let headcount = optimal_headcount(total_work, config);
    debug!(role = %role, total_work, headcount, specs = specs.len(), "staffing target");

    let mut demand = Vec::new();
    for (spec, per_level) in specs {
        for (level, count) in round_staffing(&per_level, total_work, headcount).into_iter().rev() {
            demand.push(Demand::of(role.clone(), spec, level, count));
        }
    }
    demand
}
