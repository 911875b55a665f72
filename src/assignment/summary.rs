//! Assignment quality summary.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Filled | Agents matched to a key |
//! | Required | Requested quantity for a key |
//! | Fill rate | Total filled / total required |
//! | Surplus | Agents with no matching demand |

use serde::{Deserialize, Serialize};
use std::hash::Hash;

use tracing::debug;

use crate::models::{AssignmentResult, Demand, DemandKey};

/// Filled versus required seats for one demand key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFill {
    /// The demand key.
    pub key: DemandKey,
    /// Requested quantity.
    pub required: u32,
    /// Matched agents (required minus shortfall).
    pub filled: u32,
}

impl KeyFill {
    /// Seats still open.
    pub fn missing(&self) -> u32 {
        self.required.saturating_sub(self.filled)
    }
}

/// Per-key and aggregate view of an [`AssignmentResult`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentSummary {
    /// One row per distinct demand key, in demand order.
    pub rows: Vec<KeyFill>,
    /// Sum of required quantities.
    pub total_required: u64,
    /// Sum of filled seats.
    pub total_filled: u64,
    /// Number of unmatched agents.
    pub surplus: usize,
}

impl AssignmentSummary {
    /// Summarizes `result` against the `demand` it was solved for.
    ///
    /// Duplicate keys in `demand` are merged, as the solver does.
    pub fn new<A: Eq + Hash>(demand: &[Demand], result: &AssignmentResult<A>) -> Self {
        let mut rows: Vec<KeyFill> = Vec::new();
        for d in demand {
            match rows.iter_mut().find(|r| r.key == d.key) {
                Some(row) => row.required = row.required.saturating_add(d.quantity),
                None => rows.push(KeyFill {
                    key: d.key.clone(),
                    required: d.quantity,
                    filled: 0,
                }),
            }
        }
        for row in &mut rows {
            row.filled = row.required.saturating_sub(result.shortfall_for(&row.key));
        }

        let total_required = rows.iter().map(|r| u64::from(r.required)).sum();
        let total_filled = rows.iter().map(|r| u64::from(r.filled)).sum();

        Self {
            rows,
            total_required,
            total_filled,
            surplus: result.surplus.len(),
        }
    }

    /// Fraction of required seats filled (0.0..1.0). 1.0 when nothing is
    /// required.
    pub fn fill_rate(&self) -> f64 {
        if self.total_required == 0 {
            1.0
        } else {
            self.total_filled as f64 / self.total_required as f64
        }
    }

    /// Whether the fill rate reaches `min_fill_rate` with at most
    /// `max_surplus` idle agents.
    pub fn meets_thresholds(&self, min_fill_rate: f64, max_surplus: usize) -> bool {
        self.fill_rate() >= min_fill_rate && self.surplus <= max_surplus
    }

    /// Writes the per-key report to the `debug` log.
    pub fn log(&self) {
        for row in &self.rows {
            let flag = if row.missing() > 0 { " !!" } else { "" };
            debug!("{}: {}/{}{}", row.key, row.filled, row.required, flag);
        }
        debug!(
            filled = self.total_filled,
            required = self.total_required,
            surplus = self.surplus,
            "assignment summary"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::solve_assignment;
    use crate::models::{Agent, Role};

    #[test]
    fn test_summary() {
        let core = DemandKey::new(Role::Programmer, "Core", 2);
        let ux = DemandKey::new(Role::Designer, "UX", 1);
        let demand = vec![Demand::new(core.clone(), 2), Demand::new(ux.clone(), 3)];
        let agents = vec![
            Agent::new(1).with_skill(core.clone()),
            Agent::new(2).with_skill(ux.clone()),
            Agent::new(3),
        ];
        let result = solve_assignment(&demand, &agents).unwrap();
        let summary = AssignmentSummary::new(&demand, &result);

        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.rows[0].filled, 1);
        assert_eq!(summary.rows[0].missing(), 1);
        assert_eq!(summary.rows[1].filled, 1);
        assert_eq!(summary.total_required, 5);
        assert_eq!(summary.total_filled, 2);
        assert_eq!(summary.surplus, 1);
        assert!((summary.fill_rate() - 0.4).abs() < 1e-10);
        assert!(summary.meets_thresholds(0.4, 1));
        assert!(!summary.meets_thresholds(0.5, 1));
        summary.log();
    }

    #[test]
    fn test_empty_summary() {
        let result: AssignmentResult<u8> = AssignmentResult::default();
        let summary = AssignmentSummary::new(&[], &result);
        assert!((summary.fill_rate() - 1.0).abs() < 1e-10);
        assert!(summary.meets_thresholds(1.0, 0));
    }

    #[test]
    fn test_merges_duplicate_keys() {
        let k = DemandKey::new(Role::Artist, "2D", 0);
        let demand = vec![Demand::new(k.clone(), 1), Demand::new(k.clone(), 2)];
        let nobody: Vec<Agent<u8>> = Vec::new();
        let result = solve_assignment(&demand, &nobody).unwrap();
        let summary = AssignmentSummary::new(&demand, &result);
        assert_eq!(summary.rows.len(), 1);
        assert_eq!(summary.rows[0].required, 3);
        assert_eq!(summary.rows[0].missing(), 3);
        assert_eq!(summary.total_filled, 0);
    }
}
