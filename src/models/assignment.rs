//! Assignment (solution) model.
//!
//! The outcome of matching agents to demand: who does what, which demand
//! is left unmet, and which agents have nothing to do.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use super::DemandKey;

/// Result of an assignment solve.
#[derive(Debug, Clone)]
pub struct AssignmentResult<A: Eq + Hash> {
    /// Agent → the demand key it was matched to.
    pub assignments: HashMap<A, DemandKey>,
    /// Demand key → number of agents still missing. Only keys with a
    /// positive shortfall are present.
    pub shortfall: BTreeMap<DemandKey, u32>,
    /// Agents left unmatched, in input order.
    pub surplus: Vec<A>,
    /// Number of matches made (the max-flow value).
    pub matched: u64,
}

impl<A: Eq + Hash> Default for AssignmentResult<A> {
    fn default() -> Self {
        Self {
            assignments: HashMap::new(),
            shortfall: BTreeMap::new(),
            surplus: Vec::new(),
            matched: 0,
        }
    }
}

impl<A: Eq + Hash> AssignmentResult<A> {
    /// The key `agent` was matched to, if any.
    pub fn assignment(&self, agent: &A) -> Option<&DemandKey> {
        self.assignments.get(agent)
    }

    /// Number of agents matched to `key`.
    pub fn assigned_count(&self, key: &DemandKey) -> u32 {
        self.assignments.values().filter(|k| *k == key).count() as u32
    }

    /// Unmet count for `key` (0 if fully staffed).
    pub fn shortfall_for(&self, key: &DemandKey) -> u32 {
        self.shortfall.get(key).copied().unwrap_or(0)
    }

    /// Sum of all shortfalls.
    pub fn total_shortfall(&self) -> u64 {
        self.shortfall.values().map(|&n| u64::from(n)).sum()
    }

    /// Whether every demand was met.
    pub fn is_fully_staffed(&self) -> bool {
        self.shortfall.is_empty()
    }

    /// Whether `agent` was left unmatched.
    pub fn is_surplus(&self, agent: &A) -> bool {
        self.surplus.contains(agent)
    }
}
