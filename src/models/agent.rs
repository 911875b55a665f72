//! Agent model.
//!
//! An [`Agent`] is an opaque caller-supplied identity plus the demand keys
//! it can fulfill. [`AgentProfile`] describes an agent by role and
//! per-specialization proficiency, and derives those keys.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{DemandKey, Role};

/// An agent and the demand keys it is capable of fulfilling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent<A> {
    /// Caller-supplied identity.
    pub id: A,
    /// Keys this agent qualifies for.
    pub skills: Vec<DemandKey>,
}

impl<A> Agent<A> {
    /// Creates an agent with no skills.
    pub fn new(id: A) -> Self {
        Self {
            id,
            skills: Vec::new(),
        }
    }

    /// Adds a skill.
    pub fn with_skill(mut self, key: DemandKey) -> Self {
        self.skills.push(key);
        self
    }

    /// Adds several skills.
    pub fn with_skills(mut self, keys: impl IntoIterator<Item = DemandKey>) -> Self {
        self.skills.extend(keys);
        self
    }

    /// Whether this agent qualifies for `key`.
    pub fn can_fulfill(&self, key: &DemandKey) -> bool {
        self.skills.contains(key)
    }
}

/// An agent's role and proficiency per specialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentProfile<A> {
    /// Caller-supplied identity.
    pub id: A,
    /// The role this agent works in.
    pub role: Role,
    /// Proficiency level per specialization.
    pub proficiency: BTreeMap<String, u8>,
}

impl<A: Clone> AgentProfile<A> {
    /// Creates a profile with no specializations.
    pub fn new(id: A, role: Role) -> Self {
        Self {
            id,
            role,
            proficiency: BTreeMap::new(),
        }
    }

    /// Sets the proficiency for a specialization.
    pub fn with_specialization(mut self, spec: impl Into<String>, level: u8) -> Self {
        self.proficiency.insert(spec.into(), level);
        self
    }

    /// Proficiency in `spec` (`None` if untrained).
    pub fn level(&self, spec: &str) -> Option<u8> {
        self.proficiency.get(spec).copied()
    }

    /// Whether this agent qualifies for `key`: same role and at least the
    /// key's level in its specialization.
    pub fn qualifies_for(&self, key: &DemandKey) -> bool {
        key.role == self.role && self.level(&key.spec).is_some_and(|l| l >= key.level)
    }

    /// The subset of `keys` this agent qualifies for, in input order.
    pub fn capabilities<'a>(&self, keys: impl IntoIterator<Item = &'a DemandKey>) -> Vec<DemandKey> {
        keys.into_iter()
            .filter(|k| self.qualifies_for(k))
            .cloned()
            .collect()
    }

    /// Converts into an [`Agent`] whose skills are drawn from `keys`.
    pub fn to_agent<'a>(&self, keys: impl IntoIterator<Item = &'a DemandKey>) -> Agent<A> {
        Agent {
            id: self.id.clone(),
            skills: self.capabilities(keys),
        }
    }
}

/// Builds solver input for `profiles` against a set of demand keys.
///
/// Every profile yields an agent, including those with no qualifying key.
pub fn capability_map<A: Clone>(profiles: &[AgentProfile<A>], keys: &[DemandKey]) -> Vec<Agent<A>> {
    profiles.iter().map(|p| p.to_agent(keys)).collect()
}
