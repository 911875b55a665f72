//! Demand model.
//!
//! A demand key names one class of required work: a role, a
//! specialization, and a minimum proficiency level. A [`Demand`] asks for
//! some number of agents at that key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest proficiency level.
pub const MAX_LEVEL: u8 = 3;

/// Number of proficiency levels (`0..=MAX_LEVEL`).
pub const LEVEL_COUNT: usize = MAX_LEVEL as usize + 1;

/// Role classification of work and agents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// Design work (documents, research).
    Designer,
    /// Programming work.
    Programmer,
    /// Art and asset work.
    Artist,
    /// Service work (support, marketing, legal).
    Service,
    /// Domain-specific role.
    Custom(String),
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Designer => f.write_str("Designer"),
            Role::Programmer => f.write_str("Programmer"),
            Role::Artist => f.write_str("Artist"),
            Role::Service => f.write_str("Service"),
            Role::Custom(name) => f.write_str(name),
        }
    }
}

/// A (role, specialization, level) triple.
///
/// Ordered by role, then specialization, then level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DemandKey {
    /// Role that performs the work.
    pub role: Role,
    /// Specialization tag (e.g., "Core", "UX", "Law").
    pub spec: String,
    /// Minimum proficiency level (0..=3).
    pub level: u8,
}

impl DemandKey {
    /// Creates a demand key.
    pub fn new(role: Role, spec: impl Into<String>, level: u8) -> Self {
        Self {
            role,
            spec: spec.into(),
            level,
        }
    }

    /// Whether the level is within `0..=MAX_LEVEL`.
    pub fn has_valid_level(&self) -> bool {
        self.level <= MAX_LEVEL
    }
}

impl fmt::Display for DemandKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :: {} ({})", self.role, self.spec, self.level)
    }
}

/// A demand key and the number of agents required at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demand {
    /// What is required.
    pub key: DemandKey,
    /// How many agents are required (>= 1).
    pub quantity: u32,
}

impl Demand {
    /// Creates a demand.
    pub fn new(key: DemandKey, quantity: u32) -> Self {
        Self { key, quantity }
    }

    /// Shorthand for `Demand::new(DemandKey::new(role, spec, level), quantity)`.
    pub fn of(role: Role, spec: impl Into<String>, level: u8, quantity: u32) -> Self {
        Self::new(DemandKey::new(role, spec, level), quantity)
    }
}

/// Sum of required quantities.
pub fn total_quantity(demand: &[Demand]) -> u64 {
    demand.iter().map(|d| u64::from(d.quantity)).sum()
}
