//! Input validation for staffing problems.
//!
//! The solver is lenient: duplicate keys are merged, duplicate agents are
//! unioned and skills naming unknown keys are ignored. These checks let a
//! caller find such input before it is silently normalized. Detects:
//! - Zero-quantity demand
//! - Levels above [`MAX_LEVEL`]
//! - Duplicate demand keys and agent IDs
//! - Skills that reference no demanded key
//! - Empty specialization names

use crate::models::{Agent, AgentProfile, Demand, DemandKey, MAX_LEVEL};
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A demand entry asks for zero agents.
    ZeroQuantity,
    /// A level is above [`MAX_LEVEL`].
    LevelOutOfRange,
    /// Two demand entries share the same key.
    DuplicateDemandKey,
    /// Two agents share the same ID.
    DuplicateAgent,
    /// An agent lists a key that no demand entry names.
    UnknownCapability,
    /// A specialization name is empty.
    EmptySpecialization,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn check_key(key: &DemandKey, context: &str, errors: &mut Vec<ValidationError>) {
    if !key.has_valid_level() {
        errors.push(ValidationError::new(
            ValidationErrorKind::LevelOutOfRange,
            format!("{context} '{key}' has level above {MAX_LEVEL}"),
        ));
    }
    if key.spec.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySpecialization,
            format!("{context} for {} has an empty specialization", key.role),
        ));
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a demand list.
pub fn validate_demand(demand: &[Demand]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for d in demand {
        if !seen.insert(&d.key) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateDemandKey,
                format!("Duplicate demand key: {}", d.key),
            ));
        }
        if d.quantity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroQuantity,
                format!("Demand '{}' has zero quantity", d.key),
            ));
        }
        check_key(&d.key, "Demand", &mut errors);
    }

    finish(errors)
}

/// Validates agents against the demand they will be matched to.
pub fn validate_agents<A: Debug + Eq + Hash>(agents: &[Agent<A>], demand: &[Demand]) -> ValidationResult {
    let mut errors = Vec::new();
    let keys: HashSet<&DemandKey> = demand.iter().map(|d| &d.key).collect();
    let mut ids = HashSet::new();

    for agent in agents {
        if !ids.insert(&agent.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateAgent,
                format!("Duplicate agent ID: {:?}", agent.id),
            ));
        }
        for skill in &agent.skills {
            if !keys.contains(skill) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownCapability,
                    format!("Agent {:?} lists '{skill}', which is not demanded", agent.id),
                ));
            }
        }
    }

    finish(errors)
}

/// Validates agent profiles.
pub fn validate_profiles<A: Debug + Eq + Hash>(profiles: &[AgentProfile<A>]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for profile in profiles {
        if !ids.insert(&profile.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateAgent,
                format!("Duplicate agent ID: {:?}", profile.id),
            ));
        }
        for (spec, &level) in &profile.proficiency {
            if spec.trim().is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::EmptySpecialization,
                    format!("Agent {:?} has an empty specialization", profile.id),
                ));
            }
            if level > MAX_LEVEL {
                errors.push(ValidationError::new(
                    ValidationErrorKind::LevelOutOfRange,
                    format!("Agent {:?} has level {level} in '{spec}'", profile.id),
                ));
            }
        }
    }

    finish(errors)
}

/// Validates demand and agents together, collecting every issue.
pub fn validate_input<A: Debug + Eq + Hash>(demand: &[Demand], agents: &[Agent<A>]) -> ValidationResult {
    let mut errors = Vec::new();
    if let Err(e) = validate_demand(demand) {
        errors.extend(e);
    }
    if let Err(e) = validate_agents(agents, demand) {
        errors.extend(e);
    }
    finish(errors)
}
