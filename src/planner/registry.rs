//! Caller-owned team settings table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

use super::TeamSettings;

/// Settings per team, keyed by the caller's team identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize + Eq + Hash",
    deserialize = "T: Deserialize<'de> + Eq + Hash"
))]
pub struct TeamRegistry<T> {
    teams: HashMap<T, TeamSettings>,
}

impl<T: Eq + Hash> Default for TeamRegistry<T> {
    fn default() -> Self {
        Self {
            teams: HashMap::new(),
        }
    }
}

impl<T: Eq + Hash> TeamRegistry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings for `team`, if registered.
    pub fn get(&self, team: &T) -> Option<&TeamSettings> {
        self.teams.get(team)
    }

    /// Settings for `team`, registering defaults on first access.
    pub fn get_or_default(&mut self, team: T) -> &mut TeamSettings {
        self.teams.entry(team).or_default()
    }

    /// Replaces the settings for `team`, returning the previous ones.
    pub fn insert(&mut self, team: T, settings: TeamSettings) -> Option<TeamSettings> {
        self.teams.insert(team, settings)
    }

    /// Forgets `team`.
    pub fn remove(&mut self, team: &T) -> Option<TeamSettings> {
        self.teams.remove(team)
    }

    /// All registered teams.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &TeamSettings)> {
        self.teams.iter()
    }

    /// Teams whose settings are active.
    pub fn active(&self) -> impl Iterator<Item = (&T, &TeamSettings)> {
        self.teams.iter().filter(|(_, s)| s.active)
    }

    /// Number of registered teams.
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// Whether no team is registered.
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
