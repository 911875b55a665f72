//! Bipartite max-flow assignment solver.
//!
//! # Network layout
//!
//! | Vertex | Meaning |
//! |--------|---------|
//! | 0 | source |
//! | 1 | sink |
//! | 2 .. 2+a | agents, in input order |
//! | 2+a .. 2+a+k | distinct demand keys, in input order |
//!
//! Vertex numbering is internal to one solve.
//!
//! # Complexity
//! O(V * E^2) with V = 2 + agents + keys, E <= agents * (1 + keys) + keys.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::error::FlowError;
use crate::flow::{EdgeId, FlowNetwork, MaxFlow};
use crate::models::{Agent, AssignmentResult, Demand, DemandKey};

/// Source vertex of the assignment network.
pub const SOURCE: usize = 0;
/// Sink vertex of the assignment network.
pub const SINK: usize = 1;

#[derive(Debug, Clone)]
struct AgentNode<A> {
    id: A,
    /// (agent -> key edge, key index)
    edges: Vec<(EdgeId, usize)>,
}

#[derive(Debug, Clone)]
struct KeyNode {
    key: DemandKey,
    sink_edge: EdgeId,
}

/// Assignment network built from demand and agent input.
///
/// Duplicate demand keys are merged (quantities add up); duplicate agent
/// ids are merged (skills are unioned). Skills naming a key absent from
/// the demand are ignored.
#[derive(Debug, Clone)]
pub struct AssignmentSolver<A> {
    network: FlowNetwork<i64>,
    agents: Vec<AgentNode<A>>,
    keys: Vec<KeyNode>,
}

impl<A: Clone + Eq + Hash> AssignmentSolver<A> {
    /// Builds the flow network for `demand` and `agents`.
    pub fn build(demand: &[Demand], agents: &[Agent<A>]) -> Result<Self, FlowError> {
        let mut key_index: HashMap<&DemandKey, usize> = HashMap::new();
        let mut required: Vec<(&DemandKey, u32)> = Vec::new();
        for d in demand {
            match key_index.entry(&d.key) {
                Entry::Occupied(slot) => {
                    let entry = &mut required[*slot.get()];
                    entry.1 = entry.1.saturating_add(d.quantity);
                }
                Entry::Vacant(slot) => {
                    slot.insert(required.len());
                    required.push((&d.key, d.quantity));
                }
            }
        }

        let mut agent_index: HashMap<&A, usize> = HashMap::new();
        let mut eligible: Vec<(&A, Vec<usize>)> = Vec::new();
        for agent in agents {
            let slot = *agent_index.entry(&agent.id).or_insert_with(|| {
                eligible.push((&agent.id, Vec::new()));
                eligible.len() - 1
            });
            let skills = &mut eligible[slot].1;
            for skill in &agent.skills {
                if let Some(&k) = key_index.get(skill) {
                    if !skills.contains(&k) {
                        skills.push(k);
                    }
                }
            }
        }

        let agent_count = eligible.len();
        let key_vertex = |k: usize| 2 + agent_count + k;
        let mut network = FlowNetwork::new(2 + agent_count + required.len());

        let mut agent_nodes = Vec::with_capacity(agent_count);
        for (i, (id, skills)) in eligible.into_iter().enumerate() {
            let v = 2 + i;
            network.add_edge(SOURCE, v, 1)?;
            let mut edges = Vec::with_capacity(skills.len());
            for k in skills {
                edges.push((network.add_edge(v, key_vertex(k), 1)?, k));
            }
            agent_nodes.push(AgentNode {
                id: id.clone(),
                edges,
            });
        }

        let mut key_nodes = Vec::with_capacity(required.len());
        for (k, (key, quantity)) in required.into_iter().enumerate() {
            let sink_edge = network.add_edge(key_vertex(k), SINK, i64::from(quantity))?;
            key_nodes.push(KeyNode {
                key: key.clone(),
                sink_edge,
            });
        }

        Ok(Self {
            network,
            agents: agent_nodes,
            keys: key_nodes,
        })
    }

    /// The underlying network (carries the solved flow after [`Self::solve`]).
    pub fn network(&self) -> &FlowNetwork<i64> {
        &self.network
    }

    /// Number of distinct agents.
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Number of distinct demand keys.
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Runs maximum flow and decodes the assignment.
    pub fn solve(&mut self) -> Result<AssignmentResult<A>, FlowError> {
        let max_flow = MaxFlow::solve(&mut self.network, SOURCE, SINK)?;
        let mut result = AssignmentResult {
            matched: u64::try_from(max_flow.value()).unwrap_or(0),
            ..AssignmentResult::default()
        };

        for agent in &self.agents {
            // Inbound capacity is 1, so at most one edge carries flow.
            let matched = agent
                .edges
                .iter()
                .find(|(id, _)| self.network.edge(*id).flow().is_positive());
            match matched {
                Some(&(_, k)) => {
                    result
                        .assignments
                        .insert(agent.id.clone(), self.keys[k].key.clone());
                }
                None => result.surplus.push(agent.id.clone()),
            }
        }

        for node in &self.keys {
            let unused = self.network.edge(node.sink_edge).unused();
            if unused.is_positive() {
                result
                    .shortfall
                    .insert(node.key.clone(), u32::try_from(unused).unwrap_or(u32::MAX));
            }
        }

        debug!(
            agents = self.agents.len(),
            keys = self.keys.len(),
            matched = result.matched,
            shortfall = result.total_shortfall(),
            surplus = result.surplus.len(),
            "assignment solved"
        );
        Ok(result)
    }
}

/// Computes a maximum-cardinality assignment of `agents` to `demand`.
///
/// `demand` order matters for tie-breaking among equally eligible agents;
/// the number of matches does not depend on it.
///
/// # Errors
/// Only on an internal network construction defect. Unmet demand and idle
/// agents are part of the result.
///
/// # Example
///
/// ```
/// use u_staffing::assignment::solve_assignment;
/// use u_staffing::models::{Agent, Demand, DemandKey, Role};
///
/// let core = DemandKey::new(Role::Programmer, "Core", 2);
/// let demand = vec![Demand::new(core.clone(), 2)];
/// let agents = vec![
///     Agent::new("A").with_skill(core.clone()),
///     Agent::new("B").with_skill(core.clone()),
///     Agent::new("C"),
/// ];
///
/// let result = solve_assignment(&demand, &agents).unwrap();
/// assert_eq!(result.assignment(&"A"), Some(&core));
/// assert_eq!(result.assignment(&"B"), Some(&core));
/// assert!(result.shortfall.is_empty());
/// assert_eq!(result.surplus, vec!["C"]);
/// ```
pub fn solve_assignment<A: Clone + Eq + Hash>(
    demand: &[Demand],
    agents: &[Agent<A>],
) -> Result<AssignmentResult<A>, FlowError> {
    AssignmentSolver::build(demand, agents)?.solve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::check_feasibility;
    use crate::models::Role;

    fn key(role: Role, spec: &str, level: u8) -> DemandKey {
        DemandKey::new(role, spec, level)
    }

    #[test]
    fn test_scenario_surplus() {
        let core = key(Role::Programmer, "Core", 2);
        let demand = vec![Demand::new(core.clone(), 2)];
        let agents = vec![
            Agent::new('A').with_skill(core.clone()),
            Agent::new('B').with_skill(core.clone()),
            Agent::new('C'),
        ];

        let result = solve_assignment(&demand, &agents).unwrap();
        assert_eq!(result.assignments.len(), 2);
        assert_eq!(result.assignment(&'A'), Some(&core));
        assert_eq!(result.assignment(&'B'), Some(&core));
        assert!(result.shortfall.is_empty());
        assert_eq!(result.surplus, vec!['C']);
        assert_eq!(result.matched, 2);
    }

    #[test]
    fn test_scenario_shortfall() {
        let ux = key(Role::Designer, "UX", 1);
        let demand = vec![Demand::new(ux.clone(), 3)];
        let agents = vec![Agent::new('A').with_skill(ux.clone())];

        let result = solve_assignment(&demand, &agents).unwrap();
        assert_eq!(result.assignment(&'A'), Some(&ux));
        assert_eq!(result.shortfall_for(&ux), 2);
        assert_eq!(result.shortfall.len(), 1);
        assert!(result.surplus.is_empty());
    }

    #[test]
    fn test_specialist_is_not_wasted() {
        // A can do both keys, B only the first. Both must be matched.
        let k1 = key(Role::Programmer, "Core", 1);
        let k2 = key(Role::Programmer, "System", 2);
        let demand = vec![Demand::new(k1.clone(), 1), Demand::new(k2.clone(), 1)];
        let agents = vec![
            Agent::new("A").with_skills([k1.clone(), k2.clone()]),
            Agent::new("B").with_skill(k1.clone()),
        ];

        let result = solve_assignment(&demand, &agents).unwrap();
        assert_eq!(result.matched, 2);
        assert_eq!(result.assignment(&"A"), Some(&k2));
        assert_eq!(result.assignment(&"B"), Some(&k1));
        assert!(result.is_fully_staffed());
    }

    #[test]
    fn test_empty_inputs() {
        let none: Vec<Agent<u32>> = Vec::new();
        let result = solve_assignment(&[], &none).unwrap();
        assert!(result.assignments.is_empty());
        assert!(result.shortfall.is_empty());
        assert!(result.surplus.is_empty());

        // No demand: everyone is surplus.
        let agents = vec![Agent::new(1u32), Agent::new(2u32)];
        let result = solve_assignment(&[], &agents).unwrap();
        assert_eq!(result.surplus, vec![1, 2]);

        // No agents: all demand is short.
        let k = key(Role::Artist, "3D", 0);
        let result = solve_assignment(&[Demand::new(k.clone(), 4)], &none).unwrap();
        assert_eq!(result.shortfall_for(&k), 4);
    }

    #[test]
    fn test_unknown_skill_ignored() {
        let wanted = key(Role::Programmer, "Core", 1);
        let other = key(Role::Programmer, "Core", 3);
        let demand = vec![Demand::new(wanted.clone(), 1)];
        let agents = vec![Agent::new(0u8).with_skill(other)];

        let solver = AssignmentSolver::build(&demand, &agents).unwrap();
        // source->agent and key->sink only.
        assert_eq!(solver.network().edge_count(), 2);

        let result = solve_assignment(&demand, &agents).unwrap();
        assert_eq!(result.surplus, vec![0]);
        assert_eq!(result.shortfall_for(&wanted), 1);
    }

    #[test]
    fn test_duplicates_are_merged() {
        let k = key(Role::Service, "Law", 2);
        let demand = vec![Demand::new(k.clone(), 1), Demand::new(k.clone(), 1)];
        let agents = vec![
            Agent::new("A").with_skills([k.clone(), k.clone()]),
            Agent::new("A"),
            Agent::new("B").with_skill(k.clone()),
        ];

        let solver = AssignmentSolver::build(&demand, &agents).unwrap();
        assert_eq!(solver.agent_count(), 2);
        assert_eq!(solver.key_count(), 1);
        // 2 source edges, 2 eligibility edges, 1 sink edge.
        assert_eq!(solver.network().edge_count(), 5);

        let result = solve_assignment(&demand, &agents).unwrap();
        assert_eq!(result.assigned_count(&k), 2);
        assert!(result.is_fully_staffed());
    }

    #[test]
    fn test_solved_network_is_feasible() {
        let k1 = key(Role::Programmer, "Core", 0);
        let k2 = key(Role::Programmer, "Core", 1);
        let demand = vec![Demand::new(k1.clone(), 2), Demand::new(k2.clone(), 2)];
        let agents: Vec<Agent<usize>> = (0..5)
            .map(|i| {
                let a = Agent::new(i).with_skill(k1.clone());
                if i % 2 == 0 {
                    a.with_skill(k2.clone())
                } else {
                    a
                }
            })
            .collect();

        let mut solver = AssignmentSolver::build(&demand, &agents).unwrap();
        let result = solver.solve().unwrap();
        let value = check_feasibility(solver.network(), SOURCE, SINK).unwrap();
        assert_eq!(value, 4);
        assert_eq!(result.matched, 4);
        assert_eq!(result.surplus.len(), 1);
        assert_eq!(result.assigned_count(&k2), 2);
    }

    #[test]
    fn test_resolve_is_stable() {
        let k = key(Role::Artist, "2D", 1);
        let demand = vec![Demand::new(k.clone(), 1)];
        let agents = vec![Agent::new(1).with_skill(k.clone()), Agent::new(2).with_skill(k)];

        let mut solver = AssignmentSolver::build(&demand, &agents).unwrap();
        let first = solver.solve().unwrap();
        let second = solver.solve().unwrap();
        assert_eq!(first.assignments, second.assignments);
        assert_eq!(first.surplus, vec![2]);
    }
}
