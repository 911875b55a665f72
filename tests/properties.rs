use std::collections::HashMap;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use u_staffing::assignment::{solve_assignment, AssignmentSolver, SINK, SOURCE};
use u_staffing::flow::check_feasibility;
use u_staffing::models::{total_quantity, Agent, Demand, DemandKey, Role};
use u_staffing::staffing::round_staffing;

fn key_pool() -> Vec<DemandKey> {
    vec![
        DemandKey::new(Role::Programmer, "Core", 3),
        DemandKey::new(Role::Programmer, "Core", 2),
        DemandKey::new(Role::Programmer, "System", 1),
        DemandKey::new(Role::Designer, "UX", 0),
        DemandKey::new(Role::Artist, "2D", 2),
    ]
}

fn build_demand(entries: &[(usize, u32)]) -> Vec<Demand> {
    let pool = key_pool();
    entries
        .iter()
        .map(|&(k, q)| Demand::new(pool[k].clone(), q))
        .collect()
}

fn build_agents(masks: &[u8]) -> Vec<Agent<usize>> {
    let pool = key_pool();
    masks
        .iter()
        .enumerate()
        .map(|(id, &mask)| {
            Agent::new(id).with_skills(
                pool.iter()
                    .enumerate()
                    .filter(|(k, _)| mask & (1 << k) != 0)
                    .map(|(_, key)| key.clone()),
            )
        })
        .collect()
}

/// Maximum matching by simple augmenting paths over individual seats.
fn brute_force_matching(demand: &[Demand], agents: &[Agent<usize>]) -> usize {
    let seats: Vec<&DemandKey> = demand
        .iter()
        .flat_map(|d| std::iter::repeat(&d.key).take(d.quantity as usize))
        .collect();
    let mut owner: Vec<Option<usize>> = vec![None; seats.len()];

    fn try_agent(
        a: usize,
        agents: &[Agent<usize>],
        seats: &[&DemandKey],
        owner: &mut [Option<usize>],
        visited: &mut [bool],
    ) -> bool {
        for s in 0..seats.len() {
            if visited[s] || !agents[a].can_fulfill(seats[s]) {
                continue;
            }
            visited[s] = true;
            let free = match owner[s] {
                None => true,
                Some(other) => try_agent(other, agents, seats, owner, visited),
            };
            if free {
                owner[s] = Some(a);
                return true;
            }
        }
        false
    }

    let mut matched = 0;
    for a in 0..agents.len() {
        let mut visited = vec![false; seats.len()];
        if try_agent(a, agents, &seats, &mut owner, &mut visited) {
            matched += 1;
        }
    }
    matched
}

fn demand_strategy() -> impl Strategy<Value = Vec<(usize, u32)>> {
    prop::collection::vec((0usize..5, 0u32..4), 0..7)
}

fn agents_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..32, 0..9)
}

proptest! {
    #[test]
    fn solved_network_is_feasible(entries in demand_strategy(), masks in agents_strategy()) {
        let demand = build_demand(&entries);
        let agents = build_agents(&masks);
        let mut solver = AssignmentSolver::build(&demand, &agents).unwrap();
        let result = solver.solve().unwrap();

        let value = check_feasibility(solver.network(), SOURCE, SINK).unwrap();
        prop_assert_eq!(value as u64, result.matched);
        prop_assert!(result.matched <= (agents.len() as u64).min(total_quantity(&demand)));
    }

    #[test]
    fn assignments_respect_skills(entries in demand_strategy(), masks in agents_strategy()) {
        let demand = build_demand(&entries);
        let agents = build_agents(&masks);
        let result = solve_assignment(&demand, &agents).unwrap();

        for (id, key) in &result.assignments {
            prop_assert!(agents[*id].can_fulfill(key), "agent {} assigned to {}", id, key);
        }
        // Each agent is either assigned or surplus, never both.
        prop_assert_eq!(result.assignments.len() + result.surplus.len(), agents.len());
        for id in &result.surplus {
            prop_assert!(!result.assignments.contains_key(id));
        }
        prop_assert_eq!(result.assignments.len() as u64, result.matched);
    }

    #[test]
    fn assigned_plus_shortfall_is_required(entries in demand_strategy(), masks in agents_strategy()) {
        let demand = build_demand(&entries);
        let agents = build_agents(&masks);
        let result = solve_assignment(&demand, &agents).unwrap();

        let mut required: HashMap<&DemandKey, u32> = HashMap::new();
        for d in &demand {
            *required.entry(&d.key).or_default() += d.quantity;
        }
        for (key, &quantity) in &required {
            let assigned = result.assigned_count(key);
            prop_assert!(assigned <= quantity);
            prop_assert_eq!(assigned + result.shortfall_for(key), quantity);
        }
        for key in result.shortfall.keys() {
            prop_assert!(required.contains_key(key));
        }
    }

    #[test]
    fn matching_is_maximum(entries in demand_strategy(), masks in agents_strategy()) {
        let demand = build_demand(&entries);
        let agents = build_agents(&masks);
        let result = solve_assignment(&demand, &agents).unwrap();
        prop_assert_eq!(result.matched as usize, brute_force_matching(&demand, &agents));
    }

    #[test]
    fn rounding_preserves_headcount(
        work in prop::array::uniform4(0.0f64..10.0),
        headcount in 0u32..50,
    ) {
        let total: f64 = work.iter().sum();
        let counts = round_staffing(&work, total, headcount);
        let sum: u32 = counts.values().sum();

        if headcount == 0 || total <= 0.0 {
            prop_assert!(counts.is_empty());
        } else {
            prop_assert!(sum == headcount || sum == headcount + 1, "sum {} for {}", sum, headcount);
        }
        prop_assert!(counts.values().all(|&c| c > 0));
    }

    #[test]
    fn carry_only_adds_unless_overshooting(
        work in prop::array::uniform4(0.0f64..10.0),
        headcount in 1u32..50,
    ) {
        let total: f64 = work.iter().sum();
        prop_assume!(total > 0.0);
        let counts = round_staffing(&work, total, headcount);
        let sum: u32 = counts.values().sum();

        let mut below_plain = false;
        for level in 0..4u8 {
            let raw = work[usize::from(level)] / total * f64::from(headcount);
            let count = f64::from(counts.get(&level).copied().unwrap_or(0));
            prop_assert!(count <= raw.round() + 1.0);
            below_plain |= count < raw.round();
        }
        // Seats are only given back when plain carry rounding overshot, and
        // then the split is exact.
        if below_plain {
            prop_assert_eq!(sum, headcount);
        }
    }

    #[test]
    fn top_level_never_rounded_down(
        work in prop::array::uniform4(0.0f64..10.0),
        headcount in 1u32..50,
    ) {
        let total: f64 = work.iter().sum();
        prop_assume!(total > 0.0);
        let counts = round_staffing(&work, total, headcount);
        let raw = work[3] / total * f64::from(headcount);
        let top = counts.get(&3).copied().unwrap_or(0);
        prop_assert!(f64::from(top) >= (raw - 1e-6).ceil());
    }

    #[test]
    fn more_top_level_work_never_lowers_its_count(
        work in prop::array::uniform4(0.0f64..10.0),
        extra in 0.0f64..10.0,
        headcount in 1u32..50,
    ) {
        let total: f64 = work.iter().sum();
        prop_assume!(total > 0.0);
        let before = round_staffing(&work, total, headcount);

        let mut more = work;
        more[3] += extra;
        let after = round_staffing(&more, total + extra, headcount);

        let top = |counts: &std::collections::BTreeMap<u8, u32>| counts.get(&3).copied().unwrap_or(0);
        prop_assert!(top(&after) >= top(&before));
    }
}

#[test]
fn seeded_instances_match_brute_force() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..300 {
        let entries: Vec<(usize, u32)> = (0..rng.random_range(0..6))
            .map(|_| (rng.random_range(0..5), rng.random_range(0..4)))
            .collect();
        let masks: Vec<u8> = (0..rng.random_range(0..8))
            .map(|_| rng.random_range(0..32))
            .collect();

        let demand = build_demand(&entries);
        let agents = build_agents(&masks);
        let result = solve_assignment(&demand, &agents).unwrap();
        assert_eq!(
            result.matched as usize,
            brute_force_matching(&demand, &agents),
            "demand {entries:?}, agents {masks:?}"
        );
    }
}
