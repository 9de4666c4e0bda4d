//! Subgroup annealing.

use rand::seq::SliceRandom;
use rand::Rng;

use super::config::{Initialization, PartitionConfig};
use super::entropy::entropy_from_counts;
use super::types::{SubgroupAssignment, SubgroupMember};
use crate::error::ConfigError;
use crate::roster::BuddyGroups;
use crate::sa::{create_rng, SaProblem, SaRunner};

/// Exchange of two members between subgroups `a` and `b`, addressed by
/// their positions inside those subgroups.
#[derive(Debug, Clone, Copy)]
struct Swap {
    a: usize,
    slot_a: usize,
    b: usize,
    slot_b: usize,
}

/// The annealing problem for one special category.
///
/// State: subgroup → member indices. Score: summed label entropy.
struct SubgroupProblem {
    /// Label index of each joined member.
    labels: Vec<usize>,
    label_count: usize,
    subgroup_count: usize,
    initialization: Initialization,
}

impl SubgroupProblem {
    fn subgroup_entropy(&self, members: &[usize]) -> f64 {
        let mut counts = vec![0usize; self.label_count];
        for &m in members {
            counts[self.labels[m]] += 1;
        }
        entropy_from_counts(&counts)
    }
}

impl SaProblem for SubgroupProblem {
    type State = Vec<Vec<usize>>;
    type Move = Swap;

    fn initial_state<R: Rng>(&self, rng: &mut R) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.subgroup_count];
        match self.initialization {
            Initialization::Uniform => {
                for member in 0..self.labels.len() {
                    groups[rng.random_range(0..self.subgroup_count)].push(member);
                }
            }
            Initialization::Balanced => {
                let mut order: Vec<usize> = (0..self.labels.len()).collect();
                order.shuffle(rng);
                for (i, member) in order.into_iter().enumerate() {
                    groups[i % self.subgroup_count].push(member);
                }
            }
        }
        groups
    }

    fn score(&self, groups: &Vec<Vec<usize>>) -> f64 {
        groups.iter().map(|g| self.subgroup_entropy(g)).sum()
    }

    fn propose<R: Rng>(&self, groups: &Vec<Vec<usize>>, rng: &mut R) -> Option<Swap> {
        if self.subgroup_count < 2 {
            return None;
        }
        let a = rng.random_range(0..self.subgroup_count);
        let mut b = rng.random_range(0..self.subgroup_count - 1);
        if b >= a {
            b += 1;
        }
        if groups[a].is_empty() || groups[b].is_empty() {
            return None;
        }
        Some(Swap {
            a,
            slot_a: rng.random_range(0..groups[a].len()),
            b,
            slot_b: rng.random_range(0..groups[b].len()),
        })
    }

    fn apply(&self, groups: &mut Vec<Vec<usize>>, swap: &Swap) {
        let moved = groups[swap.a][swap.slot_a];
        groups[swap.a][swap.slot_a] = groups[swap.b][swap.slot_b];
        groups[swap.b][swap.slot_b] = moved;
    }

    fn revert(&self, groups: &mut Vec<Vec<usize>>, swap: &Swap) {
        self.apply(groups, swap);
    }
}

/// Splits the members of a special category into `subgroup_count`
/// subgroups that maximize summed buddy-group entropy.
///
/// Members without a label in `buddy_groups` are skipped and reported in
/// [`SubgroupAssignment::skipped`]. The generator is seeded from
/// `config.anneal.seed`.
///
/// # Examples
///
/// ```
/// use u_assign::partition::{partition, PartitionConfig};
/// use u_assign::roster::BuddyGroups;
///
/// let groups: BuddyGroups = [("1", "x"), ("2", "x"), ("3", "y"), ("4", "y")]
///     .into_iter()
///     .collect();
/// let result = partition(
///     "Robotics",
///     &["1", "2", "3", "4", "5"],
///     &groups,
///     2,
///     &PartitionConfig::default().with_seed(1),
/// )
/// .unwrap();
/// assert_eq!(result.len(), 4);
/// assert_eq!(result.skipped, ["5"]);
/// ```
pub fn partition(
    category: &str,
    members: &[&str],
    buddy_groups: &BuddyGroups,
    subgroup_count: usize,
    config: &PartitionConfig,
) -> Result<SubgroupAssignment, ConfigError> {
    let mut rng = create_rng(config.anneal.seed);
    partition_with_rng(category, members, buddy_groups, subgroup_count, config, &mut rng)
}

/// [`partition`] drawing from a caller-supplied generator.
pub fn partition_with_rng<R: Rng>(
    category: &str,
    members: &[&str],
    buddy_groups: &BuddyGroups,
    subgroup_count: usize,
    config: &PartitionConfig,
    rng: &mut R,
) -> Result<SubgroupAssignment, ConfigError> {
    if subgroup_count < 1 {
        return Err(ConfigError::InvalidSubgroupCount {
            category: category.to_string(),
            value: subgroup_count.to_string(),
        });
    }
    config.validate()?;

    let mut joined: Vec<(&str, &str)> = Vec::with_capacity(members.len());
    let mut skipped = Vec::new();
    for &id in members {
        match buddy_groups.label(id) {
            Some(label) => joined.push((id, label)),
            None => skipped.push(id.to_string()),
        }
    }

    if !skipped.is_empty() {
        tracing::warn!(
            category,
            skipped = skipped.len(),
            "members without buddy-group data left unpartitioned"
        );
    }

    if joined.is_empty() {
        return Ok(SubgroupAssignment::empty(category, subgroup_count, skipped));
    }

    let mut distinct: Vec<&str> = Vec::new();
    let labels: Vec<usize> = joined
        .iter()
        .map(|&(_, label)| match distinct.iter().position(|&l| l == label) {
            Some(i) => i,
            None => {
                distinct.push(label);
                distinct.len() - 1
            }
        })
        .collect();

    let problem = SubgroupProblem {
        labels,
        label_count: distinct.len(),
        subgroup_count,
        initialization: config.initialization,
    };
    let result = SaRunner::run_with_rng(&problem, &config.anneal, rng)?;

    let mut placed: Vec<SubgroupMember> = Vec::with_capacity(joined.len());
    let mut subgroup_of = vec![0usize; joined.len()];
    for (index, group) in result.state.iter().enumerate() {
        for &member in group {
            subgroup_of[member] = index;
        }
    }
    for (member, &(id, label)) in joined.iter().enumerate() {
        placed.push(SubgroupMember {
            id: id.to_string(),
            buddy_group: label.to_string(),
            subgroup: subgroup_of[member],
        });
    }

    tracing::info!(
        category,
        members = placed.len(),
        subgroups = subgroup_count,
        labels = distinct.len(),
        diversity = result.score,
        "partition complete"
    );
    tracing::debug!(
        category,
        iterations = result.iterations,
        accepted = result.accepted_moves,
        improving = result.improving_moves,
        skipped_steps = result.skipped_moves,
        final_temperature = result.final_temperature,
        "annealing statistics"
    );

    Ok(SubgroupAssignment {
        category: category.to_string(),
        subgroup_count,
        members: placed,
        skipped,
        diversity: result.score,
        accepted_moves: result.accepted_moves,
        iterations: result.iterations,
    })
}
