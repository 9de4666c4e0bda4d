//! Diversity partitioning of special categories.
//!
//! The members of a special category are split into a fixed number of
//! subgroups so that each subgroup mixes buddy groups as evenly as
//! possible. A subgroup's diversity is the Shannon entropy of its label
//! distribution; the objective is the sum over subgroups.
//!
//! # Algorithm
//!
//! 1. Join members with their buddy-group labels; members without a label
//!    are skipped.
//! 2. Place members into subgroups at random (see [`Initialization`]).
//! 3. Run [`SaRunner`](crate::sa::SaRunner): each step swaps one random
//!    member between two distinct random subgroups, keeping or reverting
//!    the swap by the Metropolis criterion, then cools the temperature.
//! 4. Report the partition the walk ended in.
//!
//! This is a heuristic: there is no optimality guarantee and no
//! best-so-far snapshot.

mod config;
mod entropy;
mod runner;
mod types;

pub use config::{Initialization, PartitionConfig};
pub use entropy::{entropy_from_counts, shannon_entropy};
pub use runner::{partition, partition_with_rng};
pub use types::{SubgroupAssignment, SubgroupMember};
