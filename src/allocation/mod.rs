//! Preference allocation.
//!
//! Assigns every individual on a [`Roster`](crate::roster::Roster) to
//! exactly one category, respecting capacities and preference order.
//!
//! # Algorithm
//!
//! 1. **Easy path**: if no limited category is the first preference of
//!    more individuals than it can hold, everyone gets their first choice.
//! 2. **Constrained path**: otherwise, ranks `1..=N` are processed in order.
//!    At each rank, categories are visited in configuration order; an
//!    unlimited category takes every still-unassigned individual naming it
//!    at that rank, a limited one takes the first `remaining` of them in
//!    roster row order (first come, first served). Everyone else falls
//!    through to the next rank.
//! 3. Individuals left over after rank `N` are
//!    [`Outcome::Unassignable`].
//!
//! The allocation is deterministic: the same roster order and
//! configuration always produce the same assignment.

mod runner;
mod types;

pub use runner::allocate;
pub use types::{AllocationPath, Assignment, Outcome, Placement, UNASSIGNABLE};
