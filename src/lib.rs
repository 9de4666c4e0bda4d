//! Preference-constrained category allocation with diversity-maximizing
//! subgroup partitioning.
//!
//! The engine runs in two stages:
//!
//! - **Allocation** ([`allocation`]): every individual on a roster gets
//!   exactly one category, honoring capacities and ranked preferences with
//!   a first-come-first-served tie-break, or the `UNASSIGNABLE` sentinel.
//! - **Partitioning** ([`partition`]): the members of each special category
//!   are split into a fixed number of subgroups whose buddy-group mix is as
//!   even as possible, by Simulated Annealing ([`sa`]) over the summed
//!   Shannon entropy of the subgroups.
//!
//! [`engine::compute`] chains both stages and [`assemble`] joins their
//! output into one row per individual.
//!
//! # Architecture
//!
//! Spreadsheet parsing, export, and user interfaces are left to callers.
//! The crate consumes [`table::Table`] values and a [`config::Config`],
//! both passed explicitly; no state survives between calls.

pub mod allocation;
pub mod assemble;
pub mod config;
pub mod engine;
pub mod error;
pub mod partition;
pub mod roster;
pub mod sa;
pub mod table;

pub use engine::{compute, compute_with_rng, Computation};
pub use error::{ConfigError, DataIntegrityError, Error, Result};
