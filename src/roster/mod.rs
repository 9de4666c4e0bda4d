//! Input records.
//!
//! - [`Roster`]: the individuals to allocate, each with a ranked list of
//!   category preferences.
//! - [`BuddyGroups`]: identifier → buddy-group label lookup used only for
//!   subgroup diversity scoring.
//!
//! Both are built from a [`Table`](crate::table::Table) through the column
//! bindings of a [`Config`](crate::config::Config).

mod buddy;
mod types;

pub use buddy::BuddyGroups;
pub use types::{Individual, Roster};
