//! Allocation results.

use std::fmt;

/// Label written for individuals no category could take.
pub const UNASSIGNABLE: &str = "UNASSIGNABLE";

/// Which allocation regime ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationPath {
    /// First-preference demand fit every limited category.
    Easy,

    /// Some limited category was oversubscribed at rank 1.
    Constrained,
}

/// Where one individual ended up.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Placed in the named category.
    Assigned(String),

    /// Every preference was full.
    Unassignable,
}

impl Outcome {
    /// The assigned category, if any.
    pub fn category(&self) -> Option<&str> {
        match self {
            Outcome::Assigned(name) => Some(name),
            Outcome::Unassignable => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Assigned(name) => f.write_str(name),
            Outcome::Unassignable => f.write_str(UNASSIGNABLE),
        }
    }
}

/// One row of an [`Assignment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub id: String,
    pub name: String,
    pub outcome: Outcome,

    /// 1-based preference rank that was granted; `None` when unassignable.
    pub rank: Option<usize>,
}

/// A total mapping from individuals to outcomes, in roster row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    placements: Vec<Placement>,
    path: AllocationPath,
}

impl Assignment {
    pub(crate) fn new(placements: Vec<Placement>, path: AllocationPath) -> Self {
        Self { placements, path }
    }

    /// One placement per roster row, in row order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// The regime that produced this assignment.
    pub fn path(&self) -> AllocationPath {
        self.path
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Placements in `category`, in row order.
    pub fn members<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Placement> + 'a {
        self.placements
            .iter()
            .filter(move |p| p.outcome.category() == Some(category))
    }

    /// Number of individuals placed in `category`.
    pub fn count(&self, category: &str) -> usize {
        self.members(category).count()
    }

    /// Number of individuals no category could take.
    pub fn unassignable_count(&self) -> usize {
        self.placements
            .iter()
            .filter(|p| p.outcome == Outcome::Unassignable)
            .count()
    }

    /// Outcome for the individual with identifier `id`.
    pub fn outcome_of(&self, id: &str) -> Option<&Outcome> {
        self.placements
            .iter()
            .find(|p| p.id == id)
            .map(|p| &p.outcome)
    }
}
