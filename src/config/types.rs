//! Category rules and column bindings.

use std::fmt;

/// How many individuals a category can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    /// No ceiling. Written as `-1` in configuration files.
    Unlimited,

    /// At most this many individuals.
    Limited(usize),
}

impl Capacity {
    /// Parses the configuration-file encoding: `-1` for unlimited, any
    /// non-negative integer for a ceiling.
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            -1 => Some(Capacity::Unlimited),
            n if n >= 0 => usize::try_from(n).ok().map(Capacity::Limited),
            _ => None,
        }
    }

    /// Whether this capacity carries a ceiling.
    pub fn is_limited(&self) -> bool {
        matches!(self, Capacity::Limited(_))
    }

    /// Free places left after `taken` assignments. `None` means unbounded.
    pub fn remaining(&self, taken: usize) -> Option<usize> {
        match self {
            Capacity::Unlimited => None,
            Capacity::Limited(cap) => Some(cap.saturating_sub(taken)),
        }
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Unlimited => write!(f, "-1"),
            Capacity::Limited(n) => write!(f, "{n}"),
        }
    }
}

/// A named category individuals are allocated to.
///
/// # Examples
///
/// ```
/// use u_assign::config::{Capacity, Category};
///
/// let robotics = Category::limited("Robotics", 12).with_subgroups(3);
/// assert_eq!(robotics.capacity, Capacity::Limited(12));
/// assert!(robotics.is_special());
///
/// let sports = Category::unlimited("Sports");
/// assert!(!sports.is_special());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Unique name. Preference cells refer to categories by this name.
    pub name: String,

    /// Capacity ceiling.
    pub capacity: Capacity,

    /// Subgroup count for special categories; `None` for regular ones.
    pub subgroups: Option<usize>,
}

impl Category {
    /// Creates a regular category with the given capacity.
    pub fn new(name: impl Into<String>, capacity: Capacity) -> Self {
        Self {
            name: name.into(),
            capacity,
            subgroups: None,
        }
    }

    /// Creates a regular category without a ceiling.
    pub fn unlimited(name: impl Into<String>) -> Self {
        Self::new(name, Capacity::Unlimited)
    }

    /// Creates a regular category with a ceiling.
    pub fn limited(name: impl Into<String>, capacity: usize) -> Self {
        Self::new(name, Capacity::Limited(capacity))
    }

    /// Marks the category special, partitioned into `count` subgroups.
    pub fn with_subgroups(mut self, count: usize) -> Self {
        self.subgroups = Some(count);
        self
    }

    /// Whether members of this category are partitioned into subgroups.
    pub fn is_special(&self) -> bool {
        self.subgroups.is_some()
    }
}

/// Column names used to locate fields in the two input tables.
///
/// Field names follow the keys of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnBindings {
    /// Display name column in the roster (`nameK`).
    pub name: String,

    /// Identifier column in the roster (`sidK`).
    pub id: String,

    /// Preference column prefix (`prefMainK`); rank `k` lives in
    /// `<prefix><k>`, counting from 1.
    pub preference_prefix: String,

    /// Identifier column in the auxiliary table (`extsidK`).
    pub external_id: String,

    /// Buddy-group label column in the auxiliary table (`extBK`).
    pub buddy_group: String,
}

impl ColumnBindings {
    /// Column holding the rank-`rank` preference (1-based).
    pub fn preference_column(&self, rank: usize) -> String {
        format!("{}{}", self.preference_prefix, rank)
    }
}

impl Default for ColumnBindings {
    fn default() -> Self {
        Self {
            name: "Name".into(),
            id: "Student Number".into(),
            preference_prefix: "Preference ".into(),
            external_id: "Student Number".into(),
            buddy_group: "Buddy Group".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_from_raw() {
        assert_eq!(Capacity::from_raw(-1), Some(Capacity::Unlimited));
        assert_eq!(Capacity::from_raw(0), Some(Capacity::Limited(0)));
        assert_eq!(Capacity::from_raw(25), Some(Capacity::Limited(25)));
        assert_eq!(Capacity::from_raw(-2), None);
    }

    #[test]
    fn test_capacity_remaining() {
        assert_eq!(Capacity::Unlimited.remaining(1000), None);
        assert_eq!(Capacity::Limited(3).remaining(1), Some(2));
        assert_eq!(Capacity::Limited(3).remaining(5), Some(0));
    }

    #[test]
    fn test_preference_column() {
        let bindings = ColumnBindings {
            preference_prefix: "pref_".into(),
            ..ColumnBindings::default()
        };
        assert_eq!(bindings.preference_column(1), "pref_1");
        assert_eq!(bindings.preference_column(12), "pref_12");
    }
}
