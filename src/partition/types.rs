//! Partition results.

/// One partitioned member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubgroupMember {
    pub id: String,
    pub buddy_group: String,

    /// Subgroup index in `[0, subgroup_count)`.
    pub subgroup: usize,
}

/// Subgroups of one special category.
#[derive(Debug, Clone, PartialEq)]
pub struct SubgroupAssignment {
    /// The special category that was partitioned.
    pub category: String,

    /// Number of subgroups.
    pub subgroup_count: usize,

    /// Partitioned members, in the order they were given.
    pub members: Vec<SubgroupMember>,

    /// Members without buddy-group data, left unpartitioned.
    pub skipped: Vec<String>,

    /// Sum of subgroup entropies of the final partition.
    pub diversity: f64,

    /// Accepted annealing moves.
    pub accepted_moves: usize,

    /// Annealing steps taken.
    pub iterations: usize,
}

impl SubgroupAssignment {
    pub(crate) fn empty(category: &str, subgroup_count: usize, skipped: Vec<String>) -> Self {
        Self {
            category: category.to_string(),
            subgroup_count,
            members: Vec::new(),
            skipped,
            diversity: 0.0,
            accepted_moves: 0,
            iterations: 0,
        }
    }

    /// Subgroup of member `id`, if partitioned.
    pub fn subgroup_of(&self, id: &str) -> Option<usize> {
        self.members
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.subgroup)
    }

    /// Member count of each subgroup.
    pub fn subgroup_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.subgroup_count];
        for member in &self.members {
            sizes[member.subgroup] += 1;
        }
        sizes
    }

    /// Members of subgroup `index`.
    pub fn subgroup(&self, index: usize) -> impl Iterator<Item = &SubgroupMember> {
        self.members.iter().filter(move |m| m.subgroup == index)
    }

    /// Number of partitioned members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
