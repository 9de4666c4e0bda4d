//! Result assembly.
//!
//! Left-joins the allocation with the subgroup assignments of all special
//! categories into one row per individual.

use std::collections::HashMap;

use crate::allocation::{Assignment, Outcome};
use crate::config::ColumnBindings;
use crate::partition::SubgroupAssignment;
use crate::table::Table;

/// Header of the assigned-category column.
pub const ASSIGNED_CATEGORY_COLUMN: &str = "Assigned Category";

/// Header of the subgroup column.
pub const SPECIAL_GROUP_COLUMN: &str = "Special Group";

/// Cell written when an individual has no subgroup.
pub const NOT_APPLICABLE: &str = "N/A";

/// One output row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub name: String,
    pub id: String,
    pub category: Outcome,

    /// Subgroup index, or `None` for "N/A".
    pub subgroup: Option<usize>,
}

/// Final result: one row per roster row, in roster order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputTable {
    rows: Vec<OutputRow>,
}

impl OutputTable {
    pub fn rows(&self) -> &[OutputRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for identifier `id`.
    pub fn row(&self, id: &str) -> Option<&OutputRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Materializes the rows with columns
    /// `[nameK, sidK, "Assigned Category", "Special Group"]`.
    pub fn to_table(&self, bindings: &ColumnBindings) -> Table {
        let columns = vec![
            bindings.name.clone(),
            bindings.id.clone(),
            ASSIGNED_CATEGORY_COLUMN.to_string(),
            SPECIAL_GROUP_COLUMN.to_string(),
        ];
        let rows = self
            .rows
            .iter()
            .map(|row| {
                vec![
                    row.name.clone(),
                    row.id.clone(),
                    row.category.to_string(),
                    row.subgroup
                        .map_or_else(|| NOT_APPLICABLE.to_string(), |s| s.to_string()),
                ]
            })
            .collect();
        Table::from_parts(columns, rows)
    }
}

/// Joins `assignment` with `subgroups` on identifier.
///
/// Every placement yields exactly one row; individuals outside special
/// categories, or skipped for missing buddy-group data, get no subgroup.
pub fn assemble(assignment: &Assignment, subgroups: &[SubgroupAssignment]) -> OutputTable {
    let lookup: HashMap<&str, usize> = subgroups
        .iter()
        .flat_map(|s| s.members.iter())
        .map(|m| (m.id.as_str(), m.subgroup))
        .collect();

    let rows = assignment
        .placements()
        .iter()
        .map(|p| OutputRow {
            name: p.name.clone(),
            id: p.id.clone(),
            category: p.outcome.clone(),
            subgroup: lookup.get(p.id.as_str()).copied(),
        })
        .collect();

    OutputTable { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::allocate;
    use crate::config::{Category, Config};
    use crate::partition::SubgroupMember;
    use crate::roster::{Individual, Roster};

    #[test]
    fn test_assemble_left_join() {
        let config = Config::new(ColumnBindings::default())
            .with_category(Category::unlimited("Robotics").with_subgroups(2))
            .with_category(Category::unlimited("Sports"));
        let roster = Roster::new(vec![
            Individual::new("1", "Ada", ["Robotics", "Sports"]),
            Individual::new("2", "Bo", ["Sports", "Robotics"]),
            Individual::new("3", "Cy", ["Robotics", "Sports"]),
        ]);
        let assignment = allocate(&roster, &config).unwrap();
        let subgroups = vec![SubgroupAssignment {
            category: "Robotics".into(),
            subgroup_count: 2,
            members: vec![SubgroupMember {
                id: "1".into(),
                buddy_group: "x".into(),
                subgroup: 1,
            }],
            skipped: vec!["3".into()],
            diversity: 0.0,
            accepted_moves: 0,
            iterations: 0,
        }];

        let output = assemble(&assignment, &subgroups);
        assert_eq!(output.len(), 3);
        assert_eq!(output.row("1").and_then(|r| r.subgroup), Some(1));
        assert_eq!(output.row("2").and_then(|r| r.subgroup), None);
        assert_eq!(output.row("3").and_then(|r| r.subgroup), None);

        let table = output.to_table(config.bindings());
        assert_eq!(
            table.columns(),
            &["Name", "Student Number", "Assigned Category", "Special Group"]
        );
        assert_eq!(table.rows()[0], ["Ada", "1", "Robotics", "1"]);
        assert_eq!(table.rows()[1], ["Bo", "2", "Sports", "N/A"]);
        assert_eq!(table.rows()[2], ["Cy", "3", "Robotics", "N/A"]);
    }
}
