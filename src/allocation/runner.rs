//! Allocation loop.

use super::types::{AllocationPath, Assignment, Outcome, Placement};
use crate::config::{Capacity, Config};
use crate::error::Result;
use crate::roster::Roster;

/// Allocates every individual on `roster` to one category.
///
/// Fails before allocating anything if the configuration is invalid or a
/// preference names an unconfigured category.
///
/// # Examples
///
/// ```
/// use u_assign::allocation::{allocate, Outcome};
/// use u_assign::config::{Category, ColumnBindings, Config};
/// use u_assign::roster::{Individual, Roster};
///
/// let config = Config::new(ColumnBindings::default())
///     .with_category(Category::limited("A", 1))
///     .with_category(Category::unlimited("B"));
/// let roster = Roster::new(vec![
///     Individual::new("1", "Ada", ["A", "B"]),
///     Individual::new("2", "Bo", ["A", "B"]),
///     Individual::new("3", "Cy", ["B", "A"]),
/// ]);
///
/// let assignment = allocate(&roster, &config).unwrap();
/// let outcomes: Vec<_> = assignment.placements().iter().map(|p| p.outcome.to_string()).collect();
/// assert_eq!(outcomes, ["A", "B", "B"]);
/// ```
pub fn allocate(roster: &Roster, config: &Config) -> Result<Assignment> {
    config.validate()?;
    let preferences = roster.preference_table(config)?;

    let (path, granted) = if easy_path_applies(&preferences, config) {
        (AllocationPath::Easy, first_preferences(&preferences))
    } else {
        (
            AllocationPath::Constrained,
            constrained(&preferences, config),
        )
    };

    let placements: Vec<Placement> = roster
        .individuals()
        .iter()
        .zip(granted)
        .map(|(person, rank)| Placement {
            id: person.id.clone(),
            name: person.name.clone(),
            outcome: match rank {
                Some(rank) => Outcome::Assigned(person.preferences[rank - 1].clone()),
                None => Outcome::Unassignable,
            },
            rank,
        })
        .collect();

    let assignment = Assignment::new(placements, path);
    tracing::info!(
        path = ?path,
        individuals = assignment.len(),
        unassignable = assignment.unassignable_count(),
        "allocation complete"
    );
    Ok(assignment)
}

/// The 1-based preference rank granted to one individual, if any.
type Grant = Option<usize>;

/// True when no limited category is oversubscribed by first preferences.
fn easy_path_applies(preferences: &[Vec<usize>], config: &Config) -> bool {
    let mut demand = vec![0usize; config.category_count()];
    for prefs in preferences {
        if let Some(&first) = prefs.first() {
            demand[first] += 1;
        }
    }

    config
        .categories()
        .zip(&demand)
        .all(|(category, &wanted)| match category.capacity {
            Capacity::Unlimited => true,
            Capacity::Limited(cap) => wanted <= cap,
        })
}

fn first_preferences(preferences: &[Vec<usize>]) -> Vec<Grant> {
    preferences
        .iter()
        .map(|prefs| prefs.first().map(|_| 1))
        .collect()
}

/// Rank-major, category-minor first-come-first-served allocation.
fn constrained(preferences: &[Vec<usize>], config: &Config) -> Vec<Grant> {
    let mut granted: Vec<Grant> = vec![None; preferences.len()];
    let mut taken = vec![0usize; config.category_count()];
    let mut pool: Vec<usize> = (0..preferences.len()).collect();

    for rank in 0..config.category_count() {
        for (index, category) in config.categories().enumerate() {
            if pool.is_empty() {
                break;
            }
            let mut remaining = category.capacity.remaining(taken[index]);
            if remaining == Some(0) {
                continue;
            }

            let before = taken[index];
            pool.retain(|&row| {
                let wants = preferences[row][rank] == index;
                let admit = wants && remaining != Some(0);
                if admit {
                    granted[row] = Some(rank + 1);
                    taken[index] += 1;
                    if let Some(r) = remaining.as_mut() {
                        *r -= 1;
                    }
                }
                !admit
            });

            tracing::debug!(
                rank = rank + 1,
                category = %category.name,
                admitted = taken[index] - before,
                waiting = pool.len(),
                "allocation step"
            );
        }
    }
    granted
}
