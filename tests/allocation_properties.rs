//! Property tests for the preference allocator.

use proptest::prelude::*;
use u_assign::allocation::{allocate, AllocationPath, Outcome};
use u_assign::config::{Capacity, Category, ColumnBindings, Config};
use u_assign::roster::{Individual, Roster};

/// Capacities (`None` = unlimited) and rosters of category-index
/// preferences, one preference per category.
fn scenario() -> impl Strategy<Value = (Vec<Option<usize>>, Vec<Vec<usize>>)> {
    (1usize..5).prop_flat_map(|n| {
        (
            prop::collection::vec(prop::option::of(0usize..5), n),
            prop::collection::vec(prop::collection::vec(0..n, n), 0..30),
        )
    })
}

fn build(capacities: &[Option<usize>], prefs: &[Vec<usize>]) -> (Config, Roster) {
    let name = |i: usize| format!("C{i}");
    let config = capacities
        .iter()
        .enumerate()
        .fold(Config::new(ColumnBindings::default()), |config, (i, cap)| {
            config.with_category(match cap {
                Some(c) => Category::limited(name(i), *c),
                None => Category::unlimited(name(i)),
            })
        });
    let roster = prefs
        .iter()
        .enumerate()
        .map(|(row, p)| Individual::new(format!("s{row}"), format!("n{row}"), p.iter().map(|&i| name(i))))
        .collect();
    (config, roster)
}

proptest! {
    #[test]
    fn totality((caps, prefs) in scenario()) {
        let (config, roster) = build(&caps, &prefs);
        let result = allocate(&roster, &config).unwrap();
        prop_assert_eq!(result.len(), roster.len());
        for (placement, person) in result.placements().iter().zip(roster.individuals()) {
            prop_assert_eq!(&placement.id, &person.id);
        }
    }

    #[test]
    fn capacity_respected((caps, prefs) in scenario()) {
        let (config, roster) = build(&caps, &prefs);
        let result = allocate(&roster, &config).unwrap();
        for category in config.categories() {
            if let Capacity::Limited(cap) = category.capacity {
                prop_assert!(result.count(&category.name) <= cap);
            }
        }
    }

    #[test]
    fn easy_path_grants_first_choice((caps, prefs) in scenario()) {
        let (config, roster) = build(&caps, &prefs);
        let fits = config.categories().enumerate().all(|(i, category)| {
            let demand = prefs.iter().filter(|p| p[0] == i).count();
            match category.capacity {
                Capacity::Unlimited => true,
                Capacity::Limited(c) => demand <= c,
            }
        });
        let result = allocate(&roster, &config).unwrap();
        prop_assert_eq!(fits, result.path() == AllocationPath::Easy);
        if fits {
            for (placement, person) in result.placements().iter().zip(roster.individuals()) {
                prop_assert_eq!(placement.outcome.category(), Some(person.preferences[0].as_str()));
                prop_assert_eq!(placement.rank, Some(1));
            }
        }
    }

    #[test]
    fn deterministic((caps, prefs) in scenario()) {
        let (config, roster) = build(&caps, &prefs);
        prop_assert_eq!(allocate(&roster, &config).unwrap(), allocate(&roster, &config).unwrap());
    }

    #[test]
    fn denied_ranks_were_full((caps, prefs) in scenario()) {
        let (config, roster) = build(&caps, &prefs);
        let result = allocate(&roster, &config).unwrap();
        for (placement, person) in result.placements().iter().zip(roster.individuals()) {
            let granted = placement.rank.unwrap_or(person.preferences.len() + 1);
            if let Some(rank) = placement.rank {
                prop_assert_eq!(
                    placement.outcome.category(),
                    Some(person.preferences[rank - 1].as_str())
                );
            }
            // Every choice ranked above the granted one is a limited
            // category that ended up full.
            for denied in &person.preferences[..granted - 1] {
                let category = config.category(denied).unwrap();
                prop_assert_eq!(
                    category.capacity,
                    Capacity::Limited(result.count(denied))
                );
            }
            if placement.outcome == Outcome::Unassignable {
                prop_assert!(placement.rank.is_none());
            }
        }
    }
}
