//! Criterion benchmarks for u-assign.
//!
//! Uses synthetic rosters with a fixed generator so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use u_assign::allocation::allocate;
use u_assign::config::{Category, ColumnBindings, Config};
use u_assign::partition::{partition, PartitionConfig};
use u_assign::roster::{BuddyGroups, Individual, Roster};

// ===========================================================================
// Synthetic inputs
// ===========================================================================

/// `categories` categories, half of them limited to an even share of
/// `people`, and a roster of random preference permutations.
fn synthetic(people: usize, categories: usize) -> (Config, Roster) {
    let names: Vec<String> = (0..categories).map(|i| format!("C{i}")).collect();
    let share = people / categories;
    let config = names
        .iter()
        .enumerate()
        .fold(Config::new(ColumnBindings::default()), |config, (i, name)| {
            config.with_category(if i % 2 == 0 {
                Category::limited(name.clone(), share / 2)
            } else {
                Category::unlimited(name.clone())
            })
        });

    let mut rng = StdRng::seed_from_u64(42);
    let roster = (0..people)
        .map(|i| {
            let mut prefs = names.clone();
            prefs.shuffle(&mut rng);
            Individual::new(i.to_string(), format!("person {i}"), prefs)
        })
        .collect();
    (config, roster)
}

fn synthetic_members(n: usize, labels: usize) -> (Vec<String>, BuddyGroups) {
    let mut rng = StdRng::seed_from_u64(7);
    let ids: Vec<String> = (0..n).map(|i| i.to_string()).collect();
    let groups = ids
        .iter()
        .map(|id| (id.clone(), format!("g{}", rng.random_range(0..labels))))
        .collect();
    (ids, groups)
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_allocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate");
    group.sample_size(10);

    for (people, categories) in [(100usize, 5usize), (1000, 10), (5000, 20)] {
        let input = synthetic(people, categories);
        group.bench_with_input(
            BenchmarkId::new(format!("n{people}_c{categories}"), people),
            &input,
            |b, (config, roster)| {
                b.iter(|| {
                    let result = allocate(black_box(roster), black_box(config));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    group.sample_size(10);

    for (members, subgroups) in [(20usize, 4usize), (100, 8), (400, 16)] {
        let (ids, groups) = synthetic_members(members, 5);
        let config = PartitionConfig::default().with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("m{members}_k{subgroups}"), members),
            &(ids, groups, config),
            |b, (ids, groups, config)| {
                let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
                b.iter(|| {
                    let result = partition(
                        "bench",
                        black_box(&ids),
                        black_box(groups),
                        subgroups,
                        config,
                    );
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_allocate, bench_partition);
criterion_main!(benches);
