//! The full allocation pipeline.
//!
//! roster + auxiliary table + configuration → allocation → per-category
//! partitioning → assembled output. Every fatal condition is detected
//! before the annealing loop starts.

use rand::Rng;

use crate::allocation::{allocate, Assignment};
use crate::assemble::{assemble, OutputTable};
use crate::config::Config;
use crate::error::Result;
use crate::partition::{partition_with_rng, PartitionConfig, SubgroupAssignment};
use crate::roster::{BuddyGroups, Roster};
use crate::sa::create_rng;
use crate::table::Table;

/// Everything one `compute` call produced.
#[derive(Debug, Clone)]
pub struct Computation {
    /// Category per individual.
    pub assignment: Assignment,

    /// One entry per special category, in configuration order.
    pub subgroups: Vec<SubgroupAssignment>,

    /// The joined result, one row per roster row.
    pub output: OutputTable,
}

/// Runs the pipeline with a generator seeded from `partition.anneal.seed`.
///
/// # Examples
///
/// ```
/// use u_assign::config::Config;
/// use u_assign::engine::compute;
/// use u_assign::partition::PartitionConfig;
/// use u_assign::table::Table;
///
/// let config = Config::from_json_str(r#"{
///     "categories": {"Robotics": [2, true, 1], "Sports": [-1, false, 0]},
///     "nameK": "Name", "sidK": "SID", "prefMainK": "Pref",
///     "extsidK": "SID", "extBK": "Buddy"
/// }"#).unwrap();
/// let roster = Table::from_json_records(r#"[
///     {"Name": "Ada", "SID": 1, "Pref1": "Robotics", "Pref2": "Sports"},
///     {"Name": "Bo",  "SID": 2, "Pref1": "Robotics", "Pref2": "Sports"},
///     {"Name": "Cy",  "SID": 3, "Pref1": "Robotics", "Pref2": "Sports"}
/// ]"#).unwrap();
/// let aux = Table::from_json_records(r#"[{"SID": 1, "Buddy": "x"}]"#).unwrap();
///
/// let result = compute(&roster, &aux, &config, &PartitionConfig::default()).unwrap();
/// let table = result.output.to_table(config.bindings());
/// assert_eq!(table.rows()[0], ["Ada", "1", "Robotics", "0"]);
/// assert_eq!(table.rows()[1], ["Bo", "2", "Robotics", "N/A"]);
/// assert_eq!(table.rows()[2], ["Cy", "3", "Sports", "N/A"]);
/// ```
pub fn compute(
    roster: &Table,
    auxiliary: &Table,
    config: &Config,
    partition: &PartitionConfig,
) -> Result<Computation> {
    let mut rng = create_rng(partition.anneal.seed);
    compute_with_rng(roster, auxiliary, config, partition, &mut rng)
}

/// [`compute`] drawing from a caller-supplied generator.
pub fn compute_with_rng<R: Rng>(
    roster: &Table,
    auxiliary: &Table,
    config: &Config,
    partition: &PartitionConfig,
    rng: &mut R,
) -> Result<Computation> {
    config.validate()?;
    partition.validate()?;

    let roster = Roster::from_table(roster, config)?;
    let buddy_groups = if config.special_categories().next().is_some() {
        BuddyGroups::from_table(auxiliary, config.bindings())?
    } else {
        BuddyGroups::default()
    };

    let assignment = allocate(&roster, config)?;

    let mut subgroups = Vec::new();
    for category in config.special_categories() {
        let Some(count) = category.subgroups else {
            continue;
        };
        let members: Vec<&str> = assignment
            .members(&category.name)
            .map(|p| p.id.as_str())
            .collect();
        subgroups.push(partition_with_rng(
            &category.name,
            &members,
            &buddy_groups,
            count,
            partition,
            rng,
        )?);
    }

    let output = assemble(&assignment, &subgroups);
    tracing::info!(
        rows = output.len(),
        partitioned = subgroups.iter().map(SubgroupAssignment::len).sum::<usize>(),
        "compute finished"
    );

    Ok(Computation {
        assignment,
        subgroups,
        output,
    })
}
