//! Partitioner configuration.

use crate::error::ConfigError;
use crate::sa::SaConfig;

/// How members are spread over subgroups before annealing starts.
///
/// Swaps never change subgroup sizes, so the initial placement fixes them
/// for the whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Initialization {
    /// Each member independently draws a uniformly random subgroup.
    Uniform,

    /// Members are shuffled and dealt round-robin, so subgroup sizes
    /// differ by at most one.
    #[default]
    Balanced,
}

/// Configuration for the diversity partitioner.
///
/// # Examples
///
/// ```
/// use u_assign::partition::{Initialization, PartitionConfig};
///
/// let config = PartitionConfig::default()
///     .with_initialization(Initialization::Uniform)
///     .with_seed(11);
/// assert_eq!(config.anneal.max_iterations, 1000);
/// assert_eq!(config.anneal.seed, Some(11));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartitionConfig {
    /// Annealing parameters (temperature 100, geometric cooling 0.99,
    /// 1000 steps by default).
    pub anneal: SaConfig,

    /// Initial placement policy.
    pub initialization: Initialization,
}

impl PartitionConfig {
    pub fn with_anneal(mut self, anneal: SaConfig) -> Self {
        self.anneal = anneal;
        self
    }

    pub fn with_initialization(mut self, initialization: Initialization) -> Self {
        self.initialization = initialization;
        self
    }

    /// Sets the annealing seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.anneal.seed = Some(seed);
        self
    }

    /// Validates the annealing parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.anneal.validate()
    }
}
