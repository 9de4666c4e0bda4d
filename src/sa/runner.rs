//! SA execution loop.

use super::config::SaConfig;
use super::types::SaProblem;
use crate::error::ConfigError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Steps between two samples of [`SaResult::score_history`].
const HISTORY_INTERVAL: usize = 100;

/// Result of a Simulated Annealing run.
///
/// `state` is the state the walk ended in, which is not necessarily the
/// best state visited.
#[derive(Debug, Clone)]
pub struct SaResult<S> {
    /// The final state.
    pub state: S,

    /// Score of the final state.
    pub score: f64,

    /// Total number of steps taken (including skipped ones).
    pub iterations: usize,

    /// Steps where no move could be proposed.
    pub skipped_moves: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Temperature after the last cooling step.
    pub final_temperature: f64,

    /// Current score sampled every 100 steps, plus the final score.
    pub score_history: Vec<f64>,
}

/// Creates the generator a run draws from.
///
/// With `None` the seed comes from the process-level generator.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(rand::random))
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with a generator seeded from `config.seed`.
    pub fn run<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
    ) -> Result<SaResult<P::State>, ConfigError> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs SA drawing from a caller-supplied generator. `config.seed` is
    /// ignored.
    pub fn run_with_rng<P: SaProblem, R: Rng>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<P::State>, ConfigError> {
        config.validate()?;

        let mut state = problem.initial_state(rng);
        let mut score = problem.score(&state);
        let mut temperature = config.initial_temperature;

        let mut skipped_moves = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut score_history = vec![score];

        for step in 1..=config.max_iterations {
            match problem.propose(&state, rng) {
                None => skipped_moves += 1,
                Some(mv) => {
                    problem.apply(&mut state, &mv);
                    let candidate = problem.score(&state);

                    // Metropolis acceptance criterion
                    let accept = if candidate > score {
                        improving_moves += 1;
                        true
                    } else {
                        let probability = ((candidate - score) / temperature).exp();
                        rng.random::<f64>() < probability
                    };

                    if accept {
                        score = candidate;
                        accepted_moves += 1;
                    } else {
                        problem.revert(&mut state, &mv);
                    }
                }
            }

            temperature = config.cooling.cool(temperature);

            if step % HISTORY_INTERVAL == 0 {
                score_history.push(score);
            }
        }

        if config.max_iterations % HISTORY_INTERVAL != 0 {
            score_history.push(score);
        }

        Ok(SaResult {
            state,
            score,
            iterations: config.max_iterations,
            skipped_moves,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
            score_history,
        })
    }
}
