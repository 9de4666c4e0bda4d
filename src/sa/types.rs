//! Core trait for Simulated Annealing.

use rand::Rng;

/// Defines a Simulated Annealing problem over a mutable state.
///
/// The state is changed in place: the runner asks for a move, applies it,
/// scores the result, and reverts the move if the Metropolis test rejects
/// it. The problem supplies moves and scoring; the framework handles
/// temperature, acceptance, and cooling.
///
/// # Maximization
///
/// The runner maximizes [`score`](SaProblem::score). For a cost function,
/// negate it.
///
/// # Examples
///
/// ```ignore
/// struct Spread { values: Vec<f64> }
///
/// impl SaProblem for Spread {
///     type State = Vec<usize>;
///     type Move = (usize, usize);
///
///     fn initial_state<R: Rng>(&self, rng: &mut R) -> Vec<usize> { ... }
///     fn score(&self, state: &Vec<usize>) -> f64 { ... }
///     fn propose<R: Rng>(&self, state: &Vec<usize>, rng: &mut R) -> Option<(usize, usize)> {
///         Some((rng.random_range(0..state.len()), rng.random_range(0..state.len())))
///     }
///     fn apply(&self, state: &mut Vec<usize>, &(i, j): &(usize, usize)) { state.swap(i, j) }
///     fn revert(&self, state: &mut Vec<usize>, mv: &(usize, usize)) { self.apply(state, mv) }
/// }
/// ```
///
/// # References
///
/// Kirkpatrick et al. (1983), Cerny (1985)
pub trait SaProblem {
    /// The solution representation.
    type State;

    /// A reversible change to a state.
    type Move;

    /// Creates a random initial state.
    fn initial_state<R: Rng>(&self, rng: &mut R) -> Self::State;

    /// Scores a state. Higher is better.
    fn score(&self, state: &Self::State) -> f64;

    /// Draws a random move, or `None` when the drawn move cannot be made
    /// (the step is then skipped, but still counts against the budget).
    fn propose<R: Rng>(&self, state: &Self::State, rng: &mut R) -> Option<Self::Move>;

    /// Applies a move in place.
    fn apply(&self, state: &mut Self::State, mv: &Self::Move);

    /// Undoes a move previously applied with [`apply`](SaProblem::apply),
    /// restoring the state exactly.
    fn revert(&self, state: &mut Self::State, mv: &Self::Move);
}
