use std::fmt::Debug;
use std::hash::Hash;

use crate::ChanceDistribution;

/// A two-player game in which every turn starts with a chance event.
///
/// The turn structure is: the side to move receives an outcome drawn from
/// [`StochasticGame::chance`], then picks one of the legal actions for that
/// outcome. When no action is legal the turn is skipped with
/// [`StochasticGame::pass`].
///
/// States are values: `apply` and `pass` return new states and never mutate
/// their input, so sibling branches of a search can share a parent state.
pub trait StochasticGame {
    /// The game state (board, side to move, ...)
    type State: Clone;

    /// A move for a given chance outcome
    type Action: Clone + Copy + Eq + Hash + Debug;

    /// A chance outcome (e.g., a stick throw)
    type Outcome: Clone + Copy + Eq + Debug;

    /// Identifies one of the two sides
    type Player: Clone + Copy + Eq + Debug;

    /// Returns the initial game state
    fn initial_state(&self) -> Self::State;

    /// Returns the side to move in `state`
    fn to_move(&self, state: &Self::State) -> Self::Player;

    /// Returns the legal actions for the side to move given a chance outcome,
    /// in a fixed, deterministic order. Empty means the turn must be skipped.
    fn legal_actions(&self, state: &Self::State, outcome: Self::Outcome) -> Vec<Self::Action>;

    /// Applies an action produced by `legal_actions` for this state.
    ///
    /// Callers outside a search should prefer a checked entry point; this one
    /// trusts its input.
    fn apply(&self, state: &Self::State, action: Self::Action) -> Self::State;

    /// Skips the turn of the side to move without touching the board
    fn pass(&self, state: &Self::State) -> Self::State;

    /// Returns true once the game has been decided
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// The stationary distribution of chance outcomes
    fn chance(&self) -> &ChanceDistribution<Self::Outcome>;
}

/// Static evaluation of a game state.
///
/// The value is always computed with `perspective` as the maximizing side,
/// regardless of whose turn it is in `state`.
pub trait Heuristic<G: StochasticGame> {
    fn evaluate(&self, state: &G::State, perspective: G::Player) -> f64;
}
