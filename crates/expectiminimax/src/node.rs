//! Search tree node types.
//!
//! The tree is never stored: nodes are built on the way down and dropped on
//! the way up. Every node is one of a closed set of kinds, evaluated by a
//! single recursive function in [`crate::search`].

use senet_core::StochasticGame;
use serde::{Deserialize, Serialize};

/// Kind of node visited during a search, as reported in diagnostics
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum NodeKind {
    /// Decision for the root player
    DecisionMax,
    /// Decision for the opponent
    DecisionMin,
    /// Expectation over chance outcomes
    Chance,
    /// Heuristic evaluation
    Leaf,
}

/// A node pending evaluation.
///
/// A decision node borrows the state owned by its parent chance node; a
/// chance node owns the state produced by the move above it. Whether a
/// decision node maximizes or minimizes depends on the side to move, so the
/// Max/Min split of [`NodeKind`] is made when the node is evaluated.
pub(crate) enum Node<'s, G: StochasticGame> {
    /// The side to move picks an action for a known outcome
    Decision {
        state: &'s G::State,
        outcome: G::Outcome,
        depth: usize,
    },
    /// The next side's outcome has not been drawn yet
    Chance { state: G::State, depth: usize },
    /// Depth exhausted or game over
    Leaf { state: &'s G::State },
}
