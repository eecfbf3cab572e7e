//! Baseline opponents for evaluating the expectiminimax player.
//!
//! The greedy policy scores each action on its own: bearing off beats
//! everything, falling into the water is heavily penalised, otherwise the
//! further along the destination the better, with a small bonus for swapping
//! an opponent back.

use clap::ValueEnum;
use rand::seq::SliceRandom;
use rand::Rng;
use senet_rules::{Action, GameState, MoveKind, Throw};

const EXIT_SCORE: f64 = 100.0;
const DROWNED_SCORE: f64 = -20.0;
const SWAP_BONUS: f64 = 2.0;

/// Which baseline plays against the search
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Opponent {
    Greedy,
    Random,
}

impl Opponent {
    pub fn name(self) -> &'static str {
        match self {
            Opponent::Greedy => "greedy",
            Opponent::Random => "random",
        }
    }

    /// Pick an action for the side to move, None if the turn is skipped
    pub fn choose<R: Rng>(self, state: &GameState, throw: Throw, rng: &mut R) -> Option<Action> {
        match self {
            Opponent::Greedy => GreedyPolicy.choose(state, throw),
            Opponent::Random => state.legal_actions(throw).choose(rng).copied(),
        }
    }
}

/// One-ply greedy move scorer.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    pub fn score(action: &Action) -> f64 {
        match action.kind {
            MoveKind::Exit => EXIT_SCORE,
            MoveKind::Drowned => DROWNED_SCORE,
            MoveKind::Advance | MoveKind::Swap(_) => {
                let end = action.to.tile().map_or(0.0, |t| t.index() as f64);
                if action.is_swap() {
                    end + SWAP_BONUS
                } else {
                    end
                }
            }
        }
    }

    /// Highest-scoring legal action; ties keep the earlier action.
    pub fn choose(&self, state: &GameState, throw: Throw) -> Option<Action> {
        let mut best: Option<(Action, f64)> = None;
        for action in state.legal_actions(throw) {
            let score = Self::score(&action);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((action, score));
            }
        }
        best.map(|(action, _)| action)
    }
}
