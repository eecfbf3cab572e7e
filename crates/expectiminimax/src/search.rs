//! Depth-bounded expectiminimax.
//!
//! The root is a decision node for the side to move with its outcome already
//! known. Below it, decision and chance layers alternate:
//!
//! - a decision node takes the max (root player) or min (opponent) over the
//!   chance nodes reached by each legal action; with no legal action it passes
//!   straight through to the chance node of the skipped turn;
//! - a chance node takes the probability-weighted sum over every outcome of
//!   the decision node for the next side, one depth level lower;
//! - a chance node at depth 0, and any terminal state, is a leaf scored by the
//!   heuristic from the root player's perspective.
//!
//! Chance outcomes are enumerated, never sampled.

use std::marker::PhantomData;

use log::{debug, trace};
use senet_core::{Heuristic, StochasticGame};

use crate::{
    config::SearchConfig,
    node::{Node, NodeKind},
    trace::{BranchEval, NodeCounts, SearchTrace},
};

/// Result of a search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult<A> {
    /// Best root action; None when the root has none (skipped turn or
    /// finished game).
    pub best_action: Option<A>,

    /// Value of the root from the root player's perspective.
    pub value: f64,

    /// Present when diagnostics are enabled.
    pub trace: Option<SearchTrace<A>>,
}

/// State shared by one search invocation.
struct Walk<'g, G: StochasticGame> {
    game: &'g G,
    root: G::Player,
    counts: Option<NodeCounts>,
}

impl<G: StochasticGame> Walk<'_, G> {
    #[inline]
    fn record(&mut self, kind: NodeKind) {
        if let Some(counts) = &mut self.counts {
            counts.record(kind);
        }
    }
}

/// Expectiminimax search with a static evaluator at the leaves.
///
/// Generic over:
/// - `G`: The game being played
/// - `H`: The leaf evaluator
pub struct Expectiminimax<G: StochasticGame, H: Heuristic<G>> {
    config: SearchConfig,
    heuristic: H,
    _game: PhantomData<G>,
}

impl<G, H> Expectiminimax<G, H>
where
    G: StochasticGame,
    H: Heuristic<G>,
{
    /// Create a new search instance.
    pub fn new(config: SearchConfig, heuristic: H) -> Self {
        Self {
            config,
            heuristic,
            _game: PhantomData,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Search from `state`, whose side to move has received `outcome`.
    pub fn search(
        &self,
        game: &G,
        state: &G::State,
        outcome: G::Outcome,
    ) -> SearchResult<G::Action> {
        let depth = self.config.max_depth;
        let mut walk = Walk {
            game,
            root: game.to_move(state),
            counts: self.config.diagnostics.then(NodeCounts::default),
        };
        let mut root_values = Vec::new();

        let (best_action, value) = if game.is_terminal(state) {
            (None, self.value(&mut walk, Node::Leaf { state }))
        } else {
            walk.record(NodeKind::DecisionMax);
            let actions = game.legal_actions(state, outcome);
            if actions.is_empty() {
                let skipped = Node::Chance {
                    state: game.pass(state),
                    depth,
                };
                (None, self.value(&mut walk, skipped))
            } else {
                let mut best_action = None;
                let mut best_value = f64::NEG_INFINITY;
                for action in actions {
                    let child = Node::Chance {
                        state: game.apply(state, action),
                        depth,
                    };
                    let value = self.value(&mut walk, child);
                    trace!("root action {:?} -> {:.4}", action, value);
                    if self.config.diagnostics {
                        root_values.push(BranchEval { action, value });
                    }
                    // Strict: ties keep the earlier action
                    if best_action.is_none() || value > best_value {
                        best_action = Some(action);
                        best_value = value;
                    }
                }
                (best_action, best_value)
            }
        };

        let trace = walk.counts.map(|counts| SearchTrace {
            depth,
            counts,
            root_values,
        });
        match &trace {
            Some(trace) => debug!(
                "depth {} best {:?} value {:.4} nodes {}",
                depth,
                best_action,
                value,
                trace.counts.total()
            ),
            None => debug!("depth {} best {:?} value {:.4}", depth, best_action, value),
        }

        SearchResult {
            best_action,
            value,
            trace,
        }
    }

    /// Evaluate any node below the root decision.
    fn value(&self, walk: &mut Walk<'_, G>, node: Node<'_, G>) -> f64 {
        let game = walk.game;
        match node {
            Node::Decision {
                state,
                outcome,
                depth,
            } => {
                if game.is_terminal(state) {
                    return self.value(walk, Node::Leaf { state });
                }
                let maximizing = game.to_move(state) == walk.root;
                walk.record(if maximizing {
                    NodeKind::DecisionMax
                } else {
                    NodeKind::DecisionMin
                });

                let actions = game.legal_actions(state, outcome);
                if actions.is_empty() {
                    let skipped = Node::Chance {
                        state: game.pass(state),
                        depth,
                    };
                    return self.value(walk, skipped);
                }

                let mut best = if maximizing {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                };
                for action in actions {
                    let child = Node::Chance {
                        state: game.apply(state, action),
                        depth,
                    };
                    let value = self.value(walk, child);
                    if (maximizing && value > best) || (!maximizing && value < best) {
                        best = value;
                    }
                }
                best
            }
            Node::Chance { state, depth } => {
                if depth == 0 || game.is_terminal(&state) {
                    return self.value(walk, Node::Leaf { state: &state });
                }
                walk.record(NodeKind::Chance);
                game.chance()
                    .iter()
                    .map(|(outcome, probability)| {
                        let child = Node::Decision {
                            state: &state,
                            outcome,
                            depth: depth - 1,
                        };
                        probability * self.value(walk, child)
                    })
                    .sum()
            }
            Node::Leaf { state } => {
                walk.record(NodeKind::Leaf);
                self.heuristic.evaluate(state, walk.root)
            }
        }
    }
}
