//! Implementation of the StochasticGame trait for Senet.

use senet_core::{ChanceDistribution, StochasticGame};

use crate::{sticks, Action, GameState, Side, Throw};

/// Senet game implementation for the search.
#[derive(Clone, Copy, Debug, Default)]
pub struct Senet;

impl StochasticGame for Senet {
    type State = GameState;
    type Action = Action;
    type Outcome = Throw;
    type Player = Side;

    fn initial_state(&self) -> GameState {
        GameState::starting()
    }

    fn to_move(&self, state: &GameState) -> Side {
        state.side_to_move()
    }

    fn legal_actions(&self, state: &GameState, throw: Throw) -> Vec<Action> {
        state.legal_actions(throw)
    }

    fn apply(&self, state: &GameState, action: Action) -> GameState {
        state.make_move(action)
    }

    fn pass(&self, state: &GameState) -> GameState {
        state.pass()
    }

    fn is_terminal(&self, state: &GameState) -> bool {
        state.is_terminal()
    }

    fn chance(&self) -> &ChanceDistribution<Throw> {
        sticks::probabilities()
    }
}
