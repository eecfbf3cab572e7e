//! Senet Rules - Kendall's rules for the game of Senet
//!
//! This crate implements the board model, the throwing-stick chance model,
//! legal move generation with the house rules, and a static evaluator.
//!
//! The free functions at the crate root validate raw inputs (throws, tiles)
//! and are the entry points for code outside the search:
//!
//! ```
//! use senet_rules::{apply, initial_state, legal_actions};
//!
//! let state = initial_state();
//! let actions = legal_actions(&state, 1).unwrap();
//! assert_eq!(actions.len(), 7);
//! let next = apply(&state, actions[0]).unwrap();
//! assert!(next.validate().is_ok());
//! ```

mod game_impl;
mod heuristic;
pub mod house;
mod movegen;
mod moves;
mod piece;
mod state;
pub mod sticks;
mod tile;

pub use game_impl::Senet;
pub use heuristic::{HeuristicWeights, SenetHeuristic};
pub use house::House;
pub use moves::{Action, MoveKind};
pub use piece::{PieceId, Side, PIECES_PER_SIDE};
pub use state::GameState;
pub use sticks::{enumerate, probabilities, StickToss, Sticks, Throw, STICKS};
pub use tile::{Destination, Tile, BOARD_COLUMNS, BOARD_ROWS, BOARD_TILES};

use senet_core::Result;

/// The opening position
pub fn initial_state() -> GameState {
    GameState::starting()
}

/// Legal actions for the side to move and a raw throw value.
///
/// # Errors
/// Returns `SenetError::InvalidThrow` if `throw` is outside 1..=5.
pub fn legal_actions(state: &GameState, throw: u8) -> Result<Vec<Action>> {
    Ok(state.legal_actions(Throw::new(throw)?))
}

/// Checked transition, see [`GameState::apply`]
pub fn apply(state: &GameState, action: Action) -> Result<GameState> {
    state.apply(action)
}

/// The legal action for the piece on tile `tile`, if any.
///
/// # Errors
/// Returns `SenetError::InvalidTile` or `SenetError::InvalidThrow` for out of
/// range inputs.
pub fn move_for_tile(state: &GameState, tile: u8, throw: u8) -> Result<Option<Action>> {
    let tile = Tile::try_from(tile)?;
    let throw = Throw::new(throw)?;
    Ok(state.move_for_tile(tile, throw))
}

/// Evaluate `state` for `perspective` with the default weights
pub fn evaluate(state: &GameState, perspective: Side) -> f64 {
    SenetHeuristic::default().score(state, perspective)
}
