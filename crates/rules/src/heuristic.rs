//! Static evaluation of Senet positions.
//!
//! The value is a weighted sum of per-side features, own minus opponent,
//! always taken from a fixed perspective. It ignores whose turn it is.

use std::borrow::Cow;

use senet_core::Heuristic;
use serde::{Deserialize, Serialize};

use crate::house::House;
use crate::{sticks, Destination, GameState, Senet, Side, Throw, Tile, BOARD_TILES};

/// Progress credited to an exited piece
const EXITED_PROGRESS: f64 = (BOARD_TILES + 1) as f64;

/// Feature weights.
///
/// `exited` must stay larger than the combined swing of every other feature
/// when one piece leaves the board, otherwise an extra exit could score lower.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeuristicWeights {
    /// Per tile of progress along the track
    pub progress: f64,
    /// Per exited piece
    pub exited: f64,
    /// Bonus for having borne off all pieces
    pub win: f64,
    /// Per unit of probability that the opponent can swap a piece next turn
    pub vulnerability: f64,
    /// Per piece resting on a house other than Water
    pub house: f64,
    /// Per piece protected by an adjacent friendly piece
    pub pair: f64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            progress: 1.0,
            exited: 100.0,
            win: 1000.0,
            vulnerability: 3.0,
            house: 2.0,
            pair: 1.5,
        }
    }
}

/// Weighted-feature evaluator for [`Senet`]
#[derive(Clone, Debug, Default)]
pub struct SenetHeuristic {
    weights: HeuristicWeights,
}

impl SenetHeuristic {
    pub fn new(weights: HeuristicWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &HeuristicWeights {
        &self.weights
    }

    /// Evaluate `state` with `perspective` as the maximizing side
    pub fn score(&self, state: &GameState, perspective: Side) -> f64 {
        let mut value = self.side_score(state, perspective)
            - self.side_score(state, perspective.opponent());
        match state.winner() {
            Some(side) if side == perspective => value += self.weights.win,
            Some(_) => value -= self.weights.win,
            None => {}
        }
        value
    }

    fn side_score(&self, state: &GameState, side: Side) -> f64 {
        let w = &self.weights;
        let exited = state.exited(side) as f64;
        let mut progress = exited * EXITED_PROGRESS;
        let mut houses = 0.0;
        let mut pairs = 0.0;
        let mut exposure = 0.0;
        // Opponent to move, so its replies can be generated
        let attacker_view = if state.side_to_move() == side {
            Cow::Owned(state.pass())
        } else {
            Cow::Borrowed(state)
        };

        for (_, tile) in state.pieces_of(side) {
            progress += tile.index() as f64;
            if House::at(tile).is_some_and(House::is_refuge) {
                houses += 1.0;
            }
            if state.is_barrier(tile, side) {
                pairs += 1.0;
            } else {
                exposure += swap_probability(&attacker_view, tile);
            }
        }

        w.progress * progress + w.exited * exited + w.house * houses + w.pair * pairs
            - w.vulnerability * exposure
    }
}

/// Probability that the side to move in `view` throws a distance with a
/// legal swap onto `tile`
fn swap_probability(view: &GameState, tile: Tile) -> f64 {
    Throw::ALL
        .iter()
        .filter(|&&throw| {
            tile.index()
                .checked_sub(throw.value())
                .and_then(Tile::new)
                .and_then(|from| view.move_for_tile(from, throw))
                .is_some_and(|action| action.is_swap() && action.to == Destination::Tile(tile))
        })
        .map(|&throw| sticks::probabilities().probability(throw))
        .sum()
}

impl Heuristic<Senet> for SenetHeuristic {
    fn evaluate(&self, state: &GameState, perspective: Side) -> f64 {
        self.score(state, perspective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(notation: &str, side: Side) -> f64 {
        let state = GameState::from_notation(notation).unwrap();
        SenetHeuristic::default().score(&state, side)
    }

    #[test]
    fn test_zero_sum_at_start() {
        let state = GameState::starting();
        let h = SenetHeuristic::default();
        let light = h.score(&state, Side::Light);
        let dark = h.score(&state, Side::Dark);
        assert!((light + dark).abs() < 1e-9, "zero-sum: {} vs {}", light, dark);
    }

    #[test]
    fn test_antisymmetric() {
        let notation = "L.D...L..DD...L.......L.LD...D D";
        let light = eval(notation, Side::Light);
        let dark = eval(notation, Side::Dark);
        assert!((light + dark).abs() < 1e-9);
    }

    #[test]
    fn test_extra_exit_scores_higher() {
        // Same board except Light's piece on 20 has exited
        let before = eval("...D.....L.........L.........D L", Side::Light);
        let after = eval("...D.....L...................D L", Side::Light);
        assert!(after > before, "{} <= {}", after, before);
    }

    #[test]
    fn test_win_bonus() {
        let won = eval("...D.......................... D", Side::Light);
        let lost = eval("...D.......................... D", Side::Dark);
        assert!(won > 1000.0);
        assert!(lost < -1000.0);
    }

    #[test]
    fn test_swap_probability() {
        // Dark on 9 reaches 11 with a 2; Dark on 1 is out of range
        let state = GameState::from_notation("D.......D.L................... D").unwrap();
        let p = swap_probability(&state, Tile::new_unchecked(11));
        assert_eq!(p, 6.0 / 16.0);
    }

    #[test]
    fn test_safe_house_not_exposed() {
        let state = GameState::from_notation("............D.L............... D").unwrap();
        assert_eq!(swap_probability(&state, Tile::REBIRTH), 0.0);
    }

    #[test]
    fn test_pruned_attacks_not_exposed() {
        // Dark on 9 would need to cross Light's pair on 10-11 to reach 13
        let walled = GameState::from_notation("........DLL.L................. D").unwrap();
        assert_eq!(swap_probability(&walled, Tile::new_unchecked(13)), 0.0);

        // Dark on 24 cannot jump the House of Happiness to reach 28
        let happiness = GameState::from_notation("...L...................D...L.. D").unwrap();
        assert_eq!(swap_probability(&happiness, Tile::THREE_TRUTHS), 0.0);

        // Same result whichever side is to move in the evaluated state
        let h = SenetHeuristic::default();
        assert_eq!(
            h.score(&walled, Side::Light),
            h.score(&walled.pass(), Side::Light)
        );
    }
}
