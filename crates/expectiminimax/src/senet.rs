//! Move selection for Senet.
//!
//! [`choose_action`] is the validated entry point: it takes the raw throw and
//! depth, rejects values outside their domains, and runs the search with the
//! default evaluator.

use log::debug;
use senet_core::Result;
use senet_rules::{Action, GameState, Senet, SenetHeuristic, Throw};
use serde::{Deserialize, Serialize};

use crate::{Expectiminimax, SearchConfig, SearchTrace};

/// The search's pick for one turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// None only when the side to move has no legal action for the throw
    pub action: Option<Action>,
    /// Expected value from the perspective of the side to move
    pub value: f64,
    pub trace: Option<SearchTrace<Action>>,
}

/// Pick an action for the side to move after `throw`, searching `depth`
/// chance layers ahead.
///
/// # Errors
/// Returns `SenetError::InvalidThrow` if `throw` is outside 1..=5 and
/// `SenetError::InvalidDepth` if `depth` is negative.
///
/// # Example
/// ```
/// use senet_expectiminimax::choose_action;
/// use senet_rules::initial_state;
///
/// let choice = choose_action(&initial_state(), 2, 1, false).unwrap();
/// assert!(choice.action.is_some());
/// ```
pub fn choose_action(
    state: &GameState,
    throw: u8,
    depth: i64,
    diagnostics: bool,
) -> Result<Choice> {
    let throw = Throw::new(throw)?;
    let config = SearchConfig::checked(depth, diagnostics)?;
    Ok(choose_with(state, throw, config, SenetHeuristic::default()))
}

/// Run the search with an explicit configuration and evaluator.
pub fn choose_with(
    state: &GameState,
    throw: Throw,
    config: SearchConfig,
    heuristic: SenetHeuristic,
) -> Choice {
    let search = Expectiminimax::new(config, heuristic);
    let result = search.search(&Senet, state, throw);
    if result.best_action.is_none() {
        debug!("{} has no move for throw {}", state.side_to_move(), throw);
    }
    Choice {
        action: result.best_action,
        value: result.value,
        trace: result.trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use senet_core::SenetError;
    use senet_rules::initial_state;

    #[test]
    fn test_input_validation() {
        let state = initial_state();
        assert_eq!(
            choose_action(&state, 0, 1, false),
            Err(SenetError::InvalidThrow(0))
        );
        assert_eq!(
            choose_action(&state, 6, 1, false),
            Err(SenetError::InvalidThrow(6))
        );
        assert_eq!(
            choose_action(&state, 1, -1, false),
            Err(SenetError::InvalidDepth(-1))
        );
    }

    #[test]
    fn test_single_legal_action_is_taken() {
        // With a throw of 2 only the lead piece can move
        let state = initial_state();
        let choice = choose_action(&state, 2, 1, false).unwrap();
        let action = choice.action.unwrap();
        assert_eq!(action.from.index(), 13);
        assert_eq!(action.to.tile().map(|t| t.index()), Some(15));
    }

    #[test]
    fn test_choice_is_legal() {
        let state = initial_state();
        for throw in 1..=5 {
            let choice = choose_action(&state, throw, 1, false).unwrap();
            let legal = senet_rules::legal_actions(&state, throw).unwrap();
            match choice.action {
                Some(action) => assert!(legal.contains(&action)),
                None => assert!(legal.is_empty()),
            }
        }
    }
}
