//! Scenario tests for the Senet rules through the public entry points.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use senet_core::SenetError;
use senet_rules::{
    apply, enumerate, initial_state, legal_actions, move_for_tile, probabilities, Destination,
    GameState, House, MoveKind, PieceId, Side, Sticks, Tile,
};

fn tile(index: u8) -> Tile {
    Tile::try_from(index).unwrap()
}

#[test]
fn opening_position() {
    let state = initial_state();
    let occupied: Vec<u8> = Tile::all()
        .filter(|&t| state.occupant_at(t).is_some())
        .map(Tile::index)
        .collect();
    assert_eq!(occupied, (1..=14).collect::<Vec<_>>());
    for side in Side::ALL {
        assert_eq!(state.pieces_of(side).count(), 7);
        assert_eq!(state.exited(side), 0);
    }
    assert_eq!(state.side_to_move(), Side::Light);
    assert_eq!(state.winner(), None);
}

#[test]
fn opening_throw_of_one() {
    let state = initial_state();
    let actions = legal_actions(&state, 1).unwrap();

    let summary: Vec<(u8, Destination, MoveKind)> = actions
        .iter()
        .map(|a| (a.from.index(), a.to, a.kind))
        .collect();
    let expected: Vec<(u8, Destination, MoveKind)> = (0..7u8)
        .map(|i| {
            let from = 2 * i + 1;
            (
                from,
                Destination::Tile(tile(from + 1)),
                MoveKind::Swap(PieceId::new(Side::Dark, i)),
            )
        })
        .collect();
    assert_eq!(summary, expected);

    // 13 -> 14 swaps the lead Dark piece back onto 13
    let next = apply(&state, actions[6]).unwrap();
    assert_eq!(next.occupant_at(tile(14)), Some(PieceId::new(Side::Light, 6)));
    assert_eq!(next.occupant_at(tile(13)), Some(PieceId::new(Side::Dark, 6)));
    assert_eq!(next.side_to_move(), Side::Dark);
}

#[test]
fn chance_table() {
    let dist = probabilities();
    assert_eq!(dist.total(), 1.0);
    let pairs: Vec<(u8, f64)> = enumerate().map(|(t, p)| (t.value(), p)).collect();
    assert_eq!(
        pairs,
        vec![(1, 0.25), (2, 0.375), (3, 0.25), (4, 0.0625), (5, 0.0625)]
    );
}

#[test]
fn invalid_inputs_rejected() {
    let state = initial_state();
    assert_eq!(legal_actions(&state, 0), Err(SenetError::InvalidThrow(0)));
    assert_eq!(move_for_tile(&state, 0, 1), Err(SenetError::InvalidTile(0)));
    assert!(matches!(
        GameState::from_notation("nonsense"),
        Err(SenetError::InvalidPosition(_))
    ));

    // A Dark action applied while Light is to move
    let dark_turn = state.pass();
    let dark_action = legal_actions(&dark_turn, 1).unwrap()[0];
    assert!(matches!(apply(&state, dark_action), Err(SenetError::InvalidAction(_))));
}

#[test]
fn skipped_turn_when_fully_blocked() {
    // Light's only piece sits behind a Dark wall on 5-7
    let state = GameState::from_notation("...LDDD....................... L").unwrap();
    // 1-3 land on the wall, 4 and 5 would pass it
    for throw in 1..=5 {
        assert!(legal_actions(&state, throw).unwrap().is_empty(), "throw {}", throw);
    }

    let passed = state.pass();
    assert_eq!(passed.side_to_move(), Side::Dark);
    assert_eq!(passed.to_notation(), "...LDDD....................... D");
}

#[test]
fn drowned_piece_returns_to_rebirth() {
    let state = GameState::from_notation(".........................L.D.. L").unwrap();
    let action = move_for_tile(&state, 26, 1).unwrap().unwrap();
    assert_eq!(action.kind, MoveKind::Drowned);
    assert_eq!(action.note(), "Fell into the water");

    let next = apply(&state, action).unwrap();
    assert_eq!(next.occupant_at(Tile::REBIRTH), Some(action.piece));
    assert_eq!(next.occupant_at(Tile::WATER), None);
    assert_eq!(next.exited(Side::Light), 6);
}

#[test]
fn happiness_notes_and_exit() {
    let state = GameState::from_notation("......................L......D L").unwrap();
    let stop = move_for_tile(&state, 23, 3).unwrap().unwrap();
    assert_eq!(stop.to, Destination::Tile(House::Happiness.tile()));
    assert_eq!(stop.note(), "Visited the House of Happiness");

    let exit = GameState::from_notation(".............D.............L.. L").unwrap();
    let action = move_for_tile(&exit, 28, 3).unwrap().unwrap();
    assert!(action.is_exit());
    assert_eq!(action.note(), "Exited via House of Three Truths");
    let done = apply(&exit, action).unwrap();
    assert_eq!(done.winner(), Some(Side::Light));
    assert!(done.is_terminal());
    assert!(move_for_tile(&exit, 28, 2).unwrap().is_none());
}

#[test]
fn random_games_keep_invariants() {
    for seed in 0..8u64 {
        let mut sticks = Sticks::seeded(seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut state = initial_state();
        let mut plies = 0;

        while !state.is_terminal() && plies < 20_000 {
            let throw = sticks.sample();
            let actions = state.legal_actions(throw);
            state = match actions.choose(&mut rng) {
                Some(&action) => apply(&state, action).unwrap(),
                None => state.pass(),
            };
            assert!(state.validate().is_ok(), "seed {} ply {}: {}", seed, plies, state);
            plies += 1;
        }

        assert!(state.is_terminal(), "seed {} did not finish", seed);
        let winner = state.winner().unwrap();
        assert_eq!(state.finished_count(winner), 7);
    }
}
