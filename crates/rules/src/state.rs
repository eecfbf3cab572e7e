//! Senet game state.
//!
//! A [`GameState`] is a plain value. Transitions ([`GameState::make_move`],
//! [`GameState::pass`]) return a new state and leave `self` untouched, so any
//! number of search branches may share a parent state.

use std::fmt;

use senet_core::{Result, SenetError};

use crate::house::House;
use crate::{Action, Destination, MoveKind, PieceId, Side, Throw, Tile, BOARD_TILES, PIECES_PER_SIDE};

/// Tiles covered by the opening layout
const STARTING_TILES: u8 = 14;

/// A complete Senet position
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    /// Occupant per tile, index 0 unused
    board: [Option<PieceId>; BOARD_TILES as usize + 1],
    /// Tile per piece indexed by [side][piece index]; None once exited
    positions: [[Option<Tile>; PIECES_PER_SIDE]; 2],
    /// Pieces borne off per side
    exited: [u8; 2],
    side_to_move: Side,
}

impl GameState {
    /// A board with no pieces on it and every piece counted as exited
    fn cleared(side_to_move: Side) -> Self {
        GameState {
            board: [None; BOARD_TILES as usize + 1],
            positions: [[None; PIECES_PER_SIDE]; 2],
            exited: [PIECES_PER_SIDE as u8; 2],
            side_to_move,
        }
    }

    /// Put the next unplaced piece of `side` on `tile`
    fn place_next(&mut self, side: Side, tile: Tile) -> Result<()> {
        let placed = PIECES_PER_SIDE - self.exited[side.index()] as usize;
        if placed == PIECES_PER_SIDE {
            return Err(SenetError::InvalidPosition(format!(
                "{} has more than {} pieces",
                side, PIECES_PER_SIDE
            )));
        }
        if self.board[tile.0 as usize].is_some() {
            return Err(SenetError::InvalidPosition(format!(
                "tile {} is occupied twice",
                tile
            )));
        }
        let piece = PieceId::new(side, placed as u8);
        self.board[tile.0 as usize] = Some(piece);
        self.positions[side.index()][placed] = Some(tile);
        self.exited[side.index()] -= 1;
        Ok(())
    }

    /// The opening layout: pieces alternate on tiles 1-14, Light on the odd
    /// tiles, Dark on the even ones. Light moves first.
    pub fn starting() -> Self {
        let mut state = Self::cleared(Side::Light);
        for index in 1..=STARTING_TILES {
            let side = if index % 2 == 1 { Side::Light } else { Side::Dark };
            let tile = Tile::new_unchecked(index);
            let piece = PieceId::new(side, (index - 1) / 2);
            state.board[index as usize] = Some(piece);
            state.positions[side.index()][piece.index as usize] = Some(tile);
            state.exited[side.index()] -= 1;
        }
        state
    }

    /// Parse a position from board notation.
    ///
    /// The notation is 30 tile characters in path order (`L`, `D` or `.`),
    /// a space, and the side to move (`L` or `D`). Pieces of a side missing
    /// from the board are counted as exited. Piece indices follow path order.
    ///
    /// ```
    /// use senet_rules::{GameState, Side};
    ///
    /// let state = GameState::from_notation("LDLDLDLDLDLDLD................ L").unwrap();
    /// assert_eq!(state, GameState::starting());
    /// assert_eq!(state.side_to_move(), Side::Light);
    /// ```
    pub fn from_notation(notation: &str) -> Result<Self> {
        let parts: Vec<&str> = notation.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(SenetError::InvalidPosition(
                "expected '<30 tiles> <side to move>'".to_string(),
            ));
        }

        let tiles: Vec<char> = parts[0].chars().collect();
        if tiles.len() != BOARD_TILES as usize {
            return Err(SenetError::InvalidPosition(format!(
                "expected {} tiles, found {}",
                BOARD_TILES,
                tiles.len()
            )));
        }

        let side_to_move = match parts[1].chars().collect::<Vec<_>>().as_slice() {
            [c] => Side::from_char(*c),
            _ => None,
        }
        .ok_or_else(|| SenetError::InvalidPosition(format!("invalid side: {}", parts[1])))?;

        let mut state = Self::cleared(side_to_move);
        for (tile, &c) in Tile::all().zip(tiles.iter()) {
            if c == '.' {
                continue;
            }
            let side = Side::from_char(c)
                .ok_or_else(|| SenetError::InvalidPosition(format!("invalid tile char: {}", c)))?;
            if tile == Tile::WATER {
                return Err(SenetError::InvalidPosition(
                    "no piece can rest in the House of Water".to_string(),
                ));
            }
            state.place_next(side, tile)?;
        }

        state.validate().map_err(SenetError::InvalidPosition)?;
        Ok(state)
    }

    /// Convert to board notation (see [`GameState::from_notation`])
    pub fn to_notation(&self) -> String {
        let mut s = String::with_capacity(BOARD_TILES as usize + 2);
        for tile in Tile::all() {
            s.push(self.occupant_at(tile).map_or('.', |p| p.side.to_char()));
        }
        s.push(' ');
        s.push(self.side_to_move.to_char());
        s
    }

    /// Check the occupancy invariants: every piece is either exited or on
    /// exactly one tile, the board agrees with the piece table, and the
    /// exited counters match.
    pub fn validate(&self) -> std::result::Result<(), String> {
        for side in Side::ALL {
            let mut exited = 0u8;
            for (index, position) in self.positions[side.index()].iter().enumerate() {
                let piece = PieceId::new(side, index as u8);
                match position {
                    None => exited += 1,
                    Some(tile) => {
                        if self.board[tile.0 as usize] != Some(piece) {
                            return Err(format!("{} is not on tile {}", piece, tile));
                        }
                    }
                }
            }
            if exited != self.exited[side.index()] {
                return Err(format!(
                    "{} exited count {} does not match {} pieces off the board",
                    side,
                    self.exited[side.index()],
                    exited
                ));
            }
        }

        for tile in Tile::all() {
            if let Some(piece) = self.occupant_at(tile) {
                if self.position_of(piece) != Some(tile) {
                    return Err(format!("tile {} lists {} which is elsewhere", tile, piece));
                }
            }
        }

        if self.board[0].is_some() {
            return Err("tile 0 is not a track tile".to_string());
        }
        if self.exited.iter().all(|&n| n as usize == PIECES_PER_SIDE) {
            return Err("both sides have borne off every piece".to_string());
        }
        Ok(())
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// The piece on `tile`, if any
    #[inline]
    pub fn occupant_at(&self, tile: Tile) -> Option<PieceId> {
        self.board[tile.0 as usize]
    }

    /// Where `piece` stands; None once it has exited
    #[inline]
    pub fn position_of(&self, piece: PieceId) -> Option<Tile> {
        self.positions[piece.side.index()][piece.index as usize]
    }

    /// Pieces of `side` still on the track, in path order
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (PieceId, Tile)> + '_ {
        Tile::all().filter_map(move |tile| match self.occupant_at(tile) {
            Some(piece) if piece.side == side => Some((piece, tile)),
            _ => None,
        })
    }

    /// Number of pieces `side` has borne off
    #[inline]
    pub fn exited(&self, side: Side) -> u8 {
        self.exited[side.index()]
    }

    /// Same as [`GameState::exited`]: pieces that have finished the course
    #[inline]
    pub fn finished_count(&self, side: Side) -> u8 {
        self.exited(side)
    }

    /// Number of pieces `side` still has on the track
    #[inline]
    pub fn on_board(&self, side: Side) -> u8 {
        PIECES_PER_SIDE as u8 - self.exited(side)
    }

    /// Returns true if `tile` holds a piece of `side`
    #[inline]
    pub fn is_occupied_by(&self, tile: Tile, side: Side) -> bool {
        matches!(self.occupant_at(tile), Some(piece) if piece.side == side)
    }

    /// A piece of `owner` on `tile` with a neighbour of the same side.
    ///
    /// Two or more consecutive pieces protect each other: they can be neither
    /// swapped nor passed by the opponent.
    pub fn is_barrier(&self, tile: Tile, owner: Side) -> bool {
        if !self.is_occupied_by(tile, owner) {
            return false;
        }
        let behind = Tile::new(tile.0 - 1).is_some_and(|t| self.is_occupied_by(t, owner));
        let ahead = tile.forward(1).is_some_and(|t| self.is_occupied_by(t, owner));
        behind || ahead
    }

    /// Returns true once one side has borne off all its pieces
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some()
    }

    /// The side that has borne off all seven pieces, if any
    pub fn winner(&self) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|&side| self.exited(side) as usize == PIECES_PER_SIDE)
    }

    /// Where a drowned piece goes: the House of Rebirth, or the nearest free
    /// tile before it when it is occupied.
    pub fn rebirth_tile(&self) -> Option<Tile> {
        (1..=House::Rebirth.tile().0)
            .rev()
            .map(Tile::new_unchecked)
            .find(|&tile| self.occupant_at(tile).is_none())
    }

    /// Apply an action without checking legality.
    ///
    /// The action must come from [`GameState::legal_actions`] for this state;
    /// use [`GameState::apply`] for untrusted input. The side to move passes
    /// to the opponent.
    pub fn make_move(&self, action: Action) -> GameState {
        debug_assert_eq!(self.occupant_at(action.from), Some(action.piece));

        let mut next = self.clone();
        let mover = action.piece;
        next.board[action.from.0 as usize] = None;

        if let MoveKind::Swap(other) = action.kind {
            next.board[action.from.0 as usize] = Some(other);
            next.positions[other.side.index()][other.index as usize] = Some(action.from);
        }

        match action.to {
            Destination::Tile(tile) => {
                next.board[tile.0 as usize] = Some(mover);
                next.positions[mover.side.index()][mover.index as usize] = Some(tile);
            }
            Destination::Off => {
                next.positions[mover.side.index()][mover.index as usize] = None;
                next.exited[mover.side.index()] += 1;
            }
        }

        next.side_to_move = self.side_to_move.opponent();
        next
    }

    /// Skip the turn: same board, other side to move
    pub fn pass(&self) -> GameState {
        let mut next = self.clone();
        next.side_to_move = self.side_to_move.opponent();
        next
    }

    /// Apply an action after checking that it is legal here.
    ///
    /// # Errors
    /// Returns `SenetError::InvalidThrow` if the action carries a throw
    /// outside 1..=5, and `SenetError::InvalidAction` if `action` is not
    /// among `self.legal_actions(action.throw)`.
    pub fn apply(&self, action: Action) -> Result<GameState> {
        Throw::new(action.throw.value())?;
        if !self.legal_actions(action.throw).contains(&action) {
            return Err(SenetError::InvalidAction(format!(
                "{} is not legal for throw {} with {} to move",
                action, action.throw, self.side_to_move
            )));
        }
        Ok(self.make_move(action))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::starting()
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GameState({})", self.to_notation())
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_layout() {
        let state = GameState::starting();
        assert_eq!(state.side_to_move(), Side::Light);
        for tile in Tile::all() {
            match state.occupant_at(tile) {
                Some(piece) => {
                    assert!(tile.index() <= 14);
                    let expected = if tile.index() % 2 == 1 { Side::Light } else { Side::Dark };
                    assert_eq!(piece.side, expected);
                }
                None => assert!(tile.index() > 14),
            }
        }
        assert_eq!(state.exited(Side::Light), 0);
        assert_eq!(state.exited(Side::Dark), 0);
        assert_eq!(state.pieces_of(Side::Light).count(), 7);
        assert_eq!(state.pieces_of(Side::Dark).count(), 7);
        assert!(state.validate().is_ok());
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_piece_indices_follow_path_order() {
        let state = GameState::starting();
        let light: Vec<(u8, u8)> = state
            .pieces_of(Side::Light)
            .map(|(p, t)| (p.index, t.index()))
            .collect();
        assert_eq!(light, vec![(0, 1), (1, 3), (2, 5), (3, 7), (4, 9), (5, 11), (6, 13)]);
    }

    #[test]
    fn test_notation_round_trip() {
        let notation = "L.D...L..DD...L.......L.LD...D D";
        let state = GameState::from_notation(notation).unwrap();
        assert_eq!(state.to_notation(), notation);
        assert_eq!(state.side_to_move(), Side::Dark);
        assert_eq!(state.exited(Side::Light), 2);
        assert_eq!(state.exited(Side::Dark), 2);
    }

    #[test]
    fn test_notation_errors() {
        assert!(GameState::from_notation("").is_err());
        assert!(GameState::from_notation("LDLD L").is_err());
        assert!(GameState::from_notation("LDLDLDLDLDLDLD................ X").is_err());
        assert!(GameState::from_notation("LDLDLDLDLDLDLDX............... L").is_err());
        // Eight light pieces
        assert!(GameState::from_notation("LLLLLLLL...................... L").is_err());
        // Piece resting in the water
        assert!(GameState::from_notation("..........................L... L").is_err());
        // Both sides finished
        assert!(matches!(
            GameState::from_notation(".............................. L"),
            Err(SenetError::InvalidPosition(_))
        ));
    }

    #[test]
    fn test_barrier_detection() {
        let state = GameState::from_notation("....DD...D.L.................. L").unwrap();
        let t = Tile::new_unchecked;
        assert!(state.is_barrier(t(5), Side::Dark));
        assert!(state.is_barrier(t(6), Side::Dark));
        assert!(!state.is_barrier(t(10), Side::Dark));
        assert!(!state.is_barrier(t(12), Side::Light));
        assert!(!state.is_barrier(t(7), Side::Dark));
    }

    #[test]
    fn test_rebirth_tile_falls_back() {
        let empty = GameState::from_notation("...........................L.. L").unwrap();
        assert_eq!(empty.rebirth_tile(), Some(Tile::REBIRTH));

        let blocked = GameState::from_notation("............DDL..........L.... L").unwrap();
        assert_eq!(blocked.rebirth_tile(), Some(Tile::new_unchecked(12)));
    }

    #[test]
    fn test_pass_only_flips_side() {
        let state = GameState::starting();
        let passed = state.pass();
        assert_eq!(passed.side_to_move(), Side::Dark);
        assert_eq!(passed.to_notation()[..30], state.to_notation()[..30]);
    }

    #[test]
    fn test_winner() {
        let state = GameState::from_notation("...........................D.. L").unwrap();
        assert_eq!(state.winner(), Some(Side::Light));
        assert!(state.is_terminal());
    }

    #[test]
    fn test_apply_rejects_out_of_range_throw() {
        let state = GameState::starting();
        let legal = state.legal_actions(Throw(5))[0];
        for value in [0, 9, 250] {
            let forged = Action {
                throw: Throw(value),
                ..legal
            };
            assert_eq!(state.apply(forged), Err(SenetError::InvalidThrow(value)));
        }
    }

    #[test]
    fn test_deserialized_action_is_range_checked() {
        let json = r#"{"piece":{"side":"Light","index":6},"from":13,"to":{"Tile":22},"kind":"Advance","throw":9}"#;
        let err = serde_json::from_str::<Action>(json).unwrap_err();
        assert!(err.to_string().contains("Invalid throw: 9"), "{}", err);

        let json = r#"{"piece":{"side":"Light","index":6},"from":40,"to":"Off","kind":"Exit","throw":1}"#;
        let err = serde_json::from_str::<Action>(json).unwrap_err();
        assert!(err.to_string().contains("Invalid tile index: 40"), "{}", err);

        let action = GameState::starting().legal_actions(Throw(5))[0];
        let back: Action = serde_json::from_str(&serde_json::to_string(&action).unwrap()).unwrap();
        assert_eq!(back, action);
    }
}
