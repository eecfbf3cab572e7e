//! Legal move generation for Senet.
//!
//! For every piece of the side to move, in path order, the single candidate
//! destination (origin + throw) is checked against the house table, the
//! barrier rule and the occupancy rules. A piece yields at most one action.

use crate::house::{arrival_at, departure_from, Arrival, Departure};
use crate::{Action, Destination, GameState, House, MoveKind, PieceId, Throw, Tile, BOARD_TILES};

impl GameState {
    /// Generate all legal actions for the side to move and `throw`.
    ///
    /// Actions are ordered by ascending origin tile. An empty list means the
    /// turn is skipped.
    pub fn legal_actions(&self, throw: Throw) -> Vec<Action> {
        let us = self.side_to_move();
        let mut actions = Vec::with_capacity(crate::PIECES_PER_SIDE);
        for (piece, from) in self.pieces_of(us) {
            if let Some(action) = self.action_for(piece, from, throw) {
                actions.push(action);
            }
        }
        actions
    }

    /// The legal action for the piece on `tile`, if that piece belongs to the
    /// side to move and can move with `throw`
    pub fn move_for_tile(&self, tile: Tile, throw: Throw) -> Option<Action> {
        let piece = self.occupant_at(tile)?;
        if piece.side != self.side_to_move() {
            return None;
        }
        self.action_for(piece, tile, throw)
    }

    /// Candidate move of one piece, None if any rule prunes it
    fn action_for(&self, piece: PieceId, from: Tile, throw: Throw) -> Option<Action> {
        let steps = throw.value();
        let exit = Action {
            piece,
            from,
            to: Destination::Off,
            kind: MoveKind::Exit,
            throw,
        };

        match departure_from(from) {
            Departure::ExitOn(required) => {
                return (steps == required && self.path_is_clear(piece, from, None))
                    .then_some(exit);
            }
            Departure::ExitOnAny => return Some(exit),
            Departure::Advance => {}
        }

        let target = from.index() + steps;
        if target > BOARD_TILES {
            // Exact distance only
            return (target == BOARD_TILES + 1 && self.path_is_clear(piece, from, None))
                .then_some(exit);
        }

        let to = Tile::new_unchecked(target);
        if !self.path_is_clear(piece, from, Some(to)) {
            return None;
        }

        let kind = match self.occupant_at(to) {
            Some(other) if other.side == piece.side => return None,
            Some(other) => {
                if self.is_barrier(to, other.side) || House::at(to).is_some_and(House::is_safe) {
                    return None;
                }
                MoveKind::Swap(other)
            }
            None => MoveKind::Advance,
        };

        match arrival_at(to) {
            Arrival::Stay => Some(Action {
                piece,
                from,
                to: Destination::Tile(to),
                kind,
                throw,
            }),
            Arrival::ReturnToRebirth => {
                let landing = self.rebirth_tile()?;
                Some(Action {
                    piece,
                    from,
                    to: Destination::Tile(landing),
                    kind: MoveKind::Drowned,
                    throw,
                })
            }
        }
    }

    /// No opponent barrier and no mandatory stop strictly between `from` and
    /// `to`; an exit (`to == None`) passes everything up to the last tile
    fn path_is_clear(&self, piece: PieceId, from: Tile, to: Option<Tile>) -> bool {
        let them = piece.side.opponent();
        let end = to.map_or(BOARD_TILES + 1, Tile::index);
        (from.index() + 1..end).map(Tile::new_unchecked).all(|tile| {
            let stop = House::at(tile).is_some_and(House::is_mandatory_stop);
            !stop && !self.is_barrier(tile, them)
        })
    }
}
