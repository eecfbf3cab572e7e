//! Senet actions.
//!
//! An action records everything needed to apply it without re-deriving the
//! house rules: the moving piece, where it starts, where it ends up, what
//! happens on arrival, and the throw it was generated for.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::house::Departure;
use crate::{Destination, House, PieceId, Throw, Tile};

/// What the move does besides relocating the mover
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum MoveKind {
    /// Plain advance to an empty tile
    Advance,
    /// Lands on a lone opponent piece, which takes the mover's origin tile
    Swap(PieceId),
    /// Leaves the board
    Exit,
    /// Lands in the House of Water and is sent back; `to` is the return tile
    Drowned,
}

/// A legal Senet move
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Action {
    pub piece: PieceId,
    pub from: Tile,
    /// Final resting place (the return tile for a drowned piece)
    pub to: Destination,
    pub kind: MoveKind,
    /// The throw this action was generated for
    pub throw: Throw,
}

impl Action {
    /// Returns true if the move takes the piece off the board
    #[inline]
    pub const fn is_exit(&self) -> bool {
        matches!(self.kind, MoveKind::Exit)
    }

    /// Returns true if the move exchanges places with an opponent piece
    #[inline]
    pub const fn is_swap(&self) -> bool {
        matches!(self.kind, MoveKind::Swap(_))
    }

    /// The opponent piece that gets displaced, if any
    #[inline]
    pub const fn swapped(&self) -> Option<PieceId> {
        match self.kind {
            MoveKind::Swap(piece) => Some(piece),
            _ => None,
        }
    }

    /// Short description of the house effect, empty for ordinary moves
    pub fn note(&self) -> String {
        match (self.kind, House::at(self.from)) {
            (MoveKind::Drowned, _) => "Fell into the water".to_string(),
            (MoveKind::Exit, Some(house)) if house.departure() != Departure::Advance => {
                format!("Exited via {}", house)
            }
            (MoveKind::Exit, _) => "Leaves the board".to_string(),
            _ => match self.to.tile().and_then(House::at) {
                Some(House::Happiness) => "Visited the House of Happiness".to_string(),
                Some(House::Rebirth) => "Resting in the House of Rebirth".to_string(),
                Some(house) => format!("Reached the {}", house),
                None => String::new(),
            },
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}->{}", self.piece, self.from, self.to)?;
        match self.kind {
            MoveKind::Swap(other) => write!(f, " (swap {})", other),
            MoveKind::Drowned => write!(f, " (drowned)"),
            _ => Ok(()),
        }
    }
}
