//! Special tiles ("houses") and the rule each one carries.
//!
//! Every house rule lives in one entry of [`HOUSES`]; the move generator asks
//! the table instead of branching on tile numbers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Tile;

/// The six special tiles of Kendall's rules
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum House {
    /// Tile 15: safe house, return point for drowned pieces
    Rebirth,
    /// Tile 26: every piece must stop here before going further
    Happiness,
    /// Tile 27: a piece landing here is sent back to Rebirth
    Water,
    /// Tile 28: exits only on a throw of exactly 3
    ThreeTruths,
    /// Tile 29: exits only on a throw of exactly 2
    ReAtoum,
    /// Tile 30: exits on any throw
    Horus,
}

/// What happens to a piece arriving on a tile
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Arrival {
    /// The piece stays on the tile
    Stay,
    /// The piece is sent back to the House of Rebirth
    ReturnToRebirth,
}

/// How a piece standing on a tile may leave it
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Departure {
    /// Ordinary movement by the thrown distance
    Advance,
    /// Only exiting the board, and only on this exact throw
    ExitOn(u8),
    /// Exiting the board on any throw
    ExitOnAny,
}

/// Tile index -> house, index 0 unused
const HOUSES: [Option<House>; 31] = {
    let mut table = [None; 31];
    table[15] = Some(House::Rebirth);
    table[26] = Some(House::Happiness);
    table[27] = Some(House::Water);
    table[28] = Some(House::ThreeTruths);
    table[29] = Some(House::ReAtoum);
    table[30] = Some(House::Horus);
    table
};

impl House {
    /// All houses in path order
    pub const ALL: [House; 6] = [
        House::Rebirth,
        House::Happiness,
        House::Water,
        House::ThreeTruths,
        House::ReAtoum,
        House::Horus,
    ];

    /// The house on `tile`, if any
    #[inline]
    pub const fn at(tile: Tile) -> Option<House> {
        HOUSES[tile.0 as usize]
    }

    /// The tile this house occupies
    pub const fn tile(self) -> Tile {
        match self {
            House::Rebirth => Tile::REBIRTH,
            House::Happiness => Tile::HAPPINESS,
            House::Water => Tile::WATER,
            House::ThreeTruths => Tile::THREE_TRUTHS,
            House::ReAtoum => Tile::RE_ATOUM,
            House::Horus => Tile::HORUS,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            House::Rebirth => "House of Rebirth",
            House::Happiness => "House of Happiness",
            House::Water => "House of Water",
            House::ThreeTruths => "House of Three Truths",
            House::ReAtoum => "House of Re-Atoum",
            House::Horus => "House of Horus",
        }
    }

    /// A piece resting here cannot be swapped by the opponent
    pub const fn is_safe(self) -> bool {
        matches!(self, House::Rebirth)
    }

    /// No move may carry a piece past this tile without stopping on it
    pub const fn is_mandatory_stop(self) -> bool {
        matches!(self, House::Happiness)
    }

    pub const fn arrival(self) -> Arrival {
        match self {
            House::Water => Arrival::ReturnToRebirth,
            _ => Arrival::Stay,
        }
    }

    pub const fn departure(self) -> Departure {
        match self {
            House::ThreeTruths => Departure::ExitOn(3),
            House::ReAtoum => Departure::ExitOn(2),
            House::Horus => Departure::ExitOnAny,
            _ => Departure::Advance,
        }
    }

    /// Counts as a good resting place for evaluation purposes
    pub const fn is_refuge(self) -> bool {
        !matches!(self, House::Water)
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Arrival rule for any tile (ordinary tiles keep the piece)
#[inline]
pub fn arrival_at(tile: Tile) -> Arrival {
    House::at(tile).map_or(Arrival::Stay, House::arrival)
}

/// Departure rule for any tile (ordinary tiles advance normally)
#[inline]
pub fn departure_from(tile: Tile) -> Departure {
    House::at(tile).map_or(Departure::Advance, House::departure)
}
