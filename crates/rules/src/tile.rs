use std::fmt;

use senet_core::{Result, SenetError};
use serde::{Deserialize, Serialize};

/// Number of tiles on the track
pub const BOARD_TILES: u8 = 30;
/// Tiles per row of the 3x10 board
pub const BOARD_COLUMNS: u8 = 10;
/// Rows of the board
pub const BOARD_ROWS: u8 = 3;

/// A track tile (1-30) in path order.
///
/// The path is S-shaped: row 0 runs left to right (tiles 1-10), row 1 right
/// to left (11-20), row 2 left to right again (21-30).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Tile(pub(crate) u8);

impl Tile {
    pub const FIRST: Tile = Tile(1);
    pub const LAST: Tile = Tile(BOARD_TILES);

    pub const REBIRTH: Tile = Tile(15);
    pub const HAPPINESS: Tile = Tile(26);
    pub const WATER: Tile = Tile(27);
    pub const THREE_TRUTHS: Tile = Tile(28);
    pub const RE_ATOUM: Tile = Tile(29);
    pub const HORUS: Tile = Tile(30);

    /// Creates a tile from its index, returning None if out of range
    #[inline]
    pub const fn new(index: u8) -> Option<Self> {
        if index >= 1 && index <= BOARD_TILES {
            Some(Tile(index))
        } else {
            None
        }
    }

    /// Creates a tile from its index, panicking in debug builds if out of range
    #[inline]
    pub const fn new_unchecked(index: u8) -> Self {
        debug_assert!(index >= 1 && index <= BOARD_TILES);
        Tile(index)
    }

    /// Returns the tile index (1-30)
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// The tile `steps` further along the track, None past tile 30
    #[inline]
    pub const fn forward(self, steps: u8) -> Option<Tile> {
        Tile::new(self.0.saturating_add(steps))
    }

    /// Tiles in path order, 1 through 30
    pub fn all() -> impl DoubleEndedIterator<Item = Tile> {
        (1..=BOARD_TILES).map(Tile)
    }

    /// Returns (row, col) of the tile on the 3x10 grid
    pub const fn to_grid(self) -> (u8, u8) {
        let index = self.0 - 1;
        let row = index / BOARD_COLUMNS;
        let offset = index % BOARD_COLUMNS;
        let col = if row % 2 == 0 {
            offset
        } else {
            BOARD_COLUMNS - 1 - offset
        };
        (row, col)
    }

    /// Inverse of [`Tile::to_grid`]
    pub const fn from_grid(row: u8, col: u8) -> Option<Tile> {
        if row >= BOARD_ROWS || col >= BOARD_COLUMNS {
            return None;
        }
        let offset = if row % 2 == 0 {
            col
        } else {
            BOARD_COLUMNS - 1 - col
        };
        Some(Tile(row * BOARD_COLUMNS + offset + 1))
    }
}

impl TryFrom<u8> for Tile {
    type Error = SenetError;

    fn try_from(index: u8) -> Result<Self> {
        Tile::new(index).ok_or(SenetError::InvalidTile(index))
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> u8 {
        tile.0
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a move ends: a track tile or off the board
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Destination {
    Tile(Tile),
    Off,
}

impl Destination {
    /// The tile, if the destination is on the track
    #[inline]
    pub const fn tile(self) -> Option<Tile> {
        match self {
            Destination::Tile(tile) => Some(tile),
            Destination::Off => None,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Tile(tile) => write!(f, "{}", tile),
            Destination::Off => write!(f, "off"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_new() {
        assert!(Tile::new(0).is_none());
        assert!(Tile::new(31).is_none());
        assert_eq!(Tile::new(15), Some(Tile::REBIRTH));
        assert_eq!(Tile::try_from(0), Err(SenetError::InvalidTile(0)));
    }

    #[test]
    fn test_forward() {
        assert_eq!(Tile::new_unchecked(12).forward(3), Tile::new(15));
        assert_eq!(Tile::HORUS.forward(1), None);
    }

    #[test]
    fn test_grid_snake_order() {
        assert_eq!(Tile::new_unchecked(1).to_grid(), (0, 0));
        assert_eq!(Tile::new_unchecked(10).to_grid(), (0, 9));
        assert_eq!(Tile::new_unchecked(11).to_grid(), (1, 9));
        assert_eq!(Tile::new_unchecked(20).to_grid(), (1, 0));
        assert_eq!(Tile::new_unchecked(21).to_grid(), (2, 0));
        assert_eq!(Tile::HORUS.to_grid(), (2, 9));
    }

    #[test]
    fn test_grid_round_trip_all_tiles() {
        for tile in Tile::all() {
            let (row, col) = tile.to_grid();
            assert_eq!(Tile::from_grid(row, col), Some(tile));
        }
        assert_eq!(Tile::from_grid(3, 0), None);
        assert_eq!(Tile::from_grid(0, 10), None);
    }
}
