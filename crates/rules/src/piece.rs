use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of pieces each side owns
pub const PIECES_PER_SIDE: usize = 7;

/// One of the two players
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[repr(u8)]
pub enum Side {
    Light = 0,
    Dark = 1,
}

impl Side {
    /// Both sides, Light first
    pub const ALL: [Side; 2] = [Side::Light, Side::Dark];

    /// Returns the other side
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    /// Returns the index (0 for Light, 1 for Dark)
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-character tag used in board notation
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Side::Light => 'L',
            Side::Dark => 'D',
        }
    }

    /// Parse a side from its notation character (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'L' => Some(Side::Light),
            'D' => Some(Side::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Light => write!(f, "Light"),
            Side::Dark => write!(f, "Dark"),
        }
    }
}

/// Stable identifier of a single piece: its owner and an index in 0..7
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct PieceId {
    pub side: Side,
    pub index: u8,
}

impl PieceId {
    #[inline]
    pub const fn new(side: Side, index: u8) -> Self {
        debug_assert!((index as usize) < PIECES_PER_SIDE);
        PieceId { side, index }
    }

    /// Human-readable label, `L1`..`L7` / `D1`..`D7`
    pub fn label(self) -> String {
        format!("{}{}", self.side.to_char(), self.index + 1)
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.side.to_char(), self.index + 1)
    }
}
