//! Cell states
//!
//! Exactly three states exist. The numeric discriminant is only used for
//! the JS view of the backing array and for palette slots, never for
//! simulation logic.

use serde::{Deserialize, Serialize};

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty = 0,
    Sand = 1,
    Blocked = 2,
}

impl Cell {
    pub const ALL: [Cell; 3] = [Cell::Empty, Cell::Sand, Cell::Blocked];

    /// Decode a raw value coming from JS. Unknown values are rejected.
    #[inline]
    pub fn from_u8(v: u8) -> Option<Cell> {
        match v {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Sand),
            2 => Some(Cell::Blocked),
            _ => None,
        }
    }

    /// Palette slot
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}
