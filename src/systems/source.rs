//! Continuous sand source
//!
//! Each tick drops one grain on the top row of the window. The column is
//! `start.x + margin + (tick_count * stride) mod (width - 2 * margin)`,
//! so it walks across the window deterministically and never lands on
//! the outermost `margin` columns.

use serde::{Deserialize, Serialize};

use crate::domain::cell::Cell;
use crate::spatial::{Grid, Pos, Window};

pub const DEFAULT_STRIDE: u32 = 97;
pub const DEFAULT_MARGIN: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SandSource {
    /// Odd multiplier applied to the tick counter
    pub stride: u32,
    /// Columns kept clear on each side of the window
    pub margin: u32,
}

impl Default for SandSource {
    fn default() -> Self {
        Self {
            stride: DEFAULT_STRIDE,
            margin: DEFAULT_MARGIN,
        }
    }
}

impl SandSource {
    pub fn validate(&self) -> Result<(), String> {
        if (self.stride & 1) == 0 {
            return Err(format!("source stride must be odd, got {}", self.stride));
        }
        Ok(())
    }

    /// Injection point for `counter`, or `None` when the window is too
    /// narrow (or too short) to hold one.
    pub fn position(&self, window: &Window, counter: u64) -> Option<Pos> {
        if window.height() == 0 {
            return None;
        }
        let usable = window.width().checked_sub(self.margin.saturating_mul(2))?;
        if usable == 0 {
            return None;
        }
        let offset = (counter.wrapping_mul(self.stride as u64) % usable as u64) as u32;
        Some(Pos::new(window.start.x + self.margin + offset, window.start.y))
    }
}

impl Grid {
    /// Drop one grain from the configured source. Returns where it landed,
    /// or `None` if there is no source, no room, or the spot is occupied.
    pub fn inject(&mut self) -> Option<Pos> {
        let source = self.source()?;
        let pos = source.position(&self.window(), self.tick_count())?;
        let (x, y) = (pos.x as i32, pos.y as i32);
        if self.get(x, y) != Some(Cell::Empty) {
            return None;
        }
        self.set(x, y, Cell::Sand);
        Some(pos)
    }
}
