//! Settling rule - how sand falls
//!
//! Rows are swept from the bottom of the window upward, so a grain that
//! moves lands in a row that was already processed and moves at most once
//! per sweep. Column direction alternates with row parity (even rows
//! left-to-right, odd rows right-to-left) to avoid a sideways bias in
//! how piles spread.
//!
//! Priority per grain: straight down, then down-left, then down-right.
//! A neighbour outside the window is never a valid target.

use crate::domain::cell::Cell;
use crate::spatial::Grid;

impl Grid {
    /// One sweep of the settling rule over the window. Returns the number
    /// of grains that moved.
    pub fn settle(&mut self) -> u32 {
        let w = self.window();
        let mut moved = 0u32;

        for row in (w.start.y..w.end.y).rev() {
            let left_to_right = (row & 1) == 0;
            for c in 0..w.width() {
                let col = if left_to_right { w.start.x + c } else { w.end.x - 1 - c };

                let idx = self.index(col, row);
                if fast!(self.cells(), [idx]) != Cell::Sand {
                    continue;
                }

                if let Some((tx, ty)) = self.fall_target(col, row) {
                    self.set(tx, ty, Cell::Sand);
                    self.set(col as i32, row as i32, Cell::Empty);
                    moved += 1;
                }
            }
        }

        moved
    }

    /// First available cell below `(col, row)` in priority order.
    #[inline]
    fn fall_target(&self, col: u32, row: u32) -> Option<(i32, i32)> {
        let x = col as i32;
        let below = row as i32 + 1;
        [x, x - 1, x + 1]
            .into_iter()
            .find(|&nx| self.get(nx, below) == Some(Cell::Empty))
            .map(|nx| (nx, below))
    }
}
