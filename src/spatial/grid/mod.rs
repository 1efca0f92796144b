//! Grid - fixed backing array plus a movable update window
//!
//! The backing array is allocated once for the maximum `rows` x `cols`
//! and never resized. Only the window moves; cells outside it are kept
//! `Empty` (except the permanent frame of a bordered grid) and are never
//! read by the simulation or the renderer.
//!
//! Layout: `index = row * cols + col`, row 0 at the top.

use crate::domain::cell::Cell;
use crate::systems::SandSource;

use super::window::{BorderPolicy, Size, Window};

mod indexing;
mod accessors;
mod resize;

pub struct Grid {
    rows: u32,
    cols: u32,
    data: Vec<Cell>,

    window: Window,
    border: BorderPolicy,

    // Drives the deterministic injection column
    tick_count: u64,
    source: Option<SandSource>,
}

impl Grid {
    /// Allocate an `Empty` grid of `rows` x `cols` cells.
    ///
    /// Bordered grids get their permanent frame painted immediately and the
    /// window is sized to the full grid. Fails on zero/overflowing
    /// dimensions, on a bordered grid too small to hold a window, and when
    /// the backing array cannot be allocated.
    pub fn new(rows: u32, cols: u32, border: BorderPolicy) -> Result<Self, String> {
        let min_side = border.min_side();
        if rows < min_side || cols < min_side {
            return Err(format!(
                "grid {}x{} too small for {:?} border (minimum {}x{})",
                rows, cols, border, min_side, min_side
            ));
        }

        let size = (rows as usize)
            .checked_mul(cols as usize)
            .ok_or_else(|| format!("grid {}x{} overflows usize", rows, cols))?;

        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|e| format!("failed to allocate {} cells: {}", size, e))?;
        data.resize(size, Cell::Empty);

        let mut grid = Self {
            rows,
            cols,
            data,
            window: Window::default(),
            border,
            tick_count: 0,
            source: None,
        };

        if border == BorderPolicy::Bordered {
            grid.paint_frame();
        }
        grid.resize(Size::new(cols, rows));

        Ok(grid)
    }

    // === Frame ===
    fn paint_frame(&mut self) {
        let bottom = self.rows - 1;
        for x in 0..self.cols {
            let idx = self.index(x, bottom);
            self.data[idx] = Cell::Blocked;
        }
        for y in 0..self.rows {
            let left = self.index(0, y);
            let right = self.index(self.cols - 1, y);
            self.data[left] = Cell::Blocked;
            self.data[right] = Cell::Blocked;
        }
    }

    // === Settings ===
    #[inline]
    pub fn border(&self) -> BorderPolicy {
        self.border
    }

    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[inline]
    pub fn source(&self) -> Option<SandSource> {
        self.source
    }

    pub fn set_source(&mut self, source: Option<SandSource>) {
        self.source = source;
    }

    pub(crate) fn advance_tick_count(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::window::Pos;

    #[test]
    fn borderless_starts_empty_with_full_window() {
        let grid = Grid::new(10, 10, BorderPolicy::Borderless).unwrap();
        assert_eq!(grid.window(), Window::new(Pos::new(0, 0), Pos::new(10, 10)));
        assert_eq!(grid.count(Cell::Empty), 100);
        assert_eq!(grid.tick_count(), 0);
        assert_eq!(grid.source(), None);
    }

    #[test]
    fn bordered_paints_bottom_and_sides() {
        let grid = Grid::new(5, 6, BorderPolicy::Bordered).unwrap();
        for x in 0..6 {
            assert_eq!(grid.cell_at(x, 4), Some(Cell::Blocked));
        }
        for y in 0..5 {
            assert_eq!(grid.cell_at(0, y), Some(Cell::Blocked));
            assert_eq!(grid.cell_at(5, y), Some(Cell::Blocked));
        }
        // No top frame
        assert_eq!(grid.cell_at(2, 0), Some(Cell::Empty));
        assert_eq!(grid.count(Cell::Blocked), 6 + 2 * 4);
        assert_eq!(grid.window(), Window::new(Pos::new(1, 0), Pos::new(5, 4)));
    }

    #[test]
    fn rejects_degenerate_sizes() {
        assert!(Grid::new(0, 10, BorderPolicy::Borderless).is_err());
        assert!(Grid::new(10, 0, BorderPolicy::Borderless).is_err());
        assert!(Grid::new(2, 10, BorderPolicy::Bordered).is_err());
        assert!(Grid::new(1, 1, BorderPolicy::Borderless).is_ok());
    }
}
