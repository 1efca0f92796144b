//! Draw plan - rectangles that tile the viewport with the window's cells
//!
//! Instead of one fill per cell, each window row is run-length encoded:
//! consecutive cells of the same state become one wider rectangle.
//!
//! Example: a row `[Sand, Sand, Empty]` -> 2 rectangles
//!
//! Window-relative column `c` maps to pixel `c * viewport.width / cols`
//! (rows likewise), so adjacent rectangles share edges exactly.

use serde::{Deserialize, Serialize};

use crate::domain::cell::Cell;
use crate::domain::palette::Palette;
use crate::spatial::{Grid, Size};

use super::sink::DrawSink;

/// How rectangle edges are placed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tiling {
    /// Rectangles share edges; no gaps, no overlap.
    #[default]
    Exact,
    /// Every rectangle grows by one pixel on each side to hide seams on
    /// backends that anti-alias fractional edges.
    Overlap,
}

/// One filled rectangle in viewport pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub cell: Cell,
}

/// Reusable rectangle buffer (kept across frames)
#[derive(Debug, Default)]
pub struct DrawPlan {
    rects: Vec<DrawRect>,
}

impl DrawPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rects: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.rects.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    #[inline]
    pub fn rects(&self) -> &[DrawRect] {
        &self.rects
    }

    /// Rebuild the plan for `grid`'s window scaled to `viewport`.
    /// Returns the number of rectangles.
    pub fn rebuild(&mut self, grid: &Grid, viewport: Size, tiling: Tiling) -> usize {
        self.clear();

        let window = grid.window();
        let cols = window.width();
        let rows = window.height();
        if cols == 0 || rows == 0 || viewport.width == 0 || viewport.height == 0 {
            return 0;
        }

        let mapper = Mapper { viewport, cols, rows, tiling };

        for r in 0..rows {
            let Some(row) = grid.window_row(window.start.y + r) else {
                continue;
            };

            // Row-based RLE: one rectangle per run of equal cells
            let mut run_start = 0u32;
            let mut run_cell = row[0];
            for (c, &cell) in row.iter().enumerate().skip(1) {
                if cell != run_cell {
                    self.push_run(&mapper, r, run_start, c as u32, run_cell);
                    run_start = c as u32;
                    run_cell = cell;
                }
            }

            // End of row - close the open run
            self.push_run(&mapper, r, run_start, cols, run_cell);
        }

        self.len()
    }

    fn push_run(&mut self, mapper: &Mapper, row: u32, c0: u32, c1: u32, cell: Cell) {
        if let Some(rect) = mapper.rect(row, c0, c1, cell) {
            self.rects.push(rect);
        }
    }

    /// Send every rectangle to `sink` in plan order. Returns the count.
    pub fn submit(&self, palette: &Palette, sink: &mut impl DrawSink) -> usize {
        for rect in &self.rects {
            sink.fill_rect(rect.x, rect.y, rect.width, rect.height, palette.color(rect.cell));
        }
        self.rects.len()
    }
}

/// Window-relative cell indices -> viewport pixels
struct Mapper {
    viewport: Size,
    cols: u32,
    rows: u32,
    tiling: Tiling,
}

impl Mapper {
    #[inline]
    fn px_x(&self, c: u32) -> u32 {
        (c as u64 * self.viewport.width as u64 / self.cols as u64) as u32
    }

    #[inline]
    fn px_y(&self, r: u32) -> u32 {
        (r as u64 * self.viewport.height as u64 / self.rows as u64) as u32
    }

    /// Rectangle for cells `c0..c1` of window row `row`. Runs that round
    /// to zero pixels (viewport smaller than the window) produce nothing.
    fn rect(&self, row: u32, c0: u32, c1: u32, cell: Cell) -> Option<DrawRect> {
        let x0 = self.px_x(c0);
        let x1 = self.px_x(c1);
        let y0 = self.px_y(row);
        let y1 = self.px_y(row + 1);
        if x1 == x0 || y1 == y0 {
            return None;
        }

        let rect = match self.tiling {
            Tiling::Exact => DrawRect {
                x: x0 as i32,
                y: y0 as i32,
                width: x1 - x0,
                height: y1 - y0,
                cell,
            },
            Tiling::Overlap => DrawRect {
                x: x0 as i32 - 1,
                y: y0 as i32 - 1,
                width: x1 - x0 + 2,
                height: y1 - y0 + 2,
                cell,
            },
        };
        Some(rect)
    }
}
