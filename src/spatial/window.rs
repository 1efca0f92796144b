//! Update window - the active sub-region of the backing array
//!
//! The window is half-open: a cell `(x, y)` is live when
//! `start.x <= x < end.x` and `start.y <= y < end.y`.

use serde::{Deserialize, Serialize};

/// Cell coordinates (column, row); `y` grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u32,
    pub y: u32,
}

impl Pos {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Width/height pair, in cells or in pixels depending on the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// How the outermost cells of the backing array are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderPolicy {
    /// Bottom row plus left/right columns are permanently `Blocked`
    /// and never part of the window.
    #[default]
    Bordered,
    /// No frame; the window may cover the whole backing array.
    Borderless,
}

impl BorderPolicy {
    /// Smallest backing side length that leaves room for a window.
    pub fn min_side(self) -> u32 {
        match self {
            BorderPolicy::Bordered => 3,
            BorderPolicy::Borderless => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Window {
    pub start: Pos,
    pub end: Pos,
}

impl Window {
    pub const fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.end.x - self.start.x
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.end.y - self.start.y
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.start.x as i32
            && x < self.end.x as i32
            && y >= self.start.y as i32
            && y < self.end.y as i32
    }

    /// Window of roughly `target` cells centered horizontally in a
    /// `rows` x `cols` backing array and resting on its bottom edge.
    ///
    /// The vertical offset is doubled so the window hugs the bottom;
    /// bordered grids additionally keep one column of margin on each
    /// side and one row at the bottom for the permanent frame. The target
    /// is clamped to the backing dimensions, and `start` never passes
    /// `end`.
    pub fn centered(rows: u32, cols: u32, target: Size, border: BorderPolicy) -> Window {
        let width = target.width.min(cols);
        let height = target.height.min(rows);

        let x_offset = (cols - width) / 2;
        let y_offset = (rows - height) / 2;

        let (start, end) = match border {
            BorderPolicy::Bordered => (
                Pos::new(x_offset.max(1), 2 * y_offset),
                Pos::new((cols - x_offset).min(cols.saturating_sub(1)), rows.saturating_sub(1)),
            ),
            BorderPolicy::Borderless => (
                Pos::new(x_offset, 2 * y_offset),
                Pos::new(cols - x_offset, rows),
            ),
        };

        Window {
            start: Pos::new(start.x.min(end.x), start.y.min(end.y)),
            end,
        }
    }
}
