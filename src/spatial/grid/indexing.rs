use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    #[inline]
    pub fn cols(&self) -> u32 { self.cols }

    #[inline]
    pub fn size(&self) -> usize { self.data.len() }

    #[inline]
    pub fn window(&self) -> Window { self.window }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.cols && y < self.rows,
            "index: out of bounds ({}, {}) for {}x{} grid",
            x,
            y,
            self.cols,
            self.rows
        );
        y as usize * self.cols as usize + x as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let x = (idx % self.cols as usize) as u32;
        let y = (idx / self.cols as usize) as u32;
        (x, y)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.cols as i32 && y >= 0 && y < self.rows as i32
    }

    #[inline]
    pub fn in_window(&self, x: i32, y: i32) -> bool {
        self.window.contains(x, y)
    }

    /// True for cells of the permanent frame (bordered grids only).
    #[inline]
    pub fn is_frame(&self, x: u32, y: u32) -> bool {
        self.border == BorderPolicy::Bordered
            && (y == self.rows - 1 || x == 0 || x == self.cols - 1)
    }
}
