use super::super::*;

impl Grid {
    // === Window-checked access ===
    // Anything outside the update window reads as `None`; neighbour checks
    // treat that as unavailable.

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        if !self.in_window(x, y) {
            return None;
        }
        Some(fast!(self.data, [self.index(x as u32, y as u32)]))
    }

    #[inline]
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        if !self.in_window(x, y) {
            return None;
        }
        let idx = self.index(x as u32, y as u32);
        self.data.get_mut(idx)
    }

    /// Write a cell inside the window. Returns false (and writes nothing)
    /// outside it.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.get_mut(x, y) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Live cells of window row `y`, left to right.
    pub fn window_row(&self, y: u32) -> Option<&[Cell]> {
        let w = self.window;
        if y < w.start.y || y >= w.end.y {
            return None;
        }
        let row_start = y as usize * self.cols as usize;
        Some(&self.data[row_start + w.start.x as usize..row_start + w.end.x as usize])
    }

    // === Backing array inspection ===

    /// Read any in-bounds cell, window or not.
    #[inline]
    pub fn cell_at(&self, x: u32, y: u32) -> Option<Cell> {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.data
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.data.iter().filter(|&&c| c == cell).count()
    }

    /// Reset every live cell to `Empty`. The frame stays.
    pub fn clear(&mut self) {
        let w = self.window;
        for y in w.start.y..w.end.y {
            let idx = self.index(w.start.x, y);
            self.data[idx..idx + w.width() as usize].fill(Cell::Empty);
        }
    }
}
