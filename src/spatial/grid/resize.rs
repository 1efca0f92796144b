use super::*;

impl Grid {
    /// Move the update window to a centered region of about `target` cells.
    ///
    /// Cells that were live but fall outside the new window are cleared
    /// before the new bounds are swapped in, so the "outside is Empty"
    /// invariant holds the moment this returns. Returns whether the window
    /// changed; asking for the current size again is a no-op.
    pub fn resize(&mut self, target: Size) -> bool {
        let new_window = Window::centered(self.rows, self.cols, target, self.border);
        if new_window == self.window {
            return false;
        }

        self.clear_vacated(new_window);
        self.window = new_window;
        true
    }

    /// Clear `old \ new`. Cells only in `new` are already Empty, so this
    /// covers the whole `(old ∪ new) \ new` region.
    fn clear_vacated(&mut self, new_window: Window) {
        let old = self.window;
        for y in old.start.y..old.end.y {
            let row_kept = y >= new_window.start.y && y < new_window.end.y;
            if !row_kept {
                // whole row strip leaves the window
                let idx = self.index(old.start.x, y);
                self.data[idx..idx + old.width() as usize].fill(Cell::Empty);
                continue;
            }

            // left strip
            for x in old.start.x..new_window.start.x.min(old.end.x) {
                let idx = self.index(x, y);
                fast!(self.data, [idx] = Cell::Empty);
            }
            // right strip
            for x in new_window.end.x.max(old.start.x)..old.end.x {
                let idx = self.index(x, y);
                fast!(self.data, [idx] = Cell::Empty);
            }
        }
    }
}
