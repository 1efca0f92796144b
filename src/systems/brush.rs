//! Interactive gestures: drop a block of sand, or thin out existing sand.
//!
//! Both stay inside the update window. Randomness comes from the caller.

use crate::core::random::RandomSource;
use crate::domain::cell::Cell;
use crate::spatial::Grid;

/// Half the side of the square dropped by `add_sand` (9x9 block)
pub const BRUSH_RADIUS: u32 = 4;

impl Grid {
    /// Paint a `(2r+1)` square of sand centered `r` rows below the window
    /// top, at a random column that keeps the block inside the window when
    /// it is wide enough. Only `Empty` cells are painted, so obstacles
    /// survive. Returns the number of grains added.
    pub fn add_sand(&mut self, rng: &mut impl RandomSource) -> u32 {
        let w = self.window();
        if w.is_empty() {
            return 0;
        }

        let r = BRUSH_RADIUS;
        let rel_x = if w.width() > 2 * r {
            rng.below(w.width() - 2 * r) + r
        } else {
            w.width() / 2
        };
        let cx = (w.start.x + rel_x) as i32;
        let cy = (w.start.y + r) as i32;

        let mut added = 0;
        let r = r as i32;
        for dy in -r..=r {
            for dx in -r..=r {
                if let Some(cell) = self.get_mut(cx + dx, cy + dy) {
                    if *cell == Cell::Empty {
                        *cell = Cell::Sand;
                        added += 1;
                    }
                }
            }
        }
        added
    }

    /// Erase roughly half of the sand in the window. Returns grains removed.
    pub fn remove_sand(&mut self, rng: &mut impl RandomSource) -> u32 {
        let w = self.window();
        let mut removed = 0;
        for y in w.start.y..w.end.y {
            for x in w.start.x..w.end.x {
                let idx = self.index(x, y);
                if self.cells()[idx] != Cell::Sand {
                    continue;
                }
                if rng.next_u32() & 2 == 0 {
                    self.set(x as i32, y as i32, Cell::Empty);
                    removed += 1;
                }
            }
        }
        removed
    }
}
