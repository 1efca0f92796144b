//! Viewport -> window sizing
//!
//! Cells stay square and at least `min_cell_size` pixels wide. The cell
//! edge is one pixel larger than an exact fit so the window never covers
//! the whole backing grid; the window shrinks as the viewport does.

use crate::spatial::Size;

use super::SimulationCore;

/// Window size (in cells) for a pixel viewport.
pub fn cells_for_viewport(viewport: Size, rows: u32, cols: u32, min_cell_size: u32) -> Size {
    let rows = rows.max(1);
    let cols = cols.max(1);
    let cell = (viewport.width / cols + 1)
        .max(viewport.height / rows + 1)
        .max(min_cell_size)
        .max(1);
    Size::new(viewport.width / cell, viewport.height / cell)
}

pub(super) fn set_viewport(sim: &mut SimulationCore, width: u32, height: u32) -> bool {
    let viewport = Size::new(width, height);
    if sim.viewport == Some(viewport) {
        return false;
    }
    sim.viewport = Some(viewport);

    let target = cells_for_viewport(
        viewport,
        sim.grid.rows(),
        sim.grid.cols(),
        sim.config.min_cell_size,
    );
    let before = sim.grid.window();
    let changed = sim.grid.resize(target);
    if changed {
        let after = sim.grid.window();
        engine_log!(
            info,
            "viewport {}x{} px: window {}x{} -> {}x{} cells",
            width,
            height,
            before.width(),
            before.height(),
            after.width(),
            after.height()
        );
    }
    changed
}
