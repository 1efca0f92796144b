use wasm_bindgen::prelude::*;

/// Snapshot of the last `advance`/`tick` call. All zeros while perf
/// metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) advance_ms: f64,
    pub(super) tick_ms: f64,
    pub(super) render_ms: f64,
    pub(super) ticks_run: u32,
    pub(super) ticks_dropped: u32,
    pub(super) grains_moved: u32,
    pub(super) grains_injected: u32,
    pub(super) rects_emitted: u32,
    pub(super) sand_count: u32,
    pub(super) window_cells: u32,
    pub(super) grid_size: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn advance_ms(&self) -> f64 { self.advance_ms }
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn ticks_run(&self) -> u32 { self.ticks_run }
    #[wasm_bindgen(getter)]
    pub fn ticks_dropped(&self) -> u32 { self.ticks_dropped }
    #[wasm_bindgen(getter)]
    pub fn grains_moved(&self) -> u32 { self.grains_moved }
    #[wasm_bindgen(getter)]
    pub fn grains_injected(&self) -> u32 { self.grains_injected }
    #[wasm_bindgen(getter)]
    pub fn rects_emitted(&self) -> u32 { self.rects_emitted }
    #[wasm_bindgen(getter)]
    pub fn sand_count(&self) -> u32 { self.sand_count }
    #[wasm_bindgen(getter)]
    pub fn window_cells(&self) -> u32 { self.window_cells }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
}
