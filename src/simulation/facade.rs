use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::domain::cell::Cell;
use crate::domain::config::EngineConfig;
use crate::domain::palette::Rgba;
use crate::render::CanvasSink;

use super::perf_stats::PerfStats;
use super::SimulationCore;

#[wasm_bindgen]
pub struct SandWorld {
    core: SimulationCore,
}

fn to_js(err: String) -> JsValue {
    JsValue::from_str(&err)
}

/// Fresh gesture seed from the host
#[cfg(target_arch = "wasm32")]
fn host_seed() -> Option<u32> {
    Some((js_sys::Math::random() * u32::MAX as f64) as u32)
}

#[cfg(not(target_arch = "wasm32"))]
fn host_seed() -> Option<u32> {
    None
}

#[wasm_bindgen]
impl SandWorld {
    /// Default config at the given backing size
    #[wasm_bindgen(constructor)]
    pub fn new(rows: u32, cols: u32) -> Result<SandWorld, JsValue> {
        let mut core = SimulationCore::new(EngineConfig::with_size(rows, cols)).map_err(to_js)?;
        if let Some(seed) = host_seed() {
            core.reseed(seed);
        }
        Ok(Self { core })
    }

    /// Build from a JSON config document. Keeps the configured seed.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<SandWorld, JsValue> {
        let core = SimulationCore::from_json(json).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.rows() }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.core.cols() }

    #[wasm_bindgen(getter)]
    pub fn window_start_x(&self) -> u32 { self.core.window().start.x }

    #[wasm_bindgen(getter)]
    pub fn window_start_y(&self) -> u32 { self.core.window().start.y }

    #[wasm_bindgen(getter)]
    pub fn window_end_x(&self) -> u32 { self.core.window().end.x }

    #[wasm_bindgen(getter)]
    pub fn window_end_y(&self) -> u32 { self.core.window().end.y }

    #[wasm_bindgen(getter)]
    pub fn sand_count(&self) -> u32 { self.core.sand_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Current config as JSON
    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Call on canvas resize. Returns whether the window changed.
    pub fn resize_viewport(&mut self, width: u32, height: u32) -> bool {
        self.core.set_viewport(width, height)
    }

    /// Call once per animation frame with `performance.now()`
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        self.core.advance(now_ms)
    }

    /// Single step; returns whether a grain was injected
    pub fn tick(&mut self) -> bool {
        self.core.tick().injected.is_some()
    }

    pub fn add_sand(&mut self) -> u32 {
        self.core.add_sand()
    }

    pub fn remove_sand(&mut self) -> u32 {
        self.core.remove_sand()
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Draw into a 2D canvas context. Returns rectangles drawn.
    pub fn render(&mut self, ctx: &CanvasRenderingContext2d) -> usize {
        let mut sink = CanvasSink::new(ctx);
        self.core.render(&mut sink)
    }

    /// `packed` is `0xRRGGBBAA`
    pub fn set_palette_color(&mut self, cell: u8, packed: u32) -> Result<(), JsValue> {
        let cell = Cell::from_u8(cell).ok_or_else(|| JsValue::from_str(&format!("unknown cell {}", cell)))?;
        self.core.set_palette_color(cell, Rgba::from_packed(packed));
        Ok(())
    }

    pub fn reseed(&mut self, seed: u32) {
        self.core.reseed(seed);
    }

    /// Get pointer to the cell array (one byte per cell, row-major)
    pub fn cells_ptr(&self) -> *const u8 {
        self.core.grid().cells_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.core.grid().size()
    }

    /// Enable or disable per-advance perf metrics
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}
