//! Simulation - owns everything a running sandbox needs
//!
//! `SimulationCore` orchestrates only; the work lives elsewhere:
//! - spatial::Grid      - cells, window, resize
//! - systems            - settle, source, brush
//! - render::DrawPlan   - viewport tiling
//!
//! One fixed step is `config.step_ms` of wall time. `advance(now)` is
//! meant to be called once per animation frame.

use crate::core::random::XorShift32;
use crate::domain::cell::Cell;
use crate::domain::config::EngineConfig;
use crate::domain::palette::{Palette, Rgba};
use crate::render::{DrawPlan, DrawSink};
use crate::spatial::{Grid, Size, Window};
use crate::systems::TickOutcome;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "viewport/viewport.rs"]
mod viewport;
#[path = "render/render_plan.rs"]
mod render_plan;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::SandWorld;
pub use perf_stats::PerfStats;
pub use viewport::cells_for_viewport;

use perf_timer::PerfTimer;

/// The running sandbox
pub struct SimulationCore {
    config: EngineConfig,
    grid: Grid,
    palette: Palette,
    plan: DrawPlan,
    rng: XorShift32,

    // Host state
    viewport: Option<Size>,
    last_update_ms: Option<f64>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    pub fn new(config: EngineConfig) -> Result<Self, String> {
        init::create_simulation_core(config)
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let config = EngineConfig::from_json(json)?;
        engine_log!(info, "config loaded ({} bytes)", json.len());
        Self::new(config)
    }

    pub fn config(&self) -> &EngineConfig { &self.config }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn rows(&self) -> u32 { self.grid.rows() }

    pub fn cols(&self) -> u32 { self.grid.cols() }

    pub fn window(&self) -> Window { self.grid.window() }

    pub fn viewport(&self) -> Option<Size> { self.viewport }

    /// Ticks run since creation
    pub fn frame(&self) -> u64 { self.grid.tick_count() }

    pub fn sand_count(&self) -> u32 {
        self.grid.count(Cell::Sand) as u32
    }

    /// Resize the host viewport (pixels). Returns whether the update
    /// window changed.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> bool {
        viewport::set_viewport(self, width, height)
    }

    /// Drive the fixed-step clock to `now_ms`. Returns ticks run.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        step::advance(self, now_ms)
    }

    /// Run exactly one step regardless of the clock
    pub fn tick(&mut self) -> TickOutcome {
        step::tick(self)
    }

    /// Drop a 9x9 block of sand near the top of the window
    pub fn add_sand(&mut self) -> u32 {
        commands::add_sand(self)
    }

    /// Erase about half of the sand in the window
    pub fn remove_sand(&mut self) -> u32 {
        commands::remove_sand(self)
    }

    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Draw the window into `sink`. Returns the number of rectangles.
    pub fn render(&mut self, sink: &mut impl DrawSink) -> usize {
        render_plan::render(self, sink)
    }

    /// Rectangles from the last `render`
    pub fn draw_plan(&self) -> &DrawPlan { &self.plan }

    pub fn palette(&self) -> &Palette { &self.palette }

    pub fn set_palette_color(&mut self, cell: Cell, color: Rgba) {
        settings::set_palette_color(self, cell, color);
    }

    /// Restart the gesture random stream
    pub fn reseed(&mut self, seed: u32) {
        settings::reseed(self, seed);
    }

    /// Enable or disable perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
