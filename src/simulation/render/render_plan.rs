use crate::render::DrawSink;

use super::{PerfTimer, SimulationCore};

/// Rebuild the draw plan for the current viewport and push it to `sink`.
/// Nothing is drawn before the first `set_viewport`.
pub(super) fn render(sim: &mut SimulationCore, sink: &mut impl DrawSink) -> usize {
    let Some(viewport) = sim.viewport else {
        sim.plan.clear();
        return 0;
    };
    let timer = PerfTimer::start_if(sim.perf_enabled);

    sim.plan.rebuild(&sim.grid, viewport, sim.config.tiling);
    let count = sim.plan.submit(&sim.palette, sink);

    if let Some(timer) = timer {
        sim.perf_stats.render_ms = timer.elapsed_ms();
        sim.perf_stats.rects_emitted = count as u32;
    }
    count
}
