use crate::core::random::XorShift32;
use crate::domain::config::EngineConfig;
use crate::render::DrawPlan;
use crate::spatial::Grid;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn create_simulation_core(config: EngineConfig) -> Result<SimulationCore, String> {
    config.validate()?;

    let mut grid = Grid::new(config.rows, config.cols, config.border)?;
    grid.set_source(config.source);

    // One rect per window cell is the worst case (checkerboard)
    let plan = DrawPlan::with_capacity(grid.size().min(1 << 16));

    engine_log!(
        info,
        "grid {}x{} ({:?}), step {} ms, source {}",
        config.rows,
        config.cols,
        config.border,
        config.step_ms,
        if config.source.is_some() { "on" } else { "off" }
    );

    Ok(SimulationCore {
        palette: config.palette.clone(),
        rng: XorShift32::new(config.seed),
        grid,
        plan,
        viewport: None,
        last_update_ms: None,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        config,
    })
}
