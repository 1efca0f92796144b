use crate::core::random::XorShift32;
use crate::domain::cell::Cell;
use crate::domain::palette::Rgba;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(sim: &SimulationCore) -> PerfStats {
    sim.perf_stats.clone()
}

pub(super) fn set_palette_color(sim: &mut SimulationCore, cell: Cell, color: Rgba) {
    sim.palette.set(cell, color);
}

pub(super) fn reseed(sim: &mut SimulationCore, seed: u32) {
    sim.rng = XorShift32::new(seed);
}
