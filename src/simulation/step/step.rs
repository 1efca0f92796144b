//! Fixed-step clock and the per-tick pipeline

use crate::domain::cell::Cell;
use crate::systems::TickOutcome;

use super::{PerfTimer, SimulationCore};

pub(super) fn tick(sim: &mut SimulationCore) -> TickOutcome {
    let timer = PerfTimer::start_if(sim.perf_enabled);

    let outcome = sim.grid.tick();

    if let Some(timer) = timer {
        let stats = &mut sim.perf_stats;
        stats.tick_ms = timer.elapsed_ms();
        stats.grains_moved = stats.grains_moved.saturating_add(outcome.moved);
        if outcome.injected.is_some() {
            stats.grains_injected = stats.grains_injected.saturating_add(1);
        }
    }
    outcome
}

/// Run as many fixed steps as `now_ms` is ahead of the clock.
///
/// The first call only anchors the clock. At most `max_catch_up_ticks`
/// steps run per call; beyond that the backlog is dropped.
pub(super) fn advance(sim: &mut SimulationCore, now_ms: f64) -> u32 {
    if !now_ms.is_finite() {
        return 0;
    }
    let Some(mut clock) = sim.last_update_ms else {
        sim.last_update_ms = Some(now_ms);
        return 0;
    };

    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
    }
    let timer = PerfTimer::start_if(perf_on);

    let step_ms = sim.config.step_ms;
    let max_ticks = sim.config.max_catch_up_ticks;
    let mut ticks = 0u32;
    let mut dropped = 0u32;

    while now_ms - clock >= step_ms {
        if ticks == max_ticks {
            dropped = ((now_ms - clock) / step_ms) as u32;
            clock = now_ms;
            break;
        }
        tick(sim);
        clock += step_ms;
        ticks += 1;
    }
    sim.last_update_ms = Some(clock);

    if dropped > 0 {
        engine_log!(
            warn,
            "fell behind: ran {} ticks, dropped {} ({} ms per tick)",
            ticks,
            dropped,
            step_ms
        );
    }

    if let Some(timer) = timer {
        let stats = &mut sim.perf_stats;
        stats.advance_ms = timer.elapsed_ms();
        stats.ticks_run = ticks;
        stats.ticks_dropped = dropped;
        stats.sand_count = sim.grid.count(Cell::Sand) as u32;
        stats.window_cells = sim.grid.window().area() as u32;
        stats.grid_size = sim.grid.size() as u32;
    }

    ticks
}
