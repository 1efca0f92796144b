use super::*;
use crate::render::Tiling;
use crate::spatial::BorderPolicy;

/// Records every fill call
#[derive(Default)]
struct RecordingSink {
    rects: Vec<(i32, i32, u32, u32, Rgba)>,
}

impl DrawSink for RecordingSink {
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
        self.rects.push((x, y, width, height, color));
    }
}

fn quiet_config(rows: u32, cols: u32) -> EngineConfig {
    EngineConfig {
        source: None,
        ..EngineConfig::with_size(rows, cols)
    }
}

#[test]
fn new_rejects_invalid_config() {
    assert!(SimulationCore::new(EngineConfig::with_size(2, 50)).is_err());
    let bad_step = EngineConfig {
        step_ms: -1.0,
        ..EngineConfig::default()
    };
    assert!(SimulationCore::new(bad_step).is_err());
}

#[test]
fn first_advance_only_anchors_clock() {
    let mut sim = SimulationCore::new(EngineConfig::default()).unwrap();
    assert_eq!(sim.advance(1000.0), 0);
    assert_eq!(sim.frame(), 0);
    // 5ms steps
    assert_eq!(sim.advance(1012.0), 2);
    assert_eq!(sim.frame(), 2);
    // remainder carries over: clock at 1010
    assert_eq!(sim.advance(1015.0), 1);
    assert_eq!(sim.frame(), 3);
}

#[test]
fn advance_ignores_time_going_backwards() {
    let mut sim = SimulationCore::new(EngineConfig::default()).unwrap();
    sim.advance(500.0);
    assert_eq!(sim.advance(100.0), 0);
    assert_eq!(sim.advance(f64::NAN), 0);
    assert_eq!(sim.frame(), 0);
}

#[test]
fn catch_up_is_capped() {
    let config = EngineConfig {
        max_catch_up_ticks: 10,
        ..EngineConfig::default()
    };
    let mut sim = SimulationCore::new(config).unwrap();
    sim.enable_perf_metrics(true);
    sim.advance(0.0);
    assert_eq!(sim.advance(10_000.0), 10);
    let stats = sim.get_perf_stats();
    assert_eq!(stats.ticks_run(), 10);
    assert!(stats.ticks_dropped() > 0);

    // backlog dropped: the next frame runs only its own time
    assert_eq!(sim.advance(10_005.0), 1);
}

#[test]
fn source_fills_window_over_time() {
    let mut sim = SimulationCore::new(EngineConfig::with_size(30, 40)).unwrap();
    for _ in 0..50 {
        sim.tick();
    }
    assert!(sim.sand_count() > 0);
    assert!(sim.sand_count() <= 50);
}

#[test]
fn viewport_resizes_window_once() {
    let mut sim = SimulationCore::new(EngineConfig::default()).unwrap();
    let full = sim.window();
    assert!(sim.set_viewport(800, 600));
    // 10px cells; bordered windows sit on the bottom frame
    assert_eq!(sim.window().size(), Size::new(80, 59));
    assert!(sim.window().area() < full.area());
    // same viewport again: nothing to do
    assert!(!sim.set_viewport(800, 600));
}

#[test]
fn resize_drops_sand_that_leaves_the_window() {
    let mut sim = SimulationCore::new(quiet_config(40, 40)).unwrap();
    sim.set_viewport(400, 400);
    let before = sim.window();
    sim.add_sand();
    assert!(sim.sand_count() > 0);

    // shrink hard enough that the top rows leave the window
    sim.set_viewport(100, 100);
    let after = sim.window();
    assert!(after.start.y > before.start.y);
    for y in 0..sim.rows() {
        for x in 0..sim.cols() {
            if !after.contains(x as i32, y as i32) {
                assert_ne!(sim.grid().cell_at(x, y), Some(Cell::Sand));
            }
        }
    }
}

#[test]
fn render_needs_a_viewport() {
    let mut sim = SimulationCore::new(quiet_config(20, 20)).unwrap();
    let mut sink = RecordingSink::default();
    assert_eq!(sim.render(&mut sink), 0);
    assert!(sink.rects.is_empty());
}

#[test]
fn render_of_empty_window_is_one_rect_per_row() {
    let mut sim = SimulationCore::new(quiet_config(20, 30)).unwrap();
    sim.set_viewport(200, 150);
    let w = sim.window();
    let mut sink = RecordingSink::default();
    let count = sim.render(&mut sink);
    assert_eq!(count, w.height() as usize);
    assert_eq!(sink.rects.len(), count);
    assert_eq!(sim.draw_plan().len(), count);

    let empty = sim.palette().color(Cell::Empty);
    assert!(sink.rects.iter().all(|r| r.4 == empty));
    // rows tile the full viewport height
    let total: u32 = sink.rects.iter().map(|r| r.3).sum();
    assert_eq!(total, 150);
}

#[test]
fn render_uses_updated_palette() {
    let mut sim = SimulationCore::new(quiet_config(20, 20)).unwrap();
    sim.set_viewport(100, 100);
    sim.add_sand();
    let gold = Rgba::rgb(230, 190, 60);
    sim.set_palette_color(Cell::Sand, gold);

    let mut sink = RecordingSink::default();
    sim.render(&mut sink);
    assert!(sink.rects.iter().any(|r| r.4 == gold));
}

#[test]
fn overlap_tiling_from_config() {
    let config = EngineConfig {
        tiling: Tiling::Overlap,
        border: BorderPolicy::Borderless,
        ..quiet_config(10, 10)
    };
    let mut sim = SimulationCore::new(config).unwrap();
    sim.set_viewport(50, 50);
    let mut sink = RecordingSink::default();
    sim.render(&mut sink);
    assert!(sink.rects.iter().all(|r| r.2 >= 2 && r.3 >= 2));
    assert_eq!((sink.rects[0].0, sink.rects[0].1), (-1, -1));
}

#[test]
fn gestures_are_reproducible_with_same_seed() {
    let run = |seed| {
        let mut sim = SimulationCore::new(quiet_config(40, 60)).unwrap();
        sim.reseed(seed);
        sim.add_sand();
        sim.add_sand();
        for _ in 0..30 {
            sim.tick();
        }
        sim.remove_sand();
        sim.grid().cells().to_vec()
    };
    assert_eq!(run(7), run(7));
}

#[test]
fn clear_empties_window_only() {
    let mut sim = SimulationCore::new(quiet_config(20, 20)).unwrap();
    let frame = sim.grid().count(Cell::Blocked);
    sim.add_sand();
    sim.clear();
    assert_eq!(sim.sand_count(), 0);
    assert_eq!(sim.grid().count(Cell::Blocked), frame);
}

#[test]
fn perf_stats_are_zero_when_disabled() {
    let mut sim = SimulationCore::new(EngineConfig::default()).unwrap();
    sim.advance(0.0);
    sim.advance(100.0);
    assert_eq!(sim.get_perf_stats(), PerfStats::default());

    sim.enable_perf_metrics(true);
    sim.advance(200.0);
    let stats = sim.get_perf_stats();
    assert_eq!(stats.ticks_run(), 20);
    assert_eq!(stats.sand_count(), sim.sand_count());
    assert_eq!(stats.grid_size(), 100 * 200);
}
