use sandfall_engine::{BorderPolicy, Cell, DrawPlan, Grid, SandSource, Size, Tiling};

fn open_grid() -> Grid {
    Grid::new(10, 10, BorderPolicy::Borderless).unwrap()
}

#[test]
fn single_grain_falls_one_row_per_tick() {
    let mut grid = open_grid();
    grid.set(5, 0, Cell::Sand);
    grid.tick();
    assert_eq!(grid.get(5, 0), Some(Cell::Empty));
    assert_eq!(grid.get(5, 1), Some(Cell::Sand));
    assert_eq!(grid.count(Cell::Sand), 1);
}

#[test]
fn blocked_center_prefers_left_diagonal() {
    let mut grid = open_grid();
    grid.set(5, 0, Cell::Sand);
    grid.set(5, 1, Cell::Blocked);
    grid.tick();
    assert_eq!(grid.get(4, 1), Some(Cell::Sand));
    assert_eq!(grid.get(6, 1), Some(Cell::Empty));
    assert_eq!(grid.get(5, 0), Some(Cell::Empty));
}

#[test]
fn grain_on_window_floor_never_moves() {
    let mut grid = Grid::new(30, 30, BorderPolicy::Bordered).unwrap();
    grid.resize(Size::new(12, 10));
    let w = grid.window();
    let (x, y) = (w.start.x as i32 + 3, w.end.y as i32 - 1);
    grid.set(x, y, Cell::Sand);
    for _ in 0..50 {
        grid.tick();
        assert_eq!(grid.get(x, y), Some(Cell::Sand));
    }
}

#[test]
fn pile_settles_into_a_pyramid() {
    let mut grid = open_grid();
    // column of 5 grains over the center
    for y in 0..5 {
        grid.set(5, y, Cell::Sand);
    }
    for _ in 0..30 {
        grid.tick();
    }
    assert_eq!(grid.count(Cell::Sand), 5);
    // nothing floats: every grain rests on the floor or on another cell
    for y in 0..9 {
        for x in 0..10 {
            if grid.get(x, y) == Some(Cell::Sand) {
                let below = [x - 1, x, x + 1].map(|nx| grid.get(nx, y + 1));
                assert!(below.iter().all(|c| *c != Some(Cell::Empty)), "({}, {}) can still fall", x, y);
            }
        }
    }
}

#[test]
fn sand_fills_window_from_source_and_stays_inside() {
    let mut grid = Grid::new(40, 60, BorderPolicy::Bordered).unwrap();
    grid.set_source(Some(SandSource::default()));
    grid.resize(Size::new(20, 15));
    for _ in 0..400 {
        grid.tick();
    }
    let w = grid.window();
    for y in 0..grid.rows() {
        for x in 0..grid.cols() {
            if grid.cell_at(x, y) == Some(Cell::Sand) {
                assert!(w.contains(x as i32, y as i32));
            }
        }
    }
    assert!(grid.count(Cell::Sand) > 0);
}

#[test]
fn draw_plan_coalesces_three_cell_row() {
    let mut grid = Grid::new(1, 3, BorderPolicy::Borderless).unwrap();
    grid.set(0, 0, Cell::Sand);
    grid.set(1, 0, Cell::Sand);
    let mut plan = DrawPlan::new();
    assert_eq!(plan.rebuild(&grid, Size::new(90, 30), Tiling::Exact), 2);
    assert_eq!(plan.rects()[0].cell, Cell::Sand);
    assert_eq!(plan.rects()[0].width, 60);
    assert_eq!(plan.rects()[1].cell, Cell::Empty);
    assert_eq!(plan.rects()[1].width, 30);
}
