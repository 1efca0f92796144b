//! Render adapter - turns the update window into filled rectangles
//!
//! `DrawPlan` does the geometry and run coalescing, `DrawSink` is the
//! output seam, `CanvasSink` drives a browser 2D context.

mod canvas;
mod draw_plan;
mod sink;

pub use canvas::CanvasSink;
pub use draw_plan::{DrawPlan, DrawRect, Tiling};
pub use sink::DrawSink;
