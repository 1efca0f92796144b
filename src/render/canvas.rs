//! Canvas 2D backend
//!
//! Fill style is only re-set when the color changes; consecutive rectangles
//! of one state share a single `fillStyle` assignment.

use web_sys::CanvasRenderingContext2d;

use crate::domain::palette::Rgba;

use super::sink::DrawSink;

pub struct CanvasSink<'a> {
    ctx: &'a CanvasRenderingContext2d,
    current: Option<Rgba>,
}

impl<'a> CanvasSink<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx, current: None }
    }
}

impl DrawSink for CanvasSink<'_> {
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
        if self.current != Some(color) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.current = Some(color);
        }
        self.ctx.fill_rect(x as f64, y as f64, width as f64, height as f64);
    }
}
