use crate::domain::palette::Rgba;

/// Anything that can fill axis-aligned rectangles in viewport pixels.
///
/// The simulation core only talks to this trait; the browser canvas is one
/// implementation, test recorders are another.
pub trait DrawSink {
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgba);
}

impl<S: DrawSink + ?Sized> DrawSink for &mut S {
    #[inline]
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
        (**self).fill_rect(x, y, width, height, color);
    }
}
