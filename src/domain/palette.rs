//! Palette - one fixed color per cell state
//!
//! Colors are looked up by `Cell::index`, so remapping a color never
//! touches the tiling logic in `render::draw_plan`.

use serde::{Deserialize, Serialize};

use super::cell::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Decode `0xRRGGBBAA`
    pub fn from_packed(v: u32) -> Self {
        Self {
            r: (v >> 24) as u8,
            g: (v >> 16) as u8,
            b: (v >> 8) as u8,
            a: v as u8,
        }
    }

    pub fn to_packed(self) -> u32 {
        ((self.r as u32) << 24) | ((self.g as u32) << 16) | ((self.b as u32) << 8) | (self.a as u32)
    }

    /// CSS color string for canvas fill styles
    pub fn to_css(self) -> String {
        if self.a == 255 {
            format!("rgb({},{},{})", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a as f32 / 255.0)
        }
    }
}

// Default colors: dark grey background, mid grey sand, black walls
pub const EMPTY_COLOR: Rgba = Rgba::rgb(53, 54, 58);
pub const SAND_COLOR: Rgba = Rgba::rgb(102, 102, 102);
pub const BLOCKED_COLOR: Rgba = Rgba::rgb(0, 0, 0);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    empty: Rgba,
    sand: Rgba,
    blocked: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(EMPTY_COLOR, SAND_COLOR, BLOCKED_COLOR)
    }
}

impl Palette {
    pub fn new(empty: Rgba, sand: Rgba, blocked: Rgba) -> Self {
        Self { empty, sand, blocked }
    }

    #[inline]
    pub fn color(&self, cell: Cell) -> Rgba {
        self.table()[cell.index()]
    }

    pub fn set(&mut self, cell: Cell, color: Rgba) {
        match cell {
            Cell::Empty => self.empty = color,
            Cell::Sand => self.sand = color,
            Cell::Blocked => self.blocked = color,
        }
    }

    /// Colors in `Cell` discriminant order
    #[inline]
    pub fn table(&self) -> [Rgba; 3] {
        [self.empty, self.sand, self.blocked]
    }
}
