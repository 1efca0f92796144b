//! Domain types: cell states, colors, and engine configuration.

pub mod cell;
pub mod config;
pub mod palette;

pub use cell::Cell;
pub use config::EngineConfig;
pub use palette::{Palette, Rgba};
