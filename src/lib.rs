//! Sandfall Engine - falling-sand cellular automaton in WASM
//!
//! Architecture:
//! - core/       - macros, logging, random source
//! - domain/     - cell states, palette, config
//! - spatial/    - grid and update window
//! - systems/    - settle rule, sand source, gestures
//! - render/     - draw plan and draw sinks
//! - simulation/ - driver context and the JS facade

// Utils with macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod render;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!(info, "engine v{} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::random::{RandomSource, XorShift32};
pub use domain::{Cell, EngineConfig, Palette, Rgba};
pub use render::{CanvasSink, DrawPlan, DrawRect, DrawSink, Tiling};
pub use simulation::{cells_for_viewport, PerfStats, SandWorld, SimulationCore};
pub use spatial::{BorderPolicy, Grid, Pos, Size, Window};
pub use systems::{SandSource, TickOutcome, BRUSH_RADIUS};

// Export cell constants for JS
#[wasm_bindgen]
pub fn cell_empty() -> u8 { Cell::Empty as u8 }
#[wasm_bindgen]
pub fn cell_sand() -> u8 { Cell::Sand as u8 }
#[wasm_bindgen]
pub fn cell_blocked() -> u8 { Cell::Blocked as u8 }
