//! Systems - everything that mutates cell states
//!
//! - settle: the per-tick fall rule
//! - source: deterministic sand injection
//! - brush:  add/remove gestures
//! - tick:   one full simulation step

mod brush;
mod settle;
mod source;
mod tick;

pub use brush::BRUSH_RADIUS;
pub use source::{SandSource, DEFAULT_MARGIN, DEFAULT_STRIDE};
pub use tick::TickOutcome;
