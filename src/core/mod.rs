//! Core utilities shared by every layer (macros first, so they are in
//! scope for the rest of the crate).

#[macro_use]
#[path = "utils/safety.rs"]
pub mod safety;

#[macro_use]
#[path = "utils/log.rs"]
pub mod log;

#[path = "utils/random.rs"]
pub mod random;

pub use random::{RandomSource, XorShift32};
