//! Spatial storage: the backing grid and its update window.

pub mod grid;
pub mod window;

pub use grid::Grid;
pub use window::{BorderPolicy, Pos, Size, Window};
