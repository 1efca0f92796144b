//! `fast!` - cell array indexing for hot loops
//!
//! The settle sweep, window resize and the window accessors only index
//! with `Grid::index` of coordinates already clipped to the window. Debug
//! builds keep the bounds check; release builds skip it.
//!
//! ```rust
//! use sandfall_engine::{fast, Cell};
//!
//! let mut cells = vec![Cell::Empty; 5];
//! fast!(cells, [2] = Cell::Sand);
//! assert_eq!(fast!(cells, [2]), Cell::Sand);
//! ```

/// `fast!(cells, [i])` reads a `Copy` element by value,
/// `fast!(cells, [i] = v)` writes one.
#[macro_export]
macro_rules! fast {
    ($slice:expr, [$index:expr]) => {{
        let idx: usize = $index;
        #[cfg(debug_assertions)]
        {
            $slice[idx]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked(idx) }
        }
    }};

    ($slice:expr, [$index:expr] = $val:expr) => {{
        let idx: usize = $index;
        #[cfg(debug_assertions)]
        {
            $slice[idx] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut(idx) = $val; }
        }
    }};
}
