//! Console logging
//!
//! wasm32: messages go straight to the browser console through `web_sys`.
//! Native hosts (unit tests, benches) have no JS imports to call, so the
//! macro only type-checks its arguments there.

/// Log a formatted message at `info` or `warn` level.
///
/// ```rust
/// use sandfall_engine::engine_log;
///
/// let rows = 100;
/// engine_log!(info, "grid ready: {} rows", rows);
/// engine_log!(warn, "dropped {} ticks", 3);
/// ```
#[macro_export]
macro_rules! engine_log {
    (info, $($arg:tt)*) => {
        $crate::core::log::emit($crate::core::log::Level::Info, ::std::format_args!($($arg)*))
    };
    (warn, $($arg:tt)*) => {
        $crate::core::log::emit($crate::core::log::Level::Warn, ::std::format_args!($($arg)*))
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
}

#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
pub fn emit(level: Level, args: std::fmt::Arguments<'_>) {
    let msg = wasm_bindgen::JsValue::from_str(&format!("[sandfall] {}", args));
    match level {
        Level::Info => web_sys::console::log_1(&msg),
        Level::Warn => web_sys::console::warn_1(&msg),
    }
}

#[doc(hidden)]
#[cfg(not(target_arch = "wasm32"))]
#[inline]
pub fn emit(_level: Level, _args: std::fmt::Arguments<'_>) {}
