//! Internal logging macros.
//!
//! Forward to `defmt` when the `defmt` feature is enabled and expand to
//! nothing otherwise, so logging costs no flash in default builds.
//!
//! Declared first with `#[macro_use]` in the crate root so the macros are
//! in textual scope for every later module.

#[cfg(feature = "defmt")]
macro_rules! __log {
    ($level:ident, $($arg:tt)*) => {
        defmt::$level!($($arg)*)
    };
}

#[cfg(not(feature = "defmt"))]
macro_rules! __log {
    ($level:ident, $($arg:tt)*) => {};
}

macro_rules! trace {
    ($($arg:tt)*) => { __log!(trace, $($arg)*) };
}

macro_rules! debug {
    ($($arg:tt)*) => { __log!(debug, $($arg)*) };
}

macro_rules! warn {
    ($($arg:tt)*) => { __log!(warn, $($arg)*) };
}
