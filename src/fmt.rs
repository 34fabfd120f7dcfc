//! Logging macros that forward to `defmt` when the `defmt` feature is enabled
//! and expand to nothing otherwise.

#![allow(unused_macros)]

macro_rules! trace {
    ($s:literal $(, $arg:expr)*) => {
        #[cfg(feature = "defmt")]
        ::defmt::trace!($s $(, $arg)*);
        #[cfg(not(feature = "defmt"))]
        let _ = ($(&$arg,)*);
    };
}

macro_rules! debug {
    ($s:literal $(, $arg:expr)*) => {
        #[cfg(feature = "defmt")]
        ::defmt::debug!($s $(, $arg)*);
        #[cfg(not(feature = "defmt"))]
        let _ = ($(&$arg,)*);
    };
}

macro_rules! warn {
    ($s:literal $(, $arg:expr)*) => {
        #[cfg(feature = "defmt")]
        ::defmt::warn!($s $(, $arg)*);
        #[cfg(not(feature = "defmt"))]
        let _ = ($(&$arg,)*);
    };
}
