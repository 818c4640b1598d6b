//! Logging macros shared by firmware and host builds.
//!
//! With the `stm32` feature the macros forward to `defmt` (RTT transport).
//! Host unit tests print to stdout. Any other host build formats the
//! arguments and discards them.

macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "stm32")]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(feature = "stm32"), test))]
        println!("[INFO] {}", format!($($arg)*));

        #[cfg(all(not(feature = "stm32"), not(test)))]
        let _ = ::core::format_args!($($arg)*);
    }};
}

macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "stm32")]
        ::defmt::warn!($($arg)*);

        #[cfg(all(not(feature = "stm32"), test))]
        println!("[WARN] {}", format!($($arg)*));

        #[cfg(all(not(feature = "stm32"), not(test)))]
        let _ = ::core::format_args!($($arg)*);
    }};
}

macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "stm32")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(feature = "stm32"), test))]
        println!("[DEBUG] {}", format!($($arg)*));

        #[cfg(all(not(feature = "stm32"), not(test)))]
        let _ = ::core::format_args!($($arg)*);
    }};
}
