//! Logging abstraction
//!
//! Provides logging macros that work across different targets:
//! - Embedded (`defmt` feature): Uses defmt
//! - Host tests: Uses println!
//! - Host non-test: No-op
//!
//! The kernel only logs on degenerate paths (clamped inputs, zero-length
//! normalization), never on the per-sample hot path.

/// Log warning message
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", not(test)))]
        ::defmt::warn!($($arg)*);

        #[cfg(test)]
        println!("[WARN] {}", format!($($arg)*));
    }};
}

/// Log debug message
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", not(test)))]
        ::defmt::debug!($($arg)*);

        #[cfg(test)]
        println!("[DEBUG] {}", format!($($arg)*));
    }};
}

/// Log trace message
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", not(test)))]
        ::defmt::trace!($($arg)*);

        #[cfg(test)]
        println!("[TRACE] {}", format!($($arg)*));
    }};
}
