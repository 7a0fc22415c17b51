#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! With the `tracing` feature the tracing macros are re-exported here and at
//! the crate root, so call sites write `crate::debug!(...)` either way. Without
//! it, the same names expand to nothing.
//!
//! Native hosts that want structured output can enable `tracing-json` and call
//! [`init_json`] once at startup. The filter is read from `FOLIO_LOG`, falling
//! back to `RUST_LOG`, then to `info`.

#[cfg(feature = "tracing")]
pub use tracing::{debug, info, trace, warn};

/// Environment variable consulted first by [`init_json`].
pub const LOG_ENV: &str = "FOLIO_LOG";

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// Expands to nothing without the `tracing` feature.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}

/// Install a JSON `tracing` subscriber on stderr.
///
/// Returns `false` if a global subscriber was already installed (common in
/// test binaries where several tests race to initialize).
#[cfg(feature = "tracing-json")]
pub fn init_json() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
