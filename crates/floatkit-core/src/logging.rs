#![forbid(unsafe_code)]

//! Structured logging glue.
//!
//! With the `tracing` feature the usual `tracing` macros are re-exported so
//! downstream crates can log through `floatkit_core::debug!` and friends.
//! Without it, instrumentation compiles away entirely.
//!
//! The `tracing-json` feature adds [`init_json_logging`], a one-call
//! subscriber setup for production hosts. Filtering follows `RUST_LOG`.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Install a global JSON subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns an error if a global subscriber is already set.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(true)
        .try_init()
}
