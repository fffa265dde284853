//! Tracing setup for the application.

/// Initializes the tracing/logging infrastructure.
///
/// Structured logging via the `tracing` crate with environment-based
/// filtering: set `RUST_LOG` to control verbosity.
///
/// - `RUST_LOG=info` - actor lifecycle and state mutations
/// - `RUST_LOG=debug` - every request with its payload
/// - `RUST_LOG=order_desk=debug` - debug only for this crate
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
