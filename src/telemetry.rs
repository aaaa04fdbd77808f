//! Tracing setup shared by binaries and demos.
//!
//! `RUST_LOG` wins when set, otherwise the filter from
//! [`Settings::log_filter`](crate::config::Settings) applies.
//!
//! ```bash
//! RUST_LOG=debug cargo run --example admin
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // a second call (e.g. from several tests) leaves the first subscriber in place
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
