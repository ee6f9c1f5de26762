//! Diagnostic logging via `tracing`.
//!
//! Diagnostics go to stderr and are filtered by `RUST_LOG`. They are
//! separate from the user-facing status lines in [`crate::output`].

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "warn";

/// Initializes the global tracing subscriber.
///
/// `verbose` raises the default level to `debug` for this crate. Calling this
/// more than once leaves the first subscriber in place.
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "warn,doctr_cli=debug"
    } else {
        DEFAULT_FILTER
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(!crate::output::is_no_color())
                .with_target(false),
        )
        .try_init();
}
