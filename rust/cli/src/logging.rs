//! Diagnostic logging for the binary.
//!
//! Game output goes to stdout, so the subscriber writes to stderr and stays
//! quiet unless `RUST_LOG` asks for more.

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize logging for the application
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    // A subscriber may already be installed when embedded in tests
    let _ = tracing::subscriber::set_global_default(subscriber);
}
