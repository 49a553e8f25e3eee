use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initializes the global tracing subscriber.
///
/// Reads the filter from `RUST_LOG` (defaulting to `info`) and is safe to
/// call more than once; only the first call installs the subscriber. Tests
/// call this from every entry point.
pub fn setup_logger() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        // try_init so an externally installed subscriber is not an error
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}
