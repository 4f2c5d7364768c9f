//! Logging init: stderr, filtered by `RUST_LOG`.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,moviename=info";
const VERBOSE_FILTER: &str = "info,moviename=debug";

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks between the default
/// and debug filters. Calling this twice is a no-op.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
