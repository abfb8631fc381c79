//! Diagnostics go to stderr so stdout stays clean for answers and `--json`.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "warn,rag_chat=debug";

/// Install the global subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            VERBOSE_FILTER
        } else {
            DEFAULT_FILTER
        })
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
