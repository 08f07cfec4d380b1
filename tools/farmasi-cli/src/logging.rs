//! Log subscriber setup.

use tracing_subscriber::EnvFilter;

/// Filter used with `--verbose` when `RUST_LOG` is unset.
const VERBOSE_FILTER: &str = "farmasi_cli=debug,farmasi_core=debug,farmasi_data=debug";

/// Install the global subscriber. Logs go to stderr so `--json` output on
/// stdout stays parseable.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { VERBOSE_FILTER } else { "warn" })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}
