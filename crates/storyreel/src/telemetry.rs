//! Console logging setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize console logging on stderr.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects debug output for
/// the storyreel crates.
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        "info,storyreel=debug,storyreel_story=debug,storyreel_models=debug"
    } else {
        "info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
