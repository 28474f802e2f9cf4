//! Diagnostic logging on stderr
//!
//! Answers go to stdout; everything emitted through `tracing` goes to stderr
//! so that `--quiet` output stays machine-readable.

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Install the global subscriber
///
/// `level` is the default for every target. Directives in `RUST_LOG` are
/// layered on top of it. A subscriber that is already installed is kept.
pub fn init(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let stderr_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
