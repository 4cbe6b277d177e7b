//! Tracing subscriber set-up for the CLI

use tracing_subscriber::{EnvFilter, fmt};

/// Install a stderr subscriber
///
/// `RUST_LOG` wins when set; otherwise `default_level` is used. Logs go to
/// stderr so they never interleave with command output on stdout.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    // Ignore error if a global subscriber is already set (e.g., when running in tests)
    let _ = tracing::subscriber::set_global_default(subscriber);
}
