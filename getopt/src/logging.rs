use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber.
///
/// The filter comes from `OPTSCAN_LOG`, then `RUST_LOG`, and defaults to
/// `warn` so normal runs print nothing extra.
pub fn init() {
    let filter = EnvFilter::try_from_env("OPTSCAN_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
