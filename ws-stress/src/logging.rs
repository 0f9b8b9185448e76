use std::io::{self, IsTerminal};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging to stderr.
///
/// Without `RUST_LOG` only warnings and errors are shown, which leaves one
/// line per failed client.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}
