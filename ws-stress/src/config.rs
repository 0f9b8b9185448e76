use clap::Parser;
use std::time::Duration;

/// Web terminal endpoint of a locally running daemon.
pub const DEFAULT_URL: &str = "ws://localhost:22222/ws";
/// Placeholder token; real daemons are started with their own.
pub const DEFAULT_TOKEN: &str = "your-secret-token";
/// Clients started when `CONCURRENCY` is unset.
pub const DEFAULT_CONCURRENCY: usize = 20;
/// Budget for TCP connect plus the WebSocket handshake.
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 5_000;
/// Pause between sending the exit command and closing.
pub const DEFAULT_HOLD_MS: u64 = 500;

#[derive(Debug, Parser)]
#[command(author, version, about)]
/// Open many short-lived connections to the Deck web terminal and tell each
/// shell to exit.
pub struct Cli {
    /// WebSocket endpoint of the web terminal
    #[arg(long, env = "WS_URL", default_value = DEFAULT_URL)]
    pub url: String,
    /// Token sent in the `X-Deck-Token` header
    #[arg(long, env = "DECK_DAEMON_TOKEN", default_value = DEFAULT_TOKEN, hide_env_values = true)]
    pub token: String,
    /// Number of simulated clients
    #[arg(long, env = "CONCURRENCY", default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,
    /// Upper bound on connecting and completing the handshake
    #[arg(long, default_value_t = DEFAULT_CONNECT_TIMEOUT_MS)]
    pub connect_timeout_ms: u64,
    /// How long to keep each connection open after sending the command
    #[arg(long, default_value_t = DEFAULT_HOLD_MS)]
    pub hold_ms: u64,
}

/// Settings shared read-only by every worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StressConfig {
    /// Target endpoint, `ws://` or `wss://`.
    pub url: String,
    /// Value of the `X-Deck-Token` header.
    pub token: String,
    /// Number of clients, one thread each.
    pub concurrency: usize,
    /// Bound on connection establishment.
    pub connect_timeout: Duration,
    /// Time the connection stays open after the command is sent.
    pub hold: Duration,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.into(),
            token: DEFAULT_TOKEN.into(),
            concurrency: DEFAULT_CONCURRENCY,
            connect_timeout: Duration::from_millis(DEFAULT_CONNECT_TIMEOUT_MS),
            hold: Duration::from_millis(DEFAULT_HOLD_MS),
        }
    }
}

impl From<Cli> for StressConfig {
    fn from(cli: Cli) -> Self {
        Self {
            url: cli.url,
            token: cli.token,
            concurrency: cli.concurrency,
            connect_timeout: Duration::from_millis(cli.connect_timeout_ms),
            hold: Duration::from_millis(cli.hold_ms),
        }
    }
}
