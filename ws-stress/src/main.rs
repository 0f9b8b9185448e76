//! Hammer the Deck web terminal with short-lived connections.
//!
//! ```bash
//! CONCURRENCY=50 WS_URL=ws://localhost:22222/ws cargo run -p ws-stress
//! ```

use clap::Parser;
use dotenvy::dotenv;
use ws_stress::{init_logging, run, Cli, StressConfig};

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    init_logging();

    let config = StressConfig::from(cli);
    let runtime = tokio::runtime::Runtime::new()?;
    run(&config, runtime.handle());
    Ok(())
}
