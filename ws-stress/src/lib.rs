//! Connection stress injector for the Deck web terminal.
//!
//! [`run`] starts one OS thread per simulated client. Each thread drives a
//! [`worker::run_client`] future on a shared tokio runtime, so a slow
//! handshake only ever blocks its own thread. Failures are logged with the
//! client index and otherwise ignored.

pub mod config;
pub mod logging;
pub mod worker;

pub use config::{Cli, StressConfig};
pub use logging::init_logging;
pub use worker::{run_client, WorkerError, EXIT_COMMAND, TOKEN_HEADER};

use std::thread;
use tokio::runtime::Handle;
use tracing::{error, info};

/// Start `config.concurrency` clients and wait for all of them.
///
/// `runtime` must belong to a multi-thread runtime that outlives this call,
/// and this must not be called from inside an async task. Returns the number
/// of client threads that were joined.
pub fn run(config: &StressConfig, runtime: &Handle) -> usize {
    info!(url = %config.url, concurrency = config.concurrency, "starting clients");

    let joined = thread::scope(|scope| {
        let handles: Vec<_> = (0..config.concurrency)
            .filter_map(|index| {
                let spawned = thread::Builder::new()
                    .name(format!("ws-client-{index}"))
                    .spawn_scoped(scope, move || {
                        if let Err(err) = runtime.block_on(run_client(index, config)) {
                            error!(client = index, "client failed: {err}");
                        }
                    });
                match spawned {
                    Ok(handle) => Some((index, handle)),
                    Err(err) => {
                        error!(client = index, "client failed: could not start thread: {err}");
                        None
                    }
                }
            })
            .collect();

        let mut joined = 0;
        for (index, handle) in handles {
            if handle.join().is_err() {
                error!(client = index, "client failed: thread panicked");
            }
            joined += 1;
        }
        joined
    });

    info!(joined, "all clients finished");
    joined
}
