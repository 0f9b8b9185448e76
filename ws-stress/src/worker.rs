//! One simulated client: connect, send the exit command, wait, close.

use futures_util::SinkExt;
use std::time::Duration;
use thiserror::Error;
use tokio::time::{sleep, timeout};
use tokio_tungstenite::{
    connect_async,
    tungstenite::{
        self,
        client::IntoClientRequest,
        http::{header::InvalidHeaderValue, HeaderValue, StatusCode},
        Message,
    },
};
use tracing::debug;

use crate::StressConfig;

/// Header the daemon reads the shared token from.
pub const TOKEN_HEADER: &str = "X-Deck-Token";

/// Text sent on every connection; ends the remote shell.
pub const EXIT_COMMAND: &str = "\nexit\n";

/// Anything that stopped a worker before it closed its connection.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("token is not a valid header value")]
    InvalidToken(#[from] InvalidHeaderValue),
    #[error("connection timed out after {0:?}")]
    ConnectTimeout(Duration),
    #[error("handshake rejected with HTTP {0}")]
    Rejected(StatusCode),
    #[error(transparent)]
    WebSocket(tungstenite::Error),
}

impl From<tungstenite::Error> for WorkerError {
    fn from(err: tungstenite::Error) -> Self {
        match err {
            tungstenite::Error::Http(response) => WorkerError::Rejected(response.status()),
            other => WorkerError::WebSocket(other),
        }
    }
}

/// Drive a single client through its lifecycle.
///
/// Nothing is read back from the server. Only connection establishment is
/// bounded by `connect_timeout`.
pub async fn run_client(index: usize, config: &StressConfig) -> Result<(), WorkerError> {
    let mut request = config.url.as_str().into_client_request()?;
    request
        .headers_mut()
        .insert(TOKEN_HEADER, HeaderValue::from_str(&config.token)?);

    let (mut ws, _) = timeout(config.connect_timeout, connect_async(request))
        .await
        .map_err(|_| WorkerError::ConnectTimeout(config.connect_timeout))??;
    debug!(client = index, "connected");

    ws.send(Message::Text(EXIT_COMMAND.to_string())).await?;
    debug!(client = index, "sent exit command");

    sleep(config.hold).await;
    ws.close(None).await?;
    debug!(client = index, "closed");
    Ok(())
}
