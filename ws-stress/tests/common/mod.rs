//! Stand-in for the daemon's `/ws` endpoint.
//!
//! Mirrors its token check (401 on mismatch). Each accepted connection is
//! reported once it ends, as a [`Session`] listing the token the client
//! presented and every frame with its arrival time.

#![allow(dead_code)]

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::{SocketAddr, TcpListener as StdListener};
use std::time::{Duration, Instant};
use tokio::{runtime::Runtime, sync::mpsc};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame {
    Text(String),
    Close,
}

/// One connection as the server saw it. Times are measured from the moment
/// the handshake request arrived, before the client could send anything.
#[derive(Clone, Debug)]
pub struct Session {
    pub token: Option<String>,
    pub frames: Vec<(Frame, Duration)>,
}

impl Session {
    pub fn texts(&self) -> Vec<&str> {
        self.frames
            .iter()
            .filter_map(|(frame, _)| match frame {
                Frame::Text(text) => Some(text.as_str()),
                Frame::Close => None,
            })
            .collect()
    }
}

#[derive(Clone)]
struct Fixture {
    expected_token: Option<String>,
    tx: mpsc::UnboundedSender<Session>,
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    headers: HeaderMap,
    State(fixture): State<Fixture>,
) -> Response {
    let started = Instant::now();
    let token = headers
        .get("x-deck-token")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    if let Some(expected) = &fixture.expected_token {
        if token.as_deref() != Some(expected.as_str()) {
            return StatusCode::UNAUTHORIZED.into_response();
        }
    }
    ws.on_upgrade(move |socket| record(socket, started, token, fixture.tx))
}

async fn record(
    mut socket: WebSocket,
    started: Instant,
    token: Option<String>,
    tx: mpsc::UnboundedSender<Session>,
) {
    let mut frames = Vec::new();
    while let Some(Ok(msg)) = socket.recv().await {
        match msg {
            Message::Text(text) => frames.push((Frame::Text(text), started.elapsed())),
            Message::Close(_) => {
                frames.push((Frame::Close, started.elapsed()));
                break;
            }
            _ => {}
        }
    }
    let _ = tx.send(Session { token, frames });
}

/// Serve the fixture on an ephemeral port of `rt`.
pub fn spawn_daemon(
    rt: &Runtime,
    expected_token: Option<&str>,
) -> (SocketAddr, mpsc::UnboundedReceiver<Session>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let fixture = Fixture {
        expected_token: expected_token.map(str::to_owned),
        tx,
    };
    let app = Router::new()
        .route("/ws", get(ws_handler))
        .with_state(fixture);
    let listener = rt
        .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
        .unwrap();
    let addr = listener.local_addr().unwrap();
    rt.spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, rx)
}

/// Wait for `count` finished sessions, then make sure no other arrives.
pub fn collect(
    rt: &Runtime,
    rx: &mut mpsc::UnboundedReceiver<Session>,
    count: usize,
) -> Vec<Session> {
    rt.block_on(async {
        let mut out = Vec::new();
        while out.len() < count {
            match tokio::time::timeout(Duration::from_secs(2), rx.recv()).await {
                Ok(Some(session)) => out.push(session),
                _ => break,
            }
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
        while let Ok(extra) = rx.try_recv() {
            out.push(extra);
        }
        out
    })
}

/// A local address nothing is listening on.
pub fn unreachable_url() -> String {
    let listener = StdListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("ws://{addr}/ws")
}
