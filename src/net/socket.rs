//! Browser WebSocket channel.
//!
//! Owns the socket lifecycle: connect, forward outbound text from a shared
//! sender channel, and dispatch inbound frames into the engine. All traffic
//! is fire-and-forget — no acknowledgement, retry, or backpressure; inbound
//! messages are applied strictly in arrival order. Reconnection is out of
//! scope: when the socket closes, the session is over.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::channel::mpsc;
use futures::{SinkExt, StreamExt};
use gloo_net::websocket::Message;
use gloo_net::websocket::futures::WebSocket;

use board::engine::Engine;

use crate::net::dispatch;
use crate::state::session::ConnectionStatus;

/// Queue one outbound text payload.
///
/// Returns `false` if the channel is closed (no active connection).
pub fn send_text(tx: &mpsc::UnboundedSender<String>, text: String) -> bool {
    tx.unbounded_send(text).is_ok()
}

/// Open the socket and spawn its lifecycle as a local async task.
///
/// Returns the sender half used to queue outbound messages.
pub fn spawn_socket(
    url: String,
    engine: Rc<RefCell<Engine>>,
    status: Rc<Cell<ConnectionStatus>>,
) -> mpsc::UnboundedSender<String> {
    let (tx, rx) = mpsc::unbounded::<String>();
    wasm_bindgen_futures::spawn_local(socket_loop(url, engine, status, rx));
    tx
}

async fn socket_loop(
    url: String,
    engine: Rc<RefCell<Engine>>,
    status: Rc<Cell<ConnectionStatus>>,
    mut rx: mpsc::UnboundedReceiver<String>,
) {
    status.set(ConnectionStatus::Connecting);

    let ws = match WebSocket::open(&url) {
        Ok(ws) => ws,
        Err(e) => {
            log::error!("failed to open socket to {url}: {e}");
            status.set(ConnectionStatus::Disconnected);
            return;
        }
    };

    status.set(ConnectionStatus::Connected);
    log::info!("socket connected: {url}");

    let (mut ws_write, mut ws_read) = ws.split();

    // Forward outgoing messages from our channel to the socket.
    let send_task = async {
        while let Some(text) = rx.next().await {
            if ws_write.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: each inbound frame is dispatched on its own; a bad one
    // never disrupts the frames after it.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    dispatch::handle_text(&mut engine.borrow_mut().core, &text);
                }
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    log::warn!("socket receive error: {e}");
                    break;
                }
            }
        }
    };

    // When either side finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    status.set(ConnectionStatus::Disconnected);
    log::info!("socket closed");
}
