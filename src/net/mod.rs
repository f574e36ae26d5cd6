//! Network layer: message dispatch plus the browser WebSocket channel.

pub mod dispatch;

#[cfg(target_arch = "wasm32")]
pub mod socket;
