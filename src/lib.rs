//! # gridgame-client
//!
//! WASM client for the realtime grid-claim game. The server is authoritative:
//! it sends a login snapshot followed by incremental square changes, and the
//! client sends back click intents for in-bounds cells.
//!
//! This crate contains the WebSocket channel, the message dispatch glue, and
//! session state. It integrates with the `board` crate, which owns the grid
//! store, viewport transform, and rendering.

pub mod net;
pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod app;
