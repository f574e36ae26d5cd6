//! Board state and viewport engine for the grid game client.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns
//! the client-side view of the shared board: applying the server's snapshot
//! and incremental changes, maintaining pan/zoom viewport state, turning raw
//! pointer/wheel events into viewport mutations or click intents, and
//! rendering the grid. The host layer is responsible only for wiring DOM
//! events to the engine and forwarding the resulting [`engine::Action`]s to
//! the server channel.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`grid`] | Authoritative local board state and player registry |
//! | [`viewport`] | Pan/zoom viewport and coordinate conversions |
//! | [`input`] | Input event types and the drag state machine |
//! | [`render`] | Grid rendering onto a 2D canvas context |
//! | [`consts`] | Shared numeric constants (zoom limits, cell geometry) |

pub mod consts;
pub mod engine;
pub mod grid;
pub mod input;
pub mod render;
pub mod viewport;
