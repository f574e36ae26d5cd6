//! Shared data model and JSON codec for the game's realtime WS transport.
//!
//! This crate owns the wire representation spoken between the client and the
//! authoritative game server. Messages travel as JSON text; an inbound
//! server message is discriminated by which top-level key is present
//! (`changes`, `id`, or `player_join`), and unknown keys inside a known
//! shape are ignored so future server revisions don't break older clients.

use serde::{Deserialize, Serialize};

/// Error returned by [`decode_server_message`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The raw text is not valid JSON at all.
    #[error("invalid JSON payload: {0}")]
    Parse(#[from] serde_json::Error),
    /// Valid JSON, but no known discriminator key / payload shape matched.
    /// Callers drop these messages and keep the session alive.
    #[error("no recognized message shape")]
    UnknownShape,
}

/// Identifier assigned by the server to each connected player.
pub type PlayerId = u16;

/// A player's display color as 8-bit RGB channels, serialized as a 3-tuple.
pub type Color = (u8, u8, u8);

/// A board cell coordinate. Valid positions satisfy `x, y < board size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

/// The payload of an owned cell. Cells with no owner have no `Square` at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    /// Owning player; must resolve through the player registry.
    pub owner: PlayerId,
    /// The number displayed on the cell.
    pub number: u8,
}

/// An incremental add/clear instruction for one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareChange {
    /// `None` means the cell was cleared.
    pub id: Option<PlayerId>,
    /// Ignored when `id` is `None`.
    pub number: u8,
}

/// Static game parameters fixed at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cells per board side.
    pub size: u32,
    /// Highest number a square can carry.
    pub max_number: u8,
}

/// The full authoritative state sent once at session start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub players: Vec<(PlayerId, Color)>,
    pub squares: Vec<(Position, Square)>,
}

/// Login payload: this client's identity plus the initial snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    pub id: PlayerId,
    pub color: Color,
    pub spawn_point: Position,
    pub config: GameConfig,
    pub snapshot: Snapshot,
}

/// A message received from the server.
///
/// Variants are tried in order against the parsed JSON object, which gives
/// the key-presence discrimination the wire format relies on: a `changes`
/// key selects [`ServerMessage::Tick`], the login sibling-key cluster
/// selects [`ServerMessage::Login`], and `player_join` selects
/// [`ServerMessage::PlayerJoin`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ServerMessage {
    /// A batch of incremental square changes, applied in list order.
    Tick {
        changes: Vec<(Position, SquareChange)>,
    },
    /// The once-per-connection login snapshot.
    Login(Login),
    /// Another player joined after this client logged in.
    PlayerJoin { player_join: (PlayerId, Color) },
}

/// A message sent to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ClientMessage {
    /// The player clicked an in-bounds cell.
    Click { position: Position },
}

/// Decode one inbound text payload into a [`ServerMessage`].
///
/// # Errors
///
/// Returns [`CodecError::Parse`] for text that is not JSON and
/// [`CodecError::UnknownShape`] for JSON that matches no known message.
/// Neither is fatal to the session: both are drop-and-continue conditions.
pub fn decode_server_message(text: &str) -> Result<ServerMessage, CodecError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    serde_json::from_value(value).map_err(|_| CodecError::UnknownShape)
}

/// Encode an outbound message as JSON text.
///
/// # Panics
///
/// Never panics in practice; serializing these plain-data enums to a
/// `String` is infallible.
#[must_use]
pub fn encode_client_message(message: &ClientMessage) -> String {
    serde_json::to_string(message).unwrap_or_default()
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
