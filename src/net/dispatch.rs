//! Dispatch of decoded server messages into the board engine.
//!
//! This is the glue between the wire (`protocol`) and local state
//! (`board::engine::EngineCore`). It is deliberately transport-free so the
//! whole inbound path short of the socket itself can be tested natively.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use board::consts::CELL_SCALE;
use board::engine::EngineCore;
use protocol::{CodecError, Login, ServerMessage, decode_server_message};

/// Handle one raw inbound text payload.
///
/// Undecodable payloads are dropped without touching any state: invalid JSON
/// logs a warning, an unrecognized-but-valid shape logs at debug (future
/// message kinds must not abort the session). Decoded messages are applied
/// in arrival order; the channel's ordering is the only ordering guarantee.
pub fn handle_text(core: &mut EngineCore, text: &str) {
    match decode_server_message(text) {
        Ok(message) => apply_message(core, &message),
        Err(CodecError::Parse(e)) => log::warn!("dropping unparseable message: {e}"),
        Err(CodecError::UnknownShape) => log::debug!("dropping unknown message shape"),
    }
}

/// Apply one decoded server message to the engine.
pub fn apply_message(core: &mut EngineCore, message: &ServerMessage) {
    match message {
        ServerMessage::Tick { changes } => core.apply_changes(changes),
        ServerMessage::Login(login) => apply_login(core, login),
        ServerMessage::PlayerJoin { player_join: (id, color) } => {
            core.apply_player_join(*id, *color);
        }
    }
}

/// Board geometry derives from the login config: the board is `config.size`
/// cells per side and each cell spans `config.size * 0.05 * CELL_SCALE`
/// display units.
fn apply_login(core: &mut EngineCore, login: &Login) {
    let cell_size = f64::from(login.config.size) * 0.05 * CELL_SCALE;
    core.apply_snapshot(
        login.snapshot.clone(),
        login.id,
        login.spawn_point,
        login.config.size,
        cell_size,
    );
    log::info!(
        "logged in as player {} on a {}x{} board",
        login.id,
        login.config.size,
        login.config.size
    );
}
