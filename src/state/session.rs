#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// WebSocket connection status.
///
/// Lifecycle transitions are observable for logging and chrome; none of them
/// mutate board state. Reconnection policy is out of scope — a closed
/// channel stays closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

impl ConnectionStatus {
    /// Whether messages can currently flow.
    #[must_use]
    pub fn is_connected(self) -> bool {
        self == Self::Connected
    }
}
