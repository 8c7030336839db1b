//! Internal state machine for the client handle.

use crate::transport::Transport;

/// Internal state of the client instance.
///
/// `Starting` and `Stopping` exist transiently while [`start`] and [`stop`]
/// run; a failed start falls back to `Uninitialized` with the error
/// surfaced to the caller.
///
/// [`start`]: crate::ClientHandle::start
/// [`stop`]: crate::ClientHandle::stop
#[derive(Debug)]
pub(crate) enum ClientState {
    /// No transport has been established yet.
    Uninitialized,
    /// Transport establishment or handshake is in progress.
    Starting,
    /// Handshake completed; the transport is live.
    Running {
        /// The established duplex channel to the server.
        transport: Transport,
    },
    /// Shutdown exchange and transport teardown are in progress.
    Stopping,
    /// The transport has been torn down; the handle is spent.
    Stopped,
}

/// Externally observable lifecycle phase of the client handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientPhase {
    /// No transport has been established yet.
    Uninitialized,
    /// Transport establishment or handshake is in progress.
    Starting,
    /// Handshake completed; the transport is live.
    Running,
    /// Shutdown exchange and transport teardown are in progress.
    Stopping,
    /// The transport has been torn down; the handle is spent.
    Stopped,
}

impl ClientState {
    pub(crate) fn phase(&self) -> ClientPhase {
        match self {
            Self::Uninitialized => ClientPhase::Uninitialized,
            Self::Starting => ClientPhase::Starting,
            Self::Running { .. } => ClientPhase::Running,
            Self::Stopping => ClientPhase::Stopping,
            Self::Stopped => ClientPhase::Stopped,
        }
    }
}
