//! Error taxonomy surfaced by the activation facade.
//!
//! There is no local recovery anywhere in this crate: every failure aborts
//! activation, leaves no handle stored, and is surfaced to the host's
//! activation error channel. A later activation starts from a clean slate.

use thiserror::Error;

use crate::engine::HandshakeError;
use crate::selector::SelectionError;
use crate::transport::TransportError;

/// Errors returned by [`crate::ClientLifecycle`] and [`crate::ClientHandle`].
#[derive(Debug, Error)]
pub enum ActivationError {
    /// Transport selection failed before any transport was attempted.
    #[error(transparent)]
    Configuration(#[from] SelectionError),

    /// The transport could not be established.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The protocol engine reported a negotiation failure; propagated
    /// unchanged.
    #[error("protocol handshake failed: {0}")]
    Handshake(#[from] HandshakeError),

    /// A client already exists for this activation cycle.
    #[error("a language client is already active")]
    AlreadyActive,
}
