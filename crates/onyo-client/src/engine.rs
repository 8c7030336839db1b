//! Seam to the external protocol-client library.
//!
//! Message framing and capability negotiation are owned entirely by the
//! engine implementation; this crate only establishes the transport and
//! hands it over. Tests inject a recording stub, the production embedding
//! supplies its real LSP client machinery.

use std::error::Error;
use std::fmt;

use lsp_types::InitializeResult;
use thiserror::Error;

use crate::options::ClientOptions;
use crate::transport::Transport;

/// Behaviour required from the protocol-client library.
pub trait ProtocolEngine: Send {
    /// Runs the initial LSP handshake over the established transport and
    /// returns the server's negotiation result.
    fn handshake(
        &mut self,
        transport: &mut Transport,
        options: &ClientOptions,
    ) -> Result<InitializeResult, HandshakeError>;

    /// Runs the protocol-level shutdown exchange before the transport is
    /// torn down.
    fn shutdown(&mut self, transport: &mut Transport) -> Result<(), HandshakeError>;
}

impl fmt::Debug for dyn ProtocolEngine {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ProtocolEngine")
    }
}

/// Opaque failure reported by the protocol engine.
///
/// The bootstrap propagates these unchanged; it never inspects or recovers
/// from protocol-level failures.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HandshakeError {
    message: String,
    #[source]
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl HandshakeError {
    /// Builds an error without an underlying source.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Builds an error that wraps an underlying source.
    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Human-friendly description without the optional source.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}
