//! The single client instance bound to one transport descriptor.

use lsp_types::InitializeResult;
use tracing::{debug, warn};

use crate::descriptor::TransportDescriptor;
use crate::engine::ProtocolEngine;
use crate::errors::ActivationError;
use crate::options::ClientOptions;
use crate::state::{ClientPhase, ClientState};
use crate::transport::Transport;

/// Log target for client lifecycle operations.
pub(crate) const CLIENT_TARGET: &str = "onyo_client::client";

/// Handle to the one client instance of an activation cycle.
///
/// The handle owns its transport descriptor, the fixed [`ClientOptions`],
/// the protocol engine, and the established transport once [`start`] has
/// succeeded. It is created at most once per activation and stopped at most
/// once per deactivation by [`ClientLifecycle`].
///
/// [`start`]: Self::start
/// [`ClientLifecycle`]: crate::ClientLifecycle
#[derive(Debug)]
pub struct ClientHandle {
    descriptor: TransportDescriptor,
    options: ClientOptions,
    engine: Box<dyn ProtocolEngine>,
    state: ClientState,
}

impl ClientHandle {
    /// Builds an unstarted handle.
    #[must_use]
    pub fn new(
        descriptor: TransportDescriptor,
        options: ClientOptions,
        engine: Box<dyn ProtocolEngine>,
    ) -> Self {
        Self {
            descriptor,
            options,
            engine,
            state: ClientState::Uninitialized,
        }
    }

    /// Establishes the transport and runs the engine handshake.
    ///
    /// Both steps block until complete; a handle that returns from `start`
    /// is either `Running` or back to `Uninitialized` with the failure
    /// surfaced, never stuck in `Starting`.
    ///
    /// # Errors
    ///
    /// Returns [`ActivationError::AlreadyActive`] when the handle is not in
    /// its initial state, [`ActivationError::Transport`] when establishment
    /// fails, and [`ActivationError::Handshake`] when the engine reports a
    /// negotiation failure. After any error no transport is retained.
    pub fn start(&mut self) -> Result<InitializeResult, ActivationError> {
        if !matches!(self.state, ClientState::Uninitialized) {
            return Err(ActivationError::AlreadyActive);
        }
        self.state = ClientState::Starting;

        let mut transport = match Transport::establish(&self.descriptor) {
            Ok(transport) => transport,
            Err(error) => {
                self.state = ClientState::Uninitialized;
                return Err(error.into());
            }
        };

        match self.engine.handshake(&mut transport, &self.options) {
            Ok(result) => {
                debug!(
                    target: CLIENT_TARGET,
                    descriptor = %self.descriptor,
                    server = result
                        .server_info
                        .as_ref()
                        .map_or("<unnamed>", |info| info.name.as_str()),
                    "client started"
                );
                self.state = ClientState::Running { transport };
                Ok(result)
            }
            Err(error) => {
                // Do not keep a half-negotiated channel around.
                transport.close();
                self.state = ClientState::Uninitialized;
                Err(error.into())
            }
        }
    }

    /// Runs the engine shutdown exchange and tears the transport down.
    ///
    /// For a process transport this terminates the spawned server. Engine
    /// shutdown failures are logged and swallowed so teardown always
    /// completes. Calling `stop` on a handle that is not running is a no-op.
    pub fn stop(&mut self) {
        match std::mem::replace(&mut self.state, ClientState::Stopping) {
            ClientState::Running { mut transport } => {
                if let Err(error) = self.engine.shutdown(&mut transport) {
                    warn!(
                        target: CLIENT_TARGET,
                        %error,
                        "protocol shutdown failed, closing transport anyway"
                    );
                }
                transport.close();
                self.state = ClientState::Stopped;
                debug!(
                    target: CLIENT_TARGET,
                    descriptor = %self.descriptor,
                    "client stopped"
                );
            }
            // Not running: put the displaced state back untouched.
            other => self.state = other,
        }
    }

    /// The transport descriptor this handle was built with.
    #[must_use]
    pub fn descriptor(&self) -> &TransportDescriptor {
        &self.descriptor
    }

    /// The fixed client options.
    #[must_use]
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// The externally observable lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> ClientPhase {
        self.state.phase()
    }
}
