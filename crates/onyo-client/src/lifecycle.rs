//! Activation and deactivation hooks for the host embedding.

use onyo_config::ClientConfig;
use tracing::debug;

use crate::client::ClientHandle;
use crate::engine::ProtocolEngine;
use crate::errors::ActivationError;
use crate::options::ClientOptions;
use crate::selector::select_transport;
use crate::state::ClientPhase;

/// Log target for lifecycle hooks.
const LIFECYCLE_TARGET: &str = "onyo_client::lifecycle";

/// Owns the single client instance across one activation/deactivation cycle.
///
/// The host calls [`activate`] once at extension activation and
/// [`deactivate`] once at shutdown, serially. The optional handle held here
/// is the only shared mutable state in the crate; holding it in an owned
/// container rather than a global keeps the lifecycle transitions explicit
/// and testable.
///
/// [`activate`] blocks until the transport is established and the handshake
/// has completed, so a deactivation can never observe a start in flight:
/// it either finds a running client or nothing.
///
/// [`activate`]: Self::activate
/// [`deactivate`]: Self::deactivate
#[derive(Debug, Default)]
pub struct ClientLifecycle {
    client: Option<ClientHandle>,
}

/// What [`ClientLifecycle::deactivate`] found and did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// No client was running; nothing happened.
    NotRunning,
    /// The running client was stopped and its transport released.
    Stopped,
}

impl ClientLifecycle {
    /// Builds a lifecycle with no client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a transport, builds the client, and starts it.
    ///
    /// On success the handle is stored and the client is `Running`. On any
    /// failure nothing is stored, so a subsequent call starts from a clean
    /// state.
    ///
    /// # Errors
    ///
    /// Returns [`ActivationError::AlreadyActive`] when a client from a
    /// previous activation has not been deactivated;
    /// [`ActivationError::Configuration`] when the production topology lacks
    /// the interpreter-path setting; [`ActivationError::Transport`] and
    /// [`ActivationError::Handshake`] when the start itself fails.
    pub fn activate(
        &mut self,
        config: &ClientConfig,
        engine: Box<dyn ProtocolEngine>,
    ) -> Result<(), ActivationError> {
        if self.client.is_some() {
            return Err(ActivationError::AlreadyActive);
        }

        let descriptor = select_transport(config)?;
        let mut handle = ClientHandle::new(descriptor, ClientOptions::onyo(), engine);
        handle.start()?;

        debug!(
            target: LIFECYCLE_TARGET,
            descriptor = %handle.descriptor(),
            "activation complete"
        );
        self.client = Some(handle);
        Ok(())
    }

    /// Stops the running client, if any.
    ///
    /// Calling this without a prior successful [`activate`](Self::activate)
    /// is an idempotent no-op, not an error. When a client is running its
    /// protocol shutdown runs, the transport is closed (terminating a
    /// spawned server), and the handle leaves the lifecycle.
    pub fn deactivate(&mut self) -> ShutdownOutcome {
        match self.client.take() {
            None => ShutdownOutcome::NotRunning,
            Some(mut handle) => {
                handle.stop();
                debug!(target: LIFECYCLE_TARGET, "deactivation complete");
                ShutdownOutcome::Stopped
            }
        }
    }

    /// Whether a client is currently held.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.client.is_some()
    }

    /// Lifecycle phase of the held client, if any.
    #[must_use]
    pub fn phase(&self) -> Option<ClientPhase> {
        self.client.as_ref().map(ClientHandle::phase)
    }
}
