//! Recording protocol engine used in tests.

use std::sync::{Arc, Mutex};

use lsp_types::{InitializeResult, ServerInfo};

use crate::engine::{HandshakeError, ProtocolEngine};
use crate::options::ClientOptions;
use crate::transport::Transport;

/// Discriminates the kind of call recorded by the stub engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineCall {
    /// The initialize handshake was invoked.
    Handshake,
    /// The shutdown exchange was invoked.
    Shutdown,
}

/// Test double that records every engine call routed through it.
#[derive(Clone)]
pub struct RecordingEngine {
    shared: Arc<Mutex<RecordingState>>,
}

impl RecordingEngine {
    /// Creates an engine whose handshake and shutdown succeed.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Mutex::new(RecordingState::default())),
        }
    }

    /// Creates an engine that fails during the handshake.
    pub fn failing_handshake(message: impl Into<String>) -> Self {
        let engine = Self::new();
        with_state(&engine.shared, |state| {
            state.fail_handshake = Some(message.into());
        });
        engine
    }

    /// Creates an engine that fails during shutdown.
    pub fn failing_shutdown(message: impl Into<String>) -> Self {
        let engine = Self::new();
        with_state(&engine.shared, |state| {
            state.fail_shutdown = Some(message.into());
        });
        engine
    }

    /// Returns a handle that can be used to assert recorded calls.
    pub fn handle(&self) -> RecordingEngineHandle {
        RecordingEngineHandle {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl ProtocolEngine for RecordingEngine {
    fn handshake(
        &mut self,
        _transport: &mut Transport,
        options: &ClientOptions,
    ) -> Result<InitializeResult, HandshakeError> {
        with_state(&self.shared, |state| {
            state.calls.push(EngineCall::Handshake);
            state.seen_channel = Some(options.output_channel_name.clone());
            if let Some(message) = &state.fail_handshake {
                return Err(HandshakeError::new(message.clone()));
            }
            let mut result = InitializeResult::default();
            result.server_info = Some(ServerInfo {
                name: String::from("onyo-lsp-stub"),
                version: None,
            });
            Ok(result)
        })
    }

    fn shutdown(&mut self, _transport: &mut Transport) -> Result<(), HandshakeError> {
        with_state(&self.shared, |state| {
            state.calls.push(EngineCall::Shutdown);
            if let Some(message) = &state.fail_shutdown {
                return Err(HandshakeError::new(message.clone()));
            }
            Ok(())
        })
    }
}

/// Handle that exposes recorded state for assertions.
#[derive(Clone)]
pub struct RecordingEngineHandle {
    shared: Arc<Mutex<RecordingState>>,
}

impl RecordingEngineHandle {
    /// Returns the ordered list of calls the engine observed.
    pub fn calls(&self) -> Vec<EngineCall> {
        with_state(&self.shared, |state| state.calls.clone())
    }

    /// Output channel name seen during the handshake, if any.
    pub fn seen_channel(&self) -> Option<String> {
        with_state(&self.shared, |state| state.seen_channel.clone())
    }
}

fn with_state<R, F>(shared: &Arc<Mutex<RecordingState>>, action: F) -> R
where
    F: FnOnce(&mut RecordingState) -> R,
{
    let mut guard = shared.lock().unwrap_or_else(|poison| poison.into_inner());
    action(&mut guard)
}

#[derive(Debug, Default)]
struct RecordingState {
    calls: Vec<EngineCall>,
    seen_channel: Option<String>,
    fail_handshake: Option<String>,
    fail_shutdown: Option<String>,
}
