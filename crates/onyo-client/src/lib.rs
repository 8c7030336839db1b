//! Client bootstrap for the Onyo language server.
#![deny(missing_docs)]
//!
//! The crate owns the two decisions the editor host delegates at activation
//! time: how to reach the language server (an already-listening TCP endpoint
//! in the debug topology, or a child process spawned from the configured
//! interpreter in production), and the start/stop lifecycle of the single
//! client instance. The LSP message protocol itself stays behind the
//! [`ProtocolEngine`] trait so tests and higher layers can inject
//! lightweight implementations without a real server on the other end.

mod client;
mod descriptor;
mod engine;
mod errors;
mod lifecycle;
mod options;
mod selector;
mod state;
mod transport;

#[cfg(test)]
mod tests;

pub use client::ClientHandle;
pub use descriptor::TransportDescriptor;
pub use engine::{HandshakeError, ProtocolEngine};
pub use errors::ActivationError;
pub use lifecycle::{ClientLifecycle, ShutdownOutcome};
pub use options::ClientOptions;
pub use selector::{SelectionError, select_transport};
pub use state::ClientPhase;
pub use transport::{Transport, TransportError};
