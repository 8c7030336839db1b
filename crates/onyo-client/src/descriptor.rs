//! Declarative description of how to reach the language server.

use std::fmt;

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// How the client establishes its byte-stream transport to the server.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "transport", rename_all = "snake_case")]
pub enum TransportDescriptor {
    /// Connect to a server already listening on a local socket
    /// (debug topology).
    Tcp {
        /// Host the server listens on.
        host: String,
        /// Port the server listens on.
        port: u16,
    },
    /// Spawn the server as a child process and use its stdio
    /// (production topology).
    Process {
        /// Executable used to launch the server.
        command: Utf8PathBuf,
        /// Arguments passed to the executable, in order.
        args: Vec<String>,
        /// Working directory for the spawned process.
        working_dir: Utf8PathBuf,
    },
}

impl TransportDescriptor {
    /// Builds a TCP descriptor.
    #[must_use]
    pub fn tcp(host: impl Into<String>, port: u16) -> Self {
        Self::Tcp {
            host: host.into(),
            port,
        }
    }

    /// Builds a child-process descriptor.
    #[must_use]
    pub fn process(
        command: impl Into<Utf8PathBuf>,
        args: Vec<String>,
        working_dir: impl Into<Utf8PathBuf>,
    ) -> Self {
        Self::Process {
            command: command.into(),
            args,
            working_dir: working_dir.into(),
        }
    }
}

impl fmt::Display for TransportDescriptor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tcp { host, port } => write!(formatter, "tcp://{host}:{port}"),
            Self::Process { command, .. } => write!(formatter, "process:{command}"),
        }
    }
}
