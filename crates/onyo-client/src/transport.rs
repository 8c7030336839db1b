//! Transport establishment and teardown.
//!
//! Both topologies yield one duplex byte stream: a connected TCP socket, or
//! the stdio of a spawned child process. The same channel serves as reader
//! and writer; callers must not assume independent half-close semantics.

use std::io::{self, Read, Write};
use std::net::{Shutdown, TcpStream};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::thread;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::descriptor::TransportDescriptor;

/// Log target for transport operations.
pub(crate) const TRANSPORT_TARGET: &str = "onyo_client::transport";

/// Grace period before a lingering server child is forcibly killed.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(200);

/// An established duplex byte stream to the language server.
pub enum Transport {
    /// Connected socket; the one stream is both the read and write channel.
    Tcp(TcpStream),
    /// Spawned server child; its stdout is the read channel, its stdin the
    /// write channel. Both are `None` once the transport has been closed.
    Process {
        /// Handle to the spawned server.
        child: Child,
        /// Write half (the child's stdin).
        stdin: Option<ChildStdin>,
        /// Read half (the child's stdout).
        stdout: Option<ChildStdout>,
    },
}

impl Transport {
    /// Establishes the transport the descriptor names.
    ///
    /// The attempt is single-shot: a refused or timed-out connection and a
    /// failed spawn both surface immediately, with no retry loop.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Connect`] when the TCP endpoint cannot be
    /// reached, [`TransportError::BinaryNotFound`] when the server command
    /// does not exist, and [`TransportError::Spawn`] for any other spawn or
    /// stdio-capture failure.
    pub fn establish(descriptor: &TransportDescriptor) -> Result<Self, TransportError> {
        match descriptor {
            TransportDescriptor::Tcp { host, port } => Self::connect(host, *port),
            TransportDescriptor::Process {
                command,
                args,
                working_dir,
            } => Self::spawn(command.as_str(), args, working_dir.as_str()),
        }
    }

    fn connect(host: &str, port: u16) -> Result<Self, TransportError> {
        debug!(target: TRANSPORT_TARGET, host, port, "connecting to language server");
        let stream = TcpStream::connect((host, port)).map_err(|source| {
            TransportError::Connect {
                endpoint: format!("{host}:{port}"),
                source,
            }
        })?;
        debug!(target: TRANSPORT_TARGET, host, port, "language server connection established");
        Ok(Self::Tcp(stream))
    }

    fn spawn(command: &str, args: &[String], working_dir: &str) -> Result<Self, TransportError> {
        debug!(
            target: TRANSPORT_TARGET,
            command,
            ?args,
            working_dir,
            "spawning language server process"
        );

        let mut child = Command::new(command)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| {
                if source.kind() == io::ErrorKind::NotFound {
                    TransportError::BinaryNotFound {
                        command: command.to_owned(),
                        source,
                    }
                } else {
                    TransportError::Spawn {
                        message: format!("failed to start {command}"),
                        source,
                    }
                }
            })?;

        let stdin = child.stdin.take().ok_or_else(|| TransportError::Spawn {
            message: String::from("failed to capture stdin"),
            source: io::Error::other("no stdin"),
        })?;
        let stdout = child.stdout.take().ok_or_else(|| TransportError::Spawn {
            message: String::from("failed to capture stdout"),
            source: io::Error::other("no stdout"),
        })?;

        debug!(
            target: TRANSPORT_TARGET,
            command,
            pid = child.id(),
            "language server process spawned"
        );

        Ok(Self::Process {
            child,
            stdin: Some(stdin),
            stdout: Some(stdout),
        })
    }

    /// Tears the transport down.
    ///
    /// Sockets are shut down in both directions. For a spawned server the
    /// write half is dropped first so the child observes EOF, then the child
    /// is waited on with a short grace period and killed if it lingers.
    pub fn close(&mut self) {
        match self {
            Self::Tcp(stream) => {
                if let Err(error) = stream.shutdown(Shutdown::Both) {
                    debug!(target: TRANSPORT_TARGET, %error, "socket already shut down");
                }
            }
            Self::Process {
                child,
                stdin,
                stdout,
            } => {
                drop(stdin.take());
                drop(stdout.take());
                terminate_child(child);
            }
        }
    }
}

/// Waits for the child to exit, killing it after the grace period.
fn terminate_child(child: &mut Child) {
    match child.try_wait() {
        Ok(Some(status)) => {
            debug!(target: TRANSPORT_TARGET, ?status, "language server exited");
        }
        Ok(None) => {
            thread::sleep(SHUTDOWN_GRACE);
            match child.try_wait() {
                Ok(Some(status)) => {
                    debug!(
                        target: TRANSPORT_TARGET,
                        ?status,
                        "language server exited during grace period"
                    );
                }
                Ok(None) | Err(_) => {
                    warn!(
                        target: TRANSPORT_TARGET,
                        pid = child.id(),
                        "language server did not exit, killing"
                    );
                    let _ = child.kill();
                    let _ = child.wait();
                }
            }
        }
        Err(error) => {
            warn!(
                target: TRANSPORT_TARGET,
                %error,
                "failed to check process status, killing"
            );
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl Drop for Transport {
    fn drop(&mut self) {
        if let Self::Process { child, .. } = self {
            // A handle dropped without close() must not leak the server.
            if matches!(child.try_wait(), Ok(None) | Err(_)) {
                if let Err(error) = child.kill() {
                    warn!(
                        target: TRANSPORT_TARGET,
                        %error,
                        "failed to kill language server process on drop"
                    );
                } else {
                    let _ = child.wait();
                }
            }
        }
    }
}

impl Read for Transport {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Tcp(stream) => stream.read(buf),
            Self::Process { stdout, .. } => match stdout {
                Some(out) => out.read(buf),
                None => Ok(0),
            },
        }
    }
}

impl Write for Transport {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Tcp(stream) => stream.write(buf),
            Self::Process { stdin, .. } => match stdin {
                Some(input) => input.write(buf),
                None => Err(io::Error::new(
                    io::ErrorKind::NotConnected,
                    "transport closed",
                )),
            },
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Tcp(stream) => stream.flush(),
            Self::Process { stdin, .. } => match stdin {
                Some(input) => input.flush(),
                None => Ok(()),
            },
        }
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tcp(stream) => formatter
                .debug_struct("Transport::Tcp")
                .field("peer", &stream.peer_addr().ok())
                .finish(),
            Self::Process { child, .. } => formatter
                .debug_struct("Transport::Process")
                .field("pid", &child.id())
                .finish(),
        }
    }
}

/// Errors raised while establishing a transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The TCP endpoint refused or timed out.
    #[error("failed to connect to language server at {endpoint}: {source}")]
    Connect {
        /// The `host:port` pair that was tried.
        endpoint: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The server command was not found.
    #[error("language server command not found: {command}")]
    BinaryNotFound {
        /// The command that was not found.
        command: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The server process failed to spawn or expose its stdio.
    #[error("failed to spawn language server process: {message}")]
    Spawn {
        /// Description of the spawn failure.
        message: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}
