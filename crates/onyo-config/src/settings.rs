//! Typed snapshot of the values the bootstrap reads at activation time.
//!
//! The host hands the bootstrap an environment and a settings store; both
//! are consulted exactly once, when [`ClientConfig::resolve`] builds the
//! snapshot. Nothing in the client crate reads ambient state afterwards,
//! which keeps transport selection a pure decision over this struct.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::defaults::{DEBUG_MODE_ENV, DEFAULT_DEBUG_PORT, INTERPRETER_SETTING};
use crate::logging::LogFormat;

/// Read access to the process environment (or a test substitute).
pub trait EnvSource {
    /// Returns the value of the named variable when present.
    fn var(&self, key: &str) -> Option<String>;
}

/// [`EnvSource`] backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Read access to the host-managed settings store.
///
/// The bootstrap reads a single string-valued setting
/// ([`INTERPRETER_SETTING`]); the host supplies whatever backing store it
/// maintains for user configuration.
pub trait SettingsStore {
    /// Returns the string value stored under the namespaced key, if any.
    fn get_string(&self, key: &str) -> Option<String>;
}

impl SettingsStore for HashMap<String, String> {
    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Everything the client bootstrap needs to pick and establish a transport.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ClientConfig {
    debug_mode: bool,
    interpreter_path: Option<Utf8PathBuf>,
    extension_dir: Utf8PathBuf,
    debug_port: u16,
    log_format: LogFormat,
}

impl ClientConfig {
    /// Builds the snapshot from the supplied environment and settings store.
    ///
    /// The debug flag is true only when [`DEBUG_MODE_ENV`] holds exactly
    /// `"true"`. The interpreter path is captured as found; its absence is
    /// only an error once the selector needs it in the production topology.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonUtf8ExtensionDir`] when the extension
    /// install directory is not valid UTF-8.
    pub fn resolve(
        env: &dyn EnvSource,
        settings: &dyn SettingsStore,
        extension_dir: &Path,
    ) -> Result<Self, ConfigError> {
        let extension_dir = Utf8PathBuf::from_path_buf(extension_dir.to_path_buf())
            .map_err(|path| ConfigError::NonUtf8ExtensionDir { path })?;

        Ok(Self {
            debug_mode: env.var(DEBUG_MODE_ENV).is_some_and(|value| value == "true"),
            interpreter_path: settings.get_string(INTERPRETER_SETTING).map(Utf8PathBuf::from),
            extension_dir,
            debug_port: DEFAULT_DEBUG_PORT,
            log_format: LogFormat::default(),
        })
    }

    /// Builds the snapshot from the real process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonUtf8ExtensionDir`] when the extension
    /// install directory is not valid UTF-8.
    pub fn from_process_env(
        settings: &dyn SettingsStore,
        extension_dir: &Path,
    ) -> Result<Self, ConfigError> {
        Self::resolve(&ProcessEnv, settings, extension_dir)
    }

    /// Overrides the debug-topology port (tests bind an ephemeral port).
    #[must_use]
    pub fn with_debug_port(mut self, port: u16) -> Self {
        self.debug_port = port;
        self
    }

    /// Overrides the logging format.
    #[must_use]
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    /// Whether the client should use the debug topology.
    #[must_use]
    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Interpreter path from the settings store, when configured.
    #[must_use]
    pub fn interpreter_path(&self) -> Option<&Utf8Path> {
        self.interpreter_path.as_deref()
    }

    /// The extension's own install directory.
    #[must_use]
    pub fn extension_dir(&self) -> &Utf8Path {
        self.extension_dir.as_path()
    }

    /// Port the debug-topology server listens on.
    #[must_use]
    pub fn debug_port(&self) -> u16 {
        self.debug_port
    }

    /// Logging format requested by the host.
    #[must_use]
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

/// Errors raised while materialising the configuration snapshot.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The extension install directory could not be represented as UTF-8.
    #[error("extension directory '{}' is not valid UTF-8", path.display())]
    NonUtf8ExtensionDir {
        /// The offending directory path.
        path: PathBuf,
    },
}
