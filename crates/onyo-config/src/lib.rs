//! Configuration surface for the Onyo language-client bootstrap.
#![deny(missing_docs)]
//!
//! The crate materialises the two values the bootstrap reads at activation
//! time — the debug-mode flag and the interpreter-path setting — into a typed
//! [`ClientConfig`] snapshot, together with the fixed defaults shared by the
//! client crate (debug endpoint, language id, server module). Environment and
//! settings lookups go through the [`EnvSource`] and [`SettingsStore`] traits
//! so tests can supply plain maps instead of mutating the process
//! environment.

mod defaults;
mod logging;
mod settings;

pub use defaults::{
    DEBUG_HOST, DEBUG_MODE_ENV, DEFAULT_DEBUG_PORT, INTERPRETER_SETTING, LANGUAGE_ID,
    OUTPUT_CHANNEL, SERVER_MODULE,
};
pub use logging::{LogFormat, LogFormatParseError};
pub use settings::{ClientConfig, ConfigError, EnvSource, ProcessEnv, SettingsStore};
