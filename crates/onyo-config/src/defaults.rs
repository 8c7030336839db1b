//! Fixed values shared by the bootstrap and the host embedding.
//!
//! These are deliberately constants rather than settings: the original
//! extension hard-codes the debug endpoint, the server module, and the
//! document-selector language, and nothing in the host is expected to vary
//! them at runtime.

/// Environment variable that switches the client into the debug topology.
///
/// The value must be exactly `"true"`; anything else leaves the client in
/// the production topology.
pub const DEBUG_MODE_ENV: &str = "ONYO_DEBUG_MODE";

/// Host the debug-topology server listens on.
pub const DEBUG_HOST: &str = "127.0.0.1";

/// Port the debug-topology server listens on.
pub const DEFAULT_DEBUG_PORT: u16 = 6001;

/// Namespaced settings key naming the interpreter used to spawn the server.
pub const INTERPRETER_SETTING: &str = "python.pythonPath";

/// Module the interpreter runs to start the language server (`-m` argument).
pub const SERVER_MODULE: &str = "onyo_lsp";

/// Language identifier the client attaches to.
pub const LANGUAGE_ID: &str = "onyo";

/// Label of the output channel the client logs into.
pub const OUTPUT_CHANNEL: &str = "[onyo]";
