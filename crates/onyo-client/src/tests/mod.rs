//! Shared fixtures and helpers for lifecycle tests.

mod support;

use std::collections::HashMap;
use std::path::Path;

use onyo_config::{ClientConfig, DEBUG_MODE_ENV, INTERPRETER_SETTING};

pub use support::{EngineCall, RecordingEngine};

/// Config that selects the debug topology against the given port.
pub fn debug_config(port: u16) -> ClientConfig {
    let env: HashMap<String, String> =
        HashMap::from([(DEBUG_MODE_ENV.to_owned(), String::from("true"))]);
    let settings: HashMap<String, String> = HashMap::new();
    ClientConfig::resolve(&env, &settings, Path::new("/ext/onyo"))
        .expect("config should resolve")
        .with_debug_port(port)
}

/// Config that selects the production topology.
pub fn production_config(interpreter: Option<&str>, extension_dir: &Path) -> ClientConfig {
    let env: HashMap<String, String> = HashMap::new();
    let settings: HashMap<String, String> = interpreter
        .map(|path| HashMap::from([(INTERPRETER_SETTING.to_owned(), path.to_owned())]))
        .unwrap_or_default();
    ClientConfig::resolve(&env, &settings, extension_dir).expect("config should resolve")
}
