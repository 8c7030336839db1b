//! Chooses between the debug and production transports.

use onyo_config::{ClientConfig, DEBUG_HOST, INTERPRETER_SETTING, SERVER_MODULE};
use thiserror::Error;
use tracing::debug;

use crate::descriptor::TransportDescriptor;

/// Log target for selection decisions.
const SELECTOR_TARGET: &str = "onyo_client::selector";

/// Picks the transport for this activation.
///
/// A set debug flag always wins and yields the fixed local TCP endpoint; the
/// settings store is not consulted. Otherwise the configured interpreter
/// spawns the server module, working from the extension's install directory.
///
/// The decision is pure: no transport is attempted here, and the only input
/// is the already-materialised [`ClientConfig`].
///
/// # Errors
///
/// Returns [`SelectionError::MissingSetting`] when the production topology
/// is selected but the interpreter-path setting is absent. This is fatal and
/// user-visible; no default is substituted.
pub fn select_transport(config: &ClientConfig) -> Result<TransportDescriptor, SelectionError> {
    if config.debug_mode() {
        let descriptor = TransportDescriptor::tcp(DEBUG_HOST, config.debug_port());
        debug!(target: SELECTOR_TARGET, %descriptor, "debug topology selected");
        return Ok(descriptor);
    }

    let interpreter = config
        .interpreter_path()
        .ok_or(SelectionError::MissingSetting {
            key: INTERPRETER_SETTING,
        })?;

    let descriptor = TransportDescriptor::process(
        interpreter.to_owned(),
        vec![String::from("-m"), String::from(SERVER_MODULE)],
        config.extension_dir().to_owned(),
    );
    debug!(target: SELECTOR_TARGET, %descriptor, "production topology selected");
    Ok(descriptor)
}

/// Errors raised while selecting a transport.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// A required setting is absent from the host's settings store.
    #[error("required setting '{key}' is not set")]
    MissingSetting {
        /// The namespaced settings key that was missing.
        key: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::Path;

    use onyo_config::DEFAULT_DEBUG_PORT;
    use rstest::rstest;

    use super::*;

    fn config(debug: bool, interpreter: Option<&str>) -> ClientConfig {
        let env: HashMap<String, String> = if debug {
            HashMap::from([(onyo_config::DEBUG_MODE_ENV.to_owned(), String::from("true"))])
        } else {
            HashMap::new()
        };
        let settings: HashMap<String, String> = interpreter
            .map(|path| HashMap::from([(INTERPRETER_SETTING.to_owned(), path.to_owned())]))
            .unwrap_or_default();
        ClientConfig::resolve(&env, &settings, Path::new("/ext/onyo"))
            .expect("config should resolve")
    }

    #[rstest]
    fn debug_flag_yields_fixed_tcp_endpoint() {
        let descriptor = select_transport(&config(true, None)).expect("selection succeeds");
        assert_eq!(
            descriptor,
            TransportDescriptor::tcp("127.0.0.1", DEFAULT_DEBUG_PORT)
        );
    }

    #[rstest]
    fn debug_flag_ignores_settings_store() {
        let descriptor = select_transport(&config(true, Some("/usr/bin/python3")))
            .expect("selection succeeds");
        assert!(matches!(descriptor, TransportDescriptor::Tcp { .. }));
    }

    #[rstest]
    fn production_spawns_configured_interpreter() {
        let descriptor = select_transport(&config(false, Some("/usr/bin/python3")))
            .expect("selection succeeds");
        let TransportDescriptor::Process {
            command,
            args,
            working_dir,
        } = descriptor
        else {
            panic!("expected process descriptor");
        };
        assert_eq!(command.as_str(), "/usr/bin/python3");
        assert_eq!(args, vec!["-m", "onyo_lsp"]);
        assert_eq!(working_dir.as_str(), "/ext/onyo");
    }

    #[rstest]
    fn production_without_interpreter_fails_fast() {
        let error = select_transport(&config(false, None)).expect_err("selection must fail");
        assert_eq!(
            error,
            SelectionError::MissingSetting {
                key: "python.pythonPath"
            }
        );
    }
}
