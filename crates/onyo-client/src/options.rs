//! Client options handed to the protocol engine at handshake time.

use lsp_types::DocumentFilter;
use onyo_config::{LANGUAGE_ID, OUTPUT_CHANNEL};

/// Document selector and presentation options for the client.
///
/// The selector is fixed for the process lifetime: file-backed and untitled
/// documents of the Onyo language id. The invariant that it is non-empty is
/// upheld by construction; there is no way to build an empty selector.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientOptions {
    /// Documents the client attaches to.
    pub document_selector: Vec<DocumentFilter>,
    /// Label of the output channel the client logs into.
    pub output_channel_name: String,
}

impl ClientOptions {
    /// Builds the fixed options for the Onyo client.
    #[must_use]
    pub fn onyo() -> Self {
        Self {
            document_selector: vec![
                language_filter("file"),
                language_filter("untitled"),
            ],
            output_channel_name: String::from(OUTPUT_CHANNEL),
        }
    }
}

fn language_filter(scheme: &str) -> DocumentFilter {
    DocumentFilter {
        language: Some(String::from(LANGUAGE_ID)),
        scheme: Some(String::from(scheme)),
        pattern: None,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn selector_covers_file_and_untitled_schemes() {
        let options = ClientOptions::onyo();
        let schemes: Vec<_> = options
            .document_selector
            .iter()
            .filter_map(|filter| filter.scheme.as_deref())
            .collect();
        assert_eq!(schemes, vec!["file", "untitled"]);
    }

    #[rstest]
    fn every_filter_targets_the_onyo_language() {
        let options = ClientOptions::onyo();
        assert!(!options.document_selector.is_empty());
        assert!(
            options
                .document_selector
                .iter()
                .all(|filter| filter.language.as_deref() == Some("onyo"))
        );
    }

    #[rstest]
    fn output_channel_is_labelled() {
        assert_eq!(ClientOptions::onyo().output_channel_name, "[onyo]");
    }
}
