//! Log output formats accepted by host embeddings.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Supported logging output formats.
///
/// The client logs into the editor's output channel, so the human-readable
/// format is the default; `Json` exists for embeddings that forward the
/// channel into a structured logging stack.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// Human-readable single line output.
    #[default]
    Compact,
    /// Structured JSON suitable for ingestion by logging stacks.
    Json,
}

/// Errors encountered while parsing a [`LogFormat`] from text.
pub type LogFormatParseError = strum::ParseError;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("compact", LogFormat::Compact)]
    #[case("json", LogFormat::Json)]
    #[case("JSON", LogFormat::Json)]
    fn parses_known_formats(#[case] input: &str, #[case] expected: LogFormat) {
        assert_eq!(LogFormat::from_str(input).ok(), Some(expected));
    }

    #[rstest]
    fn rejects_unknown_format() {
        assert!(LogFormat::from_str("verbose").is_err());
    }

    #[rstest]
    fn defaults_to_compact() {
        assert_eq!(LogFormat::default(), LogFormat::Compact);
    }
}
