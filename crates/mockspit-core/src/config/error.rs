//! Error types for fixture loading.

use crate::types::response::ResponseError;
use std::path::PathBuf;
use thiserror::Error;

/// Fixture loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Unknown file type
    #[error("Unknown file type: {0}")]
    UnknownFileType(String),
    /// Fixture file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Invalid glob pattern
    #[error("Invalid fixture pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    /// Matched path could not be accessed
    #[error("Failed to list fixtures: {0}")]
    Glob(#[from] glob::GlobError),
    /// `url` of an exact fixture is not a valid URL
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// More than one of `body`, `text` and `file` given
    #[error("Fixture declares more than one body source: {}", .sources.join(", "))]
    AmbiguousBody { sources: Vec<&'static str> },
    /// Field not allowed in the fixture set it appears in
    #[error("'{field}' is not allowed in {set} fixtures")]
    MisplacedField {
        set: &'static str,
        field: &'static str,
    },
    /// Field required by the fixture set is missing
    #[error("{set} fixtures require '{field}'")]
    MissingField {
        set: &'static str,
        field: &'static str,
    },
    /// Response body could not be built
    #[error(transparent)]
    Response(#[from] ResponseError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error;

    #[rstest]
    fn test_config_error_json_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = ConfigError::from(json_err);
        assert!(error.to_string().contains("JSON parsing error"));
        assert!(error.source().is_some());
    }

    #[rstest]
    fn test_config_error_yaml_display() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("invalid: yaml: [").unwrap_err();
        let error = ConfigError::from(yaml_err);
        assert!(error.to_string().contains("YAML parsing error"));
        assert!(matches!(error, ConfigError::Yaml(_)));
    }

    #[rstest]
    #[case("test.txt")]
    #[case("unknown.extension")]
    #[case("")]
    fn test_config_error_unknown_file_type_display(#[case] path: &str) {
        let error = ConfigError::UnknownFileType(path.to_string());
        let display = error.to_string();
        assert!(display.contains("Unknown file type"));
        assert!(display.contains(path));
        assert!(error.source().is_none());
    }

    #[rstest]
    fn test_config_error_invalid_url_display() {
        let source = url::Url::parse("not a url").unwrap_err();
        let error = ConfigError::InvalidUrl {
            url: "not a url".to_string(),
            source,
        };
        assert!(error.to_string().contains("'not a url'"));
        assert!(error.source().is_some());
    }

    #[rstest]
    fn test_config_error_ambiguous_body_display() {
        let error = ConfigError::AmbiguousBody {
            sources: vec!["body", "file"],
        };
        assert_eq!(
            error.to_string(),
            "Fixture declares more than one body source: body, file"
        );
    }

    #[rstest]
    #[case(
        ConfigError::MisplacedField { set: "component", field: "url" },
        "'url' is not allowed in component fixtures"
    )]
    #[case(
        ConfigError::MissingField { set: "exact", field: "url" },
        "exact fixtures require 'url'"
    )]
    fn test_config_error_fixture_field_display(#[case] error: ConfigError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
        assert!(error.source().is_none());
    }

    #[rstest]
    fn test_config_error_response_is_transparent() {
        let response_err = crate::types::response::CannedResponse::from_file("/missing/body.json")
            .unwrap_err();
        let expected = response_err.to_string();
        let error = ConfigError::from(response_err);
        assert_eq!(error.to_string(), expected);
    }
}
