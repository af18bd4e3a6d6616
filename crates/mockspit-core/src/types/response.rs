//! Canned response types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Failure delivered in place of a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockError {
    /// Error domain, e.g. `"net.timeout"`
    pub domain: String,
    /// Domain specific error code
    pub code: i64,
    /// Human readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MockError {
    pub fn new(domain: impl Into<String>, code: i64) -> Self {
        Self {
            domain: domain.into(),
            code,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl fmt::Display for MockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{} error {}: {}", self.domain, self.code, message),
            None => write!(f, "{} error {}", self.domain, self.code),
        }
    }
}

impl std::error::Error for MockError {}

/// Errors raised while building a response body.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// Body file missing or unreadable
    #[error("failed to read response body from {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Body file is not UTF-8 text
    #[error("response body file {} is not valid UTF-8", .path.display())]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
    /// Structured body could not be serialized to JSON
    #[error("failed to serialize response body: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Cache storage policy attached to a delivered response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CachePolicy {
    Allowed,
    AllowedInMemoryOnly,
    /// Default: the client cache never stores a canned response
    #[default]
    NotAllowed,
}

/// Pre-registered response served in place of a real network call.
///
/// The body is resolved to bytes when the response is built and cannot be
/// changed afterwards. Matching fields and metadata are set with the
/// `with_*` / `matching_*` builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CannedResponse {
    body: Vec<u8>,
    headers: HashMap<String, String>,
    url_component: Option<String>,
    exact_url: Option<Url>,
    status: u16,
    error: Option<MockError>,
    cache_policy: CachePolicy,
}

impl CannedResponse {
    pub const DEFAULT_STATUS: u16 = 200;

    /// Use `body` verbatim.
    pub fn from_bytes(body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: body.into(),
            headers: HashMap::new(),
            url_component: None,
            exact_url: None,
            status: Self::DEFAULT_STATUS,
            error: None,
            cache_policy: CachePolicy::default(),
        }
    }

    /// Serialize `value` to JSON and use the result as the body.
    pub fn from_json<T: Serialize + ?Sized>(value: &T) -> Result<Self, ResponseError> {
        let body = serde_json::to_vec(value)?;
        Ok(Self::from_bytes(body))
    }

    /// Read the file at `path` and use its contents as the body.
    ///
    /// The file must exist and hold UTF-8 text; its bytes are not reinterpreted.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ResponseError> {
        let path = path.as_ref();
        let raw = std::fs::read(path).map_err(|source| ResponseError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(raw).map_err(|source| ResponseError::InvalidUtf8 {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_bytes(text.into_bytes()))
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Only match requests whose URL path contains `component` as a segment.
    pub fn matching_component(mut self, component: impl Into<String>) -> Self {
        self.url_component = Some(component.into());
        self
    }

    /// Only match requests whose URL equals `url`.
    pub fn matching_url(mut self, url: Url) -> Self {
        self.exact_url = Some(url);
        self
    }

    pub fn with_error(mut self, error: MockError) -> Self {
        self.error = Some(error);
        self
    }

    /// Let the client cache the delivered response.
    pub fn with_cache_policy(mut self, cache_policy: CachePolicy) -> Self {
        self.cache_policy = cache_policy;
        self
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn url_component(&self) -> Option<&str> {
        self.url_component.as_deref()
    }

    pub fn exact_url(&self) -> Option<&Url> {
        self.exact_url.as_ref()
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn error(&self) -> Option<&MockError> {
        self.error.as_ref()
    }

    pub fn cache_policy(&self) -> CachePolicy {
        self.cache_policy
    }

    /// True when a non-empty URL component is required for a match.
    pub fn has_url_component(&self) -> bool {
        self.url_component.as_deref().is_some_and(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;
    use std::error::Error;
    use std::io::Write;

    fn dummy_fixture() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/dummy.json")
    }

    #[rstest]
    fn test_from_json_with_metadata() {
        let error = MockError::new("au.com.test.domain", 150);
        let response = CannedResponse::from_json(&json!({"test": "blah"}))
            .expect("Should serialize")
            .with_header("Content-Type", "application/json; charset=utf-8")
            .with_status(404)
            .with_error(error.clone());

        let body: serde_json::Value =
            serde_json::from_slice(response.body()).expect("Body should be JSON");
        assert_eq!(body, json!({"test": "blah"}));
        assert_eq!(
            response.headers().get("Content-Type").map(String::as_str),
            Some("application/json; charset=utf-8")
        );
        assert_eq!(response.status(), 404);
        assert_eq!(response.error(), Some(&error));
    }

    #[rstest]
    fn test_from_bytes_defaults() {
        let response = CannedResponse::from_bytes("hi");
        assert_eq!(response.body(), b"hi");
        assert_eq!(response.status(), 200);
        assert!(response.headers().is_empty());
        assert_eq!(response.url_component(), None);
        assert_eq!(response.exact_url(), None);
        assert_eq!(response.error(), None);
        assert_eq!(response.cache_policy(), CachePolicy::NotAllowed);
    }

    #[rstest]
    #[case("\"allowed\"", CachePolicy::Allowed)]
    #[case("\"allowedInMemoryOnly\"", CachePolicy::AllowedInMemoryOnly)]
    #[case("\"notAllowed\"", CachePolicy::NotAllowed)]
    fn test_cache_policy_deserialize(#[case] json: &str, #[case] expected: CachePolicy) {
        let policy: CachePolicy = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(policy, expected);
        let response = CannedResponse::from_bytes("hi").with_cache_policy(policy);
        assert_eq!(response.cache_policy(), expected);
    }

    #[rstest]
    fn test_from_file_reads_contents_verbatim() {
        let response = CannedResponse::from_file(dummy_fixture()).expect("Fixture should load");
        let body: serde_json::Value =
            serde_json::from_slice(response.body()).expect("Body should be JSON");
        assert_eq!(body, json!({"foo": "bar"}));
    }

    #[rstest]
    fn test_from_file_missing() {
        let result = CannedResponse::from_file("/definitely/not/here.json");
        let err = result.unwrap_err();
        assert!(matches!(err, ResponseError::ReadFile { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
        assert!(err.source().is_some());
    }

    #[rstest]
    fn test_from_file_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(&[0x7b, 0xff, 0xfe, 0x7d]).expect("write");

        let err = CannedResponse::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ResponseError::InvalidUtf8 { .. }));
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some(""), false)]
    #[case(Some("Stops.ashx"), true)]
    fn test_has_url_component(#[case] component: Option<&str>, #[case] expected: bool) {
        let mut response = CannedResponse::from_bytes(Vec::new());
        if let Some(component) = component {
            response = response.matching_component(component);
        }
        assert_eq!(response.has_url_component(), expected);
    }

    #[rstest]
    fn test_with_headers_extends() {
        let response = CannedResponse::from_bytes(Vec::new())
            .with_header("A", "1")
            .with_headers([("B", "2"), ("A", "3")]);
        assert_eq!(response.headers().len(), 2);
        assert_eq!(response.headers().get("A").map(String::as_str), Some("3"));
    }

    #[rstest]
    #[case(MockError::new("net", 7), "net error 7")]
    #[case(MockError::new("net", -1).with_message("offline"), "net error -1: offline")]
    fn test_mock_error_display(#[case] error: MockError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn test_mock_error_deserialize_without_message() {
        let error: MockError =
            serde_json::from_str(r#"{"domain": "test", "code": 150}"#).expect("Should deserialize");
        assert_eq!(error, MockError::new("test", 150));
    }
}
