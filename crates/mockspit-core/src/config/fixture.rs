//! Declarative fixture files describing canned responses.
//!
//! A fixture file lists component-matched and exact-URL-matched responses:
//!
//! ```yaml
//! component:
//!   - urlComponent: Stops.ashx
//!     headers: { Content-Type: application/json }
//!     body: { ok: true }
//! exact:
//!   - url: mock://host/y
//!     text: hi
//!   - url: mock://host/z
//!     file: dummy.json
//!     error: { domain: test, code: 150 }
//! ```
//!
//! Component entries may not set `url`; exact entries must set `url` and may
//! not set `urlComponent`. A component entry without `urlComponent` matches
//! every request.
//!
//! Each entry takes its body from at most one of `body` (structured value
//! serialized as JSON), `text` (used verbatim) or `file` (read from disk,
//! relative to the fixture file). An entry without any of them has an empty body.
//! `cachePolicy` (`allowed`, `allowedInMemoryOnly`, `notAllowed`) defaults to
//! `notAllowed`.

use crate::config::error::ConfigError;
use crate::config::parser::parse_fixture;
use crate::mocks::registry::Registry;
use crate::types::response::{CachePolicy, CannedResponse, MockError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

const COMPONENT_SET: &str = "component";
const EXACT_SET: &str = "exact";

/// Single canned response entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseFixture {
    /// Path component to match (component entries)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_component: Option<String>,
    /// Full URL to match (exact entries)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// HTTP status code, 200 when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Response headers
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
    /// Structured body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    /// Raw text body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Path to the body file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Failure to deliver instead of the response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<MockError>,
    /// Client cache policy, `notAllowed` when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_policy: Option<CachePolicy>,
}

impl ResponseFixture {
    /// Build an entry of the `component` set.
    pub fn into_component(self, base_dir: &Path) -> Result<CannedResponse, ConfigError> {
        if self.url.is_some() {
            return Err(ConfigError::MisplacedField {
                set: COMPONENT_SET,
                field: "url",
            });
        }
        self.into_response(base_dir)
    }

    /// Build an entry of the `exact` set.
    pub fn into_exact(self, base_dir: &Path) -> Result<CannedResponse, ConfigError> {
        if self.url_component.is_some() {
            return Err(ConfigError::MisplacedField {
                set: EXACT_SET,
                field: "urlComponent",
            });
        }
        if self.url.is_none() {
            return Err(ConfigError::MissingField {
                set: EXACT_SET,
                field: "url",
            });
        }
        self.into_response(base_dir)
    }

    /// Build the canned response, resolving `file` against `base_dir`.
    pub fn into_response(self, base_dir: &Path) -> Result<CannedResponse, ConfigError> {
        let sources: Vec<&'static str> = [
            ("body", self.body.is_some()),
            ("text", self.text.is_some()),
            ("file", self.file.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect();
        if sources.len() > 1 {
            return Err(ConfigError::AmbiguousBody { sources });
        }

        let mut response = match (self.body, self.text, self.file) {
            (Some(body), _, _) => CannedResponse::from_json(&body)?,
            (_, Some(text), _) => CannedResponse::from_bytes(text),
            (_, _, Some(file)) => CannedResponse::from_file(base_dir.join(file))?,
            (None, None, None) => CannedResponse::from_bytes(Vec::new()),
        };

        if let Some(status) = self.status {
            response = response.with_status(status);
        }
        response = response.with_headers(self.headers);
        if let Some(component) = self.url_component {
            response = response.matching_component(component);
        }
        if let Some(url) = self.url {
            let parsed = Url::parse(&url).map_err(|source| ConfigError::InvalidUrl { url, source })?;
            response = response.matching_url(parsed);
        }
        if let Some(error) = self.error {
            response = response.with_error(error);
        }
        if let Some(cache_policy) = self.cache_policy {
            response = response.with_cache_policy(cache_policy);
        }

        Ok(response)
    }
}

/// Contents of one fixture file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureFile {
    /// Responses matched by URL path component
    #[serde(default)]
    pub component: Vec<ResponseFixture>,
    /// Responses matched by exact URL
    #[serde(default)]
    pub exact: Vec<ResponseFixture>,
}

impl FixtureFile {
    /// Read and parse the fixture file at `path`.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse_fixture(&content, path)
    }
}

/// Canned responses loaded from fixture files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fixtures {
    pub component: Vec<CannedResponse>,
    pub exact: Vec<CannedResponse>,
}

impl Fixtures {
    /// Load a single fixture file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut fixtures = Self::default();
        fixtures.append_file(path.as_ref())?;
        Ok(fixtures)
    }

    /// Load every file matching `pattern`, in alphabetical path order.
    ///
    /// Responses keep their order within each file; files are concatenated.
    pub fn load_glob(pattern: &str) -> Result<Self, ConfigError> {
        let mut paths = glob::glob(pattern)?.collect::<Result<Vec<_>, _>>()?;
        paths.sort();

        let mut fixtures = Self::default();
        for path in &paths {
            fixtures.append_file(path)?;
        }
        debug!(
            pattern,
            files = paths.len(),
            component = fixtures.component.len(),
            exact = fixtures.exact.len(),
            "Loaded fixtures"
        );
        Ok(fixtures)
    }

    fn append_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let file = FixtureFile::read(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));

        for fixture in file.component {
            self.component.push(fixture.into_component(base_dir)?);
        }
        for fixture in file.exact {
            self.exact.push(fixture.into_exact(base_dir)?);
        }
        debug!(path = %path.display(), "Read fixture file");
        Ok(())
    }

    /// Build a registry holding these responses.
    ///
    /// A set with no entries is left unset.
    pub fn into_registry(self) -> Registry {
        let mut registry = Registry::new();
        registry.set_component_responses(non_empty(self.component));
        registry.set_exact_responses(non_empty(self.exact));
        registry
    }
}

fn non_empty(responses: Vec<CannedResponse>) -> Option<Vec<CannedResponse>> {
    (!responses.is_empty()).then_some(responses)
}

/// Load the fixture file at `path` into a new registry.
pub fn load_registry(path: impl AsRef<Path>) -> Result<Registry, ConfigError> {
    Fixtures::load(path).map(Fixtures::into_registry)
}

/// Load every fixture file matching `pattern` into a new registry.
pub fn load_registry_glob(pattern: &str) -> Result<Registry, ConfigError> {
    Fixtures::load_glob(pattern).map(Fixtures::into_registry)
}
