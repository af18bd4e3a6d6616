//! Intercepted request types.

use std::collections::HashMap;
use url::Url;

/// HTTP method of an intercepted request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

/// Request issued by the client code under test.
///
/// Only `url` takes part in matching and cache equivalence; method and headers
/// are carried so the request can be handed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Full request URL
    pub url: Url,
    /// HTTP method, if the client set one
    pub method: Option<HttpMethod>,
    /// Request headers
    pub headers: HashMap<String, String>,
}

impl Request {
    /// Create a request for `url` with no method and no headers.
    pub fn new(url: Url) -> Self {
        Self {
            url,
            method: None,
            headers: HashMap::new(),
        }
    }

    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// URL scheme of the request (`"mock"` for interceptable requests).
    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }
}

impl From<Url> for Request {
    fn from(url: Url) -> Self {
        Self::new(url)
    }
}
