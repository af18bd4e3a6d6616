//! Interceptor deciding whether a request can be served from the registry.
//!
//! This module provides `Interceptor`, which borrows a `Registry`, looks up
//! the canned response for a request URL and delivers it synchronously.
//!
//! Resolution order is exact URL first, then the best component match.

use crate::matching::{component_matches, url_equals};
use crate::mocks::delivery::{Delivery, DeliverySink, MockResponse, ResponseHead, HTTP_VERSION};
use crate::mocks::registry::Registry;
use crate::types::request::Request;
use crate::types::response::CannedResponse;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use url::Url;

/// Only requests with this URL scheme are intercepted.
pub const MOCK_SCHEME: &str = "mock";

/// Interceptor behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterceptorOptions {
    /// Deliver the error of an exact-URL match instead of its response.
    ///
    /// Off by default: exact-URL matches always deliver a success, and only
    /// component matches surface their error.
    pub exact_match_errors: bool,
}

/// Matched response and the strategy that found it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Matched<'a> {
    Exact(&'a CannedResponse),
    Component(&'a CannedResponse),
}

/// Request interceptor backed by a borrowed [`Registry`].
#[derive(Debug, Clone, Copy)]
pub struct Interceptor<'r> {
    registry: &'r Registry,
    options: InterceptorOptions,
}

impl<'r> Interceptor<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self::with_options(registry, InterceptorOptions::default())
    }

    pub fn with_options(registry: &'r Registry, options: InterceptorOptions) -> Self {
        Self { registry, options }
    }

    pub fn options(&self) -> InterceptorOptions {
        self.options
    }

    /// Component-matched responses applicable to `url`, best match first.
    ///
    /// Keeps responses without a URL component and responses whose component
    /// is one of the URL's path components. Responses with a non-empty
    /// component are ordered before the rest; order is otherwise preserved.
    pub fn find_component_matches(&self, url: &Url) -> Vec<&'r CannedResponse> {
        let mut matches: Vec<&'r CannedResponse> = self
            .registry
            .component_responses()
            .iter()
            .filter(|response| component_matches(response.url_component(), url))
            .collect();

        matches.sort_by_key(|response| !response.has_url_component());
        matches
    }

    /// First exact-URL-matched response registered for `url`.
    pub fn find_exact_match(&self, url: &Url) -> Option<&'r CannedResponse> {
        self.registry
            .exact_responses()
            .iter()
            .find(|response| url_equals(response.exact_url(), url))
    }

    /// True when `scheme` is [`MOCK_SCHEME`] and a response is registered for `url`.
    pub fn can_handle(&self, url: &Url, scheme: &str) -> bool {
        if scheme != MOCK_SCHEME {
            trace!(%url, scheme, "Scheme is not interceptable");
            return false;
        }
        self.find_match(url).is_some()
    }

    /// [`can_handle`](Self::can_handle) using the request URL's own scheme.
    pub fn can_intercept(&self, request: &Request) -> bool {
        self.can_handle(&request.url, request.scheme())
    }

    /// Canonical form of `request`, which is the request itself.
    pub fn canonicalize(request: Request) -> Request {
        request
    }

    /// Two requests share a cache entry iff their URLs are equal.
    pub fn are_cache_equivalent(a: &Request, b: &Request) -> bool {
        a.url == b.url
    }

    /// Resolve the response for `url` without invoking any callback.
    pub fn resolve(&self, url: &Url) -> Delivery {
        let delivery = match self.find_match(url) {
            Some(Matched::Exact(response)) if self.options.exact_match_errors => {
                Self::failure_or_success(response, url)
            }
            Some(Matched::Exact(response)) => Delivery::Success(Self::build_response(response, url)),
            Some(Matched::Component(response)) => Self::failure_or_success(response, url),
            None => Delivery::NoMatch,
        };

        match &delivery {
            Delivery::Success(response) => {
                debug!(%url, status = response.head.status, "Delivering canned response")
            }
            Delivery::Failure(error) => debug!(%url, %error, "Delivering canned failure"),
            Delivery::NoMatch => debug!(%url, "No canned response matched"),
        }

        delivery
    }

    /// Resolve `url` and replay the outcome through `sink`.
    ///
    /// Runs to completion before returning. An unmatched URL makes no callback.
    pub fn deliver<S: DeliverySink + ?Sized>(&self, url: &Url, sink: &mut S) {
        self.resolve(url).replay(sink);
    }

    /// [`deliver`](Self::deliver) for a full request.
    pub fn deliver_request<S: DeliverySink + ?Sized>(&self, request: &Request, sink: &mut S) {
        self.deliver(&request.url, sink);
    }

    fn find_match(&self, url: &Url) -> Option<Matched<'r>> {
        if let Some(response) = self.find_exact_match(url) {
            return Some(Matched::Exact(response));
        }
        self.find_component_matches(url)
            .into_iter()
            .next()
            .map(Matched::Component)
    }

    fn failure_or_success(response: &CannedResponse, url: &Url) -> Delivery {
        match response.error() {
            Some(error) => Delivery::Failure(error.clone()),
            None => Delivery::Success(Self::build_response(response, url)),
        }
    }

    fn build_response(response: &CannedResponse, url: &Url) -> MockResponse {
        MockResponse {
            head: ResponseHead {
                url: url.clone(),
                status: response.status(),
                headers: response.headers().clone(),
                version: HTTP_VERSION,
                cache_policy: response.cache_policy(),
            },
            body: response.body().to_vec(),
        }
    }
}
