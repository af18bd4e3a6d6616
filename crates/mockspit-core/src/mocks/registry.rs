//! Registry of canned responses.
//!
//! This module provides `Registry`, the test-owned store of responses that an
//! `Interceptor` serves. It keeps two independent sets: responses matched by a
//! URL path component and responses matched by an exact URL.

use crate::types::response::CannedResponse;
use tracing::debug;

/// Store of canned responses for a single test.
///
/// Each set is either unset or holds zero or more responses. Both are
/// replaced wholesale by the `set_*` methods; there is no per-entry mutation.
/// The registry is owned by the test harness and borrowed by the interceptor,
/// so it cannot be changed while requests are being intercepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    /// Responses matched by URL path component
    component: Option<Vec<CannedResponse>>,
    /// Responses matched by exact URL
    exact: Option<Vec<CannedResponse>>,
}

impl Registry {
    /// Create an empty registry with both sets unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the component-matched responses.
    ///
    /// `None` unsets the set.
    pub fn set_component_responses(&mut self, responses: Option<Vec<CannedResponse>>) {
        debug!(
            count = responses.as_ref().map(Vec::len),
            "Replacing component-matched responses"
        );
        self.component = responses;
    }

    /// Replace the component-matched responses with a single response.
    ///
    /// `None` clears the set.
    pub fn set_component_response(&mut self, response: Option<CannedResponse>) {
        self.set_component_responses(response.map(|r| vec![r]));
    }

    /// Replace the exact-URL-matched responses.
    ///
    /// `None` unsets the set.
    pub fn set_exact_responses(&mut self, responses: Option<Vec<CannedResponse>>) {
        debug!(
            count = responses.as_ref().map(Vec::len),
            "Replacing exact-URL-matched responses"
        );
        self.exact = responses;
    }

    /// Replace the exact-URL-matched responses with a single response.
    ///
    /// `None` clears the set.
    pub fn set_exact_response(&mut self, response: Option<CannedResponse>) {
        self.set_exact_responses(response.map(|r| vec![r]));
    }

    /// Unset both sets. Called at test teardown.
    pub fn clear(&mut self) {
        debug!("Clearing registry");
        self.component = None;
        self.exact = None;
    }

    /// Component-matched responses in registration order (empty when unset).
    pub fn component_responses(&self) -> &[CannedResponse] {
        self.component.as_deref().unwrap_or_default()
    }

    /// Exact-URL-matched responses in registration order (empty when unset).
    pub fn exact_responses(&self) -> &[CannedResponse] {
        self.exact.as_deref().unwrap_or_default()
    }

    pub fn has_component_responses(&self) -> bool {
        self.component.is_some()
    }

    pub fn has_exact_responses(&self) -> bool {
        self.exact.is_some()
    }

    /// True when neither set holds a response.
    pub fn is_empty(&self) -> bool {
        self.component_responses().is_empty() && self.exact_responses().is_empty()
    }
}
