//! Response delivery.
//!
//! A resolved lookup is a [`Delivery`]: a successful response, a failure, or
//! no match at all. Integrations that expect the callback shape of a network
//! stack implement [`DeliverySink`] and let [`Delivery::replay`] drive it.

use crate::types::response::{CachePolicy, MockError};
use std::collections::HashMap;
use url::Url;

/// HTTP version reported for every canned response.
pub const HTTP_VERSION: &str = "HTTP/1.1";

/// Status line and headers of a delivered response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    /// URL of the intercepted request
    pub url: Url,
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub version: &'static str,
    pub cache_policy: CachePolicy,
}

/// Fully buffered successful response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockResponse {
    pub head: ResponseHead,
    pub body: Vec<u8>,
}

/// Outcome of resolving a request against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// A response was matched and is delivered
    Success(MockResponse),
    /// A response was matched and delivers its error instead
    Failure(MockError),
    /// Nothing matched; no callback is made
    NoMatch,
}

impl Delivery {
    pub fn is_match(&self) -> bool {
        !matches!(self, Delivery::NoMatch)
    }

    /// Drive `sink` through the callback sequence for this outcome.
    ///
    /// Success emits `on_response_received`, `on_data_loaded`, `on_finished`.
    /// Failure emits `on_failed` only. No match emits nothing.
    pub fn replay<S: DeliverySink + ?Sized>(self, sink: &mut S) {
        match self {
            Delivery::Success(response) => {
                sink.on_response_received(&response.head);
                sink.on_data_loaded(&response.body);
                sink.on_finished();
            }
            Delivery::Failure(error) => sink.on_failed(&error),
            Delivery::NoMatch => {}
        }
    }
}

/// Callback surface through which a delivery is reported.
pub trait DeliverySink {
    fn on_response_received(&mut self, head: &ResponseHead);
    fn on_data_loaded(&mut self, data: &[u8]);
    fn on_finished(&mut self);
    fn on_failed(&mut self, error: &MockError);
}

/// Callback observed by a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    ResponseReceived(ResponseHead),
    DataLoaded(Vec<u8>),
    Finished,
    Failed(MockError),
}

/// Sink that records every callback in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<SinkEvent> {
        self.events
    }

    /// Concatenation of every loaded data chunk.
    pub fn body(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::DataLoaded(data) => Some(data.as_slice()),
                _ => None,
            })
            .flatten()
            .copied()
            .collect()
    }

    pub fn is_finished(&self) -> bool {
        self.events.iter().any(|e| matches!(e, SinkEvent::Finished))
    }
}

impl DeliverySink for RecordingSink {
    fn on_response_received(&mut self, head: &ResponseHead) {
        self.events.push(SinkEvent::ResponseReceived(head.clone()));
    }

    fn on_data_loaded(&mut self, data: &[u8]) {
        self.events.push(SinkEvent::DataLoaded(data.to_vec()));
    }

    fn on_finished(&mut self) {
        self.events.push(SinkEvent::Finished);
    }

    fn on_failed(&mut self, error: &MockError) {
        self.events.push(SinkEvent::Failed(error.clone()));
    }
}
