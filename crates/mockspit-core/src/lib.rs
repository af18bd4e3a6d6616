//! Canned-response request interception for tests.
//!
//! A [`Registry`] holds the responses a test wants to serve, keyed either by a
//! URL path component or by an exact URL. An [`Interceptor`] borrows the
//! registry, decides whether a `mock://` request can be served, and replays
//! the matching response into a [`DeliverySink`] without any network I/O.
//!
//! ```
//! use mockspit_core::{CannedResponse, Delivery, Interceptor, Registry};
//! use url::Url;
//!
//! let mut registry = Registry::new();
//! registry.set_component_response(Some(
//!     CannedResponse::from_bytes(b"{\"ok\":true}".to_vec()).matching_component("Stops.ashx"),
//! ));
//!
//! let interceptor = Interceptor::new(&registry);
//! let url = Url::parse("mock://host/api/Stops.ashx?x=1").unwrap();
//! assert!(interceptor.can_handle(&url, url.scheme()));
//! assert!(matches!(interceptor.resolve(&url), Delivery::Success(_)));
//! ```

pub mod config;
pub mod matching;
pub mod mocks;
pub mod types;

pub use mocks::delivery::{
    Delivery, DeliverySink, MockResponse, RecordingSink, ResponseHead, SinkEvent,
};
pub use mocks::interceptor::{Interceptor, InterceptorOptions, MOCK_SCHEME};
pub use mocks::registry::Registry;
pub use types::request::{HttpMethod, Request};
pub use types::response::{CachePolicy, CannedResponse, MockError, ResponseError};
