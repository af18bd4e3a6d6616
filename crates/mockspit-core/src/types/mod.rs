//! Core domain types for intercepted requests and canned responses.

pub mod request;
pub mod response;
