//! Mock interception module.
//!
//! This module provides functionality for serving canned responses:
//! - [`Registry`]: Stores component-matched and exact-URL-matched responses
//! - [`Interceptor`]: Decides whether a request can be handled and resolves its response
//! - [`Delivery`]: Resolved outcome, replayed through a [`DeliverySink`]
//!
//! [`Registry`]: registry::Registry
//! [`Interceptor`]: interceptor::Interceptor
//! [`Delivery`]: delivery::Delivery
//! [`DeliverySink`]: delivery::DeliverySink

pub mod delivery;
pub mod interceptor;
pub mod registry;
