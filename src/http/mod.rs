//! HTTP layer
//!
//! Request descriptors, the dispatcher, and client-side rate limiting.
//!
//! # Overview
//!
//! - **Request descriptors**: immutable, credential-free request values
//! - **Dispatcher**: one network call per execute, classified outcome
//! - **Rate limiter**: minimum-interval throttle shared by every dispatch

mod dispatcher;
mod rate_limit;
mod request;

pub use dispatcher::{ApiResponse, Dispatcher};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use request::{RequestBuilder, RequestDescriptor};

#[cfg(test)]
mod tests;
