//! Cursor pagination
//!
//! A stateful paginator walks forward/backward over opaque server cursors
//! with a state machine over {not-started, mid-stream, exhausted}.
//!
//! # Overview
//!
//! The paginator owns its cursor state and fetches one page per call. It is
//! generic over a page-decoding strategy, and endpoint differences (URI
//! prefix, allowed "where" values) are plain configuration data.

mod paginator;
mod types;

pub use paginator::Paginator;
pub use types::{ListingEndpoint, PaginatorState};
