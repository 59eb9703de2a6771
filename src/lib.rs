//! # Driftboard Client
//!
//! Async client library for the Driftboard content-aggregation API:
//! cursor-based pagination, mixed per-endpoint authentication, and
//! client-side rate limiting over a REST-like surface.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use driftboard::{Client, ClientConfig, Credential, Result};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::builder()
//!         .base_url("https://api.driftboard.example")
//!         .client_id("my-app/0.1 by alice")
//!         .build()?;
//!     let client = Arc::new(Client::with_credential(
//!         config,
//!         Credential::bearer("token"),
//!     )?);
//!
//!     let mut posts = client.paginate::<driftboard::models::Post>("/posts/hot");
//!     while posts.has_next() {
//!         let page = match posts.next().await {
//!             Ok(page) => page,
//!             Err(e) if e.is_end_of_stream() => break,
//!             Err(e) => return Err(e),
//!         };
//!         for post in page {
//!             println!("{}", post.title);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Manager ──▶ Paginator.next() ──▶ Dispatcher.execute(RequestDescriptor)
//!                 │                        │
//!                 │                  RateLimiter gate ──▶ transport
//!                 │                        │
//!                 ◀── cursor update ── ListingDecoder ◀── classified body
//! ```
//!
//! The dispatcher classifies every outcome into one taxonomy: transport
//! failures, remote-declared errors (including logical errors hidden inside
//! 2xx bodies), and malformed-response failures. It never retries.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error taxonomy
pub mod error;

/// Common types and constants
pub mod types;

/// Credentials
pub mod auth;

/// Request descriptors, dispatch, and rate limiting
pub mod http;

/// Listing envelope decoding
pub mod listing;

/// Cursor pagination
pub mod pagination;

/// Client configuration
pub mod config;

/// Top-level client
pub mod client;

/// Domain models
pub mod models;

/// Manager façades
pub mod managers;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::Credential;
pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use http::{ApiResponse, Dispatcher, RequestBuilder, RequestDescriptor};
pub use listing::{FromChild, ListingDecoder, Page, PageDecoder};
pub use pagination::{ListingEndpoint, Paginator, PaginatorState};
pub use types::{Direction, ResponseFormat, DEFAULT_LIMIT, RECOMMENDED_MAX_LIMIT};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
