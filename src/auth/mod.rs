//! Authentication module
//!
//! Supports: None, HTTP Basic, Bearer token with expiry.
//!
//! The dispatcher reads a credential exactly once per call; an external
//! refresh replacing the stored credential never races an in-flight dispatch.

mod types;

pub use types::Credential;
