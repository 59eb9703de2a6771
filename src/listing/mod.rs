//! Listing envelope decoding
//!
//! Turns a paginated response body into a [`Page`]: an ordered batch of
//! decoded items plus opaque forward/backward cursors.

mod decoder;
mod types;

pub use decoder::ListingDecoder;
pub use types::{FromChild, Page, PageDecoder};

#[cfg(test)]
mod tests;
