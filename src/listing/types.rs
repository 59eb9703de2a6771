//! Listing types and traits
//!
//! Defines the page value returned by paginated endpoints and the traits
//! through which concrete models and decoding strategies plug in.

use crate::error::Result;
use serde_json::Value;

/// One server response unit: an ordered batch of items plus optional
/// forward/backward cursors.
///
/// Server order is preserved, never re-sorted. An absent `after` cursor
/// means the page is terminal in the forward direction — even when the page
/// itself carries items, which must still be yielded before exhaustion is
/// reported.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Items in server order
    pub items: Vec<T>,
    /// Opaque cursor pointing at the previous page, if any
    pub before: Option<String>,
    /// Opaque cursor pointing at the next page, if any
    pub after: Option<String>,
    /// Server-provided hint of the total list size, if any
    pub total_hint: Option<u64>,
    /// Number of children skipped because their kind was not recognized.
    /// Skipping is deliberate forward compatibility; the count makes silent
    /// data loss observable.
    pub skipped: usize,
}

impl<T> Page<T> {
    /// Create an empty page with no cursors
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            before: None,
            after: None,
            total_hint: None,
            skipped: 0,
        }
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether this page is terminal in the forward direction
    pub fn is_last_forward(&self) -> bool {
        self.after.is_none()
    }

    /// Whether this page is terminal in the backward direction
    pub fn is_last_backward(&self) -> bool {
        self.before.is_none()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Trait for types that can be decoded from one listing child record.
///
/// Children arrive as `{ "kind": ..., "data": ... }` pairs. `Ok(None)`
/// means the kind is not one this type recognizes and the child should be
/// skipped (and counted) rather than failing the whole page.
pub trait FromChild: Sized {
    /// Decode one child record by its kind discriminator
    fn from_child(kind: &str, data: &Value) -> Result<Option<Self>>;
}

/// Strategy for turning a response body into a page.
///
/// Paginators are parameterized over this trait at construction, so
/// per-endpoint decoding stays a plug-in value rather than a subclass.
pub trait PageDecoder<T>: Send + Sync {
    /// Decode a response body into a page
    fn decode_page(&self, body: &Value) -> Result<Page<T>>;
}
