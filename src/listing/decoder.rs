//! Listing envelope decoder
//!
//! Parses the nested envelope paginated endpoints use:
//!
//! ```json
//! {
//!   "data": {
//!     "children": [ { "kind": "post", "data": { ... } }, ... ],
//!     "before": null,
//!     "after": "c_9xk2",
//!     "total": 412
//!   }
//! }
//! ```

use super::types::{FromChild, Page, PageDecoder};
use crate::error::{Error, Result};
use serde_json::Value;
use std::marker::PhantomData;
use tracing::debug;

/// Stock [`PageDecoder`] for the listing envelope
///
/// Children of an unrecognized kind are skipped and counted, never failing
/// the page; a malformed envelope fails the whole call and is never coerced
/// into an empty page.
#[derive(Debug, Clone, Default)]
pub struct ListingDecoder<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> ListingDecoder<T> {
    /// Create a new listing decoder
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: FromChild> ListingDecoder<T> {
    /// Decode a listing envelope into a page
    pub fn decode(&self, body: &Value) -> Result<Page<T>> {
        let data = body
            .get("data")
            .and_then(Value::as_object)
            .ok_or_else(|| Error::malformed("missing 'data' object"))?;

        let children = data
            .get("children")
            .ok_or_else(|| Error::malformed("missing 'children' array"))?
            .as_array()
            .ok_or_else(|| Error::malformed("'children' is not an array"))?;

        let before = cursor_field(data.get("before"), "before")?;
        let after = cursor_field(data.get("after"), "after")?;
        let total_hint = data.get("total").and_then(Value::as_u64);

        let mut items = Vec::with_capacity(children.len());
        let mut skipped = 0;
        for child in children {
            let kind = child
                .get("kind")
                .and_then(Value::as_str)
                .ok_or_else(|| Error::malformed("child without a 'kind' discriminator"))?;
            let child_data = child
                .get("data")
                .ok_or_else(|| Error::malformed("child without a 'data' payload"))?;

            match T::from_child(kind, child_data)? {
                Some(item) => items.push(item),
                None => {
                    debug!("Skipping listing child of unknown kind '{}'", kind);
                    skipped += 1;
                }
            }
        }

        Ok(Page {
            items,
            before,
            after,
            total_hint,
            skipped,
        })
    }
}

impl<T: FromChild> PageDecoder<T> for ListingDecoder<T> {
    fn decode_page(&self, body: &Value) -> Result<Page<T>> {
        self.decode(body)
    }
}

/// Read a cursor field: string, null, or absent are valid; anything else is
/// a shape mismatch.
fn cursor_field(value: Option<&Value>, name: &str) -> Result<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(Error::malformed(format!("'{name}' cursor is not a string"))),
    }
}
