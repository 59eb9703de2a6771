//! Pagination types
//!
//! The paginator's cursor state machine and the plain-data description of a
//! listing endpoint.

use crate::error::{Error, Result};
use crate::types::Direction;

/// Cursor state of a [`Paginator`](super::Paginator)
///
/// Owned exclusively by its paginator and mutated only by the paginator's
/// own fetch operations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PaginatorState {
    /// No fetch issued yet; no cursor held
    #[default]
    NotStarted,
    /// Mid-stream: the cursor the next fetch in `direction` will use
    Active {
        /// Opaque server-issued cursor
        cursor: String,
        /// Direction of the last fetch
        direction: Direction,
    },
    /// The stream ended in the given direction. Says nothing about the
    /// opposite direction.
    Exhausted(Direction),
}

impl PaginatorState {
    /// Whether the stream is exhausted in the given direction
    pub fn is_exhausted(&self, direction: Direction) -> bool {
        matches!(self, Self::Exhausted(d) if *d == direction)
    }

    /// Direction of the last fetch, if any
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::NotStarted => None,
            Self::Active { direction, .. } => Some(*direction),
            Self::Exhausted(direction) => Some(*direction),
        }
    }
}

/// Plain-data description of a listing endpoint: a URI prefix plus the
/// "where" values it accepts.
///
/// Endpoint customization lives in values like this instead of per-endpoint
/// subclasses; managers declare them as constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingEndpoint {
    /// URI prefix, e.g. `/message`
    pub uri_prefix: &'static str,
    /// Allowed "where" values, e.g. `inbox`, `unread`, `sent`
    pub where_values: &'static [&'static str],
}

impl ListingEndpoint {
    /// Create a new endpoint description
    pub const fn new(uri_prefix: &'static str, where_values: &'static [&'static str]) -> Self {
        Self {
            uri_prefix,
            where_values,
        }
    }

    /// Build the request path for a "where" value, validating it against
    /// the allowed set
    pub fn path_for(&self, where_value: &str) -> Result<String> {
        if !self.where_values.contains(&where_value) {
            return Err(Error::validation(format!(
                "'{where_value}' is not valid for {}; expected one of {:?}",
                self.uri_prefix, self.where_values
            )));
        }
        Ok(format!("{}/{where_value}", self.uri_prefix))
    }
}

#[cfg(test)]
mod state_tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = PaginatorState::default();
        assert_eq!(state, PaginatorState::NotStarted);
        assert!(state.direction().is_none());
        assert!(!state.is_exhausted(Direction::Forward));
        assert!(!state.is_exhausted(Direction::Backward));
    }

    #[test]
    fn test_exhaustion_is_per_direction() {
        let state = PaginatorState::Exhausted(Direction::Forward);
        assert!(state.is_exhausted(Direction::Forward));
        assert!(!state.is_exhausted(Direction::Backward));
        assert_eq!(state.direction(), Some(Direction::Forward));
    }

    #[test]
    fn test_endpoint_path_for() {
        const INBOX: ListingEndpoint = ListingEndpoint::new("/message", &["inbox", "unread"]);
        assert_eq!(INBOX.path_for("inbox").unwrap(), "/message/inbox");
        assert_eq!(INBOX.path_for("unread").unwrap(), "/message/unread");
        assert!(matches!(
            INBOX.path_for("spam"),
            Err(Error::Validation { .. })
        ));
    }
}
