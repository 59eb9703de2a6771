//! Manager façades
//!
//! Domain-specific convenience surfaces built atop the dispatch and
//! pagination primitives. A manager assembles a request descriptor (or a
//! paginator) and delegates to the shared [`Client`]; it never touches
//! rate-limiter or paginator internals.

use crate::client::Client;
use crate::error::Result;
use crate::models::{Message, Post};
use crate::pagination::{ListingEndpoint, Paginator};
use std::sync::Arc;

/// Inbox listing endpoint
pub const INBOX: ListingEndpoint = ListingEndpoint::new("/message", &["inbox", "unread", "sent"]);

/// Post feed listing endpoint
pub const FEED: ListingEndpoint = ListingEndpoint::new("/posts", &["hot", "new", "top"]);

/// Operations on the authenticated user's inbox
pub struct InboxManager {
    client: Arc<Client>,
}

impl InboxManager {
    /// Create an inbox manager backed by the given client
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    /// Paginate one of the inbox listings (`inbox`, `unread`, `sent`)
    pub fn messages(&self, where_value: &str) -> Result<Paginator<Message>> {
        let path = INBOX.path_for(where_value)?;
        Ok(self.client.paginate(path))
    }

    /// Mark a message as read
    pub async fn mark_read(&self, message_id: &str) -> Result<()> {
        let descriptor = self
            .client
            .request()
            .post()
            .path("/message/read")
            .form("id", message_id)
            .build()?;
        self.client.execute(&descriptor).await?;
        Ok(())
    }
}

/// Operations on the public post feeds
pub struct FeedManager {
    client: Arc<Client>,
}

impl FeedManager {
    /// Create a feed manager backed by the given client
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    /// Paginate one of the post feeds (`hot`, `new`, `top`).
    ///
    /// Feeds are public; no credential is required.
    pub fn posts(&self, where_value: &str) -> Result<Paginator<Post>> {
        let path = FEED.path_for(where_value)?;
        Ok(self.client.paginate::<Post>(path).public())
    }

    /// Cast a vote on a post. Idempotent; safe for callers to retry.
    pub async fn vote(&self, post_id: &str, direction: i8) -> Result<()> {
        let descriptor = self
            .client
            .request()
            .post()
            .path("/api/vote")
            .form("id", post_id)
            .form("dir", direction.to_string())
            .build()?;
        self.client.execute(&descriptor).await?;
        Ok(())
    }
}

#[cfg(test)]
mod manager_tests {
    use super::*;

    #[test]
    fn test_endpoint_constants() {
        assert_eq!(INBOX.path_for("unread").unwrap(), "/message/unread");
        assert_eq!(FEED.path_for("hot").unwrap(), "/posts/hot");
        assert!(INBOX.path_for("hot").is_err());
        assert!(FEED.path_for("inbox").is_err());
    }
}
