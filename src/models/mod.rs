//! Domain models
//!
//! Minimal concrete variants of the listing child kinds. Field-level
//! completeness is not a goal here; these carry enough to exercise decoding
//! end to end. Each kind discriminator maps to exactly one variant.

use crate::error::{Error, Result};
use crate::listing::FromChild;
use serde::Deserialize;
use serde_json::Value;

/// Kind discriminator for accounts
pub const KIND_ACCOUNT: &str = "account";
/// Kind discriminator for posts
pub const KIND_POST: &str = "post";
/// Kind discriminator for comments
pub const KIND_COMMENT: &str = "comment";
/// Kind discriminator for private messages
pub const KIND_MESSAGE: &str = "message";

/// A user account
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub karma: i64,
    #[serde(default)]
    pub created_utc: Option<f64>,
}

/// A submitted post
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_utc: Option<f64>,
}

/// A comment on a post
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub body: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// A private message
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Message {
    pub id: String,
    pub author: String,
    pub subject: String,
    pub body: String,
    #[serde(default)]
    pub unread: bool,
}

/// Any listing child, decoded polymorphically by kind
#[derive(Debug, Clone, PartialEq)]
pub enum Thing {
    Account(Account),
    Post(Post),
    Comment(Comment),
    Message(Message),
}

/// Deserialize a recognized kind's payload; a broken payload for a known
/// kind is a malformed child, not a skip.
fn decode_payload<T: for<'de> Deserialize<'de>>(kind: &str, data: &Value) -> Result<T> {
    serde_json::from_value(data.clone())
        .map_err(|e| Error::malformed(format!("invalid '{kind}' payload: {e}")))
}

impl FromChild for Account {
    fn from_child(kind: &str, data: &Value) -> Result<Option<Self>> {
        match kind {
            KIND_ACCOUNT => decode_payload(kind, data).map(Some),
            _ => Ok(None),
        }
    }
}

impl FromChild for Post {
    fn from_child(kind: &str, data: &Value) -> Result<Option<Self>> {
        match kind {
            KIND_POST => decode_payload(kind, data).map(Some),
            _ => Ok(None),
        }
    }
}

impl FromChild for Comment {
    fn from_child(kind: &str, data: &Value) -> Result<Option<Self>> {
        match kind {
            KIND_COMMENT => decode_payload(kind, data).map(Some),
            _ => Ok(None),
        }
    }
}

impl FromChild for Message {
    fn from_child(kind: &str, data: &Value) -> Result<Option<Self>> {
        match kind {
            KIND_MESSAGE => decode_payload(kind, data).map(Some),
            _ => Ok(None),
        }
    }
}

impl FromChild for Thing {
    fn from_child(kind: &str, data: &Value) -> Result<Option<Self>> {
        match kind {
            KIND_ACCOUNT => decode_payload(kind, data).map(Thing::Account).map(Some),
            KIND_POST => decode_payload(kind, data).map(Thing::Post).map(Some),
            KIND_COMMENT => decode_payload(kind, data).map(Thing::Comment).map(Some),
            KIND_MESSAGE => decode_payload(kind, data).map(Thing::Message).map(Some),
            _ => Ok(None),
        }
    }
}
