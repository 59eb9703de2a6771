//! Common types used throughout the Driftboard client
//!
//! Shared type definitions used across multiple modules.

use serde::{Deserialize, Serialize};

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Direction of cursor movement through a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Walking toward older entries via the `after` cursor
    Forward,
    /// Walking toward newer entries via the `before` cursor
    Backward,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Backward => write!(f, "backward"),
        }
    }
}

/// Expected format of a response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// JSON API endpoint (default); bodies are parsed and checked for the
    /// logical error envelope
    #[default]
    Json,
    /// Raw-text endpoint; the body is returned verbatim
    Raw,
}

/// Page size used when the caller does not specify one
pub const DEFAULT_LIMIT: u32 = 25;

/// Largest page size the server accepts; larger requests are clamped
pub const RECOMMENDED_MAX_LIMIT: u32 = 100;

/// Header carrying the required client identification string. The API
/// rejects unidentified clients with a 4xx.
pub const CLIENT_ID_HEADER: &str = "X-Client-Id";
