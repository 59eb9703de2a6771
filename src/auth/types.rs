//! Credential types
//!
//! A credential is paired with a request descriptor at dispatch time only;
//! descriptors never carry secrets, so they stay reusable and loggable.
//! Acquiring or refreshing tokens is the application's job — the client only
//! consumes an already-resolved credential.

use chrono::{DateTime, Utc};

/// Credential attached to a dispatch
#[derive(Clone, Default)]
pub enum Credential {
    /// No authentication
    #[default]
    None,

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },

    /// Bearer token authentication
    Bearer {
        /// The bearer token
        token: String,
        /// When the token expires; `None` means it never expires
        expires_at: Option<DateTime<Utc>>,
    },
}

impl Credential {
    /// Create a basic auth credential
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Create a bearer token credential without an expiry
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
            expires_at: None,
        }
    }

    /// Create a bearer token that expires in N seconds from now
    pub fn bearer_expires_in(token: impl Into<String>, seconds: i64) -> Self {
        Self::Bearer {
            token: token.into(),
            expires_at: Some(Utc::now() + chrono::Duration::seconds(seconds)),
        }
    }

    /// Check if this is the empty credential
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Check if a bearer token is expired (with 30 second buffer).
    ///
    /// Non-bearer credentials and tokens without an expiry never expire.
    pub fn is_expired(&self) -> bool {
        match self {
            Self::Bearer {
                expires_at: Some(expires_at),
                ..
            } => {
                let buffer = chrono::Duration::seconds(30);
                Utc::now() + buffer >= *expires_at
            }
            _ => false,
        }
    }

    /// Expiry timestamp for a bearer credential, if any
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Bearer { expires_at, .. } => *expires_at,
            _ => None,
        }
    }
}

// Secrets must never leak through logs.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "Credential::None"),
            Self::Basic { username, .. } => f
                .debug_struct("Credential::Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Self::Bearer { expires_at, .. } => f
                .debug_struct("Credential::Bearer")
                .field("token", &"<redacted>")
                .field("expires_at", expires_at)
                .finish(),
        }
    }
}
