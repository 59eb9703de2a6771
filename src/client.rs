//! Top-level client
//!
//! A [`Client`] ties the dispatcher, the shared rate limiter, and the
//! current credential together. Managers and paginators all dispatch
//! through one client, so every request shares the same throttle.

use crate::auth::Credential;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{ApiResponse, Dispatcher, RequestBuilder, RequestDescriptor};
use crate::listing::{FromChild, ListingDecoder, PageDecoder};
use crate::pagination::Paginator;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Driftboard API client
pub struct Client {
    dispatcher: Dispatcher,
    /// Read exactly once per dispatch; an external refresh replacing the
    /// credential never races an in-flight call.
    credential: RwLock<Credential>,
}

impl Client {
    /// Create an unauthenticated client
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            dispatcher: Dispatcher::new(config)?,
            credential: RwLock::new(Credential::None),
        })
    }

    /// Create a client with a credential
    pub fn with_credential(config: ClientConfig, credential: Credential) -> Result<Self> {
        Ok(Self {
            dispatcher: Dispatcher::new(config)?,
            credential: RwLock::new(credential),
        })
    }

    /// Replace the stored credential (e.g. after an external token refresh)
    pub async fn set_credential(&self, credential: Credential) {
        *self.credential.write().await = credential;
    }

    /// Whether a credential is currently stored
    pub async fn is_authenticated(&self) -> bool {
        !self.credential.read().await.is_none()
    }

    /// Start building a request. Authentication is required by default;
    /// callers opt out explicitly for public endpoints.
    pub fn request(&self) -> RequestBuilder {
        RequestDescriptor::builder()
    }

    /// Execute a descriptor with the stored credential
    pub async fn execute(&self, descriptor: &RequestDescriptor) -> Result<ApiResponse> {
        let credential = self.credential.read().await.clone();
        self.dispatcher.execute(descriptor, &credential).await
    }

    /// Execute a descriptor with an explicit credential, bypassing the
    /// stored one
    pub async fn execute_with(
        &self,
        descriptor: &RequestDescriptor,
        credential: &Credential,
    ) -> Result<ApiResponse> {
        self.dispatcher.execute(descriptor, credential).await
    }

    /// The dispatcher backing this client
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// The config this client was built with
    pub fn config(&self) -> &ClientConfig {
        self.dispatcher.config()
    }

    /// Create a paginator over `path` with a custom page-decoding strategy
    pub fn paginate_with<T>(
        self: &Arc<Self>,
        path: impl Into<String>,
        decoder: impl PageDecoder<T> + 'static,
    ) -> Paginator<T> {
        Paginator::new(Arc::clone(self), path, Box::new(decoder))
    }

    /// Create a paginator over `path` using the stock listing decoder
    pub fn paginate<T: FromChild + 'static>(
        self: &Arc<Self>,
        path: impl Into<String>,
    ) -> Paginator<T> {
        self.paginate_with(path, ListingDecoder::<T>::new())
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}
