//! The cursor-walking paginator
//!
//! A [`Paginator`] is a stateful walker over one logical list. It is generic
//! over a [`PageDecoder`] strategy passed at construction, so one paginator
//! type serves every endpoint; per-endpoint differences are configuration,
//! not subclasses.
//!
//! A single paginator is not meant for concurrent use — its cursor state is
//! unprotected and interleaved calls would corrupt it (the `&mut self`
//! receivers enforce this at compile time). Independent paginators may run
//! concurrently and share one client, whose rate limiter serializes their
//! dispatches.

use super::types::PaginatorState;
use crate::client::Client;
use crate::error::{Error, Result};
use crate::listing::{Page, PageDecoder};
use crate::types::{Direction, DEFAULT_LIMIT, RECOMMENDED_MAX_LIMIT};
use futures::stream::Stream;
use std::sync::Arc;
use tracing::debug;

/// Stateful cursor-walker over one paginated listing
pub struct Paginator<T> {
    client: Arc<Client>,
    decoder: Box<dyn PageDecoder<T>>,
    path: String,
    params: Vec<(String, String)>,
    limit: u32,
    requires_auth: bool,
    state: PaginatorState,
    // Cursors from the most recently fetched page, kept for both directions
    // so a direction switch can continue from the current position.
    after: Option<String>,
    before: Option<String>,
}

impl<T> Paginator<T> {
    /// Create a paginator. Prefer [`Client::paginate`] or
    /// [`Client::paginate_with`].
    pub fn new(client: Arc<Client>, path: impl Into<String>, decoder: Box<dyn PageDecoder<T>>) -> Self {
        Self {
            client,
            decoder,
            path: path.into(),
            params: Vec::new(),
            limit: DEFAULT_LIMIT,
            requires_auth: true,
            state: PaginatorState::NotStarted,
            after: None,
            before: None,
        }
    }

    /// Set the page size, clamped to the server-accepted maximum
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.min(RECOMMENDED_MAX_LIMIT);
        self
    }

    /// Add a fixed query parameter (e.g. a sort or time filter)
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Mark the listing as public, dropping the default auth requirement
    #[must_use]
    pub fn public(mut self) -> Self {
        self.requires_auth = false;
        self
    }

    /// Configured page size
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Current cursor state
    pub fn state(&self) -> &PaginatorState {
        &self.state
    }

    /// Direction of the last fetch, if any
    pub fn direction(&self) -> Option<Direction> {
        self.state.direction()
    }

    /// Whether a forward fetch may still yield a page. Pure predicate, no
    /// I/O.
    pub fn has_next(&self) -> bool {
        !self.state.is_exhausted(Direction::Forward)
    }

    /// Whether a backward fetch may still yield a page. Pure predicate, no
    /// I/O.
    pub fn has_previous(&self) -> bool {
        !self.state.is_exhausted(Direction::Backward)
    }

    /// Return to `NotStarted`, discarding cursors. Use when filter or sort
    /// parameters change.
    pub fn reset(&mut self) {
        self.state = PaginatorState::NotStarted;
        self.after = None;
        self.before = None;
    }

    /// Fetch the next page (forward direction).
    ///
    /// Past exhaustion this fails with [`Error::EndOfStream`], the normal
    /// termination signal. A page with items but no `after` cursor is
    /// terminal but valid: its items are returned now and the *following*
    /// call reports exhaustion. An empty page with an `after` cursor does
    /// not stop the walk.
    pub async fn next(&mut self) -> Result<Page<T>> {
        self.fetch(Direction::Forward).await
    }

    /// Fetch the previous page (backward direction). Symmetric to
    /// [`next`](Self::next) over the `before` cursor.
    pub async fn previous(&mut self) -> Result<Page<T>> {
        self.fetch(Direction::Backward).await
    }

    /// Fetch forward until `max_pages` pages are collected or the stream is
    /// exhausted. Early exhaustion returns the partial sequence, never an
    /// error.
    pub async fn accumulate(&mut self, max_pages: usize) -> Result<Vec<Page<T>>> {
        let mut pages = Vec::new();
        while pages.len() < max_pages {
            match self.next().await {
                Ok(page) => pages.push(page),
                Err(Error::EndOfStream { .. }) => break,
                Err(e) => return Err(e),
            }
        }
        Ok(pages)
    }

    async fn fetch(&mut self, direction: Direction) -> Result<Page<T>> {
        if self.state.is_exhausted(direction) {
            return Err(Error::EndOfStream { direction });
        }

        let (cursor, cursor_param) = match direction {
            Direction::Forward => (self.after.clone(), "after"),
            Direction::Backward => (self.before.clone(), "before"),
        };

        let mut builder = self
            .client
            .request()
            .get()
            .path(&self.path)
            .requires_auth(self.requires_auth)
            .query("limit", self.limit.to_string());
        for (key, value) in &self.params {
            builder = builder.query(key.clone(), value.clone());
        }
        if let Some(cursor) = &cursor {
            builder = builder.query(cursor_param, cursor.clone());
        }
        let descriptor = builder.build()?;

        let response = self.client.execute(&descriptor).await?;
        let body = response
            .json()
            .ok_or_else(|| Error::malformed("listing endpoint returned a non-JSON body"))?;
        let page = self.decoder.decode_page(body)?;

        // Every await and every fallible step is behind us; the state
        // transition below is the only mutation, so a cancelled or failed
        // call leaves the paginator exactly where it was.
        self.advance(direction, &page);
        Ok(page)
    }

    /// Record cursors from a fetched page and transition the state machine.
    /// Fetching in one direction clears any exhaustion recorded for the
    /// other: reaching the forward end says nothing about walking backward.
    fn advance(&mut self, direction: Direction, page: &Page<T>) {
        self.after = page.after.clone();
        self.before = page.before.clone();

        let continuation = match direction {
            Direction::Forward => &page.after,
            Direction::Backward => &page.before,
        };
        self.state = match continuation {
            Some(cursor) => PaginatorState::Active {
                cursor: cursor.clone(),
                direction,
            },
            None => {
                debug!("Listing '{}' exhausted ({})", self.path, direction);
                PaginatorState::Exhausted(direction)
            }
        };
    }
}

impl<T: 'static> Paginator<T> {
    /// Consume the paginator into a forward [`Stream`] of pages.
    ///
    /// The stream ends cleanly at exhaustion; every other error is yielded
    /// to the consumer.
    pub fn into_stream(self) -> impl Stream<Item = Result<Page<T>>> {
        futures::stream::try_unfold(self, |mut paginator| async move {
            match paginator.next().await {
                Ok(page) => Ok(Some((page, paginator))),
                Err(Error::EndOfStream { .. }) => Ok(None),
                Err(e) => Err(e),
            }
        })
    }
}

impl<T> std::fmt::Debug for Paginator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("path", &self.path)
            .field("limit", &self.limit)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
