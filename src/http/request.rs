//! Request descriptors and the fluent builder
//!
//! A [`RequestDescriptor`] is an immutable value describing one HTTP call:
//! method, path, parameters, whether authentication is required, and whether
//! the endpoint speaks JSON or raw text. Descriptors carry no credentials,
//! so they are freely cloneable and loggable.

use crate::error::{Error, Result};
use crate::types::ResponseFormat;
use reqwest::Method;

/// Immutable description of one HTTP call
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    form: Vec<(String, Option<String>)>,
    requires_auth: bool,
    format: ResponseFormat,
}

impl RequestDescriptor {
    /// Start building a descriptor. Authentication is required by default;
    /// callers must opt out explicitly for public endpoints.
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }

    /// HTTP method
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Request path, relative to the client's base URL
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters in insertion order
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Form parameters in insertion order; `None` values are recorded but
    /// never sent on the wire
    pub fn form(&self) -> &[(String, Option<String>)] {
        &self.form
    }

    /// Form parameters that will actually be sent
    pub fn form_pairs(&self) -> Vec<(&str, &str)> {
        self.form
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
            .collect()
    }

    /// Whether this request must be dispatched with a credential
    pub fn requires_auth(&self) -> bool {
        self.requires_auth
    }

    /// Expected response format
    pub fn format(&self) -> ResponseFormat {
        self.format
    }

    /// Copy this descriptor into a builder for modification
    pub fn to_builder(&self) -> RequestBuilder {
        RequestBuilder {
            method: Some(self.method.clone()),
            path: self.path.clone(),
            query: self.query.clone(),
            form: self.form.clone(),
            requires_auth: self.requires_auth,
            format: self.format,
        }
    }
}

/// Fluent builder for [`RequestDescriptor`]
///
/// Every method returns a new value, so partially built requests can be
/// shared and branched safely.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Option<Method>,
    path: String,
    query: Vec<(String, String)>,
    form: Vec<(String, Option<String>)>,
    requires_auth: bool,
    format: ResponseFormat,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self {
            method: None,
            path: String::new(),
            query: Vec::new(),
            form: Vec::new(),
            requires_auth: true,
            format: ResponseFormat::Json,
        }
    }
}

impl RequestBuilder {
    /// Set the HTTP method
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Shorthand for `method(Method::GET)`
    #[must_use]
    pub fn get(self) -> Self {
        self.method(Method::GET)
    }

    /// Shorthand for `method(Method::POST)`
    #[must_use]
    pub fn post(self) -> Self {
        self.method(Method::POST)
    }

    /// Set the request path
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Add a query parameter. Last write wins for duplicate keys.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        upsert(&mut self.query, key.into(), value.into());
        self
    }

    /// Add a form parameter. Last write wins for duplicate keys.
    #[must_use]
    pub fn form(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        upsert(&mut self.form, key.into(), Some(value.into()));
        self
    }

    /// Add an optional form parameter. A `None` value records the key as
    /// explicitly unset, distinct from never mentioning it.
    #[must_use]
    pub fn form_opt(mut self, key: impl Into<String>, value: Option<String>) -> Self {
        upsert(&mut self.form, key.into(), value);
        self
    }

    /// Set whether this request requires authentication (default: true)
    #[must_use]
    pub fn requires_auth(mut self, required: bool) -> Self {
        self.requires_auth = required;
        self
    }

    /// Set the expected response format (default: JSON)
    #[must_use]
    pub fn format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    /// Build the descriptor.
    ///
    /// Fails with [`Error::Validation`] if the path is empty or no method
    /// was set.
    pub fn build(self) -> Result<RequestDescriptor> {
        let method = self
            .method
            .ok_or_else(|| Error::validation("request method is not set"))?;
        if self.path.is_empty() {
            return Err(Error::validation("request path must not be empty"));
        }

        Ok(RequestDescriptor {
            method,
            path: self.path,
            query: self.query,
            form: self.form,
            requires_auth: self.requires_auth,
            format: self.format,
        })
    }
}

/// Insert or replace a key in an insertion-ordered parameter list
fn upsert<V>(params: &mut Vec<(String, V)>, key: String, value: V) {
    if let Some(slot) = params.iter_mut().find(|(k, _)| *k == key) {
        slot.1 = value;
    } else {
        params.push((key, value));
    }
}
