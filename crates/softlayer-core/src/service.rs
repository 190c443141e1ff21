//! Generic service handle shared by all typed clients.
//!
//! SoftLayer exposes hundreds of services that differ only in name and
//! method catalog. [`ServiceHandle`] captures the part they share: a
//! transport reference, the service's namespaced name, and the per-call
//! options with their fluent setters. The typed per-service clients wrap
//! a handle and add one method per remote procedure.

use crate::error::{Error, Result};
use crate::options::RequestOptions;
use crate::session::ApiTransport;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Encode one positional parameter for dispatch.
///
/// `None` encodes as JSON null so later parameters keep their position.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as JSON.
pub fn param<T>(value: &T) -> Result<Value>
where
    T: Serialize + ?Sized,
{
    serde_json::to_value(value).map_err(|err| Error::Encode(err.to_string()))
}

/// Configured handle on one remote service.
///
/// A handle is a cheap value: cloning copies the options and bumps the
/// transport reference count. The fluent setters consume the handle and
/// return an updated copy, so a base handle can be shared across tasks
/// and specialized per call chain.
#[derive(Clone)]
pub struct ServiceHandle {
    transport: Arc<dyn ApiTransport>,
    name: &'static str,
    options: RequestOptions,
}

impl ServiceHandle {
    /// Create a handle on `name` dispatching through `transport`.
    #[must_use]
    pub fn new(transport: Arc<dyn ApiTransport>, name: &'static str) -> Self {
        Self {
            transport,
            name,
            options: RequestOptions::new(),
        }
    }

    /// The namespaced service name (e.g. `SoftLayer_Virtual_Guest`).
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The options that will accompany the next call.
    #[must_use]
    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    /// Scope subsequent calls to the object with `id`.
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.options = self.options.with_id(id);
        self
    }

    /// Set the object mask (normalized on the way in).
    #[must_use]
    pub fn with_mask(mut self, mask: impl Into<String>) -> Self {
        self.options = self.options.with_mask(mask);
        self
    }

    /// Set the object filter.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.options = self.options.with_filter(filter);
        self
    }

    /// Set the result limit.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.options = self.options.with_limit(limit);
        self
    }

    /// Set the result offset.
    #[must_use]
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.options = self.options.with_offset(offset);
        self
    }

    /// Invoke `method` and decode the response.
    ///
    /// # Errors
    ///
    /// Returns the transport's error untouched, or [`Error::Decode`] if
    /// the response value does not match `R`.
    pub async fn call<R>(&self, method: &str, params: Vec<Value>) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let value = self
            .transport
            .request(self.name, method, &params, &self.options)
            .await?;
        serde_json::from_value(value).map_err(|err| {
            Error::Decode(format!(
                "Unexpected response shape from `{}::{method}`: {err}",
                self.name
            ))
        })
    }

    /// Invoke `method`, discarding the (empty) response body.
    ///
    /// # Errors
    ///
    /// Returns the transport's error untouched.
    pub async fn call_unit(&self, method: &str, params: Vec<Value>) -> Result<()> {
        self.transport
            .request(self.name, method, &params, &self.options)
            .await?;
        Ok(())
    }
}

impl fmt::Debug for ServiceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceHandle")
            .field("name", &self.name)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
