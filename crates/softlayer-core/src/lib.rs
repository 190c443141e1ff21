//! # softlayer-core
//!
//! Core types and utilities for working with the SoftLayer (IBM Cloud
//! Classic Infrastructure) API.
//!
//! This crate provides the session/transport layer, request options,
//! error handling, and shared domain types that the per-service client
//! crates build on.
//!
//! ## Modules
//!
//! - [`error`] - Error types and API fault mapping
//! - [`id`] - Strongly-typed identifiers for SoftLayer resources
//! - [`options`] - Per-call request options (object id, mask, filter, pagination)
//! - [`query`] - Query parameter assembly helpers
//! - [`config`] - Session configuration and credentials
//! - [`client`] - HTTP client settings and retry policies
//! - [`session`] - The REST transport dispatcher
//! - [`service`] - The generic service handle shared by all typed clients
//! - [`types`] - Domain types shared across services

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod id;
pub mod options;
pub mod query;
pub mod service;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use options::RequestOptions;
pub use service::ServiceHandle;
pub use session::{ApiTransport, RestSession, RestSessionBuilder};
