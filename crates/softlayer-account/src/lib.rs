//! Account client and data models for the SoftLayer API.
//!
//! Provides the typed client for `SoftLayer_Account`: the entry point
//! for everything owned by the authenticated account, from guests and
//! DNS zones to billing figures.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::AccountService;
pub use models::{Account, AccountStatus, Customer};

/// Convenient result alias that reuses the shared SoftLayer error type.
pub type Result<T> = softlayer_core::Result<T>;
