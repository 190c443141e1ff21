//! DNS clients and data models for the SoftLayer API.
//!
//! Provides typed clients for `SoftLayer_Dns_Domain` and
//! `SoftLayer_Dns_Domain_ResourceRecord`, covering zone management and
//! the per-record-type creation shortcuts.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{DnsDomainService, DnsResourceRecordService};
pub use models::{DnsDomain, ResourceRecord};

/// Convenient result alias that reuses the shared SoftLayer error type.
pub type Result<T> = softlayer_core::Result<T>;
