//! Virtual guest client and data models for the SoftLayer API.
//!
//! Provides the typed client for `SoftLayer_Virtual_Guest`: instance
//! lifecycle, power control, lookup, tagging, and disk image operations.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::VirtualGuestService;
pub use models::{
    GuestStatus, ImageCaptureTemplate, ImageTemplateGroup, NetworkComponent, PowerState,
    ReloadConfiguration, VirtualGuest,
};

/// Convenient result alias that reuses the shared SoftLayer error type.
pub type Result<T> = softlayer_core::Result<T>;
