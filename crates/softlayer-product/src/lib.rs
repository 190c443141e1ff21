//! Product catalog and ordering clients for the SoftLayer API.
//!
//! Provides typed clients for `SoftLayer_Product_Package` (the catalog
//! of orderable configurations) and `SoftLayer_Product_Order` (order
//! verification and placement).

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{ProductOrderService, ProductPackageService};
pub use models::{
    BillingOrder, ItemCategory, ItemPrice, OrderReceipt, PackageLocation, PackagePreset,
    ProductItem, ProductOrder, ProductPackage,
};

/// Convenient result alias that reuses the shared SoftLayer error type.
pub type Result<T> = softlayer_core::Result<T>;
