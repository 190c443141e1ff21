//! Product catalog and ordering models.
//!
//! Monetary fields stay as decimal strings, the way the API emits them;
//! converting to a float is left to callers who can accept the loss.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use softlayer_core::id::{AccountId, ItemId, OrderId, PackageId, PriceId};
use softlayer_core::types::Location;

/// An orderable product package (e.g. a cloud server configuration).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductPackage {
    /// Package id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PackageId>,

    /// Stable key (e.g. `CLOUD_SERVER`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the package can currently be ordered (0/1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<i32>,

    /// Unit qualifying the package's capacity figures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_size: Option<i32>,
}

/// An item within a package (CPU count, RAM size, OS, add-on).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductItem {
    /// Item id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,

    /// Stable key (e.g. `RAM_8_GB`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    /// Display description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Capacity figure (meaning depends on the item's category).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,

    /// Unit for the capacity figure (`GB`, `CORE`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,

    /// Prices attached to the item, when masked in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prices: Option<Vec<ItemPrice>>,
}

/// A price for one item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemPrice {
    /// Price id; this is what orders reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PriceId>,

    /// Id of the priced item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<ItemId>,

    /// Location group the price applies to; unset means standard pricing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_group_id: Option<i64>,

    /// Hourly fee, as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_recurring_fee: Option<String>,

    /// Monthly fee, as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_fee: Option<String>,

    /// One-time setup fee, as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup_fee: Option<String>,

    /// One-time fee, as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_time_fee: Option<String>,

    /// The priced item, when masked in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Box<ProductItem>>,
}

/// A preset configuration within a package.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PackagePreset {
    /// Preset id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Id of the owning package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_id: Option<PackageId>,

    /// Stable key (e.g. `B1_2X8X100`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the preset is orderable ("0"/"1").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<String>,
}

/// A location a package is orderable in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PackageLocation {
    /// Row id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Id of the package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_id: Option<PackageId>,

    /// Id of the location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,

    /// The location, when masked in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// A category grouping items within a package (`ram`, `os`, `guest_core`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ItemCategory {
    /// Category id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Stable category code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_code: Option<String>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Maximum quantity orderable from the category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_limit: Option<i32>,
}

/// An order container: the template sent to verify or place an order,
/// and the shape the API returns enriched with totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductOrder {
    /// Concrete container type (e.g.
    /// `SoftLayer_Container_Product_Order_Virtual_Guest`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complex_type: Option<String>,

    /// Id of the package being ordered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_id: Option<PackageId>,

    /// Short name of the datacenter to order into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Resolved location, populated on verification responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_object: Option<Location>,

    /// Number of resources to order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,

    /// Bill hourly rather than monthly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_hourly_pricing: Option<bool>,

    /// Item prices making up the order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prices: Option<Vec<ItemPrice>>,

    /// Image template to provision from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_template_id: Option<i64>,

    /// Global identifier variant of the image template reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_template_global_identifier: Option<String>,

    /// Informational message set by verification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Monthly total after tax, as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_tax_recurring: Option<String>,

    /// Monthly total before tax, as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_tax_recurring: Option<String>,

    /// Setup total after tax, as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_tax_setup: Option<String>,

    /// Nested containers for multi-part orders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_containers: Option<Vec<ProductOrder>>,
}

/// A placed billing order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BillingOrder {
    /// Order id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,

    /// Id of the ordering account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,

    /// Order status (`PENDING_AUTO_APPROVAL`, `APPROVED`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Receipt returned by order placement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    /// Id of the created order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,

    /// When the order was placed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<DateTime<Utc>>,

    /// The priced order as placed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_details: Option<ProductOrder>,

    /// The billing order created for it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placed_order: Option<BillingOrder>,
}
