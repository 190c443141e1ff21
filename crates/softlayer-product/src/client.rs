//! Typed product catalog and ordering clients.

use crate::models::{
    ItemCategory, ItemPrice, OrderReceipt, PackageLocation, PackagePreset, ProductItem,
    ProductOrder, ProductPackage,
};
use crate::Result;
use softlayer_core::id::{AccountId, LocationId, OrderId, PackageId};
use softlayer_core::service::{param, ServiceHandle};
use softlayer_core::session::ApiTransport;
use std::sync::Arc;

/// Namespaced name of the product package service.
pub const PACKAGE_SERVICE: &str = "SoftLayer_Product_Package";

/// Namespaced name of the product order service.
pub const ORDER_SERVICE: &str = "SoftLayer_Product_Order";

/// Client for `SoftLayer_Product_Package`.
#[derive(Debug, Clone)]
pub struct ProductPackageService {
    inner: ServiceHandle,
}

impl ProductPackageService {
    /// Create a client dispatching through `transport`.
    #[must_use]
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            inner: ServiceHandle::new(transport, PACKAGE_SERVICE),
        }
    }

    /// Scope subsequent calls to one package.
    #[must_use]
    pub fn with_id(mut self, id: PackageId) -> Self {
        self.inner = self.inner.with_id(id.get());
        self
    }

    /// Set the object mask.
    #[must_use]
    pub fn with_mask(mut self, mask: impl Into<String>) -> Self {
        self.inner = self.inner.with_mask(mask);
        self
    }

    /// Set the object filter.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.inner = self.inner.with_filter(filter);
        self
    }

    /// Set the result limit.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.inner = self.inner.with_limit(limit);
        self
    }

    /// Set the result offset.
    #[must_use]
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.inner = self.inner.with_offset(offset);
        self
    }

    /// Fetch the scoped package.
    pub async fn get_object(&self) -> Result<ProductPackage> {
        self.inner.call("getObject", Vec::new()).await
    }

    /// List every package.
    pub async fn get_all_objects(&self) -> Result<Vec<ProductPackage>> {
        self.inner.call("getAllObjects", Vec::new()).await
    }

    /// List active packages carrying an attribute.
    pub async fn get_active_packages_by_attribute(
        &self,
        attribute_key_name: &str,
    ) -> Result<Vec<ProductPackage>> {
        self.inner
            .call(
                "getActivePackagesByAttribute",
                vec![param(attribute_key_name)?],
            )
            .await
    }

    /// List the scoped package's items.
    pub async fn get_items(&self) -> Result<Vec<ProductItem>> {
        self.inner.call("getItems", Vec::new()).await
    }

    /// List the scoped package's currently orderable items.
    pub async fn get_active_items(&self) -> Result<Vec<ProductItem>> {
        self.inner.call("getActiveItems", Vec::new()).await
    }

    /// List the scoped package's item prices.
    pub async fn get_item_prices(&self) -> Result<Vec<ItemPrice>> {
        self.inner.call("getItemPrices", Vec::new()).await
    }

    /// List usage-rate prices for a location and category.
    pub async fn get_active_usage_rate_prices(
        &self,
        location_id: LocationId,
        category_code: &str,
    ) -> Result<Vec<ItemPrice>> {
        self.inner
            .call(
                "getActiveUsageRatePrices",
                vec![param(&location_id)?, param(category_code)?],
            )
            .await
    }

    /// List the scoped package's active presets.
    pub async fn get_active_presets(&self) -> Result<Vec<PackagePreset>> {
        self.inner.call("getActivePresets", Vec::new()).await
    }

    /// List locations the scoped package can be ordered into.
    pub async fn get_available_locations(&self) -> Result<Vec<PackageLocation>> {
        self.inner.call("getAvailableLocations", Vec::new()).await
    }

    /// List the scoped package's item categories.
    pub async fn get_categories(&self) -> Result<Vec<ItemCategory>> {
        self.inner.call("getCategories", Vec::new()).await
    }
}

/// Client for `SoftLayer_Product_Order`.
#[derive(Debug, Clone)]
pub struct ProductOrderService {
    inner: ServiceHandle,
}

impl ProductOrderService {
    /// Create a client dispatching through `transport`.
    #[must_use]
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            inner: ServiceHandle::new(transport, ORDER_SERVICE),
        }
    }

    /// Scope subsequent calls to one billing order.
    #[must_use]
    pub fn with_id(mut self, id: OrderId) -> Self {
        self.inner = self.inner.with_id(id.get());
        self
    }

    /// Set the object mask.
    #[must_use]
    pub fn with_mask(mut self, mask: impl Into<String>) -> Self {
        self.inner = self.inner.with_mask(mask);
        self
    }

    /// Set the object filter.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.inner = self.inner.with_filter(filter);
        self
    }

    /// Set the result limit.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.inner = self.inner.with_limit(limit);
        self
    }

    /// Set the result offset.
    #[must_use]
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.inner = self.inner.with_offset(offset);
        self
    }

    /// Price an order without placing it. The response echoes the
    /// container enriched with totals and any verification messages.
    pub async fn verify_order(&self, order: &ProductOrder) -> Result<ProductOrder> {
        self.inner.call("verifyOrder", vec![param(order)?]).await
    }

    /// Place an order. `save_as_quote` turns the order into a quote
    /// instead of billing it; `None` leaves the decision to the API.
    pub async fn place_order(
        &self,
        order: &ProductOrder,
        save_as_quote: Option<bool>,
    ) -> Result<OrderReceipt> {
        self.inner
            .call("placeOrder", vec![param(order)?, param(&save_as_quote)?])
            .await
    }

    /// Save an order as a quote.
    pub async fn place_quote(&self, order: &ProductOrder) -> Result<OrderReceipt> {
        self.inner.call("placeQuote", vec![param(order)?]).await
    }

    /// Check that every price is orderable for the account.
    pub async fn check_item_availability(
        &self,
        item_prices: &[ItemPrice],
        account_id: Option<AccountId>,
        availability_type_key_names: &[String],
    ) -> Result<bool> {
        self.inner
            .call(
                "checkItemAvailability",
                vec![
                    param(item_prices)?,
                    param(&account_id)?,
                    param(availability_type_key_names)?,
                ],
            )
            .await
    }

    /// Check a price set for mutually exclusive items.
    pub async fn check_item_conflicts(&self, item_prices: &[ItemPrice]) -> Result<bool> {
        self.inner
            .call("checkItemConflicts", vec![param(item_prices)?])
            .await
    }
}
