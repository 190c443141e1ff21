//! Typed account client.

use crate::models::{Account, AccountStatus, Customer};
use crate::Result;
use softlayer_core::id::AccountId;
use softlayer_core::service::{param, ServiceHandle};
use softlayer_core::session::ApiTransport;
use softlayer_dns::models::DnsDomain;
use softlayer_product::models::ProductPackage;
use softlayer_virtual::models::VirtualGuest;
use std::sync::Arc;

/// Namespaced name of the account service.
pub const SERVICE: &str = "SoftLayer_Account";

/// Client for `SoftLayer_Account`.
///
/// The account service implicitly operates on the authenticated
/// account; an explicit id is only needed by brand-level credentials
/// acting on child accounts.
#[derive(Debug, Clone)]
pub struct AccountService {
    inner: ServiceHandle,
}

impl AccountService {
    /// Create a client dispatching through `transport`.
    #[must_use]
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            inner: ServiceHandle::new(transport, SERVICE),
        }
    }

    /// Scope subsequent calls to one account.
    #[must_use]
    pub fn with_id(mut self, id: AccountId) -> Self {
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

    /// Fetch the account record.
    pub async fn get_object(&self) -> Result<Account> {
        self.inner.call("getObject", Vec::new()).await
    }

    /// The portal user tied to the current credentials.
    pub async fn get_current_user(&self) -> Result<Customer> {
        self.inner.call("getCurrentUser", Vec::new()).await
    }

    /// The account's lifecycle status.
    pub async fn get_account_status(&self) -> Result<AccountStatus> {
        self.inner.call("getAccountStatus", Vec::new()).await
    }

    /// Outstanding balance.
    pub async fn get_balance(&self) -> Result<f64> {
        self.inner.call("getBalance", Vec::new()).await
    }

    /// Projected total of the next invoice.
    pub async fn get_next_invoice_total_amount(&self) -> Result<f64> {
        self.inner
            .call("getNextInvoiceTotalAmount", Vec::new())
            .await
    }

    /// List the account's virtual guests.
    pub async fn get_virtual_guests(&self) -> Result<Vec<VirtualGuest>> {
        self.inner.call("getVirtualGuests", Vec::new()).await
    }

    /// List the account's hourly-billed virtual guests.
    pub async fn get_hourly_virtual_guests(&self) -> Result<Vec<VirtualGuest>> {
        self.inner.call("getHourlyVirtualGuests", Vec::new()).await
    }

    /// List the account's DNS zones.
    pub async fn get_domains(&self) -> Result<Vec<DnsDomain>> {
        self.inner.call("getDomains", Vec::new()).await
    }

    /// List packages the account can currently order from.
    pub async fn get_active_packages(&self) -> Result<Vec<ProductPackage>> {
        self.inner.call("getActivePackages", Vec::new()).await
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

    /// Fetch the value of an account trait.
    pub async fn get_account_trait_value(&self, key_name: &str) -> Result<String> {
        self.inner
            .call("getAccountTraitValue", vec![param(key_name)?])
            .await
    }

    /// Replace the abuse contact email addresses.
    pub async fn set_abuse_emails(&self, emails: &[String]) -> Result<bool> {
        self.inner
            .call("setAbuseEmails", vec![param(emails)?])
            .await
    }

    /// Activate a partner account from its activation hash.
    pub async fn activate_partner(&self, account_id: &str, hash_code: &str) -> Result<Account> {
        self.inner
            .call(
                "activatePartner",
                vec![param(account_id)?, param(hash_code)?],
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use softlayer_core::{Error, RequestOptions};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    #[derive(Debug, Clone)]
    struct RecordedCall {
        service: String,
        method: String,
        params: Vec<Value>,
        options: RequestOptions,
    }

    struct RecordingTransport {
        replies: Mutex<VecDeque<Result<Value>>>,
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl RecordingTransport {
        fn replying(reply: Result<Value>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(VecDeque::from([reply])),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ApiTransport for RecordingTransport {
        async fn request(
            &self,
            service: &str,
            method: &str,
            params: &[Value],
            options: &RequestOptions,
        ) -> Result<Value> {
            self.calls.lock().unwrap().push(RecordedCall {
                service: service.to_string(),
                method: method.to_string(),
                params: params.to_vec(),
                options: options.clone(),
            });
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(Value::Null))
        }
    }

    #[tokio::test]
    async fn full_chain_reaches_the_dispatcher_intact() {
        let transport = RecordingTransport::replying(Ok(json!({"id": 1})));
        let service = AccountService::new(transport.clone())
            .with_mask("a,b")
            .with_limit(10)
            .with_offset(5);

        let _ = service.activate_partner("foo", "bar").await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].service, "SoftLayer_Account");
        assert_eq!(calls[0].method, "activatePartner");
        assert_eq!(calls[0].params, vec![json!("foo"), json!("bar")]);
        assert_eq!(calls[0].options.mask.as_deref(), Some("mask[a,b]"));
        assert_eq!(calls[0].options.limit, Some(10));
        assert_eq!(calls[0].options.offset, Some(5));
        assert_eq!(calls[0].options.id, None);
        assert_eq!(calls[0].options.filter, None);
    }

    #[tokio::test]
    async fn get_virtual_guests_decodes_cross_domain_models() {
        let transport = RecordingTransport::replying(Ok(json!([
            {"id": 360_955, "hostname": "web01"},
            {"id": 361_204, "hostname": "batch02"}
        ])));
        let service = AccountService::new(transport.clone());

        let guests = service.get_virtual_guests().await.unwrap();
        assert_eq!(guests.len(), 2);
        assert_eq!(guests[1].hostname.as_deref(), Some("batch02"));
        assert_eq!(transport.calls()[0].method, "getVirtualGuests");
    }

    #[tokio::test]
    async fn get_balance_decodes_a_number() {
        let transport = RecordingTransport::replying(Ok(json!(125.50)));
        let service = AccountService::new(transport);

        let balance = service.get_balance().await.unwrap();
        assert!((balance - 125.50).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn authentication_error_passes_through() {
        let transport = RecordingTransport::replying(Err(Error::AuthenticationFailed(
            "Invalid API token.".to_string(),
        )));
        let service = AccountService::new(transport);

        let err = service.get_object().await.unwrap_err();
        assert_eq!(
            err,
            Error::AuthenticationFailed("Invalid API token.".to_string())
        );
    }

    #[tokio::test]
    async fn set_abuse_emails_wraps_the_list_in_one_param() {
        let transport = RecordingTransport::replying(Ok(json!(true)));
        let service = AccountService::new(transport.clone());

        let emails = vec!["abuse@example.com".to_string()];
        assert!(service.set_abuse_emails(&emails).await.unwrap());
        assert_eq!(
            transport.calls()[0].params,
            vec![json!(["abuse@example.com"])]
        );
    }
}
