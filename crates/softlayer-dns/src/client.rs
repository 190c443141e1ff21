//! Typed DNS service clients.

use crate::models::{DnsDomain, ResourceRecord};
use crate::Result;
use softlayer_core::id::{DomainId, RecordId};
use softlayer_core::service::{param, ServiceHandle};
use softlayer_core::session::ApiTransport;
use std::sync::Arc;

/// Namespaced name of the DNS domain service.
pub const DOMAIN_SERVICE: &str = "SoftLayer_Dns_Domain";

/// Namespaced name of the DNS resource record service.
pub const RECORD_SERVICE: &str = "SoftLayer_Dns_Domain_ResourceRecord";

/// Client for `SoftLayer_Dns_Domain`.
#[derive(Debug, Clone)]
pub struct DnsDomainService {
    inner: ServiceHandle,
}

impl DnsDomainService {
    /// Create a client dispatching through `transport`.
    #[must_use]
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            inner: ServiceHandle::new(transport, DOMAIN_SERVICE),
        }
    }

    /// Scope subsequent calls to one domain.
    #[must_use]
    pub fn with_id(mut self, id: DomainId) -> Self {
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

    /// Create a zone. The template must carry at least one A or AAAA
    /// record; the nameservers add a default SOA and NS records.
    pub async fn create_object(&self, template: &DnsDomain) -> Result<DnsDomain> {
        self.inner
            .call("createObject", vec![param(template)?])
            .await
    }

    /// Create multiple zones in one call.
    pub async fn create_objects(&self, templates: &[DnsDomain]) -> Result<Vec<DnsDomain>> {
        self.inner
            .call("createObjects", vec![param(templates)?])
            .await
    }

    /// Delete the scoped zone and all of its records.
    pub async fn delete_object(&self) -> Result<bool> {
        self.inner.call("deleteObject", Vec::new()).await
    }

    /// Fetch the scoped zone.
    pub async fn get_object(&self) -> Result<DnsDomain> {
        self.inner.call("getObject", Vec::new()).await
    }

    /// Look up zones by exact name.
    pub async fn get_by_domain_name(&self, name: &str) -> Result<Vec<DnsDomain>> {
        self.inner
            .call("getByDomainName", vec![param(name)?])
            .await
    }

    /// List the zone's records.
    pub async fn get_resource_records(&self) -> Result<Vec<ResourceRecord>> {
        self.inner.call("getResourceRecords", Vec::new()).await
    }

    /// Fetch the zone's SOA record.
    pub async fn get_soa_resource_record(&self) -> Result<ResourceRecord> {
        self.inner.call("getSoaResourceRecord", Vec::new()).await
    }

    /// Render the zone as a BIND zone file.
    pub async fn get_zone_file_contents(&self) -> Result<String> {
        self.inner.call("getZoneFileContents", Vec::new()).await
    }

    /// Whether the zone is managed on the caller's behalf.
    pub async fn get_managed_resource_flag(&self) -> Result<bool> {
        self.inner.call("getManagedResourceFlag", Vec::new()).await
    }

    /// Create an A record on the scoped zone.
    pub async fn create_a_record(
        &self,
        host: &str,
        data: &str,
        ttl: i32,
    ) -> Result<ResourceRecord> {
        self.inner
            .call(
                "createARecord",
                vec![param(host)?, param(data)?, param(&ttl)?],
            )
            .await
    }

    /// Create an AAAA record on the scoped zone.
    pub async fn create_aaaa_record(
        &self,
        host: &str,
        data: &str,
        ttl: i32,
    ) -> Result<ResourceRecord> {
        self.inner
            .call(
                "createAaaaRecord",
                vec![param(host)?, param(data)?, param(&ttl)?],
            )
            .await
    }

    /// Create a CNAME record on the scoped zone.
    pub async fn create_cname_record(
        &self,
        host: &str,
        data: &str,
        ttl: i32,
    ) -> Result<ResourceRecord> {
        self.inner
            .call(
                "createCnameRecord",
                vec![param(host)?, param(data)?, param(&ttl)?],
            )
            .await
    }

    /// Create an MX record on the scoped zone.
    pub async fn create_mx_record(
        &self,
        host: &str,
        data: &str,
        ttl: i32,
        mx_priority: i32,
    ) -> Result<ResourceRecord> {
        self.inner
            .call(
                "createMxRecord",
                vec![param(host)?, param(data)?, param(&ttl)?, param(&mx_priority)?],
            )
            .await
    }

    /// Create an NS record on the scoped zone.
    pub async fn create_ns_record(
        &self,
        host: &str,
        data: &str,
        ttl: i32,
    ) -> Result<ResourceRecord> {
        self.inner
            .call(
                "createNsRecord",
                vec![param(host)?, param(data)?, param(&ttl)?],
            )
            .await
    }

    /// Create a TXT record on the scoped zone.
    pub async fn create_txt_record(
        &self,
        host: &str,
        data: &str,
        ttl: i32,
    ) -> Result<ResourceRecord> {
        self.inner
            .call(
                "createTxtRecord",
                vec![param(host)?, param(data)?, param(&ttl)?],
            )
            .await
    }

    /// Create an SPF record on the scoped zone.
    pub async fn create_spf_record(
        &self,
        host: &str,
        data: &str,
        ttl: i32,
    ) -> Result<ResourceRecord> {
        self.inner
            .call(
                "createSpfRecord",
                vec![param(host)?, param(data)?, param(&ttl)?],
            )
            .await
    }

    /// Create a PTR record for reverse DNS.
    pub async fn create_ptr_record(
        &self,
        ip_address: &str,
        ptr_record: &str,
        ttl: i32,
    ) -> Result<ResourceRecord> {
        self.inner
            .call(
                "createPtrRecord",
                vec![param(ip_address)?, param(ptr_record)?, param(&ttl)?],
            )
            .await
    }
}

/// Client for `SoftLayer_Dns_Domain_ResourceRecord`.
#[derive(Debug, Clone)]
pub struct DnsResourceRecordService {
    inner: ServiceHandle,
}

impl DnsResourceRecordService {
    /// Create a client dispatching through `transport`.
    #[must_use]
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            inner: ServiceHandle::new(transport, RECORD_SERVICE),
        }
    }

    /// Scope subsequent calls to one record.
    #[must_use]
    pub fn with_id(mut self, id: RecordId) -> Self {
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

    /// Fetch the scoped record.
    pub async fn get_object(&self) -> Result<ResourceRecord> {
        self.inner.call("getObject", Vec::new()).await
    }

    /// Create a record from a template.
    pub async fn create_object(&self, template: &ResourceRecord) -> Result<ResourceRecord> {
        self.inner
            .call("createObject", vec![param(template)?])
            .await
    }

    /// Edit the scoped record.
    pub async fn edit_object(&self, template: &ResourceRecord) -> Result<bool> {
        self.inner.call("editObject", vec![param(template)?]).await
    }

    /// Delete the scoped record.
    pub async fn delete_object(&self) -> Result<bool> {
        self.inner.call("deleteObject", Vec::new()).await
    }
}
