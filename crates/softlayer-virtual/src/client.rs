//! Typed virtual guest client.

use crate::models::{
    GuestStatus, ImageCaptureTemplate, ImageTemplateGroup, NetworkComponent, PowerState,
    ReloadConfiguration, VirtualGuest,
};
use crate::Result;
use softlayer_core::id::{GuestId, ImageId};
use softlayer_core::service::{param, ServiceHandle};
use softlayer_core::session::ApiTransport;
use softlayer_core::types::{Location, ProvisioningTransaction, TagReference};
use std::sync::Arc;

/// Namespaced name of the virtual guest service.
pub const SERVICE: &str = "SoftLayer_Virtual_Guest";

/// Client for `SoftLayer_Virtual_Guest`.
#[derive(Debug, Clone)]
pub struct VirtualGuestService {
    inner: ServiceHandle,
}

impl VirtualGuestService {
    /// Create a client dispatching through `transport`.
    #[must_use]
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            inner: ServiceHandle::new(transport, SERVICE),
        }
    }

    /// Scope subsequent calls to one guest.
    #[must_use]
    pub fn with_id(mut self, id: GuestId) -> Self {
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

    // Lifecycle

    /// Fetch the scoped guest.
    pub async fn get_object(&self) -> Result<VirtualGuest> {
        self.inner.call("getObject", Vec::new()).await
    }

    /// Provision a guest from a template. The response carries the new
    /// guest's ids; provisioning itself continues asynchronously.
    pub async fn create_object(&self, template: &VirtualGuest) -> Result<VirtualGuest> {
        self.inner
            .call("createObject", vec![param(template)?])
            .await
    }

    /// Provision multiple guests in one call.
    pub async fn create_objects(&self, templates: &[VirtualGuest]) -> Result<Vec<VirtualGuest>> {
        self.inner
            .call("createObjects", vec![param(templates)?])
            .await
    }

    /// Edit properties of the scoped guest.
    pub async fn edit_object(&self, template: &VirtualGuest) -> Result<bool> {
        self.inner.call("editObject", vec![param(template)?]).await
    }

    /// Cancel the scoped guest.
    pub async fn delete_object(&self) -> Result<bool> {
        self.inner.call("deleteObject", Vec::new()).await
    }

    // Lookup

    /// Find guests by hostname.
    pub async fn find_by_hostname(&self, hostname: &str) -> Result<Vec<VirtualGuest>> {
        self.inner
            .call("findByHostname", vec![param(hostname)?])
            .await
    }

    /// Find the guest bound to an IP address.
    pub async fn find_by_ip_address(&self, ip_address: &str) -> Result<VirtualGuest> {
        self.inner
            .call("findByIpAddress", vec![param(ip_address)?])
            .await
    }

    // Power control

    /// Pause the scoped guest.
    pub async fn pause(&self) -> Result<bool> {
        self.inner.call("pause", Vec::new()).await
    }

    /// Resume the scoped guest from pause.
    pub async fn resume(&self) -> Result<bool> {
        self.inner.call("resume", Vec::new()).await
    }

    /// Power the scoped guest on.
    pub async fn power_on(&self) -> Result<bool> {
        self.inner.call("powerOn", Vec::new()).await
    }

    /// Power the scoped guest off immediately.
    pub async fn power_off(&self) -> Result<bool> {
        self.inner.call("powerOff", Vec::new()).await
    }

    /// Ask the OS to shut down, then power off.
    pub async fn power_off_soft(&self) -> Result<bool> {
        self.inner.call("powerOffSoft", Vec::new()).await
    }

    /// Power-cycle the scoped guest.
    pub async fn power_cycle(&self) -> Result<bool> {
        self.inner.call("powerCycle", Vec::new()).await
    }

    /// Reboot, soft first with a hard fallback.
    pub async fn reboot_default(&self) -> Result<bool> {
        self.inner.call("rebootDefault", Vec::new()).await
    }

    /// Reboot via the OS.
    pub async fn reboot_soft(&self) -> Result<bool> {
        self.inner.call("rebootSoft", Vec::new()).await
    }

    /// Reboot at the hypervisor level.
    pub async fn reboot_hard(&self) -> Result<bool> {
        self.inner.call("rebootHard", Vec::new()).await
    }

    /// Current power state.
    pub async fn get_power_state(&self) -> Result<PowerState> {
        self.inner.call("getPowerState", Vec::new()).await
    }

    // State and metadata

    /// Current lifecycle status.
    pub async fn get_status(&self) -> Result<GuestStatus> {
        self.inner.call("getStatus", Vec::new()).await
    }

    /// The transaction currently running against the guest, if any.
    pub async fn get_active_transaction(&self) -> Result<ProvisioningTransaction> {
        self.inner.call("getActiveTransaction", Vec::new()).await
    }

    /// All transactions currently running against the guest.
    pub async fn get_active_transactions(&self) -> Result<Vec<ProvisioningTransaction>> {
        self.inner.call("getActiveTransactions", Vec::new()).await
    }

    /// Datacenter the guest runs in.
    pub async fn get_datacenter(&self) -> Result<Location> {
        self.inner.call("getDatacenter", Vec::new()).await
    }

    /// Public IP address.
    pub async fn get_primary_ip_address(&self) -> Result<String> {
        self.inner.call("getPrimaryIpAddress", Vec::new()).await
    }

    /// Private IP address.
    pub async fn get_primary_backend_ip_address(&self) -> Result<String> {
        self.inner
            .call("getPrimaryBackendIpAddress", Vec::new())
            .await
    }

    /// Network interfaces.
    pub async fn get_network_components(&self) -> Result<Vec<NetworkComponent>> {
        self.inner.call("getNetworkComponents", Vec::new()).await
    }

    /// Tags attached to the guest.
    pub async fn get_tag_references(&self) -> Result<Vec<TagReference>> {
        self.inner.call("getTagReferences", Vec::new()).await
    }

    /// Replace the guest's tags with a comma-separated list.
    pub async fn set_tags(&self, tags: &str) -> Result<bool> {
        self.inner.call("setTags", vec![param(tags)?]).await
    }

    /// Replace the guest's user metadata.
    pub async fn set_user_metadata(&self, metadata: &[String]) -> Result<bool> {
        self.inner
            .call("setUserMetadata", vec![param(metadata)?])
            .await
    }

    /// Ping the public interface.
    pub async fn is_pingable(&self) -> Result<bool> {
        self.inner.call("isPingable", Vec::new()).await
    }

    /// Ping the private interface.
    pub async fn is_backend_pingable(&self) -> Result<bool> {
        self.inner.call("isBackendPingable", Vec::new()).await
    }

    // Images and disks

    /// Attach a disk image; returns the attach transaction.
    pub async fn attach_disk_image(&self, image_id: ImageId) -> Result<ProvisioningTransaction> {
        self.inner
            .call("attachDiskImage", vec![param(&image_id)?])
            .await
    }

    /// Detach a disk image; returns the detach transaction.
    pub async fn detach_disk_image(&self, image_id: ImageId) -> Result<ProvisioningTransaction> {
        self.inner
            .call("detachDiskImage", vec![param(&image_id)?])
            .await
    }

    /// Mount an ISO image as the boot device.
    pub async fn mount_iso_image(
        &self,
        disk_image_id: ImageId,
    ) -> Result<ProvisioningTransaction> {
        self.inner
            .call("mountIsoImage", vec![param(&disk_image_id)?])
            .await
    }

    /// Unmount the currently mounted ISO image.
    pub async fn unmount_iso_image(&self) -> Result<ProvisioningTransaction> {
        self.inner.call("unmountIsoImage", Vec::new()).await
    }

    /// Capture the guest's disks into an image template group.
    pub async fn capture_image(
        &self,
        capture_template: &ImageCaptureTemplate,
    ) -> Result<ImageTemplateGroup> {
        self.inner
            .call("captureImage", vec![param(capture_template)?])
            .await
    }

    /// Reload the operating system. Pass `"FORCE"` as the token to skip
    /// the confirmation handshake.
    pub async fn reload_operating_system(
        &self,
        token: &str,
        config: &ReloadConfiguration,
    ) -> Result<String> {
        self.inner
            .call("reloadOperatingSystem", vec![param(token)?, param(config)?])
            .await
    }

    // Void operations

    /// Download and run a script on the guest.
    pub async fn execute_remote_script(&self, uri: &str) -> Result<()> {
        self.inner
            .call_unit("executeRemoteScript", vec![param(uri)?])
            .await
    }

    /// Isolate the guest ahead of a destructive action.
    pub async fn isolate_instance_for_destructive_action(&self) -> Result<()> {
        self.inner
            .call_unit("isolateInstanceForDestructiveAction", Vec::new())
            .await
    }

    /// Cancel a previously requested isolation.
    pub async fn cancel_isolation_for_destructive_action(&self) -> Result<()> {
        self.inner
            .call_unit("cancelIsolationForDestructiveAction", Vec::new())
            .await
    }
}
