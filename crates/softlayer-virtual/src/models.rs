//! Virtual guest models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use softlayer_core::id::{AccountId, GlobalIdentifier, GuestId, ImageId};
use softlayer_core::types::{Location, ProvisioningTransaction, TagReference};

/// A virtual guest (computing instance).
///
/// Relational fields (`datacenter`, `powerState`, `networkComponents`,
/// ...) are only populated when the caller requests them via an object
/// mask.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualGuest {
    /// Guest id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<GuestId>,

    /// Owning account id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,

    /// Globally unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_identifier: Option<GlobalIdentifier>,

    /// Hostname portion of the FQDN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    /// Domain portion of the FQDN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Fully qualified domain name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fully_qualified_domain_name: Option<String>,

    /// When the guest was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,

    /// When the guest was last modified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<DateTime<Utc>>,

    /// When provisioning completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provision_date: Option<DateTime<Utc>>,

    /// Number of CPU cores.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cpu: Option<i32>,

    /// Memory in megabytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_memory: Option<i32>,

    /// CPU count the guest was started with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_cpus: Option<i32>,

    /// Whether the guest bills hourly rather than monthly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_billing_flag: Option<bool>,

    /// Whether the guest runs on a dedicated account host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dedicated_account_host_only_flag: Option<bool>,

    /// Whether disks are local to the host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_disk_flag: Option<bool>,

    /// Whether the guest has only a private network interface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_network_only_flag: Option<bool>,

    /// Hypervisor-level UUID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Status id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,

    /// Operating system reference code (e.g. `UBUNTU_22_64`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_system_reference_code: Option<String>,

    /// Public IP address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_ip_address: Option<String>,

    /// Private IP address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_backend_ip_address: Option<String>,

    /// Datacenter the guest runs in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<Location>,

    /// Current power state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_state: Option<PowerState>,

    /// Current status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<GuestStatus>,

    /// Network components (interfaces).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_components: Option<Vec<NetworkComponent>>,

    /// Tags attached to the guest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_references: Option<Vec<TagReference>>,

    /// Transaction currently running against the guest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_transaction: Option<ProvisioningTransaction>,
}

/// Power state of a guest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PowerState {
    /// Stable key (`RUNNING`, `HALTED`, `PAUSED`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Lifecycle status of a guest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GuestStatus {
    /// Status id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Stable key (`ACTIVE`, `DISCONNECTED`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A guest network interface.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkComponent {
    /// Component id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Id of the owning guest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_id: Option<GuestId>,
    /// MAC address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    /// Interface name (`eth`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Interface port number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// Negotiated speed in Mbps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<i32>,
    /// Maximum speed in Mbps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_speed: Option<i32>,
    /// Primary IP address bound to the interface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_ip_address: Option<String>,
}

/// Template describing an image capture.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageCaptureTemplate {
    /// Image template name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// One-line summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// A captured image template group.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageTemplateGroup {
    /// Template group id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Owning account id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,
    /// Globally unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_identifier: Option<GlobalIdentifier>,
    /// Template group name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// When the capture was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
}

/// Configuration for an operating system reload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReloadConfiguration {
    /// Image template to reload from, instead of the current OS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_template_id: Option<ImageId>,
    /// URI of a script to run after provisioning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_provision_script_uri: Option<String>,
    /// Whether to set up LVM on the reloaded disks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_lvm_flag: Option<bool>,
    /// SSH keys to install for root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_key_ids: Option<Vec<i64>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use softlayer_core::id::LocationId;

    #[test]
    fn test_guest_deserialize_with_relations() {
        let guest: VirtualGuest = serde_json::from_value(json!({
            "id": 360_955,
            "accountId": 12_345,
            "globalIdentifier": "550e8400-e29b-41d4-a716-446655440000",
            "hostname": "web01",
            "domain": "example.com",
            "fullyQualifiedDomainName": "web01.example.com",
            "createDate": "2025-10-30T10:10:00-06:00",
            "maxCpu": 4,
            "maxMemory": 8192,
            "hourlyBillingFlag": true,
            "operatingSystemReferenceCode": "UBUNTU_22_64",
            "datacenter": {"id": 1_854_895, "name": "dal13", "longName": "Dallas 13"},
            "powerState": {"keyName": "RUNNING", "name": "Running"}
        }))
        .unwrap();

        assert_eq!(guest.id, Some(GuestId::new(360_955)));
        assert_eq!(guest.hostname.as_deref(), Some("web01"));
        assert_eq!(guest.max_memory, Some(8192));
        assert_eq!(guest.datacenter.as_ref().unwrap().id, LocationId::new(1_854_895));
        assert_eq!(
            guest.power_state.as_ref().unwrap().key_name.as_deref(),
            Some("RUNNING")
        );
    }

    #[test]
    fn test_guest_template_serialize_is_sparse() {
        let template = VirtualGuest {
            hostname: Some("web02".to_string()),
            domain: Some("example.com".to_string()),
            start_cpus: Some(2),
            max_memory: Some(4096),
            hourly_billing_flag: Some(true),
            local_disk_flag: Some(false),
            operating_system_reference_code: Some("UBUNTU_22_64".to_string()),
            ..VirtualGuest::default()
        };

        let value = serde_json::to_value(&template).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 7);
        assert_eq!(value["startCpus"], json!(2));
        assert!(object.get("id").is_none());
    }

    #[test]
    fn test_reload_configuration_wire_names() {
        let config = ReloadConfiguration {
            image_template_id: Some(ImageId::new(112)),
            ssh_key_ids: Some(vec![84, 85]),
            ..ReloadConfiguration::default()
        };

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["imageTemplateId"], json!(112));
        assert_eq!(value["sshKeyIds"], json!([84, 85]));
    }

    #[test]
    fn test_network_component_deserialize() {
        let component: NetworkComponent = serde_json::from_value(json!({
            "id": 9_876_543,
            "guestId": 360_955,
            "macAddress": "06:aa:bb:cc:dd:ee",
            "name": "eth",
            "port": 1,
            "speed": 1000,
            "maxSpeed": 1000,
            "primaryIpAddress": "203.0.113.10"
        }))
        .unwrap();

        assert_eq!(component.guest_id, Some(GuestId::new(360_955)));
        assert_eq!(component.primary_ip_address.as_deref(), Some("203.0.113.10"));
    }
}
