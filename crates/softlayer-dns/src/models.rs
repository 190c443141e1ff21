//! DNS models shared by the domain and resource record clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use softlayer_core::id::{DomainId, RecordId};

/// A DNS zone hosted on the SoftLayer nameservers.
///
/// Domains carry general zone information; individual A, AAAA, MX and
/// similar entries live in the associated [`ResourceRecord`]s.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DnsDomain {
    /// Domain id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DomainId>,

    /// Zone name (e.g. `example.com`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Zone serial number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<i64>,

    /// When the zone was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_date: Option<DateTime<Utc>>,

    /// Whether the zone is managed on the caller's behalf.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_resource_flag: Option<bool>,

    /// The zone's records, when requested via an object mask.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_records: Option<Vec<ResourceRecord>>,
}

/// A single DNS record within a zone.
///
/// One shape covers every record type; SOA-specific fields stay unset on
/// ordinary records.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    /// Record id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    /// Id of the owning zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<DomainId>,

    /// Record host (left-hand label, `@` for the zone apex).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Record data (right-hand value).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// Record type (`a`, `aaaa`, `cname`, `mx`, `ns`, `ptr`, `soa`,
    /// `spf`, `txt`, `srv`).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,

    /// Time to live, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i32>,

    /// MX record priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mx_priority: Option<i32>,

    /// SOA expire interval.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire: Option<i32>,

    /// SOA minimum TTL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i32>,

    /// SOA refresh interval.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<i32>,

    /// SOA retry interval.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry: Option<i32>,

    /// SOA responsible-person mailbox.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_person: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_domain_deserialize() {
        let domain: DnsDomain = serde_json::from_value(json!({
            "id": 98_765,
            "name": "example.com",
            "serial": 2_025_110_201i64,
            "updateDate": "2025-11-02T09:00:00-06:00",
            "resourceRecords": [
                {"id": 1, "host": "@", "data": "ns1.softlayer.com.", "type": "ns", "ttl": 86400}
            ]
        }))
        .unwrap();

        assert_eq!(domain.id, Some(DomainId::new(98_765)));
        assert_eq!(domain.name.as_deref(), Some("example.com"));
        let records = domain.resource_records.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].record_type.as_deref(), Some("ns"));
    }

    #[test]
    fn test_record_type_wire_name() {
        let record = ResourceRecord {
            host: Some("mail".to_string()),
            data: Some("mx.example.com".to_string()),
            record_type: Some("mx".to_string()),
            mx_priority: Some(10),
            ..ResourceRecord::default()
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], json!("mx"));
        assert_eq!(value["mxPriority"], json!(10));
        assert!(value.get("record_type").is_none());
    }

    #[test]
    fn test_domain_serialize_skips_absent_fields() {
        let domain = DnsDomain {
            name: Some("example.com".to_string()),
            ..DnsDomain::default()
        };
        let json = serde_json::to_string(&domain).unwrap();
        assert_eq!(json, r#"{"name":"example.com"}"#);
    }

    #[test]
    fn test_soa_record_fields() {
        let record: ResourceRecord = serde_json::from_value(json!({
            "host": "@",
            "data": "ns1.softlayer.com.",
            "type": "soa",
            "ttl": 86400,
            "expire": 604_800,
            "minimum": 3600,
            "refresh": 3600,
            "retry": 300,
            "responsiblePerson": "root.example.com."
        }))
        .unwrap();

        assert_eq!(record.expire, Some(604_800));
        assert_eq!(record.responsible_person.as_deref(), Some("root.example.com."));
    }
}
