//! Strongly-typed identifiers for SoftLayer resources.
//!
//! SoftLayer addresses most objects by numeric id. This module provides
//! type-safe wrappers for the ids of different resources, preventing
//! mix-ups at compile time, plus the UUID-shaped global identifier some
//! resources carry in addition to their numeric id.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Macro to generate strongly-typed numeric id wrapper types.
macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $doc:expr) => {
        $(#[$meta])*
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates a new id wrapper from a raw id.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the raw numeric id.
            #[must_use]
            pub const fn get(&self) -> i64 {
                self.0
            }

            /// Parses an id from a decimal string.
            ///
            /// # Errors
            ///
            /// Returns an error if the string is not a valid integer.
            pub fn parse_str(input: &str) -> Result<Self> {
                input
                    .parse::<i64>()
                    .map(Self)
                    .map_err(|_| Error::InvalidIdentifier(input.to_string()))
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(wrapper: $name) -> Self {
                wrapper.0
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse_str(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// Generate all id types
id_type!(AccountId, "SoftLayer_Account id");
id_type!(GuestId, "SoftLayer_Virtual_Guest id");
id_type!(DomainId, "SoftLayer_Dns_Domain id");
id_type!(RecordId, "SoftLayer_Dns_Domain_ResourceRecord id");
id_type!(PackageId, "SoftLayer_Product_Package id");
id_type!(ItemId, "SoftLayer_Product_Item id");
id_type!(PriceId, "SoftLayer_Product_Item_Price id");
id_type!(OrderId, "SoftLayer_Billing_Order id");
id_type!(ImageId, "SoftLayer_Virtual_Disk_Image id");
id_type!(LocationId, "SoftLayer_Location id");

/// UUID-shaped global identifier carried by guests and image templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobalIdentifier(Uuid);

impl GlobalIdentifier {
    /// Creates a global identifier from a [`Uuid`].
    #[must_use]
    pub const fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner [`Uuid`].
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parses a global identifier from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid UUID.
    pub fn parse_str(input: &str) -> Result<Self> {
        Uuid::parse_str(input)
            .map(Self)
            .map_err(|_| Error::InvalidIdentifier(input.to_string()))
    }
}

impl From<Uuid> for GlobalIdentifier {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<GlobalIdentifier> for Uuid {
    fn from(identifier: GlobalIdentifier) -> Self {
        identifier.0
    }
}

impl FromStr for GlobalIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl fmt::Display for GlobalIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_UUID: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn test_guest_id_new() {
        let id = GuestId::new(1_234_567);
        assert_eq!(id.get(), 1_234_567);
    }

    #[test]
    fn test_guest_id_parse_str_valid() {
        let id = GuestId::parse_str("42").unwrap();
        assert_eq!(id, GuestId::new(42));
    }

    #[test]
    fn test_guest_id_parse_str_invalid() {
        let result = GuestId::parse_str("forty-two");
        assert!(matches!(result.unwrap_err(), Error::InvalidIdentifier(_)));
    }

    #[test]
    fn test_guest_id_from_str() {
        let id: GuestId = "42".parse().unwrap();
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn test_guest_id_display() {
        assert_eq!(GuestId::new(42).to_string(), "42");
    }

    #[test]
    fn test_guest_id_conversions() {
        let id: GuestId = 42i64.into();
        let raw: i64 = id.into();
        assert_eq!(raw, 42);
    }

    #[test]
    fn test_guest_id_serialize_transparent() {
        let json = serde_json::to_string(&GuestId::new(42)).unwrap();
        assert_eq!(json, "42");

        let id: GuestId = serde_json::from_str("42").unwrap();
        assert_eq!(id, GuestId::new(42));
    }

    #[test]
    fn test_different_id_types_are_distinct() {
        // Same raw value, different types; they only meet as strings.
        let guest = GuestId::new(7);
        let domain = DomainId::new(7);
        assert_eq!(guest.to_string(), domain.to_string());
    }

    #[test]
    fn test_id_ordering() {
        let mut ids = vec![PackageId::new(3), PackageId::new(1), PackageId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![PackageId::new(1), PackageId::new(2), PackageId::new(3)]);
    }

    #[test]
    fn test_global_identifier_parse() {
        let identifier = GlobalIdentifier::parse_str(VALID_UUID).unwrap();
        assert_eq!(identifier.to_string(), VALID_UUID);
    }

    #[test]
    fn test_global_identifier_parse_invalid() {
        let result = GlobalIdentifier::parse_str("not-a-uuid");
        assert!(matches!(result.unwrap_err(), Error::InvalidIdentifier(_)));
    }

    #[test]
    fn test_global_identifier_serialize() {
        let identifier = GlobalIdentifier::parse_str(VALID_UUID).unwrap();
        let json = serde_json::to_string(&identifier).unwrap();
        assert_eq!(json, format!("\"{VALID_UUID}\""));
    }

    #[test]
    fn test_global_identifier_conversions() {
        let uuid = Uuid::parse_str(VALID_UUID).unwrap();
        let identifier: GlobalIdentifier = uuid.into();
        assert_eq!(identifier.as_uuid(), &uuid);
        let back: Uuid = identifier.into();
        assert_eq!(back, uuid);
    }
}
