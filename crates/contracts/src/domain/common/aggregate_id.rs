use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier type of a catalog aggregate
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id the way it appears in URLs and JSON
    fn as_string(&self) -> String;

    /// Parse an id taken from a URL path segment
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for uuid::Uuid {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s).map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Declares a `Uuid` newtype id for an aggregate.
#[macro_export]
macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub uuid::Uuid);

        impl $name {
            pub fn new(value: uuid::Uuid) -> Self {
                Self(value)
            }

            pub fn new_v4() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            pub fn value(&self) -> uuid::Uuid {
                self.0
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                uuid::Uuid::parse_str(s)
                    .map($name::new)
                    .map_err(|e| format!("Invalid UUID: {}", e))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::uuid_id!(TestId);

    #[test]
    fn test_uuid_id_round_trips_through_string() {
        let id = TestId::new_v4();
        let parsed = TestId::from_string(&id.as_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_uuid_id_rejects_garbage() {
        let err = TestId::from_string("not-a-uuid").unwrap_err();
        assert!(err.starts_with("Invalid UUID"));
    }

    #[test]
    fn test_uuid_id_serializes_as_plain_string() {
        let id = TestId::new(uuid::Uuid::nil());
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::json!("00000000-0000-0000-0000-000000000000"));
    }
}
