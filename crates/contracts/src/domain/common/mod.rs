//! Common types and traits for all catalog aggregates

pub mod aggregate_id;
pub mod aggregate_root;
pub mod entity_metadata;

// Re-exports
pub use aggregate_id::AggregateId;
pub use aggregate_root::AggregateRoot;
pub use entity_metadata::EntityMetadata;

/// Optional free-text field: trims the value and maps blank input to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("   ".into())), None);
        assert_eq!(non_blank(Some("  ACME ".into())), Some("ACME".to_string()));
    }
}
