use super::{AggregateId, EntityMetadata};

/// Contract shared by the catalog aggregates
///
/// Instance methods expose the record's identity and lifecycle; the static
/// methods carry the naming used for tables, routes and UI labels.
pub trait AggregateRoot {
    type Id: AggregateId;

    fn id(&self) -> Self::Id;

    fn metadata(&self) -> &EntityMetadata;

    /// Aggregate index, e.g. "a001"
    fn aggregate_index() -> &'static str;

    /// Collection name used for REST routes, e.g. "products"
    fn collection_name() -> &'static str;

    /// Singular UI name, e.g. "Product"
    fn element_name() -> &'static str;

    /// Plural UI name, e.g. "Products"
    fn list_name() -> &'static str;

    /// Table name, e.g. "a001_product"
    fn table_name() -> String {
        format!(
            "{}_{}",
            Self::aggregate_index(),
            Self::element_name().to_lowercase()
        )
    }

    /// Admin REST endpoint, e.g. "/api/admin/products"
    fn endpoint() -> String {
        format!("/api/admin/{}", Self::collection_name())
    }
}
