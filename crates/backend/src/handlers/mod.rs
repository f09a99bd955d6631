pub mod a001_product;
pub mod a002_category;
pub mod a003_manufacturer;

use contracts::domain::common::{AggregateId, AggregateRoot};

use crate::shared::error::{ServiceError, ServiceResult};

/// Path id of an `A`; a malformed id cannot name an existing record.
pub fn parse_id<A: AggregateRoot>(id: &str) -> ServiceResult<A::Id> {
    A::Id::from_string(id).map_err(|_| ServiceError::NotFound(A::element_name()))
}
