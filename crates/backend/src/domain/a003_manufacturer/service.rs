use contracts::domain::a003_manufacturer::aggregate::{Manufacturer, ManufacturerDto, ManufacturerId};
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::shared::list_query::{ListQuery, ListResponse};

use super::repository;
use crate::shared::error::{ServiceError, ServiceResult};

const DUPLICATE_CODE: &str = "Duplicate code";

pub async fn list(query: ListQuery) -> ServiceResult<ListResponse<Manufacturer>> {
    let query = query.normalized();
    let (items, total) = repository::list_paginated(&query).await?;
    Ok(ListResponse::new(items, total, &query))
}

pub async fn get_by_id(id: ManufacturerId) -> ServiceResult<Manufacturer> {
    repository::get_by_id(id.value())
        .await?
        .ok_or(ServiceError::NotFound(Manufacturer::element_name()))
}

pub async fn create(dto: ManufacturerDto) -> ServiceResult<Manufacturer> {
    let dto = dto.normalized();
    dto.validate().map_err(ServiceError::Validation)?;
    ensure_code_free(&dto.code, None).await?;

    let manufacturer = Manufacturer::new_for_insert(dto);
    repository::insert(&manufacturer)
        .await
        .map_err(|e| ServiceError::from_write(e, DUPLICATE_CODE))?;
    tracing::info!(
        "Created manufacturer {} ({})",
        manufacturer.id().as_string(),
        manufacturer.code
    );
    Ok(manufacturer)
}

pub async fn update(id: ManufacturerId, dto: ManufacturerDto) -> ServiceResult<Manufacturer> {
    let dto = dto.normalized();
    dto.validate().map_err(ServiceError::Validation)?;

    let mut manufacturer = get_by_id(id).await?;
    ensure_code_free(&dto.code, Some(id)).await?;

    manufacturer.update(dto);
    repository::update(&manufacturer)
        .await
        .map_err(|e| ServiceError::from_write(e, DUPLICATE_CODE))?;
    Ok(manufacturer)
}

pub async fn delete(id: ManufacturerId) -> ServiceResult<()> {
    if !repository::soft_delete(id.value()).await? {
        return Err(ServiceError::NotFound(Manufacturer::element_name()));
    }
    tracing::info!("Deleted manufacturer {}", id.as_string());
    Ok(())
}

async fn ensure_code_free(code: &str, except: Option<ManufacturerId>) -> ServiceResult<()> {
    if repository::find_by_code(code, except.map(|id| id.value())).await?.is_some() {
        return Err(ServiceError::Conflict(DUPLICATE_CODE.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::testing::run;
    use uuid::Uuid;

    fn dto(name: &str, code: &str) -> ManufacturerDto {
        ManufacturerDto {
            name: name.into(),
            code: code.into(),
            contact_info: None,
        }
    }

    fn code() -> String {
        format!("M-{}", Uuid::new_v4().simple())
    }

    #[test]
    fn test_duplicate_code_conflicts_until_deleted() {
        run(async {
            let code = code();
            let first = create(dto("Acme", &code)).await.unwrap();

            let err = create(dto("Acme Two", &format!(" {code} "))).await.unwrap_err();
            assert_eq!(err.status().as_u16(), 409);
            assert_eq!(err.public_message(), "Duplicate code");

            delete(first.id).await.unwrap();
            create(dto("Acme Two", &code)).await.unwrap();
        });
    }

    #[test]
    fn test_update_keeps_own_code() {
        run(async {
            let (code_a, code_b) = (code(), code());
            let a = create(dto("A", &code_a)).await.unwrap();
            create(dto("B", &code_b)).await.unwrap();

            assert_eq!(update(a.id, dto("A2", &code_a)).await.unwrap().name, "A2");
            let err = update(a.id, dto("A2", &code_b)).await.unwrap_err();
            assert!(matches!(err, ServiceError::Conflict(ref m) if m == "Duplicate code"));
        });
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        run(async {
            let id = ManufacturerId::new_v4();
            let err = get_by_id(id).await.unwrap_err();
            assert_eq!(err.public_message(), "Manufacturer not found");
            assert!(matches!(delete(id).await, Err(ServiceError::NotFound(_))));
        });
    }

    #[test]
    fn test_missing_code_is_rejected() {
        run(async {
            let err = create(dto("Acme", "  ")).await.unwrap_err();
            assert!(matches!(err, ServiceError::Validation(ref m) if m == "Code is required"));
        });
    }
}
