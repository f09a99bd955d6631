use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a003_manufacturer::aggregate::{Manufacturer, ManufacturerDto};
use contracts::shared::list_query::{ListQuery, ListResponse};

use super::parse_id;
use crate::domain::a003_manufacturer::service;
use crate::shared::error::ServiceResult;

/// GET /api/admin/manufacturers
pub async fn list(Query(query): Query<ListQuery>) -> ServiceResult<Json<ListResponse<Manufacturer>>> {
    Ok(Json(service::list(query).await?))
}

/// GET /api/admin/manufacturers/:id
pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<Manufacturer>> {
    let id = parse_id::<Manufacturer>(&id)?;
    Ok(Json(service::get_by_id(id).await?))
}

/// POST /api/admin/manufacturers
pub async fn create(Json(dto): Json<ManufacturerDto>) -> ServiceResult<(StatusCode, Json<Manufacturer>)> {
    let manufacturer = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(manufacturer)))
}

/// PUT /api/admin/manufacturers/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<ManufacturerDto>,
) -> ServiceResult<Json<Manufacturer>> {
    let id = parse_id::<Manufacturer>(&id)?;
    Ok(Json(service::update(id, dto).await?))
}

/// DELETE /api/admin/manufacturers/:id
pub async fn delete(Path(id): Path<String>) -> ServiceResult<StatusCode> {
    let id = parse_id::<Manufacturer>(&id)?;
    service::delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
