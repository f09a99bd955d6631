use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a002_category::aggregate::{Category, CategoryDto};
use contracts::shared::list_query::{ListQuery, ListResponse};

use super::parse_id;
use crate::domain::a002_category::service;
use crate::shared::error::ServiceResult;

/// GET /api/admin/categories
pub async fn list(Query(query): Query<ListQuery>) -> ServiceResult<Json<ListResponse<Category>>> {
    Ok(Json(service::list(query).await?))
}

/// GET /api/admin/categories/:id
pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<Category>> {
    let id = parse_id::<Category>(&id)?;
    Ok(Json(service::get_by_id(id).await?))
}

/// POST /api/admin/categories
pub async fn create(Json(dto): Json<CategoryDto>) -> ServiceResult<(StatusCode, Json<Category>)> {
    let category = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/admin/categories/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<CategoryDto>,
) -> ServiceResult<Json<Category>> {
    let id = parse_id::<Category>(&id)?;
    Ok(Json(service::update(id, dto).await?))
}

/// DELETE /api/admin/categories/:id
pub async fn delete(Path(id): Path<String>) -> ServiceResult<StatusCode> {
    let id = parse_id::<Category>(&id)?;
    service::delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
