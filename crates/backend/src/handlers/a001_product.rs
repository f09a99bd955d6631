use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_product::aggregate::{Product, ProductDto};
use contracts::shared::list_query::{ListQuery, ListResponse};

use super::parse_id;
use crate::domain::a001_product::service;
use crate::shared::error::ServiceResult;

/// GET /api/admin/products
pub async fn list(Query(query): Query<ListQuery>) -> ServiceResult<Json<ListResponse<Product>>> {
    Ok(Json(service::list(query).await?))
}

/// GET /api/admin/products/:id
pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<Product>> {
    let id = parse_id::<Product>(&id)?;
    Ok(Json(service::get_by_id(id).await?))
}

/// POST /api/admin/products
pub async fn create(Json(dto): Json<ProductDto>) -> ServiceResult<(StatusCode, Json<Product>)> {
    let product = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/admin/products/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<ProductDto>,
) -> ServiceResult<Json<Product>> {
    let id = parse_id::<Product>(&id)?;
    Ok(Json(service::update(id, dto).await?))
}

/// DELETE /api/admin/products/:id
pub async fn delete(Path(id): Path<String>) -> ServiceResult<StatusCode> {
    let id = parse_id::<Product>(&id)?;
    service::delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
