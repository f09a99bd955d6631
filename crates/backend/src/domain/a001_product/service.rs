use contracts::domain::a001_product::aggregate::{Product, ProductDto, ProductId};
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::shared::list_query::{ListQuery, ListResponse};

use super::repository;
use crate::shared::error::{ServiceError, ServiceResult};

const DUPLICATE_SKU: &str = "Duplicate SKU";

pub async fn list(query: ListQuery) -> ServiceResult<ListResponse<Product>> {
    let query = query.normalized();
    let (items, total) = repository::list_paginated(&query).await?;
    Ok(ListResponse::new(items, total, &query))
}

pub async fn get_by_id(id: ProductId) -> ServiceResult<Product> {
    repository::get_by_id(id.value())
        .await?
        .ok_or(ServiceError::NotFound(Product::element_name()))
}

pub async fn create(dto: ProductDto) -> ServiceResult<Product> {
    let dto = dto.normalized();
    dto.validate().map_err(ServiceError::Validation)?;
    ensure_sku_free(&dto.sku, None).await?;

    let product = Product::new_for_insert(dto);
    repository::insert(&product)
        .await
        .map_err(|e| ServiceError::from_write(e, DUPLICATE_SKU))?;
    tracing::info!("Created product {} ({})", product.id().as_string(), product.sku);
    Ok(product)
}

pub async fn update(id: ProductId, dto: ProductDto) -> ServiceResult<Product> {
    let dto = dto.normalized();
    dto.validate().map_err(ServiceError::Validation)?;

    let mut product = get_by_id(id).await?;
    ensure_sku_free(&dto.sku, Some(id)).await?;

    product.update(dto);
    repository::update(&product)
        .await
        .map_err(|e| ServiceError::from_write(e, DUPLICATE_SKU))?;
    Ok(product)
}

pub async fn delete(id: ProductId) -> ServiceResult<()> {
    if !repository::soft_delete(id.value()).await? {
        return Err(ServiceError::NotFound(Product::element_name()));
    }
    tracing::info!("Deleted product {}", id.as_string());
    Ok(())
}

async fn ensure_sku_free(sku: &str, except: Option<ProductId>) -> ServiceResult<()> {
    if repository::find_by_sku(sku, except.map(|id| id.value())).await?.is_some() {
        return Err(ServiceError::Conflict(DUPLICATE_SKU.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::testing::run;
    use contracts::shared::list_query::{SortDirection, MAX_PAGE_SIZE};
    use uuid::Uuid;

    fn tag() -> String {
        Uuid::new_v4().simple().to_string()
    }

    fn dto(name: &str, sku: &str, price: f64) -> ProductDto {
        ProductDto {
            name: name.into(),
            sku: sku.into(),
            description: None,
            price,
            compare_at_price: None,
            stock: 10,
            low_stock_threshold: Some(2),
        }
    }

    fn search(q: &str) -> ListQuery {
        ListQuery {
            q: Some(q.into()),
            ..ListQuery::default()
        }
    }

    #[test]
    fn test_create_then_get() {
        run(async {
            let sku = tag();
            let created = create(dto("  Desk Lamp ", &sku, 49.9)).await.unwrap();
            assert_eq!(created.name, "Desk Lamp");

            let loaded = get_by_id(created.id).await.unwrap();
            assert_eq!(loaded.sku, sku);
            assert_eq!(loaded.price, 49.9);
            assert_eq!(loaded.low_stock_threshold, Some(2));
        });
    }

    #[test]
    fn test_invalid_payload_is_rejected() {
        run(async {
            let err = create(dto(" ", &tag(), 1.0)).await.unwrap_err();
            assert!(matches!(err, ServiceError::Validation(ref m) if m == "Name is required"));
            assert_eq!(err.status().as_u16(), 422);
        });
    }

    #[test]
    fn test_duplicate_sku_conflicts_until_deleted() {
        run(async {
            let sku = tag();
            let first = create(dto("Lamp", &sku, 10.0)).await.unwrap();

            let err = create(dto("Other lamp", &sku, 12.0)).await.unwrap_err();
            assert_eq!(err.status().as_u16(), 409);
            assert_eq!(err.public_message(), "Duplicate SKU");

            delete(first.id).await.unwrap();
            let reused = create(dto("Other lamp", &sku, 12.0)).await.unwrap();
            assert_ne!(reused.id, first.id);
        });
    }

    #[test]
    fn test_update_checks_sku_against_other_products() {
        run(async {
            let (sku_a, sku_b) = (tag(), tag());
            let a = create(dto("A", &sku_a, 1.0)).await.unwrap();
            create(dto("B", &sku_b, 2.0)).await.unwrap();

            let updated = update(a.id, dto("A2", &sku_a, 3.0)).await.unwrap();
            assert_eq!(updated.name, "A2");
            assert_eq!(updated.metadata.version, 1);

            let err = update(a.id, dto("A2", &sku_b, 3.0)).await.unwrap_err();
            assert_eq!(err.public_message(), "Duplicate SKU");
        });
    }

    #[test]
    fn test_unknown_and_deleted_ids_are_not_found() {
        run(async {
            let err = get_by_id(ProductId::new_v4()).await.unwrap_err();
            assert_eq!(err.status().as_u16(), 404);
            assert_eq!(err.public_message(), "Product not found");

            let p = create(dto("Gone", &tag(), 1.0)).await.unwrap();
            delete(p.id).await.unwrap();
            assert!(matches!(get_by_id(p.id).await, Err(ServiceError::NotFound(_))));
            assert!(matches!(delete(p.id).await, Err(ServiceError::NotFound(_))));
            assert!(matches!(
                update(p.id, dto("Gone", &tag(), 1.0)).await,
                Err(ServiceError::NotFound(_))
            ));
        });
    }

    #[test]
    fn test_search_escapes_wildcards() {
        run(async {
            let t = tag();
            create(dto(&format!("{t} 50% off"), &tag(), 1.0)).await.unwrap();
            create(dto(&format!("{t} 500 off"), &tag(), 1.0)).await.unwrap();

            let page = list(search(&format!("{t} 50%"))).await.unwrap();
            assert_eq!(page.total_count, 1);
            assert_eq!(page.items[0].name, format!("{t} 50% off"));

            let page = list(search(&format!("{} 50", t.to_uppercase()))).await.unwrap();
            assert_eq!(page.total_count, 2);
        });
    }

    #[test]
    fn test_sort_and_paging() {
        run(async {
            let t = tag();
            for (name, price) in [("b", 30.0), ("a", 20.0), ("c", 10.0)] {
                create(dto(&format!("{t} {name}"), &tag(), price)).await.unwrap();
            }

            let by_price = list(ListQuery {
                sort_by: Some("price".into()),
                sort_dir: SortDirection::Desc,
                ..search(&t)
            })
            .await
            .unwrap();
            let prices: Vec<f64> = by_price.items.iter().map(|p| p.price).collect();
            assert_eq!(prices, vec![30.0, 20.0, 10.0]);

            // unknown sort field falls back to name ascending
            let fallback = list(ListQuery {
                sort_by: Some("price; DROP TABLE a001_product".into()),
                ..search(&t)
            })
            .await
            .unwrap();
            let names: Vec<&str> = fallback.items.iter().map(|p| p.name.as_str()).collect();
            assert_eq!(names, vec![format!("{t} a"), format!("{t} b"), format!("{t} c")]);

            let second = list(ListQuery {
                page: 2,
                page_size: 2,
                ..search(&t)
            })
            .await
            .unwrap();
            assert_eq!(second.total_count, 3);
            assert_eq!(second.total_pages, 2);
            assert_eq!(second.items.len(), 1);

            let clamped = list(ListQuery {
                page: 0,
                page_size: 5000,
                ..search(&t)
            })
            .await
            .unwrap();
            assert_eq!(clamped.page, 1);
            assert_eq!(clamped.page_size, MAX_PAGE_SIZE);
            assert_eq!(clamped.items.len(), 3);
        });
    }
}
