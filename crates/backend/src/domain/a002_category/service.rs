use contracts::domain::a002_category::aggregate::{Category, CategoryDto, CategoryId};
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::shared::list_query::{ListQuery, ListResponse};

use super::repository;
use crate::shared::error::{ServiceError, ServiceResult};

pub async fn list(query: ListQuery) -> ServiceResult<ListResponse<Category>> {
    let query = query.normalized();
    let (items, total) = repository::list_paginated(&query).await?;
    Ok(ListResponse::new(items, total, &query))
}

pub async fn get_by_id(id: CategoryId) -> ServiceResult<Category> {
    repository::get_by_id(id.value())
        .await?
        .ok_or(ServiceError::NotFound(Category::element_name()))
}

pub async fn create(dto: CategoryDto) -> ServiceResult<Category> {
    let dto = dto.normalized();
    dto.validate().map_err(ServiceError::Validation)?;

    let category = Category::new_for_insert(dto);
    repository::insert(&category).await?;
    tracing::info!("Created category {} ({})", category.id().as_string(), category.name);
    Ok(category)
}

pub async fn update(id: CategoryId, dto: CategoryDto) -> ServiceResult<Category> {
    let dto = dto.normalized();
    dto.validate().map_err(ServiceError::Validation)?;

    let mut category = get_by_id(id).await?;
    category.update(dto);
    repository::update(&category).await?;
    Ok(category)
}

pub async fn delete(id: CategoryId) -> ServiceResult<()> {
    if !repository::soft_delete(id.value()).await? {
        return Err(ServiceError::NotFound(Category::element_name()));
    }
    tracing::info!("Deleted category {}", id.as_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::testing::run;
    use contracts::shared::list_query::SortDirection;
    use uuid::Uuid;

    fn dto(name: &str, display_order: i32) -> CategoryDto {
        CategoryDto {
            name: name.into(),
            description: Some("  ".into()),
            display_order,
        }
    }

    #[test]
    fn test_category_lifecycle() {
        run(async {
            let created = create(dto(" Lighting ", 3)).await.unwrap();
            assert_eq!(created.name, "Lighting");
            assert_eq!(created.description, None);

            update(created.id, dto("Lamps", 4)).await.unwrap();
            let loaded = get_by_id(created.id).await.unwrap();
            assert_eq!((loaded.name.as_str(), loaded.display_order), ("Lamps", 4));
            assert_eq!(loaded.metadata.version, 1);

            delete(created.id).await.unwrap();
            let err = get_by_id(created.id).await.unwrap_err();
            assert_eq!(err.status().as_u16(), 404);
            assert_eq!(err.public_message(), "Category not found");
            assert!(matches!(delete(created.id).await, Err(ServiceError::NotFound(_))));
        });
    }

    #[test]
    fn test_blank_name_is_rejected() {
        run(async {
            let err = create(dto("", 0)).await.unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)));
            let err = update(CategoryId::new_v4(), dto("", 0)).await.unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)));
        });
    }

    #[test]
    fn test_list_sorts_by_display_order() {
        run(async {
            let t = Uuid::new_v4().simple().to_string();
            for (name, order) in [("x", 2), ("y", 1), ("z", 3)] {
                create(dto(&format!("{t} {name}"), order)).await.unwrap();
            }

            let page = list(ListQuery {
                q: Some(t.clone()),
                sort_by: Some("display_order".into()),
                sort_dir: SortDirection::Desc,
                ..ListQuery::default()
            })
            .await
            .unwrap();
            let orders: Vec<i32> = page.items.iter().map(|c| c.display_order).collect();
            assert_eq!(orders, vec![3, 2, 1]);
        });
    }
}
