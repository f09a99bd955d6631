use chrono::Utc;
use contracts::domain::a002_category::aggregate::{Category, CategoryId};
use contracts::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use contracts::shared::list_query::ListQuery;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{Condition, PaginatorTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;
use crate::shared::list::{contains_pattern, like_escaped, order_for, resolve_sort};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub display_order: i32,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Rows whose id is not a UUID cannot be addressed through the API; they are
/// logged and left out.
fn into_aggregate(m: Model) -> Option<Category> {
    let raw_id = m.id.clone();
    match Category::try_from(m) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!("Skipping {} row {}: {}", Category::table_name(), raw_id, e);
            None
        }
    }
}

impl TryFrom<Model> for Category {
    type Error = String;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let id = CategoryId::from_string(&m.id)?;

        Ok(Category {
            id,
            name: m.name,
            description: m.description,
            display_order: m.display_order,
            metadata,
        })
    }
}

fn to_active(c: &Category) -> ActiveModel {
    ActiveModel {
        id: Set(c.id().as_string()),
        name: Set(c.name.clone()),
        description: Set(c.description.clone()),
        display_order: Set(c.display_order),
        is_deleted: Set(c.metadata().is_deleted),
        created_at: Set(Some(c.metadata().created_at)),
        updated_at: Set(Some(c.metadata().updated_at)),
        version: Set(c.metadata().version),
    }
}

pub const SORT_FIELDS: &[&str] = &["name", "display_order", "created_at"];

fn sort_column(field: &str) -> Column {
    match field {
        "display_order" => Column::DisplayOrder,
        "created_at" => Column::CreatedAt,
        _ => Column::Name,
    }
}

fn conn() -> anyhow::Result<&'static DatabaseConnection> {
    get_connection()
}

pub async fn list_paginated(query: &ListQuery) -> anyhow::Result<(Vec<Category>, u64)> {
    let mut select = Entity::find().filter(Column::IsDeleted.eq(false));

    if let Some(q) = &query.q {
        let pattern = contains_pattern(q);
        select = select.filter(
            Condition::any()
                .add(like_escaped(Column::Name, &pattern))
                .add(like_escaped(Column::Description, &pattern)),
        );
    }

    let field = resolve_sort(query.sort_by.as_deref(), SORT_FIELDS, "name");
    let paginator = select
        .order_by(sort_column(field), order_for(query.sort_dir))
        .order_by_asc(Column::Id)
        .paginate(conn()?, query.page_size);

    let total = paginator.num_items().await?;
    let items = paginator
        .fetch_page(query.page.saturating_sub(1))
        .await?
        .into_iter()
        .filter_map(into_aggregate)
        .collect();
    Ok((items, total))
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Category>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn()?)
        .await?;
    Ok(result.and_then(into_aggregate))
}

pub async fn insert(aggregate: &Category) -> anyhow::Result<()> {
    to_active(aggregate).insert(conn()?).await?;
    Ok(())
}

pub async fn update(aggregate: &Category) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()?).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .exec(conn()?)
        .await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(id: &str) -> Model {
        Model {
            id: id.into(),
            name: "Lighting".into(),
            description: Some("Lamps".into()),
            display_order: 4,
            is_deleted: false,
            created_at: None,
            updated_at: None,
            version: 0,
        }
    }

    #[test]
    fn test_model_with_bad_id_is_skipped() {
        assert!(Category::try_from(model("legacy-7")).is_err());
        assert_eq!(into_aggregate(model("legacy-7")), None);
    }

    #[test]
    fn test_model_into_category() {
        let id = Uuid::new_v4();
        let category = into_aggregate(model(&id.to_string())).unwrap();
        assert_eq!(category.id.value(), id);
        assert_eq!(category.display_order, 4);
    }

    #[test]
    fn test_entity_table_matches_aggregate() {
        use sea_orm::EntityName;
        assert_eq!(Entity.table_name(), Category::table_name());
    }
}
