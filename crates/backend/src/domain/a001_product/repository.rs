use chrono::Utc;
use contracts::domain::a001_product::aggregate::{Product, ProductId};
use contracts::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use contracts::shared::list_query::ListQuery;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{Condition, PaginatorTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;
use crate::shared::list::{contains_pattern, like_escaped, order_for, resolve_sort};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub price: f64,
    pub compare_at_price: Option<f64>,
    pub stock: i64,
    pub low_stock_threshold: Option<i64>,
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
fn into_aggregate(m: Model) -> Option<Product> {
    let raw_id = m.id.clone();
    match Product::try_from(m) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!("Skipping {} row {}: {}", Product::table_name(), raw_id, e);
            None
        }
    }
}

impl TryFrom<Model> for Product {
    type Error = String;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let id = ProductId::from_string(&m.id)?;

        Ok(Product {
            id,
            name: m.name,
            sku: m.sku,
            description: m.description,
            price: m.price,
            compare_at_price: m.compare_at_price,
            stock: m.stock,
            low_stock_threshold: m.low_stock_threshold,
            metadata,
        })
    }
}

fn to_active(p: &Product) -> ActiveModel {
    ActiveModel {
        id: Set(p.id().as_string()),
        name: Set(p.name.clone()),
        sku: Set(p.sku.clone()),
        description: Set(p.description.clone()),
        price: Set(p.price),
        compare_at_price: Set(p.compare_at_price),
        stock: Set(p.stock),
        low_stock_threshold: Set(p.low_stock_threshold),
        is_deleted: Set(p.metadata().is_deleted),
        created_at: Set(Some(p.metadata().created_at)),
        updated_at: Set(Some(p.metadata().updated_at)),
        version: Set(p.metadata().version),
    }
}

/// Sortable fields; anything else sorts by name
pub const SORT_FIELDS: &[&str] = &["name", "sku", "price", "stock", "created_at"];

fn sort_column(field: &str) -> Column {
    match field {
        "sku" => Column::Sku,
        "price" => Column::Price,
        "stock" => Column::Stock,
        "created_at" => Column::CreatedAt,
        _ => Column::Name,
    }
}

fn conn() -> anyhow::Result<&'static DatabaseConnection> {
    get_connection()
}

/// One page of live products plus the total number of matches.
pub async fn list_paginated(query: &ListQuery) -> anyhow::Result<(Vec<Product>, u64)> {
    let mut select = Entity::find().filter(Column::IsDeleted.eq(false));

    if let Some(q) = &query.q {
        let pattern = contains_pattern(q);
        select = select.filter(
            Condition::any()
                .add(like_escaped(Column::Name, &pattern))
                .add(like_escaped(Column::Sku, &pattern))
                .add(like_escaped(Column::Description, &pattern)),
        );
    }

    let field = resolve_sort(query.sort_by.as_deref(), SORT_FIELDS, "name");
    let select = select
        .order_by(sort_column(field), order_for(query.sort_dir))
        .order_by_asc(Column::Id);

    let paginator = select.paginate(conn()?, query.page_size);
    let total = paginator.num_items().await?;
    let items = paginator
        .fetch_page(query.page.saturating_sub(1))
        .await?
        .into_iter()
        .filter_map(into_aggregate)
        .collect();
    Ok((items, total))
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Product>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn()?)
        .await?;
    Ok(result.and_then(into_aggregate))
}

/// Live product with this SKU, other than `except`.
pub async fn find_by_sku(sku: &str, except: Option<Uuid>) -> anyhow::Result<Option<Product>> {
    let mut select = Entity::find()
        .filter(Column::Sku.eq(sku))
        .filter(Column::IsDeleted.eq(false));
    if let Some(id) = except {
        select = select.filter(Column::Id.ne(id.to_string()));
    }
    Ok(select.one(conn()?).await?.and_then(into_aggregate))
}

pub async fn insert(aggregate: &Product) -> anyhow::Result<()> {
    to_active(aggregate).insert(conn()?).await?;
    Ok(())
}

pub async fn update(aggregate: &Product) -> anyhow::Result<()> {
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

    #[test]
    fn test_model_into_product() {
        let id = Uuid::new_v4();
        let model = Model {
            id: id.to_string(),
            name: "Desk Lamp".into(),
            sku: "LAMP-1".into(),
            description: None,
            price: 19.9,
            compare_at_price: Some(25.0),
            stock: 3,
            low_stock_threshold: Some(5),
            is_deleted: false,
            created_at: None,
            updated_at: None,
            version: 2,
        };
        let product = Product::try_from(model).unwrap();
        assert_eq!(product.id.value(), id);
        assert_eq!(product.metadata.version, 2);
        assert!(product.is_low_on_stock());
    }

    #[test]
    fn test_entity_table_matches_aggregate() {
        use sea_orm::EntityName;
        assert_eq!(Entity.table_name(), Product::table_name());
    }

    #[test]
    fn test_sort_column_whitelist() {
        for field in SORT_FIELDS {
            assert_eq!(resolve_sort(Some(field), SORT_FIELDS, "name"), *field);
        }
        assert!(matches!(
            sort_column(resolve_sort(Some("password"), SORT_FIELDS, "name")),
            Column::Name
        ));
    }
}
