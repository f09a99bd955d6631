use chrono::Utc;
use contracts::domain::a003_manufacturer::aggregate::{Manufacturer, ManufacturerId};
use contracts::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use contracts::shared::list_query::ListQuery;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{Condition, PaginatorTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;
use crate::shared::list::{contains_pattern, like_escaped, order_for, resolve_sort};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_manufacturer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub code: String,
    pub contact_info: Option<String>,
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
fn into_aggregate(m: Model) -> Option<Manufacturer> {
    let raw_id = m.id.clone();
    match Manufacturer::try_from(m) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!("Skipping {} row {}: {}", Manufacturer::table_name(), raw_id, e);
            None
        }
    }
}

impl TryFrom<Model> for Manufacturer {
    type Error = String;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let id = ManufacturerId::from_string(&m.id)?;

        Ok(Manufacturer {
            id,
            name: m.name,
            code: m.code,
            contact_info: m.contact_info,
            metadata,
        })
    }
}

fn to_active(m: &Manufacturer) -> ActiveModel {
    ActiveModel {
        id: Set(m.id().as_string()),
        name: Set(m.name.clone()),
        code: Set(m.code.clone()),
        contact_info: Set(m.contact_info.clone()),
        is_deleted: Set(m.metadata().is_deleted),
        created_at: Set(Some(m.metadata().created_at)),
        updated_at: Set(Some(m.metadata().updated_at)),
        version: Set(m.metadata().version),
    }
}

pub const SORT_FIELDS: &[&str] = &["name", "code", "created_at"];

fn sort_column(field: &str) -> Column {
    match field {
        "code" => Column::Code,
        "created_at" => Column::CreatedAt,
        _ => Column::Name,
    }
}

fn conn() -> anyhow::Result<&'static DatabaseConnection> {
    get_connection()
}

pub async fn list_paginated(query: &ListQuery) -> anyhow::Result<(Vec<Manufacturer>, u64)> {
    let mut select = Entity::find().filter(Column::IsDeleted.eq(false));

    if let Some(q) = &query.q {
        let pattern = contains_pattern(q);
        select = select.filter(
            Condition::any()
                .add(like_escaped(Column::Name, &pattern))
                .add(like_escaped(Column::Code, &pattern))
                .add(like_escaped(Column::ContactInfo, &pattern)),
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

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Manufacturer>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn()?)
        .await?;
    Ok(result.and_then(into_aggregate))
}

/// Live manufacturer with this code, other than `except`.
pub async fn find_by_code(code: &str, except: Option<Uuid>) -> anyhow::Result<Option<Manufacturer>> {
    let mut select = Entity::find()
        .filter(Column::Code.eq(code))
        .filter(Column::IsDeleted.eq(false));
    if let Some(id) = except {
        select = select.filter(Column::Id.ne(id.to_string()));
    }
    Ok(select.one(conn()?).await?.and_then(into_aggregate))
}

pub async fn insert(aggregate: &Manufacturer) -> anyhow::Result<()> {
    to_active(aggregate).insert(conn()?).await?;
    Ok(())
}

pub async fn update(aggregate: &Manufacturer) -> anyhow::Result<()> {
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
