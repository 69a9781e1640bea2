use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{entity::prelude::*, ActiveValue, ConnectionTrait, NotSet, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::user;

/// Direction of money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryType {
    #[sea_orm(string_value = "RECEITA")]
    Income,
    #[sea_orm(string_value = "DESPESA")]
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryStatus {
    #[sea_orm(string_value = "PENDENTE")]
    Pending,
    #[sea_orm(string_value = "CANCELADO")]
    Cancelled,
    #[sea_orm(string_value = "EFETIVADO")]
    Settled,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub description: String,
    pub month: i32,
    pub year: i32,
    pub user_id: i64,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub amount: Decimal,
    pub entry_type: EntryType,
    pub status: EntryStatus,
    pub registered_on: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { User }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Column values of an entry, without the primary key.
/// Width of the `description` column.
pub const DESCRIPTION_MAX_LEN: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryFields {
    pub description: String,
    pub month: i32,
    pub year: i32,
    pub user_id: i64,
    pub amount: Decimal,
    pub entry_type: EntryType,
    pub status: EntryStatus,
    pub registered_on: Option<Date>,
}

impl EntryFields {
    fn into_active_model(self, id: ActiveValue<i64>) -> ActiveModel {
        ActiveModel {
            id,
            description: Set(self.description),
            month: Set(self.month),
            year: Set(self.year),
            user_id: Set(self.user_id),
            amount: Set(self.amount),
            entry_type: Set(self.entry_type),
            status: Set(self.status),
            registered_on: Set(self.registered_on),
        }
    }
}

/// Optional criteria for listing entries; unset fields do not filter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFilter {
    /// Case-insensitive substring of the description.
    pub description: Option<String>,
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub user_id: Option<i64>,
    pub entry_type: Option<EntryType>,
}

pub async fn create<C: ConnectionTrait>(db: &C, fields: EntryFields) -> Result<Model, ModelError> {
    Ok(fields.into_active_model(NotSet).insert(db).await?)
}

pub async fn update<C: ConnectionTrait>(db: &C, id: i64, fields: EntryFields) -> Result<Model, ModelError> {
    Ok(fields.into_active_model(Set(id)).update(db).await?)
}

pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

/// Case-insensitive (Unicode) substring test used for the description filter.
///
/// A blank needle matches everything; `%` and `_` are literal characters.
pub fn description_matches(description: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || description.to_lowercase().contains(&needle.to_lowercase())
}

/// Entries matching `filter`, ordered by id.
///
/// Column filters run in SQL. The description is matched in Rust: SQLite's
/// `lower()` only folds ASCII and `LIKE` treats `%`/`_` as wildcards.
pub async fn search<C: ConnectionTrait>(db: &C, filter: &EntryFilter) -> Result<Vec<Model>, ModelError> {
    let mut query = Entity::find();
    if let Some(month) = filter.month {
        query = query.filter(Column::Month.eq(month));
    }
    if let Some(year) = filter.year {
        query = query.filter(Column::Year.eq(year));
    }
    if let Some(user_id) = filter.user_id {
        query = query.filter(Column::UserId.eq(user_id));
    }
    if let Some(entry_type) = filter.entry_type {
        query = query.filter(Column::EntryType.eq(entry_type));
    }
    let mut rows = query.order_by_asc(Column::Id).all(db).await?;
    if let Some(needle) = filter.description.as_deref() {
        rows.retain(|m| description_matches(&m.description, needle));
    }
    Ok(rows)
}

/// `SUM(amount)` over one user's entries of one type.
///
/// `None` when no row matches; callers wanting a balance treat it as zero.
pub async fn sum_by_type_and_user<C: ConnectionTrait>(
    db: &C,
    user_id: i64,
    entry_type: EntryType,
) -> Result<Option<Decimal>, ModelError> {
    let total: Option<Option<Decimal>> = Entity::find()
        .select_only()
        .column_as(Expr::col(Column::Amount).sum(), "total")
        .filter(Column::UserId.eq(user_id))
        .filter(Column::EntryType.eq(entry_type))
        .into_tuple()
        .one(db)
        .await?;
    Ok(total.flatten())
}

pub async fn hard_delete<C: ConnectionTrait>(db: &C, id: i64) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
