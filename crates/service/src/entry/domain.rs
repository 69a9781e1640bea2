use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use models::entry::{EntryFilter, EntryStatus, EntryType};

/// A single income or expense owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Option<i64>,
    pub description: String,
    pub month: i32,
    pub year: i32,
    pub user_id: i64,
    pub amount: Decimal,
    pub entry_type: EntryType,
    pub status: EntryStatus,
    pub registered_on: Option<NaiveDate>,
}

impl Entry {
    /// Unsaved, pending entry.
    pub fn new(
        description: impl Into<String>,
        month: i32,
        year: i32,
        user_id: i64,
        amount: Decimal,
        entry_type: EntryType,
    ) -> Self {
        Self {
            id: None,
            description: description.into(),
            month,
            year,
            user_id,
            amount,
            entry_type,
            status: EntryStatus::Pending,
            registered_on: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Whether the entry satisfies `filter`; mirrors the SQL search.
    pub fn matches(&self, filter: &EntryFilter) -> bool {
        let description_ok = filter
            .description
            .as_deref()
            .map_or(true, |d| models::entry::description_matches(&self.description, d));
        description_ok
            && filter.month.map_or(true, |m| m == self.month)
            && filter.year.map_or(true, |y| y == self.year)
            && filter.user_id.map_or(true, |u| u == self.user_id)
            && filter.entry_type.map_or(true, |t| t == self.entry_type)
    }

    pub(crate) fn into_fields(self) -> models::entry::EntryFields {
        models::entry::EntryFields {
            description: self.description,
            month: self.month,
            year: self.year,
            user_id: self.user_id,
            amount: self.amount,
            entry_type: self.entry_type,
            status: self.status,
            registered_on: self.registered_on,
        }
    }
}

impl From<models::entry::Model> for Entry {
    fn from(m: models::entry::Model) -> Self {
        Self {
            id: Some(m.id),
            description: m.description,
            month: m.month,
            year: m.year,
            user_id: m.user_id,
            amount: m.amount,
            entry_type: m.entry_type,
            status: m.status,
            registered_on: m.registered_on,
        }
    }
}
