use async_trait::async_trait;
use rust_decimal::Decimal;

use super::domain::{Entry, EntryFilter, EntryType};
use crate::errors::StoreError;
use crate::repository::Repository;

#[async_trait]
pub trait EntryRepository: Repository<Entry, i64> {
    /// Sum of `amount` over the user's entries of `entry_type`; `None` when no row matches.
    async fn sum_by_type_and_user(&self, user_id: i64, entry_type: EntryType) -> Result<Option<Decimal>, StoreError>;
    async fn find_by_filter(&self, filter: &EntryFilter) -> Result<Vec<Entry>, StoreError>;
}
