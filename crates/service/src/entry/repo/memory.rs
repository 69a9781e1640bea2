use std::collections::BTreeMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::entry::domain::{Entry, EntryFilter, EntryType};
use crate::entry::repository::EntryRepository;
use crate::errors::StoreError;
use crate::repository::Repository;

#[derive(Default)]
struct State {
    next_id: i64,
    rows: BTreeMap<i64, Entry>,
}

/// Process-local entry store. Does not check that the owning user exists.
#[derive(Default)]
pub struct InMemoryEntryRepository {
    state: RwLock<State>,
}

impl InMemoryEntryRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl Repository<Entry, i64> for InMemoryEntryRepository {
    async fn save(&self, mut entry: Entry) -> Result<Entry, StoreError> {
        let mut state = self.state.write().await;
        let id = match entry.id {
            Some(id) if state.rows.contains_key(&id) => id,
            Some(id) => return Err(StoreError::NotFound(format!("entry {id}"))),
            None => {
                state.next_id += 1;
                state.next_id
            }
        };
        entry.id = Some(id);
        state.rows.insert(id, entry.clone());
        Ok(entry)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Entry>, StoreError> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Entry>, StoreError> {
        Ok(self.state.read().await.rows.values().cloned().collect())
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.state.write().await.rows.remove(&id).is_some())
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn sum_by_type_and_user(&self, user_id: i64, entry_type: EntryType) -> Result<Option<Decimal>, StoreError> {
        let state = self.state.read().await;
        let mut total: Option<Decimal> = None;
        for entry in state.rows.values().filter(|e| e.user_id == user_id && e.entry_type == entry_type) {
            let sum = match total {
                None => entry.amount,
                Some(acc) => acc
                    .checked_add(entry.amount)
                    .ok_or_else(|| StoreError::Db(format!("sum of {entry_type:?} amounts for user {user_id} overflows")))?,
            };
            total = Some(sum);
        }
        Ok(total)
    }

    async fn find_by_filter(&self, filter: &EntryFilter) -> Result<Vec<Entry>, StoreError> {
        let state = self.state.read().await;
        Ok(state.rows.values().filter(|e| e.matches(filter)).cloned().collect())
    }
}
