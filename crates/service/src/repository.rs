use async_trait::async_trait;

use crate::errors::StoreError;

/// Generic persistence contract shared by every entity store.
///
/// `save` inserts when the entity carries no identifier and updates
/// otherwise; the returned value always carries the identifier.
#[async_trait]
pub trait Repository<T: Send + 'static, Id: Send + 'static>: Send + Sync {
    async fn save(&self, entity: T) -> Result<T, StoreError>;
    async fn find_by_id(&self, id: Id) -> Result<Option<T>, StoreError>;
    async fn find_all(&self) -> Result<Vec<T>, StoreError>;
    /// `true` when a row was removed.
    async fn delete(&self, id: Id) -> Result<bool, StoreError>;
}
