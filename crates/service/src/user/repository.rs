use async_trait::async_trait;

use super::domain::User;
use crate::errors::StoreError;
use crate::repository::Repository;

/// User store: generic CRUD plus the email lookups.
///
/// Implementations must reject a second user with the same email with
/// `StoreError::UniqueViolation`.
#[async_trait]
pub trait UserRepository: Repository<User, i64> {
    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}
