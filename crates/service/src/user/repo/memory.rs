use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::StoreError;
use crate::repository::Repository;
use crate::user::domain::User;
use crate::user::repository::UserRepository;

#[derive(Default)]
struct State {
    next_id: i64,
    rows: BTreeMap<i64, User>,
}

/// Process-local user store for tests, benches and doc examples.
///
/// Email uniqueness is checked under the write lock, so concurrent saves
/// of the same email yield exactly one `UniqueViolation`.
#[derive(Default)]
pub struct InMemoryUserRepository {
    state: RwLock<State>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl Repository<User, i64> for InMemoryUserRepository {
    async fn save(&self, mut user: User) -> Result<User, StoreError> {
        let mut state = self.state.write().await;
        let taken = state
            .rows
            .values()
            .any(|u| u.email == user.email && u.id != user.id);
        if taken {
            return Err(StoreError::UniqueViolation(format!("users.email: {}", user.email)));
        }
        let id = match user.id {
            Some(id) if state.rows.contains_key(&id) => id,
            Some(id) => return Err(StoreError::NotFound(format!("user {id}"))),
            None => {
                state.next_id += 1;
                state.next_id
            }
        };
        user.id = Some(id);
        state.rows.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.state.read().await.rows.values().cloned().collect())
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.state.write().await.rows.remove(&id).is_some())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        Ok(self.state.read().await.rows.values().any(|u| u.email == email))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.state.read().await.rows.values().find(|u| u.email == email).cloned())
    }
}
