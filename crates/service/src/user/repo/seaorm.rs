use sea_orm::DatabaseConnection;

use crate::errors::StoreError;
use crate::repository::Repository;
use crate::user::domain::User;
use crate::user::repository::UserRepository;

/// SeaORM-backed user store.
#[derive(Clone)]
pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl Repository<User, i64> for SeaOrmUserRepository {
    async fn save(&self, user: User) -> Result<User, StoreError> {
        let saved = match user.id {
            None => models::user::create(&self.db, &user.name, &user.email, &user.password).await?,
            Some(id) => models::user::update(&self.db, id, &user.name, &user.email, &user.password).await?,
        };
        Ok(saved.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(models::user::find_by_id(&self.db, id).await?.map(User::from))
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(models::user::find_all(&self.db).await?.into_iter().map(User::from).collect())
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(models::user::hard_delete(&self.db, id).await?)
    }
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        Ok(models::user::exists_by_email(&self.db, email).await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(models::user::find_by_email(&self.db, email).await?.map(User::from))
    }
}
