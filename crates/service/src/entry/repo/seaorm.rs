use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::entry::domain::{Entry, EntryFilter, EntryType};
use crate::entry::repository::EntryRepository;
use crate::errors::StoreError;
use crate::repository::Repository;

#[derive(Clone)]
pub struct SeaOrmEntryRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmEntryRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl Repository<Entry, i64> for SeaOrmEntryRepository {
    async fn save(&self, entry: Entry) -> Result<Entry, StoreError> {
        let saved = match entry.id {
            None => models::entry::create(&self.db, entry.into_fields()).await?,
            Some(id) => models::entry::update(&self.db, id, entry.into_fields()).await?,
        };
        Ok(saved.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Entry>, StoreError> {
        Ok(models::entry::find_by_id(&self.db, id).await?.map(Entry::from))
    }

    async fn find_all(&self) -> Result<Vec<Entry>, StoreError> {
        Ok(models::entry::find_all(&self.db).await?.into_iter().map(Entry::from).collect())
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(models::entry::hard_delete(&self.db, id).await?)
    }
}

#[async_trait::async_trait]
impl EntryRepository for SeaOrmEntryRepository {
    async fn sum_by_type_and_user(&self, user_id: i64, entry_type: EntryType) -> Result<Option<Decimal>, StoreError> {
        Ok(models::entry::sum_by_type_and_user(&self.db, user_id, entry_type).await?)
    }

    async fn find_by_filter(&self, filter: &EntryFilter) -> Result<Vec<Entry>, StoreError> {
        Ok(models::entry::search(&self.db, filter).await?.into_iter().map(Entry::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::entry::repo::InMemoryEntryRepository;
    use crate::test_support::get_db;

    async fn repo_with_user() -> Result<(SeaOrmEntryRepository, i64), anyhow::Error> {
        let db = get_db().await?;
        let user = models::user::create(&db, "usuario", "usuario@email.com", "senha").await?;
        Ok((SeaOrmEntryRepository::new(db), user.id))
    }

    #[tokio::test]
    async fn sum_is_none_without_rows() -> Result<(), anyhow::Error> {
        let (repo, user_id) = repo_with_user().await?;
        assert_eq!(repo.sum_by_type_and_user(user_id, EntryType::Income).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn sum_adds_only_matching_type() -> Result<(), anyhow::Error> {
        let (repo, user_id) = repo_with_user().await?;
        repo.save(Entry::new("salário", 1, 2024, user_id, dec!(1500.50), EntryType::Income)).await?;
        repo.save(Entry::new("freela", 1, 2024, user_id, dec!(499.25), EntryType::Income)).await?;
        repo.save(Entry::new("aluguel", 1, 2024, user_id, dec!(800.75), EntryType::Expense)).await?;

        assert_eq!(repo.sum_by_type_and_user(user_id, EntryType::Income).await?, Some(dec!(1999.75)));
        assert_eq!(repo.sum_by_type_and_user(user_id, EntryType::Expense).await?, Some(dec!(800.75)));
        Ok(())
    }

    #[tokio::test]
    async fn save_update_filter_and_delete() -> Result<(), anyhow::Error> {
        let (repo, user_id) = repo_with_user().await?;
        let saved = repo.save(Entry::new("Conta de Luz", 2, 2024, user_id, dec!(120.25), EntryType::Expense)).await?;
        let id = saved.id.unwrap();

        let updated = repo.save(Entry { month: 3, ..saved }).await?;
        assert_eq!(updated.id, Some(id));
        assert_eq!(repo.find_by_id(id).await?.map(|e| e.month), Some(3));

        let hits = repo.find_by_filter(&EntryFilter { description: Some("luz".into()), ..Default::default() }).await?;
        assert_eq!(hits.len(), 1);
        let misses = repo.find_by_filter(&EntryFilter { month: Some(2), ..Default::default() }).await?;
        assert!(misses.is_empty());

        assert!(repo.delete(id).await?);
        assert!(repo.find_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_user_is_foreign_key_violation() -> Result<(), anyhow::Error> {
        let repo = SeaOrmEntryRepository::new(get_db().await?);
        let err = repo
            .save(Entry::new("órfão", 1, 2024, 404, dec!(1.25), EntryType::Expense))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::ForeignKeyViolation(_)), "got {err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn description_filter_agrees_with_in_memory_store() -> Result<(), anyhow::Error> {
        let (sql, user_id) = repo_with_user().await?;
        let memory = InMemoryEntryRepository::new();
        for (description, amount) in [("AÇÚCAR", dec!(10.25)), ("desconto 50 reais", dec!(50.50)), ("taxa_x", dec!(2.75))] {
            let entry = Entry::new(description, 1, 2024, user_id, amount, EntryType::Expense);
            sql.save(entry.clone()).await?;
            memory.save(entry).await?;
        }

        for q in ["%", "50%", "_", "açúcar", "Açúcar", "A_X", "xa_x", "REAIS", "", "  "] {
            let filter = EntryFilter { description: Some(q.into()), ..Default::default() };
            let from_sql: Vec<_> = sql.find_by_filter(&filter).await?.into_iter().map(|e| e.description).collect();
            let from_memory: Vec<_> = memory.find_by_filter(&filter).await?.into_iter().map(|e| e.description).collect();
            assert_eq!(from_sql, from_memory, "description filter {q:?}");
        }
        Ok(())
    }
}
