use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, instrument};

use models::entry::DESCRIPTION_MAX_LEN;

use super::domain::{Entry, EntryFilter, EntryStatus, EntryType};
use super::repository::EntryRepository;
use crate::errors::{ServiceError, StoreError};

pub const INVALID_DESCRIPTION: &str = "Informe uma Descrição válida.";
pub const INVALID_MONTH: &str = "Informe um Mês válido.";
pub const INVALID_YEAR: &str = "Informe um Ano válido.";
pub const MISSING_USER: &str = "Informe um Usuário.";
pub const INVALID_AMOUNT: &str = "Informe um Valor válido.";
pub const MISSING_ID: &str = "Lançamento sem identificador.";

/// Entry business service: validation, status changes and balances.
pub struct EntryService<R: EntryRepository> {
    repo: Arc<R>,
}

impl<R: EntryRepository> EntryService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Register a new entry as pending, dated today.
    ///
    /// # Examples
    /// ```
    /// use service::entry::{Entry, EntryService, EntryStatus, EntryType, repo::InMemoryEntryRepository};
    /// use rust_decimal_macros::dec;
    /// use std::sync::Arc;
    /// let svc = EntryService::new(Arc::new(InMemoryEntryRepository::new()));
    /// let entry = Entry::new("salário", 5, 2024, 1, dec!(3000.00), EntryType::Income);
    /// let saved = tokio_test::block_on(svc.save(entry)).unwrap();
    /// assert_eq!(saved.status, EntryStatus::Pending);
    /// assert!(saved.registered_on.is_some());
    /// ```
    #[instrument(skip(self, entry), fields(user_id = entry.user_id))]
    pub async fn save(&self, mut entry: Entry) -> Result<Entry, ServiceError> {
        validate(&entry)?;
        entry.id = None;
        entry.status = EntryStatus::Pending;
        entry.registered_on = Some(chrono::Local::now().date_naive());
        let saved = self.repo.save(entry).await?;
        info!(entry_id = ?saved.id, event = "entry_saved", "entry saved");
        Ok(saved)
    }

    #[instrument(skip(self, entry), fields(entry_id = ?entry.id))]
    pub async fn update(&self, entry: Entry) -> Result<Entry, ServiceError> {
        require_id(&entry)?;
        validate(&entry)?;
        Ok(self.repo.save(entry).await?)
    }

    #[instrument(skip(self, entry), fields(entry_id = ?entry.id))]
    pub async fn delete(&self, entry: &Entry) -> Result<(), ServiceError> {
        let id = require_id(entry)?;
        if !self.repo.delete(id).await? {
            return Err(StoreError::NotFound(format!("entry {id}")).into());
        }
        info!(entry_id = id, event = "entry_deleted", "entry deleted");
        Ok(())
    }

    pub async fn update_status(&self, mut entry: Entry, status: EntryStatus) -> Result<Entry, ServiceError> {
        entry.status = status;
        self.update(entry).await
    }

    pub async fn search(&self, filter: &EntryFilter) -> Result<Vec<Entry>, ServiceError> {
        Ok(self.repo.find_by_filter(filter).await?)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Entry>, ServiceError> {
        Ok(self.repo.find_by_id(id).await?)
    }

    /// Income minus expenses; a type with no entries counts as zero.
    pub async fn balance_by_user(&self, user_id: i64) -> Result<Decimal, ServiceError> {
        let income = self.repo.sum_by_type_and_user(user_id, EntryType::Income).await?.unwrap_or(Decimal::ZERO);
        let expense = self.repo.sum_by_type_and_user(user_id, EntryType::Expense).await?.unwrap_or(Decimal::ZERO);
        Ok(income - expense)
    }
}

fn require_id(entry: &Entry) -> Result<i64, ServiceError> {
    entry.id.ok_or_else(|| ServiceError::business_rule(MISSING_ID))
}

/// First failing rule wins.
pub fn validate(entry: &Entry) -> Result<(), ServiceError> {
    if entry.description.trim().is_empty() || entry.description.chars().count() > DESCRIPTION_MAX_LEN {
        return Err(ServiceError::business_rule(INVALID_DESCRIPTION));
    }
    if !(1..=12).contains(&entry.month) {
        return Err(ServiceError::business_rule(INVALID_MONTH));
    }
    if !(1000..=9999).contains(&entry.year) {
        return Err(ServiceError::business_rule(INVALID_YEAR));
    }
    if entry.user_id <= 0 {
        return Err(ServiceError::business_rule(MISSING_USER));
    }
    if entry.amount <= Decimal::ZERO {
        return Err(ServiceError::business_rule(INVALID_AMOUNT));
    }
    Ok(())
}
