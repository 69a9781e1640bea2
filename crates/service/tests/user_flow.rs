use std::sync::Arc;

use rust_decimal_macros::dec;
use service::entry::{repo::SeaOrmEntryRepository, Entry, EntryFilter, EntryStatus, EntryType};
use service::user::{repo::SeaOrmUserRepository, User};
use service::{EntryService, PasswordEncoder, ServiceError, UserService};
use uuid::Uuid;

#[tokio::test]
async fn register_authenticate_and_balance() -> anyhow::Result<()> {
    let db = models::db::connect_in_memory().await?;
    let users = UserService::new(Arc::new(SeaOrmUserRepository::new(db.clone())));
    let entries = EntryService::new(Arc::new(SeaOrmEntryRepository::new(db)));

    let email = format!("user_{}@email.com", Uuid::new_v4());
    let user = users.save(User::new("Tester", email.as_str(), "senha")).await?;
    let user_id = user.id.expect("persisted user has an id");

    let logged = users.authenticate(&email, "senha").await?;
    assert_eq!(logged, user);

    let salary = entries.save(Entry::new("Salário", 5, 2024, user_id, dec!(2500.50), EntryType::Income)).await?;
    entries.save(Entry::new("Aluguel", 5, 2024, user_id, dec!(900.25), EntryType::Expense)).await?;
    assert_eq!(entries.balance_by_user(user_id).await?, dec!(1600.25));

    let settled = entries.update_status(salary, EntryStatus::Settled).await?;
    assert_eq!(settled.status, EntryStatus::Settled);

    let expenses = entries
        .search(&EntryFilter { user_id: Some(user_id), entry_type: Some(EntryType::Expense), ..Default::default() })
        .await?;
    assert_eq!(expenses.len(), 1);
    entries.delete(&expenses[0]).await?;
    assert_eq!(entries.balance_by_user(user_id).await?, dec!(2500.50));
    Ok(())
}

#[tokio::test]
async fn concurrent_registrations_keep_one_user_per_email() -> anyhow::Result<()> {
    let db = models::db::connect_in_memory().await?;
    let repo = Arc::new(SeaOrmUserRepository::new(db));
    let users = Arc::new(UserService::with_encoder(repo, PasswordEncoder::plain()));

    let handles: Vec<_> = (0..6)
        .map(|i| {
            let users = users.clone();
            tokio::spawn(async move { users.save(User::new(format!("u{i}"), "same@email.com", "senha")).await })
        })
        .collect();

    let mut saved = 0;
    for handle in handles {
        match handle.await? {
            Ok(_) => saved += 1,
            Err(ServiceError::BusinessRule(msg)) => {
                assert_eq!(msg, "Já existe usuário cadastrado com este e-mail.")
            }
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }
    assert_eq!(saved, 1);
    Ok(())
}
