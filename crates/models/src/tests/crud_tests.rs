use anyhow::Result;
use rust_decimal_macros::dec;
use sea_orm::EntityTrait;
use uuid::Uuid;

use super::setup_test_db;
use crate::entry::{self, EntryFields, EntryStatus, EntryType};
use crate::errors::ModelError;
use crate::user;

fn unique_email() -> String {
    format!("user_{}@email.com", Uuid::new_v4())
}

/// Test user CRUD operations
#[tokio::test]
async fn test_user_crud() -> Result<()> {
    let db = setup_test_db().await?;

    let email = unique_email();
    let created = user::create(&db, "usuario", &email, "senha").await?;
    assert!(created.id > 0);
    assert_eq!(created.email, email);

    let found = user::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.as_ref(), Some(&created));

    let updated = user::update(&db, created.id, "outro nome", &email, "nova").await?;
    assert_eq!(updated.name, "outro nome");
    assert_eq!(updated.password, "nova");

    assert!(user::hard_delete(&db, created.id).await?);
    assert!(!user::hard_delete(&db, created.id).await?);
    assert!(user::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_exists_by_email() -> Result<()> {
    let db = setup_test_db().await?;

    assert!(!user::exists_by_email(&db, "usuario@email.com").await?);
    user::create(&db, "usuario", "usuario@email.com", "senha").await?;
    assert!(user::exists_by_email(&db, "usuario@email.com").await?);
    // exact match only
    assert!(!user::exists_by_email(&db, "usuario@email.co").await?);
    Ok(())
}

#[tokio::test]
async fn test_find_by_email() -> Result<()> {
    let db = setup_test_db().await?;

    assert!(user::find_by_email(&db, "usuario@email.com").await?.is_none());
    let created = user::create(&db, "usuario", "usuario@email.com", "senha").await?;
    let found = user::find_by_email(&db, "usuario@email.com").await?;
    assert_eq!(found.map(|u| u.id), Some(created.id));
    Ok(())
}

#[tokio::test]
async fn test_duplicate_email_is_unique_violation() -> Result<()> {
    let db = setup_test_db().await?;

    user::create(&db, "primeiro", "dup@email.com", "a").await?;
    let err = user::create(&db, "segundo", "dup@email.com", "b").await.unwrap_err();
    assert!(matches!(err, ModelError::UniqueViolation(_)), "got {err:?}");
    assert_eq!(user::find_all(&db).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() -> Result<()> {
    let db = setup_test_db().await?;

    let err = user::update(&db, 4242, "x", "x@email.com", "x").await.unwrap_err();
    assert!(matches!(err, ModelError::NotFound(_)), "got {err:?}");
    Ok(())
}

#[tokio::test]
async fn test_entry_crud_and_cascade() -> Result<()> {
    let db = setup_test_db().await?;
    let owner = user::create(&db, "dono", &unique_email(), "senha").await?;

    let fields = EntryFields {
        description: "salario".into(),
        month: 3,
        year: 2024,
        user_id: owner.id,
        amount: dec!(2500.50),
        entry_type: EntryType::Income,
        status: EntryStatus::Pending,
        registered_on: None,
    };
    let created = entry::create(&db, fields.clone()).await?;
    assert!(created.id > 0);
    assert_eq!(created.amount, dec!(2500.50));
    assert_eq!(created.entry_type, EntryType::Income);

    let updated = entry::update(&db, created.id, EntryFields { status: EntryStatus::Settled, ..fields }).await?;
    assert_eq!(updated.status, EntryStatus::Settled);
    assert_eq!(entry::find_all(&db).await?.len(), 1);

    // deleting the owner removes its entries via FK on_delete=CASCADE
    user::hard_delete(&db, owner.id).await?;
    assert!(entry::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_entry_for_unknown_user_is_fk_violation() -> Result<()> {
    let db = setup_test_db().await?;

    let err = entry::create(
        &db,
        EntryFields {
            description: "orfao".into(),
            month: 1,
            year: 2024,
            user_id: 999,
            amount: dec!(10.50),
            entry_type: EntryType::Expense,
            status: EntryStatus::Pending,
            registered_on: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ModelError::ForeignKeyViolation(_)), "got {err:?}");
    Ok(())
}
