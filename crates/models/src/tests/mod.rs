/// Entity-level CRUD and query tests against an in-memory SQLite schema
pub mod crud_tests;


use sea_orm::DatabaseConnection;

use crate::db::connect_in_memory;

/// Fresh database with migrations applied
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    Ok(connect_in_memory().await?)
}
