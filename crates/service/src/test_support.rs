#![cfg(test)]
use sea_orm::DatabaseConnection;

/// Fresh in-memory database with every migration applied.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_in_memory().await?;
    Ok(db)
}
