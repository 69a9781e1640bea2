//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users;
mod m20240101_000002_create_entries;
mod m20240101_000003_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users::Migration),
            Box::new(m20240101_000002_create_entries::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000003_add_indexes::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::{ConnectOptions, Database, DatabaseConnection};

    async fn memory_db() -> DatabaseConnection {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1).min_connections(1).sqlx_logging(false);
        Database::connect(opts).await.expect("connect sqlite memory")
    }

    #[tokio::test]
    async fn up_creates_tables_and_down_drops_them() {
        let db = memory_db().await;
        Migrator::up(&db, None).await.expect("migrate up");

        let manager = SchemaManager::new(&db);
        assert!(manager.has_table("users").await.unwrap());
        assert!(manager.has_table("entries").await.unwrap());

        Migrator::down(&db, None).await.expect("migrate down");
        assert!(!manager.has_table("entries").await.unwrap());
        assert!(!manager.has_table("users").await.unwrap());
    }

    #[tokio::test]
    async fn up_is_idempotent() {
        let db = memory_db().await;
        Migrator::up(&db, None).await.expect("first up");
        Migrator::up(&db, None).await.expect("second up");
    }
}
