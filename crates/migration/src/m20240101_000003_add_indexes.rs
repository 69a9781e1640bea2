use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Entries: balance and listing queries filter by owner first
        manager
            .create_index(
                Index::create()
                    .name("idx_entries_user_type")
                    .table(Entries::Table)
                    .col(Entries::UserId)
                    .col(Entries::EntryType)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_entries_user_type").table(Entries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Entries { Table, UserId, EntryType }
