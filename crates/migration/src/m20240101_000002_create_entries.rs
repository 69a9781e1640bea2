//! Create `entries` table with FK to `users`.
//!
//! `amount` is a fixed-point DECIMAL(16,2); `entry_type` and `status` hold
//! the string values of their enums.
use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240101_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Entries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Entries::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Entries::Description, 100).not_null())
                    .col(integer(Entries::Month).not_null())
                    .col(integer(Entries::Year).not_null())
                    .col(big_integer(Entries::UserId).not_null())
                    .col(decimal_len(Entries::Amount, 16, 2).not_null())
                    .col(string_len(Entries::EntryType, 20).not_null())
                    .col(string_len(Entries::Status, 20).not_null())
                    .col(ColumnDef::new(Entries::RegisteredOn).date().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entries_user")
                            .from(Entries::Table, Entries::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Entries::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Entries {
    Table,
    Id,
    Description,
    Month,
    Year,
    UserId,
    Amount,
    EntryType,
    Status,
    RegisteredOn,
}
