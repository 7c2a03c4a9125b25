//! Create `user_account` table.
//!
//! The favourites column holds an ordered JSON array of restaurant
//! snapshots; this slice mutates the column but never the row lifecycle.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAccount::Table)
                    .if_not_exists()
                    .col(uuid(UserAccount::Id).primary_key())
                    .col(string_len(UserAccount::Email, 255).unique_key().not_null())
                    .col(string_len(UserAccount::FullName, 128).not_null())
                    .col(json_binary(UserAccount::Favourites).not_null())
                    .col(timestamp_with_time_zone(UserAccount::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(UserAccount::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(UserAccount::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum UserAccount { Table, Id, Email, FullName, Favourites, CreatedAt, UpdatedAt }
