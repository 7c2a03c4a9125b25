//! Create `address` table.
//!
//! Persisted before the restaurant that ends up owning it; city is the only
//! location field required to be present.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(uuid(Address::Id).primary_key())
                    .col(string_len_null(Address::Street, 255))
                    .col(string_len(Address::City, 128).not_null())
                    .col(string_len_null(Address::State, 128))
                    .col(string_len_null(Address::PostalCode, 32))
                    .col(string_len_null(Address::Country, 128))
                    .col(timestamp_with_time_zone(Address::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Address::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Address { Table, Id, Street, City, State, PostalCode, Country, CreatedAt }
