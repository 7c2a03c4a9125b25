//! Create `restaurant` table with FKs to `address` and `user_account`.
//!
//! Descriptive columns are nullable; the address reference is not, so a
//! restaurant row can never exist without a persisted address.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurant::Table)
                    .if_not_exists()
                    .col(uuid(Restaurant::Id).primary_key())
                    .col(string_len_null(Restaurant::Name, 255))
                    .col(text_null(Restaurant::Description))
                    .col(string_len_null(Restaurant::CuisineType, 128))
                    .col(string_len_null(Restaurant::OpeningHours, 255))
                    .col(timestamp_with_time_zone(Restaurant::RegistrationDate).not_null())
                    .col(uuid(Restaurant::AddressId).not_null())
                    .col(json_binary(Restaurant::ContactInformation).not_null())
                    .col(json_binary(Restaurant::Images).not_null())
                    .col(uuid(Restaurant::OwnerId).not_null())
                    .col(boolean(Restaurant::Open).not_null().default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_address")
                            .from(Restaurant::Table, Restaurant::AddressId)
                            .to(Address::Table, Address::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_owner")
                            .from(Restaurant::Table, Restaurant::OwnerId)
                            .to(UserAccount::Table, UserAccount::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Restaurant::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Restaurant {
    Table,
    Id,
    Name,
    Description,
    CuisineType,
    OpeningHours,
    RegistrationDate,
    AddressId,
    ContactInformation,
    Images,
    OwnerId,
    Open,
}

#[derive(DeriveIden)]
enum Address { Table, Id }

#[derive(DeriveIden)]
enum UserAccount { Table, Id }
