use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Restaurant: one restaurant per owner
        manager
            .create_index(
                Index::create()
                    .name("uniq_restaurant_owner")
                    .table(Restaurant::Table)
                    .col(Restaurant::OwnerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Restaurant: keyword-search columns
        manager
            .create_index(
                Index::create()
                    .name("idx_restaurant_name")
                    .table(Restaurant::Table)
                    .col(Restaurant::Name)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_restaurant_cuisine")
                    .table(Restaurant::Table)
                    .col(Restaurant::CuisineType)
                    .to_owned(),
            )
            .await?;

        // Address: city lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_address_city")
                    .table(Address::Table)
                    .col(Address::City)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_restaurant_owner").table(Restaurant::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_restaurant_name").table(Restaurant::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_restaurant_cuisine").table(Restaurant::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_address_city").table(Address::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Restaurant { Table, OwnerId, Name, CuisineType }

#[derive(DeriveIden)]
enum Address { Table, City }
