//! Create `store` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Store::Table)
                    .if_not_exists()
                    .col(uuid(Store::Id).primary_key())
                    .col(string_len(Store::Name, 128).unique_key().not_null())
                    .col(string_len(Store::Address, 255).not_null())
                    .col(string_len_null(Store::OpeningHours, 128))
                    .col(string_len(Store::Location, 255).not_null())
                    .col(timestamp_with_time_zone(Store::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Store::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Store { Table, Id, Name, Address, OpeningHours, Location, CreatedAt }
