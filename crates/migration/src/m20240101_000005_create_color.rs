//! Create `color` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Color::Table)
                    .if_not_exists()
                    .col(uuid(Color::Id).primary_key())
                    .col(string_len(Color::Name, 64).not_null())
                    .col(string_len(Color::HexCode, 7).not_null())
                    .col(timestamp_with_time_zone(Color::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Color::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Color { Table, Id, Name, HexCode, CreatedAt }
