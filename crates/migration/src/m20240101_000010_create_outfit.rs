//! Create `outfit` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Outfit::Table)
                    .if_not_exists()
                    .col(uuid(Outfit::Id).primary_key())
                    .col(string_len(Outfit::Name, 128).not_null())
                    .col(double_null(Outfit::EstimatedPrice))
                    .col(uuid_null(Outfit::CategoryId))
                    .col(timestamp_with_time_zone(Outfit::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Outfit::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_outfit_category")
                            .from(Outfit::Table, Outfit::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Outfit::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Outfit { Table, Id, Name, EstimatedPrice, CategoryId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Category { Table, Id }
