//! Create `category_occasion` join table.
//!
//! The composite primary key is what keeps a category/occasion pair from being linked twice.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CategoryOccasion::Table)
                    .if_not_exists()
                    .col(uuid(CategoryOccasion::CategoryId).not_null())
                    .col(uuid(CategoryOccasion::OccasionId).not_null())
                    .primary_key(
                        Index::create()
                            .col(CategoryOccasion::CategoryId)
                            .col(CategoryOccasion::OccasionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_category_occasion_category")
                            .from(CategoryOccasion::Table, CategoryOccasion::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_category_occasion_occasion")
                            .from(CategoryOccasion::Table, CategoryOccasion::OccasionId)
                            .to(Occasion::Table, Occasion::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CategoryOccasion::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CategoryOccasion { Table, CategoryId, OccasionId }

#[derive(DeriveIden)]
enum Category { Table, Id }

#[derive(DeriveIden)]
enum Occasion { Table, Id }
