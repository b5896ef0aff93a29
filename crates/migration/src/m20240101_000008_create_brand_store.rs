//! Create `brand_store` join table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BrandStore::Table)
                    .if_not_exists()
                    .col(uuid(BrandStore::BrandId).not_null())
                    .col(uuid(BrandStore::StoreId).not_null())
                    .primary_key(Index::create().col(BrandStore::BrandId).col(BrandStore::StoreId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_brand_store_brand")
                            .from(BrandStore::Table, BrandStore::BrandId)
                            .to(Brand::Table, Brand::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_brand_store_store")
                            .from(BrandStore::Table, BrandStore::StoreId)
                            .to(Store::Table, Store::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(BrandStore::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum BrandStore { Table, BrandId, StoreId }

#[derive(DeriveIden)]
enum Brand { Table, Id }

#[derive(DeriveIden)]
enum Store { Table, Id }
