//! Create `garment` table.
//!
//! Brand and category are required and restricted on delete; color is optional.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Garment::Table)
                    .if_not_exists()
                    .col(uuid(Garment::Id).primary_key())
                    .col(string_len(Garment::Name, 128).not_null())
                    .col(string_len(Garment::GarmentType, 64).not_null())
                    .col(string_len_null(Garment::Size, 16))
                    .col(double(Garment::Price).not_null())
                    .col(double_null(Garment::PromoPrice))
                    .col(uuid(Garment::BrandId).not_null())
                    .col(uuid(Garment::CategoryId).not_null())
                    .col(uuid_null(Garment::ColorId))
                    .col(timestamp_with_time_zone(Garment::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Garment::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_garment_brand")
                            .from(Garment::Table, Garment::BrandId)
                            .to(Brand::Table, Brand::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_garment_category")
                            .from(Garment::Table, Garment::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_garment_color")
                            .from(Garment::Table, Garment::ColorId)
                            .to(Color::Table, Color::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Garment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Garment {
    Table,
    Id,
    Name,
    GarmentType,
    Size,
    Price,
    PromoPrice,
    BrandId,
    CategoryId,
    ColorId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Brand { Table, Id }

#[derive(DeriveIden)]
enum Category { Table, Id }

#[derive(DeriveIden)]
enum Color { Table, Id }
