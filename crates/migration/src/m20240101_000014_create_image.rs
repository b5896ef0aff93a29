//! Create `image` table. Every owner reference is optional.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Image::Table)
                    .if_not_exists()
                    .col(uuid(Image::Id).primary_key())
                    .col(string_len(Image::Url, 1024).not_null())
                    .col(uuid_null(Image::OutfitId))
                    .col(uuid_null(Image::GarmentId))
                    .col(uuid_null(Image::BrandId))
                    .col(timestamp_with_time_zone(Image::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_image_outfit")
                            .from(Image::Table, Image::OutfitId)
                            .to(Outfit::Table, Outfit::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_image_garment")
                            .from(Image::Table, Image::GarmentId)
                            .to(Garment::Table, Garment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_image_brand")
                            .from(Image::Table, Image::BrandId)
                            .to(Brand::Table, Brand::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Image::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Image { Table, Id, Url, OutfitId, GarmentId, BrandId, CreatedAt }

#[derive(DeriveIden)]
enum Outfit { Table, Id }

#[derive(DeriveIden)]
enum Garment { Table, Id }

#[derive(DeriveIden)]
enum Brand { Table, Id }
