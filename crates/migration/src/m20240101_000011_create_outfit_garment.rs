//! Create `outfit_garment` join table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OutfitGarment::Table)
                    .if_not_exists()
                    .col(uuid(OutfitGarment::OutfitId).not_null())
                    .col(uuid(OutfitGarment::GarmentId).not_null())
                    .primary_key(
                        Index::create().col(OutfitGarment::OutfitId).col(OutfitGarment::GarmentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_outfit_garment_outfit")
                            .from(OutfitGarment::Table, OutfitGarment::OutfitId)
                            .to(Outfit::Table, Outfit::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_outfit_garment_garment")
                            .from(OutfitGarment::Table, OutfitGarment::GarmentId)
                            .to(Garment::Table, Garment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(OutfitGarment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum OutfitGarment { Table, OutfitId, GarmentId }

#[derive(DeriveIden)]
enum Outfit { Table, Id }

#[derive(DeriveIden)]
enum Garment { Table, Id }
