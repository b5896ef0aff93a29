//! Create `wishlist_outfit` join table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WishlistOutfit::Table)
                    .if_not_exists()
                    .col(uuid(WishlistOutfit::WishlistId).not_null())
                    .col(uuid(WishlistOutfit::OutfitId).not_null())
                    .primary_key(
                        Index::create().col(WishlistOutfit::WishlistId).col(WishlistOutfit::OutfitId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wishlist_outfit_wishlist")
                            .from(WishlistOutfit::Table, WishlistOutfit::WishlistId)
                            .to(Wishlist::Table, Wishlist::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wishlist_outfit_outfit")
                            .from(WishlistOutfit::Table, WishlistOutfit::OutfitId)
                            .to(Outfit::Table, Outfit::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(WishlistOutfit::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum WishlistOutfit { Table, WishlistId, OutfitId }

#[derive(DeriveIden)]
enum Wishlist { Table, Id }

#[derive(DeriveIden)]
enum Outfit { Table, Id }
