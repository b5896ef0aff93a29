//! Create `wishlist` table (one per user).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Wishlist::Table)
                    .if_not_exists()
                    .col(uuid(Wishlist::Id).primary_key())
                    .col(uuid(Wishlist::UserId).unique_key().not_null())
                    .col(string_len(Wishlist::Name, 128).not_null())
                    .col(timestamp_with_time_zone(Wishlist::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wishlist_user")
                            .from(Wishlist::Table, Wishlist::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Wishlist::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Wishlist { Table, Id, UserId, Name, CreatedAt }

#[derive(DeriveIden)]
enum User { Table, Id }
