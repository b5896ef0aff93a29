//! Create `recommendation` table.
//!
//! A user recommends a given outfit at most once; the unique index lives in the index migration.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recommendation::Table)
                    .if_not_exists()
                    .col(uuid(Recommendation::Id).primary_key())
                    .col(uuid(Recommendation::UserId).not_null())
                    .col(uuid(Recommendation::OutfitId).not_null())
                    .col(text(Recommendation::Text).not_null())
                    .col(integer(Recommendation::Rating).not_null())
                    .col(timestamp_with_time_zone(Recommendation::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recommendation_user")
                            .from(Recommendation::Table, Recommendation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recommendation_outfit")
                            .from(Recommendation::Table, Recommendation::OutfitId)
                            .to(Outfit::Table, Outfit::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Recommendation::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Recommendation { Table, Id, UserId, OutfitId, Text, Rating, CreatedAt }

#[derive(DeriveIden)]
enum User { Table, Id }

#[derive(DeriveIden)]
enum Outfit { Table, Id }
