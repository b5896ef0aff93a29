use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Recommendation: one per (user_id, outfit_id)
        manager
            .create_index(
                Index::create()
                    .name("uniq_recommendation_user_outfit")
                    .table(Recommendation::Table)
                    .col(Recommendation::UserId)
                    .col(Recommendation::OutfitId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Garment: lookups by brand and category guard their deletion
        manager
            .create_index(
                Index::create()
                    .name("idx_garment_brand")
                    .table(Garment::Table)
                    .col(Garment::BrandId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_garment_category")
                    .table(Garment::Table)
                    .col(Garment::CategoryId)
                    .to_owned(),
            )
            .await?;

        // Comment: listed per user
        manager
            .create_index(
                Index::create()
                    .name("idx_comment_user")
                    .table(Comment::Table)
                    .col(Comment::UserId)
                    .to_owned(),
            )
            .await?;

        // Image: listed per owner
        manager
            .create_index(
                Index::create()
                    .name("idx_image_outfit")
                    .table(Image::Table)
                    .col(Image::OutfitId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_image_garment")
                    .table(Image::Table)
                    .col(Image::GarmentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_recommendation_user_outfit").table(Recommendation::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_garment_brand").table(Garment::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_garment_category").table(Garment::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_comment_user").table(Comment::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_image_outfit").table(Image::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_image_garment").table(Image::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Recommendation { Table, UserId, OutfitId }

#[derive(DeriveIden)]
enum Garment { Table, BrandId, CategoryId }

#[derive(DeriveIden)]
enum Comment { Table, UserId }

#[derive(DeriveIden)]
enum Image { Table, OutfitId, GarmentId }
