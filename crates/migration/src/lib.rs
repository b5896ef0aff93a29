//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_user;
mod m20240101_000002_create_category;
mod m20240101_000003_create_occasion;
mod m20240101_000004_create_category_occasion;
mod m20240101_000005_create_color;
mod m20240101_000006_create_brand;
mod m20240101_000007_create_store;
mod m20240101_000008_create_brand_store;
mod m20240101_000009_create_garment;
mod m20240101_000010_create_outfit;
mod m20240101_000011_create_outfit_garment;
mod m20240101_000012_create_wishlist;
mod m20240101_000013_create_wishlist_outfit;
mod m20240101_000014_create_image;
mod m20240101_000015_create_comment;
mod m20240101_000016_create_recommendation;
mod m20240101_000020_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_user::Migration),
            Box::new(m20240101_000002_create_category::Migration),
            Box::new(m20240101_000003_create_occasion::Migration),
            Box::new(m20240101_000004_create_category_occasion::Migration),
            Box::new(m20240101_000005_create_color::Migration),
            Box::new(m20240101_000006_create_brand::Migration),
            Box::new(m20240101_000007_create_store::Migration),
            Box::new(m20240101_000008_create_brand_store::Migration),
            Box::new(m20240101_000009_create_garment::Migration),
            Box::new(m20240101_000010_create_outfit::Migration),
            Box::new(m20240101_000011_create_outfit_garment::Migration),
            Box::new(m20240101_000012_create_wishlist::Migration),
            Box::new(m20240101_000013_create_wishlist_outfit::Migration),
            Box::new(m20240101_000014_create_image::Migration),
            Box::new(m20240101_000015_create_comment::Migration),
            Box::new(m20240101_000016_create_recommendation::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000020_add_indexes::Migration),
        ]
    }
}
