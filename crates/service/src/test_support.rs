#![cfg(test)]
//! Fresh in-memory databases and fixture builders for service tests.
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::{brand, category, color, garment, outfit, store, user};

/// Every call returns a new, fully migrated private database.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_sqlite_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub async fn seed_user(db: &DatabaseConnection, handle: &str) -> Result<user::Model, anyhow::Error> {
    Ok(crate::user_service::create_user(db, handle, &format!("{handle}@example.com")).await?)
}

pub async fn seed_category(db: &DatabaseConnection, name: &str) -> Result<category::Model, anyhow::Error> {
    Ok(crate::category_service::create_category(db, name, None).await?)
}

pub async fn seed_color(db: &DatabaseConnection, name: &str) -> Result<color::Model, anyhow::Error> {
    Ok(crate::color_service::create_color(db, name, "#336699").await?)
}

pub async fn seed_store(db: &DatabaseConnection, name: &str) -> Result<store::Model, anyhow::Error> {
    let input = crate::store_service::StoreInput {
        name: name.to_string(),
        address: "Calle Mayor 1".into(),
        opening_hours: None,
        location: "Madrid".into(),
        brand_ids: None,
    };
    Ok(crate::store_service::create_store(db, input).await?)
}

/// A brand sold in one freshly created store.
pub async fn seed_brand(db: &DatabaseConnection, name: &str) -> Result<brand::Model, anyhow::Error> {
    let shop = seed_store(db, &format!("{name} store")).await?;
    let input = crate::brand_service::BrandInput {
        name: name.to_string(),
        official_site: None,
        logo_url: None,
        store_ids: vec![shop.id],
    };
    Ok(crate::brand_service::create_brand(db, input).await?)
}

/// A garment with its own brand, category and color.
pub async fn seed_garment(db: &DatabaseConnection, name: &str) -> Result<garment::Model, anyhow::Error> {
    let b = seed_brand(db, &format!("{name} brand")).await?;
    let c = seed_category(db, &format!("{name} category")).await?;
    let color = seed_color(db, &format!("{name} color")).await?;
    let input = crate::garment_service::GarmentInput {
        name: name.to_string(),
        garment_type: "top".into(),
        size: Some("M".into()),
        price: 40.0,
        promo_price: None,
        brand_id: b.id,
        category_id: c.id,
        color_id: Some(color.id),
    };
    Ok(crate::garment_service::create_garment(db, input).await?)
}

/// An outfit in its own category holding a single new garment.
pub async fn seed_outfit(db: &DatabaseConnection, name: &str) -> Result<outfit::Model, anyhow::Error> {
    let g = seed_garment(db, &format!("{name} piece")).await?;
    let c = seed_category(db, &format!("{name} outfit")).await?;
    let input = crate::outfit_service::OutfitInput {
        name: name.to_string(),
        estimated_price: None,
        category_id: Some(c.id),
        garment_ids: vec![g.id],
    };
    Ok(crate::outfit_service::create_outfit(db, input).await?)
}
