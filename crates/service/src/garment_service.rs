use uuid::Uuid;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait, QueryOrder, Set};
use serde::Serialize;
use tracing::{debug, info, warn};

use models::{brand, category, color, errors::ModelError, garment, image, outfit};
use crate::{errors::ServiceError, lookup, pagination::{self, Pagination}};

/// Fields accepted on create and update.
#[derive(Debug, Clone)]
pub struct GarmentInput {
    pub name: String,
    pub garment_type: String,
    pub size: Option<String>,
    pub price: f64,
    pub promo_price: Option<f64>,
    pub brand_id: Uuid,
    pub category_id: Uuid,
    pub color_id: Option<Uuid>,
}

/// A garment with its images.
#[derive(Debug, Clone, Serialize)]
pub struct GarmentDetail {
    #[serde(flatten)]
    pub garment: garment::Model,
    pub images: Vec<image::Model>,
}

/// Brand, category and color must all exist. A garment without a color is rejected.
async fn check_references(db: &DatabaseConnection, input: &GarmentInput) -> Result<(), ServiceError> {
    let Some(color_id) = input.color_id else {
        return Err(ModelError::Validation("color_id required".into()).into());
    };
    lookup::require::<brand::Entity, _>(db, input.brand_id, "brand").await?;
    lookup::require::<category::Entity, _>(db, input.category_id, "category").await?;
    lookup::require::<color::Entity, _>(db, color_id, "color").await?;
    Ok(())
}

pub async fn create_garment(db: &DatabaseConnection, input: GarmentInput) -> Result<garment::Model, ServiceError> {
    let fields = garment::validate(&input.name, &input.garment_type, input.size.as_deref(), input.price, input.promo_price)?;
    check_references(db, &input).await?;
    let now = Utc::now();
    let am = garment::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(fields.name),
        garment_type: Set(fields.garment_type),
        size: Set(fields.size),
        price: Set(fields.price),
        promo_price: Set(fields.promo_price),
        brand_id: Set(input.brand_id),
        category_id: Set(input.category_id),
        color_id: Set(input.color_id),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    let created = am.insert(db).await?;
    info!(id = %created.id, brand_id = %created.brand_id, "garment created");
    Ok(created)
}

/// List garments ordered by name, optionally paginated.
pub async fn list_garments(db: &DatabaseConnection, page: Option<Pagination>) -> Result<Vec<garment::Model>, ServiceError> {
    let finder = garment::Entity::find().order_by_asc(garment::Column::Name).order_by_asc(garment::Column::Id);
    pagination::fetch_page(db, finder, page).await
}

pub async fn get_garment(db: &DatabaseConnection, id: Uuid) -> Result<garment::Model, ServiceError> {
    debug!(%id, "get garment");
    lookup::require::<garment::Entity, _>(db, id, "garment").await
}

pub async fn get_garment_detail(db: &DatabaseConnection, id: Uuid) -> Result<GarmentDetail, ServiceError> {
    let g = get_garment(db, id).await?;
    let images = g.find_related(image::Entity).order_by_asc(image::Column::CreatedAt).all(db).await?;
    Ok(GarmentDetail { garment: g, images })
}

pub async fn update_garment(db: &DatabaseConnection, id: Uuid, input: GarmentInput) -> Result<garment::Model, ServiceError> {
    let found = get_garment(db, id).await?;
    let fields = garment::validate(&input.name, &input.garment_type, input.size.as_deref(), input.price, input.promo_price)?;
    check_references(db, &input).await?;
    let mut am: garment::ActiveModel = found.into();
    am.name = Set(fields.name);
    am.garment_type = Set(fields.garment_type);
    am.size = Set(fields.size);
    am.price = Set(fields.price);
    am.promo_price = Set(fields.promo_price);
    am.brand_id = Set(input.brand_id);
    am.category_id = Set(input.category_id);
    am.color_id = Set(input.color_id);
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await?;
    info!(id = %updated.id, "garment updated");
    Ok(updated)
}

/// Delete a garment that has no images and belongs to no outfit.
pub async fn delete_garment(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let g = get_garment(db, id).await?;
    let images = g.find_related(image::Entity).count(db).await?;
    let outfits = g.find_related(outfit::Entity).count(db).await?;
    if images > 0 || outfits > 0 {
        warn!(%id, images, outfits, "garment still referenced");
        return Err(ServiceError::illegal(format!(
            "garment has {images} image(s) and belongs to {outfits} outfit(s)"
        )));
    }
    garment::Entity::delete_by_id(id).exec(db).await?;
    info!(%id, "garment deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_service::{create_owned_image, ImageOwner};
    use crate::outfit_service::{create_outfit, OutfitInput};
    use crate::test_support::{get_db, seed_brand, seed_category, seed_color, seed_garment};

    #[tokio::test]
    async fn garment_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let b = seed_brand(&db, "Levi's").await?;
        let c = seed_category(&db, "Denim").await?;
        let blue = seed_color(&db, "Indigo").await?;
        let input = GarmentInput {
            name: "501".into(),
            garment_type: "jeans".into(),
            size: Some("32".into()),
            price: 99.0,
            promo_price: Some(79.0),
            brand_id: b.id,
            category_id: c.id,
            color_id: Some(blue.id),
        };
        let g = create_garment(&db, input.clone()).await?;
        assert_eq!(g.promo_price, Some(79.0));

        let u = update_garment(&db, g.id, GarmentInput { price: 120.0, promo_price: None, ..input.clone() }).await?;
        assert_eq!(u.price, 120.0);
        assert_eq!(u.promo_price, None);

        delete_garment(&db, g.id).await?;
        assert!(matches!(get_garment(&db, g.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn references_and_prices_validated() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let b = seed_brand(&db, "Levi's").await?;
        let c = seed_category(&db, "Denim").await?;
        let blue = seed_color(&db, "Indigo").await?;
        let base = GarmentInput {
            name: "501".into(),
            garment_type: "jeans".into(),
            size: None,
            price: 50.0,
            promo_price: None,
            brand_id: b.id,
            category_id: c.id,
            color_id: Some(blue.id),
        };
        let r = create_garment(&db, GarmentInput { brand_id: Uuid::new_v4(), ..base.clone() }).await;
        assert!(matches!(r, Err(ServiceError::NotFound(_))));
        let r = create_garment(&db, GarmentInput { color_id: Some(Uuid::new_v4()), ..base.clone() }).await;
        assert!(matches!(r, Err(ServiceError::NotFound(_))));
        let r = create_garment(&db, GarmentInput { promo_price: Some(60.0), ..base.clone() }).await;
        assert!(matches!(r, Err(ServiceError::Model(_))));
        Ok(())
    }

    #[tokio::test]
    async fn garment_needs_a_color() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let b = seed_brand(&db, "Levi's").await?;
        let c = seed_category(&db, "Denim").await?;
        let input = GarmentInput {
            name: "501".into(),
            garment_type: "jeans".into(),
            size: None,
            price: 50.0,
            promo_price: None,
            brand_id: b.id,
            category_id: c.id,
            color_id: None,
        };
        let r = create_garment(&db, input).await;
        assert!(matches!(r, Err(ServiceError::Model(ModelError::Validation(_)))));
        assert!(list_garments(&db, None).await?.is_empty());

        let g = seed_garment(&db, "Tee").await?;
        let r = update_garment(&db, g.id, GarmentInput {
            name: g.name.clone(),
            garment_type: g.garment_type.clone(),
            size: None,
            price: g.price,
            promo_price: None,
            brand_id: g.brand_id,
            category_id: g.category_id,
            color_id: None,
        })
        .await;
        assert!(matches!(r, Err(ServiceError::Model(ModelError::Validation(_)))));
        Ok(())
    }

    #[tokio::test]
    async fn garment_in_use_cannot_be_deleted() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let pictured = seed_garment(&db, "Scarf").await?;
        create_owned_image(&db, ImageOwner::Garment, pictured.id, "https://img.example.com/scarf.jpg").await?;
        assert_eq!(get_garment_detail(&db, pictured.id).await?.images.len(), 1);
        assert!(matches!(delete_garment(&db, pictured.id).await, Err(ServiceError::IllegalOperation(_))));

        let worn = seed_garment(&db, "Boots").await?;
        let season = seed_category(&db, "Autumn").await?;
        create_outfit(&db, OutfitInput {
            name: "Autumn".into(),
            estimated_price: None,
            category_id: Some(season.id),
            garment_ids: vec![worn.id],
        })
        .await?;
        assert!(matches!(delete_garment(&db, worn.id).await, Err(ServiceError::IllegalOperation(_))));
        Ok(())
    }

    #[tokio::test]
    async fn list_garments_paginates() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        for name in ["A", "B", "C"] {
            seed_garment(&db, name).await?;
        }
        let page = list_garments(&db, Some(Pagination { page: 2, per_page: 2 })).await?;
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].name, "C");
        Ok(())
    }
}
