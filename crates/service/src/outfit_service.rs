use uuid::Uuid;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set, TransactionTrait};
use serde::Serialize;
use tracing::{debug, info};

use models::{category, errors::ModelError, garment, image, outfit, outfit_garment};
use crate::{errors::ServiceError, lookup, pagination::{self, Pagination}};

/// Fields accepted on create. An outfit starts with at least one garment.
#[derive(Debug, Clone)]
pub struct OutfitInput {
    pub name: String,
    pub estimated_price: Option<f64>,
    pub category_id: Option<Uuid>,
    pub garment_ids: Vec<Uuid>,
}

/// Scalar fields accepted on update. Garments are managed through the association operations.
#[derive(Debug, Clone)]
pub struct OutfitUpdate {
    pub name: String,
    pub estimated_price: Option<f64>,
    pub category_id: Option<Uuid>,
}

/// An outfit with its garments and images.
#[derive(Debug, Clone, Serialize)]
pub struct OutfitDetail {
    #[serde(flatten)]
    pub outfit: outfit::Model,
    pub garments: Vec<garment::Model>,
    pub images: Vec<image::Model>,
}

/// Every outfit belongs to an existing category.
async fn check_category(db: &DatabaseConnection, category_id: Option<Uuid>) -> Result<(), ServiceError> {
    let Some(id) = category_id else {
        return Err(ModelError::Validation("category_id required".into()).into());
    };
    lookup::require::<category::Entity, _>(db, id, "category").await?;
    Ok(())
}

/// Create an outfit and link its garments in one transaction.
pub async fn create_outfit(db: &DatabaseConnection, input: OutfitInput) -> Result<outfit::Model, ServiceError> {
    let name = outfit::validate_name(&input.name)?;
    outfit::validate_estimated_price(input.estimated_price)?;
    if input.garment_ids.is_empty() {
        return Err(ServiceError::illegal("an outfit needs at least one garment"));
    }
    check_category(db, input.category_id).await?;

    let txn = db.begin().await?;
    let garment_ids = lookup::require_all::<garment::Entity, _>(&txn, &input.garment_ids, "garment").await?;
    let now = Utc::now();
    let am = outfit::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        estimated_price: Set(input.estimated_price),
        category_id: Set(input.category_id),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    let created = am.insert(&txn).await?;
    for garment_id in &garment_ids {
        outfit_garment::link(&txn, created.id, *garment_id).await?;
    }
    txn.commit().await?;
    info!(id = %created.id, garments = garment_ids.len(), "outfit created");
    Ok(created)
}

/// List outfits ordered by creation, optionally paginated.
pub async fn list_outfits(db: &DatabaseConnection, page: Option<Pagination>) -> Result<Vec<outfit::Model>, ServiceError> {
    let finder = outfit::Entity::find().order_by_asc(outfit::Column::CreatedAt).order_by_asc(outfit::Column::Id);
    pagination::fetch_page(db, finder, page).await
}

pub async fn get_outfit(db: &DatabaseConnection, id: Uuid) -> Result<outfit::Model, ServiceError> {
    debug!(%id, "get outfit");
    lookup::require::<outfit::Entity, _>(db, id, "outfit").await
}

pub async fn get_outfit_detail(db: &DatabaseConnection, id: Uuid) -> Result<OutfitDetail, ServiceError> {
    let o = get_outfit(db, id).await?;
    let garments = o.find_related(garment::Entity).order_by_asc(garment::Column::Name).all(db).await?;
    let images = o.find_related(image::Entity).order_by_asc(image::Column::CreatedAt).all(db).await?;
    Ok(OutfitDetail { outfit: o, garments, images })
}

pub async fn update_outfit(db: &DatabaseConnection, id: Uuid, input: OutfitUpdate) -> Result<outfit::Model, ServiceError> {
    let found = get_outfit(db, id).await?;
    let name = outfit::validate_name(&input.name)?;
    outfit::validate_estimated_price(input.estimated_price)?;
    check_category(db, input.category_id).await?;
    let mut am: outfit::ActiveModel = found.into();
    am.name = Set(name);
    am.estimated_price = Set(input.estimated_price);
    am.category_id = Set(input.category_id);
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await?;
    info!(id = %updated.id, "outfit updated");
    Ok(updated)
}

/// Delete an outfit. Garment and wishlist links, images, comments and recommendations on it are removed too.
pub async fn delete_outfit(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    get_outfit(db, id).await?;
    outfit::Entity::delete_by_id(id).exec(db).await?;
    info!(%id, "outfit deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_service::{create_owned_image, ImageOwner};
    use crate::test_support::{get_db, seed_category, seed_garment, seed_user};
    use models::{comment, recommendation};

    #[tokio::test]
    async fn outfit_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let top = seed_garment(&db, "Top").await?;
        let skirt = seed_garment(&db, "Skirt").await?;
        let c = seed_category(&db, "Summer").await?;

        let o = create_outfit(&db, OutfitInput {
            name: "Picnic".into(),
            estimated_price: Some(80.0),
            category_id: Some(c.id),
            garment_ids: vec![top.id, skirt.id, top.id],
        })
        .await?;
        let detail = get_outfit_detail(&db, o.id).await?;
        assert_eq!(detail.garments.iter().map(|g| g.name.as_str()).collect::<Vec<_>>(), vec!["Skirt", "Top"]);

        let autumn = seed_category(&db, "Autumn").await?;
        let u = update_outfit(&db, o.id, OutfitUpdate { name: "Park picnic".into(), estimated_price: None, category_id: Some(autumn.id) }).await?;
        assert_eq!(u.name, "Park picnic");
        assert_eq!(u.category_id, Some(autumn.id));

        assert_eq!(list_outfits(&db, None).await?.len(), 1);
        delete_outfit(&db, o.id).await?;
        assert!(matches!(get_outfit(&db, o.id).await, Err(ServiceError::NotFound(_))));
        // garments survive
        assert!(garment::Entity::find_by_id(top.id).one(&db).await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn create_requires_existing_garments() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let none = create_outfit(&db, OutfitInput { name: "Empty".into(), estimated_price: None, category_id: None, garment_ids: vec![] }).await;
        assert!(matches!(none, Err(ServiceError::IllegalOperation(_))));

        let g = seed_garment(&db, "Top").await?;
        let c = seed_category(&db, "Casual").await?;
        let ghost = create_outfit(&db, OutfitInput {
            name: "Ghost".into(),
            estimated_price: None,
            category_id: Some(c.id),
            garment_ids: vec![g.id, Uuid::new_v4()],
        })
        .await;
        assert!(matches!(ghost, Err(ServiceError::NotFound(_))));
        assert!(list_outfits(&db, None).await?.is_empty());

        let bad_cat = create_outfit(&db, OutfitInput {
            name: "Cat".into(),
            estimated_price: None,
            category_id: Some(Uuid::new_v4()),
            garment_ids: vec![g.id],
        })
        .await;
        assert!(matches!(bad_cat, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn outfit_needs_a_category() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let g = seed_garment(&db, "Top").await?;
        let r = create_outfit(&db, OutfitInput { name: "Loose".into(), estimated_price: None, category_id: None, garment_ids: vec![g.id] }).await;
        assert!(matches!(r, Err(ServiceError::Model(ModelError::Validation(_)))));
        assert!(list_outfits(&db, None).await?.is_empty());

        let c = seed_category(&db, "Casual").await?;
        let o = create_outfit(&db, OutfitInput { name: "Kept".into(), estimated_price: None, category_id: Some(c.id), garment_ids: vec![g.id] }).await?;
        let r = update_outfit(&db, o.id, OutfitUpdate { name: "Kept".into(), estimated_price: None, category_id: None }).await;
        assert!(matches!(r, Err(ServiceError::Model(ModelError::Validation(_)))));
        assert_eq!(get_outfit(&db, o.id).await?.category_id, Some(c.id));
        Ok(())
    }

    #[tokio::test]
    async fn delete_cascades_dependents() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let ana = seed_user(&db, "ana").await?;
        let g = seed_garment(&db, "Top").await?;
        let c = seed_category(&db, "Evening").await?;
        let o = create_outfit(&db, OutfitInput { name: "Look".into(), estimated_price: None, category_id: Some(c.id), garment_ids: vec![g.id] }).await?;
        create_owned_image(&db, ImageOwner::Outfit, o.id, "https://img.example.com/look.jpg").await?;
        crate::comment_service::create_comment(&db, ana.id, "Great", 5.0, Some(o.id), None).await?;
        crate::recommendation_service::create_recommendation(&db, ana.id, o.id, "Wear it", 5).await?;

        delete_outfit(&db, o.id).await?;
        assert!(image::Entity::find().one(&db).await?.is_none());
        assert!(comment::Entity::find().one(&db).await?.is_none());
        assert!(recommendation::Entity::find().one(&db).await?.is_none());
        assert!(outfit_garment::Entity::find().one(&db).await?.is_none());
        Ok(())
    }
}
