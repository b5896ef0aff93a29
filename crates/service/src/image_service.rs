//! Images, either managed through the entity that owns them or on their own.
use std::fmt;

use uuid::Uuid;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::{debug, info, warn};

use models::{brand, garment, image, outfit};
use crate::{errors::ServiceError, lookup};

/// Kind of entity an image can hang off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOwner {
    Outfit,
    Garment,
    Brand,
}

impl ImageOwner {
    fn column(self) -> image::Column {
        match self {
            ImageOwner::Outfit => image::Column::OutfitId,
            ImageOwner::Garment => image::Column::GarmentId,
            ImageOwner::Brand => image::Column::BrandId,
        }
    }

    fn owner_of(self, img: &image::Model) -> Option<Uuid> {
        match self {
            ImageOwner::Outfit => img.outfit_id,
            ImageOwner::Garment => img.garment_id,
            ImageOwner::Brand => img.brand_id,
        }
    }

    async fn require(self, db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
        match self {
            ImageOwner::Outfit => lookup::require::<outfit::Entity, _>(db, id, "outfit").await.map(|_| ()),
            ImageOwner::Garment => lookup::require::<garment::Entity, _>(db, id, "garment").await.map(|_| ()),
            ImageOwner::Brand => lookup::require::<brand::Entity, _>(db, id, "brand").await.map(|_| ()),
        }
    }
}

impl fmt::Display for ImageOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ImageOwner::Outfit => "outfit",
            ImageOwner::Garment => "garment",
            ImageOwner::Brand => "brand",
        };
        f.write_str(s)
    }
}

/// Fields of a standalone image. Every owner reference is optional.
#[derive(Debug, Clone, Default)]
pub struct ImageInput {
    pub url: String,
    pub outfit_id: Option<Uuid>,
    pub garment_id: Option<Uuid>,
    pub brand_id: Option<Uuid>,
}

async fn check_owners(db: &DatabaseConnection, input: &ImageInput) -> Result<(), ServiceError> {
    for (owner, id) in [
        (ImageOwner::Outfit, input.outfit_id),
        (ImageOwner::Garment, input.garment_id),
        (ImageOwner::Brand, input.brand_id),
    ] {
        if let Some(id) = id {
            owner.require(db, id).await?;
        }
    }
    Ok(())
}

/// Attach a new image to `owner_id`.
pub async fn create_owned_image(db: &DatabaseConnection, owner: ImageOwner, owner_id: Uuid, url: &str) -> Result<image::Model, ServiceError> {
    owner.require(db, owner_id).await?;
    let mut input = ImageInput { url: url.to_string(), ..Default::default() };
    match owner {
        ImageOwner::Outfit => input.outfit_id = Some(owner_id),
        ImageOwner::Garment => input.garment_id = Some(owner_id),
        ImageOwner::Brand => input.brand_id = Some(owner_id),
    }
    insert(db, input).await
}

pub async fn list_owned_images(db: &DatabaseConnection, owner: ImageOwner, owner_id: Uuid) -> Result<Vec<image::Model>, ServiceError> {
    owner.require(db, owner_id).await?;
    Ok(image::Entity::find()
        .filter(owner.column().eq(owner_id))
        .order_by_asc(image::Column::CreatedAt)
        .all(db)
        .await?)
}

/// An image reached through its owner; an image of some other owner is an illegal access.
pub async fn get_owned_image(db: &DatabaseConnection, owner: ImageOwner, owner_id: Uuid, image_id: Uuid) -> Result<image::Model, ServiceError> {
    owner.require(db, owner_id).await?;
    let img = get_image(db, image_id).await?;
    if owner.owner_of(&img) != Some(owner_id) {
        warn!(%owner, %owner_id, %image_id, "image belongs to another owner");
        return Err(ServiceError::illegal(format!("image is not associated with this {owner}")));
    }
    Ok(img)
}

pub async fn update_owned_image(
    db: &DatabaseConnection,
    owner: ImageOwner,
    owner_id: Uuid,
    image_id: Uuid,
    url: &str,
) -> Result<image::Model, ServiceError> {
    let found = get_owned_image(db, owner, owner_id, image_id).await?;
    let url = image::validate_url(url)?;
    let mut am: image::ActiveModel = found.into();
    am.url = Set(url);
    let updated = am.update(db).await?;
    info!(id = %updated.id, %owner, "image updated");
    Ok(updated)
}

pub async fn delete_owned_image(db: &DatabaseConnection, owner: ImageOwner, owner_id: Uuid, image_id: Uuid) -> Result<(), ServiceError> {
    get_owned_image(db, owner, owner_id, image_id).await?;
    image::Entity::delete_by_id(image_id).exec(db).await?;
    info!(id = %image_id, %owner, %owner_id, "image deleted");
    Ok(())
}

async fn insert(db: &DatabaseConnection, input: ImageInput) -> Result<image::Model, ServiceError> {
    let url = image::validate_url(&input.url)?;
    let am = image::ActiveModel {
        id: Set(Uuid::new_v4()),
        url: Set(url),
        outfit_id: Set(input.outfit_id),
        garment_id: Set(input.garment_id),
        brand_id: Set(input.brand_id),
        created_at: Set(Utc::now().into()),
    };
    let created = am.insert(db).await?;
    info!(id = %created.id, "image created");
    Ok(created)
}

pub async fn create_image(db: &DatabaseConnection, input: ImageInput) -> Result<image::Model, ServiceError> {
    image::validate_url(&input.url)?;
    check_owners(db, &input).await?;
    insert(db, input).await
}

pub async fn list_images(db: &DatabaseConnection) -> Result<Vec<image::Model>, ServiceError> {
    Ok(image::Entity::find().order_by_asc(image::Column::CreatedAt).all(db).await?)
}

pub async fn get_image(db: &DatabaseConnection, id: Uuid) -> Result<image::Model, ServiceError> {
    debug!(%id, "get image");
    lookup::require::<image::Entity, _>(db, id, "image").await
}

/// Replace the url and owner references of an image.
pub async fn update_image(db: &DatabaseConnection, id: Uuid, input: ImageInput) -> Result<image::Model, ServiceError> {
    let found = get_image(db, id).await?;
    let url = image::validate_url(&input.url)?;
    check_owners(db, &input).await?;
    let mut am: image::ActiveModel = found.into();
    am.url = Set(url);
    am.outfit_id = Set(input.outfit_id);
    am.garment_id = Set(input.garment_id);
    am.brand_id = Set(input.brand_id);
    let updated = am.update(db).await?;
    info!(id = %updated.id, "image updated");
    Ok(updated)
}

/// Delete a standalone image. Attached images are deleted through their owner.
pub async fn delete_image(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let img = get_image(db, id).await?;
    if img.is_attached() {
        return Err(ServiceError::illegal("image is attached to an outfit, garment or brand"));
    }
    image::Entity::delete_by_id(id).exec(db).await?;
    info!(%id, "image deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_brand, seed_garment, seed_outfit};

    #[tokio::test]
    async fn owned_image_lifecycle() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let o = seed_outfit(&db, "Look").await?;
        let img = create_owned_image(&db, ImageOwner::Outfit, o.id, "https://img.example.com/1.jpg").await?;
        assert_eq!(img.outfit_id, Some(o.id));
        assert_eq!(list_owned_images(&db, ImageOwner::Outfit, o.id).await?.len(), 1);

        let u = update_owned_image(&db, ImageOwner::Outfit, o.id, img.id, "https://img.example.com/2.jpg").await?;
        assert_eq!(u.url, "https://img.example.com/2.jpg");

        delete_owned_image(&db, ImageOwner::Outfit, o.id, img.id).await?;
        assert!(list_images(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn other_owner_access_is_illegal() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let g = seed_garment(&db, "Hat").await?;
        let b = seed_brand(&db, "Acme").await?;
        let img = create_owned_image(&db, ImageOwner::Garment, g.id, "https://img.example.com/hat.jpg").await?;

        assert!(matches!(
            get_owned_image(&db, ImageOwner::Brand, b.id, img.id).await,
            Err(ServiceError::IllegalOperation(_))
        ));
        assert!(matches!(
            delete_owned_image(&db, ImageOwner::Brand, b.id, img.id).await,
            Err(ServiceError::IllegalOperation(_))
        ));
        assert!(matches!(
            create_owned_image(&db, ImageOwner::Brand, Uuid::new_v4(), "x").await,
            Err(ServiceError::NotFound(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn standalone_delete_requires_detached() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let b = seed_brand(&db, "Acme").await?;
        let img = create_image(&db, ImageInput { url: "https://img.example.com/logo.png".into(), brand_id: Some(b.id), ..Default::default() }).await?;
        assert!(matches!(delete_image(&db, img.id).await, Err(ServiceError::IllegalOperation(_))));

        let detached = update_image(&db, img.id, ImageInput { url: img.url.clone(), ..Default::default() }).await?;
        assert!(!detached.is_attached());
        delete_image(&db, img.id).await?;

        let ghost = create_image(&db, ImageInput { url: "u".into(), outfit_id: Some(Uuid::new_v4()), ..Default::default() }).await;
        assert!(matches!(ghost, Err(ServiceError::NotFound(_))));
        assert!(matches!(create_image(&db, ImageInput::default()).await, Err(ServiceError::Model(_))));
        Ok(())
    }
}
