use uuid::Uuid;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set};
use serde::Serialize;
use tracing::{debug, info};

use models::{outfit, user, wishlist};
use crate::{errors::ServiceError, lookup};

/// A wishlist with the outfits saved in it.
#[derive(Debug, Clone, Serialize)]
pub struct WishlistDetail {
    #[serde(flatten)]
    pub wishlist: wishlist::Model,
    pub outfits: Vec<outfit::Model>,
}

/// Create the wishlist of `user_id`. A user owns at most one.
pub async fn create_wishlist(db: &DatabaseConnection, user_id: Uuid, name: Option<&str>) -> Result<wishlist::Model, ServiceError> {
    lookup::require::<user::Entity, _>(db, user_id, "user").await?;
    let existing = wishlist::Entity::find().filter(wishlist::Column::UserId.eq(user_id)).one(db).await?;
    if existing.is_some() {
        return Err(ServiceError::illegal("user already has a wishlist"));
    }
    let am = wishlist::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        name: Set(wishlist::name_or_default(name)),
        created_at: Set(Utc::now().into()),
    };
    let created = am.insert(db).await?;
    info!(id = %created.id, %user_id, "wishlist created");
    Ok(created)
}

pub async fn get_user_wishlist(db: &DatabaseConnection, user_id: Uuid) -> Result<wishlist::Model, ServiceError> {
    let u = lookup::require::<user::Entity, _>(db, user_id, "user").await?;
    u.find_related(wishlist::Entity).one(db).await?.ok_or_else(|| ServiceError::not_found("wishlist"))
}

pub async fn list_wishlists(db: &DatabaseConnection) -> Result<Vec<wishlist::Model>, ServiceError> {
    Ok(wishlist::Entity::find().order_by_asc(wishlist::Column::CreatedAt).all(db).await?)
}

pub async fn get_wishlist(db: &DatabaseConnection, id: Uuid) -> Result<wishlist::Model, ServiceError> {
    debug!(%id, "get wishlist");
    lookup::require::<wishlist::Entity, _>(db, id, "wishlist").await
}

pub async fn get_wishlist_detail(db: &DatabaseConnection, id: Uuid) -> Result<WishlistDetail, ServiceError> {
    let w = get_wishlist(db, id).await?;
    let outfits = w.find_related(outfit::Entity).order_by_asc(outfit::Column::Name).all(db).await?;
    Ok(WishlistDetail { wishlist: w, outfits })
}

pub async fn rename_wishlist(db: &DatabaseConnection, id: Uuid, name: &str) -> Result<wishlist::Model, ServiceError> {
    let found = get_wishlist(db, id).await?;
    let name = wishlist::validate_name(name)?;
    let mut am: wishlist::ActiveModel = found.into();
    am.name = Set(name);
    let updated = am.update(db).await?;
    info!(id = %updated.id, "wishlist renamed");
    Ok(updated)
}

/// Delete a wishlist. Saved outfits are unlinked, never deleted.
pub async fn delete_wishlist(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    get_wishlist(db, id).await?;
    wishlist::Entity::delete_by_id(id).exec(db).await?;
    info!(%id, "wishlist deleted");
    Ok(())
}
