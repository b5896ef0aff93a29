//! Garments that make up an outfit, managed from either side.
use uuid::Uuid;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder, TransactionTrait};
use tracing::info;

use models::{garment, outfit, outfit_garment};
use crate::{errors::ServiceError, lookup};

async fn require_pair(db: &DatabaseConnection, outfit_id: Uuid, garment_id: Uuid) -> Result<(outfit::Model, garment::Model), ServiceError> {
    let o = lookup::require::<outfit::Entity, _>(db, outfit_id, "outfit").await?;
    let g = lookup::require::<garment::Entity, _>(db, garment_id, "garment").await?;
    Ok((o, g))
}

async fn link(db: &DatabaseConnection, outfit_id: Uuid, garment_id: Uuid) -> Result<(outfit::Model, garment::Model), ServiceError> {
    let pair = require_pair(db, outfit_id, garment_id).await?;
    if outfit_garment::link(db, outfit_id, garment_id).await? {
        info!(%outfit_id, %garment_id, "garment added to outfit");
    }
    Ok(pair)
}

async fn require_linked(db: &DatabaseConnection, outfit_id: Uuid, garment_id: Uuid) -> Result<(outfit::Model, garment::Model), ServiceError> {
    let pair = require_pair(db, outfit_id, garment_id).await?;
    if !outfit_garment::is_linked(db, outfit_id, garment_id).await? {
        return Err(ServiceError::illegal("garment is not associated with this outfit"));
    }
    Ok(pair)
}

async fn unlink(db: &DatabaseConnection, outfit_id: Uuid, garment_id: Uuid) -> Result<(), ServiceError> {
    require_pair(db, outfit_id, garment_id).await?;
    outfit_garment::unlink(db, outfit_id, garment_id).await?;
    info!(%outfit_id, %garment_id, "garment removed from outfit");
    Ok(())
}

/// Add a garment to an outfit; adding it twice changes nothing.
pub async fn add_garment(db: &DatabaseConnection, outfit_id: Uuid, garment_id: Uuid) -> Result<garment::Model, ServiceError> {
    Ok(link(db, outfit_id, garment_id).await?.1)
}

pub async fn list_garments(db: &DatabaseConnection, outfit_id: Uuid) -> Result<Vec<garment::Model>, ServiceError> {
    let o = lookup::require::<outfit::Entity, _>(db, outfit_id, "outfit").await?;
    Ok(o.find_related(garment::Entity).order_by_asc(garment::Column::Name).all(db).await?)
}

pub async fn get_garment(db: &DatabaseConnection, outfit_id: Uuid, garment_id: Uuid) -> Result<garment::Model, ServiceError> {
    Ok(require_linked(db, outfit_id, garment_id).await?.1)
}

/// Make `garment_ids` the exact garment set of the outfit, atomically.
pub async fn replace_garments(db: &DatabaseConnection, outfit_id: Uuid, garment_ids: &[Uuid]) -> Result<Vec<garment::Model>, ServiceError> {
    let txn = db.begin().await?;
    lookup::require::<outfit::Entity, _>(&txn, outfit_id, "outfit").await?;
    let ids = lookup::require_all::<garment::Entity, _>(&txn, garment_ids, "garment").await?;
    outfit_garment::Entity::delete_many()
        .filter(outfit_garment::Column::OutfitId.eq(outfit_id))
        .exec(&txn)
        .await?;
    for garment_id in &ids {
        outfit_garment::link(&txn, outfit_id, *garment_id).await?;
    }
    txn.commit().await?;
    info!(%outfit_id, count = ids.len(), "outfit garments replaced");
    list_garments(db, outfit_id).await
}

pub async fn remove_garment(db: &DatabaseConnection, outfit_id: Uuid, garment_id: Uuid) -> Result<(), ServiceError> {
    unlink(db, outfit_id, garment_id).await
}

pub async fn add_outfit(db: &DatabaseConnection, garment_id: Uuid, outfit_id: Uuid) -> Result<outfit::Model, ServiceError> {
    Ok(link(db, outfit_id, garment_id).await?.0)
}

/// Outfits the garment appears in.
pub async fn list_outfits(db: &DatabaseConnection, garment_id: Uuid) -> Result<Vec<outfit::Model>, ServiceError> {
    let g = lookup::require::<garment::Entity, _>(db, garment_id, "garment").await?;
    Ok(g.find_related(outfit::Entity).order_by_asc(outfit::Column::Name).all(db).await?)
}

pub async fn get_outfit(db: &DatabaseConnection, garment_id: Uuid, outfit_id: Uuid) -> Result<outfit::Model, ServiceError> {
    Ok(require_linked(db, outfit_id, garment_id).await?.0)
}

pub async fn replace_outfits(db: &DatabaseConnection, garment_id: Uuid, outfit_ids: &[Uuid]) -> Result<Vec<outfit::Model>, ServiceError> {
    let txn = db.begin().await?;
    lookup::require::<garment::Entity, _>(&txn, garment_id, "garment").await?;
    let ids = lookup::require_all::<outfit::Entity, _>(&txn, outfit_ids, "outfit").await?;
    outfit_garment::Entity::delete_many()
        .filter(outfit_garment::Column::GarmentId.eq(garment_id))
        .exec(&txn)
        .await?;
    for outfit_id in &ids {
        outfit_garment::link(&txn, *outfit_id, garment_id).await?;
    }
    txn.commit().await?;
    info!(%garment_id, count = ids.len(), "garment outfits replaced");
    list_outfits(db, garment_id).await
}

pub async fn remove_outfit(db: &DatabaseConnection, garment_id: Uuid, outfit_id: Uuid) -> Result<(), ServiceError> {
    unlink(db, outfit_id, garment_id).await
}
