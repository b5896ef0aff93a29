//! Saving outfits into wishlists, from either side of the link.
use uuid::Uuid;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder, TransactionTrait};
use tracing::info;

use models::{outfit, wishlist, wishlist_outfit};
use crate::{errors::ServiceError, lookup};

async fn require_pair(db: &DatabaseConnection, wishlist_id: Uuid, outfit_id: Uuid) -> Result<(wishlist::Model, outfit::Model), ServiceError> {
    let w = lookup::require::<wishlist::Entity, _>(db, wishlist_id, "wishlist").await?;
    let o = lookup::require::<outfit::Entity, _>(db, outfit_id, "outfit").await?;
    Ok((w, o))
}

async fn link_new(db: &DatabaseConnection, wishlist_id: Uuid, outfit_id: Uuid) -> Result<(wishlist::Model, outfit::Model), ServiceError> {
    let pair = require_pair(db, wishlist_id, outfit_id).await?;
    if !wishlist_outfit::link(db, wishlist_id, outfit_id).await? {
        return Err(ServiceError::illegal("outfit is already in this wishlist"));
    }
    info!(%wishlist_id, %outfit_id, "outfit added to wishlist");
    Ok(pair)
}

async fn require_linked(db: &DatabaseConnection, wishlist_id: Uuid, outfit_id: Uuid) -> Result<(wishlist::Model, outfit::Model), ServiceError> {
    let pair = require_pair(db, wishlist_id, outfit_id).await?;
    if !wishlist_outfit::is_linked(db, wishlist_id, outfit_id).await? {
        return Err(ServiceError::illegal("outfit is not associated with this wishlist"));
    }
    Ok(pair)
}

async fn unlink(db: &DatabaseConnection, wishlist_id: Uuid, outfit_id: Uuid) -> Result<(), ServiceError> {
    require_pair(db, wishlist_id, outfit_id).await?;
    wishlist_outfit::unlink(db, wishlist_id, outfit_id).await?;
    info!(%wishlist_id, %outfit_id, "outfit removed from wishlist");
    Ok(())
}

/// Save an outfit in a wishlist. Saving it twice is an illegal operation.
pub async fn add_outfit(db: &DatabaseConnection, wishlist_id: Uuid, outfit_id: Uuid) -> Result<outfit::Model, ServiceError> {
    Ok(link_new(db, wishlist_id, outfit_id).await?.1)
}

pub async fn list_outfits(db: &DatabaseConnection, wishlist_id: Uuid) -> Result<Vec<outfit::Model>, ServiceError> {
    let w = lookup::require::<wishlist::Entity, _>(db, wishlist_id, "wishlist").await?;
    Ok(w.find_related(outfit::Entity).order_by_asc(outfit::Column::Name).all(db).await?)
}

pub async fn get_outfit(db: &DatabaseConnection, wishlist_id: Uuid, outfit_id: Uuid) -> Result<outfit::Model, ServiceError> {
    Ok(require_linked(db, wishlist_id, outfit_id).await?.1)
}

/// Make `outfit_ids` the exact content of the wishlist. All ids are checked before anything is written.
pub async fn replace_outfits(db: &DatabaseConnection, wishlist_id: Uuid, outfit_ids: &[Uuid]) -> Result<Vec<outfit::Model>, ServiceError> {
    let txn = db.begin().await?;
    lookup::require::<wishlist::Entity, _>(&txn, wishlist_id, "wishlist").await?;
    let ids = lookup::require_all::<outfit::Entity, _>(&txn, outfit_ids, "outfit").await?;
    wishlist_outfit::Entity::delete_many()
        .filter(wishlist_outfit::Column::WishlistId.eq(wishlist_id))
        .exec(&txn)
        .await?;
    for outfit_id in &ids {
        wishlist_outfit::link(&txn, wishlist_id, *outfit_id).await?;
    }
    txn.commit().await?;
    info!(%wishlist_id, count = ids.len(), "wishlist outfits replaced");
    list_outfits(db, wishlist_id).await
}

/// Unsave an outfit. Unsaving an outfit that is not there is a no-op.
pub async fn remove_outfit(db: &DatabaseConnection, wishlist_id: Uuid, outfit_id: Uuid) -> Result<(), ServiceError> {
    unlink(db, wishlist_id, outfit_id).await
}

pub async fn add_wishlist(db: &DatabaseConnection, outfit_id: Uuid, wishlist_id: Uuid) -> Result<wishlist::Model, ServiceError> {
    Ok(link_new(db, wishlist_id, outfit_id).await?.0)
}

/// Wishlists that contain the outfit.
pub async fn list_wishlists(db: &DatabaseConnection, outfit_id: Uuid) -> Result<Vec<wishlist::Model>, ServiceError> {
    let o = lookup::require::<outfit::Entity, _>(db, outfit_id, "outfit").await?;
    Ok(o.find_related(wishlist::Entity).order_by_asc(wishlist::Column::CreatedAt).all(db).await?)
}

pub async fn get_wishlist(db: &DatabaseConnection, outfit_id: Uuid, wishlist_id: Uuid) -> Result<wishlist::Model, ServiceError> {
    Ok(require_linked(db, wishlist_id, outfit_id).await?.0)
}

pub async fn replace_wishlists(db: &DatabaseConnection, outfit_id: Uuid, wishlist_ids: &[Uuid]) -> Result<Vec<wishlist::Model>, ServiceError> {
    let txn = db.begin().await?;
    lookup::require::<outfit::Entity, _>(&txn, outfit_id, "outfit").await?;
    let ids = lookup::require_all::<wishlist::Entity, _>(&txn, wishlist_ids, "wishlist").await?;
    wishlist_outfit::Entity::delete_many()
        .filter(wishlist_outfit::Column::OutfitId.eq(outfit_id))
        .exec(&txn)
        .await?;
    for wishlist_id in &ids {
        wishlist_outfit::link(&txn, *wishlist_id, outfit_id).await?;
    }
    txn.commit().await?;
    info!(%outfit_id, count = ids.len(), "outfit wishlists replaced");
    list_wishlists(db, outfit_id).await
}

pub async fn remove_wishlist(db: &DatabaseConnection, outfit_id: Uuid, wishlist_id: Uuid) -> Result<(), ServiceError> {
    unlink(db, wishlist_id, outfit_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_outfit, seed_user};
    use crate::wishlist_service::create_wishlist;

    #[tokio::test]
    async fn add_get_remove() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let ana = seed_user(&db, "ana").await?;
        let w = create_wishlist(&db, ana.id, None).await?;
        let o = seed_outfit(&db, "Brunch").await?;

        assert!(matches!(get_outfit(&db, w.id, o.id).await, Err(ServiceError::IllegalOperation(_))));
        assert_eq!(add_outfit(&db, w.id, o.id).await?.id, o.id);
        assert!(matches!(add_outfit(&db, w.id, o.id).await, Err(ServiceError::IllegalOperation(_))));
        assert_eq!(get_outfit(&db, w.id, o.id).await?.id, o.id);
        assert_eq!(get_wishlist(&db, o.id, w.id).await?.id, w.id);
        assert_eq!(list_wishlists(&db, o.id).await?.len(), 1);

        remove_outfit(&db, w.id, o.id).await?;
        remove_outfit(&db, w.id, o.id).await?;
        assert!(list_outfits(&db, w.id).await?.is_empty());

        assert!(matches!(add_outfit(&db, w.id, Uuid::new_v4()).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(remove_outfit(&db, Uuid::new_v4(), o.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn replace_is_all_or_nothing() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let ana = seed_user(&db, "ana").await?;
        let w = create_wishlist(&db, ana.id, None).await?;
        let a = seed_outfit(&db, "A").await?;
        let b = seed_outfit(&db, "B").await?;
        add_outfit(&db, w.id, a.id).await?;

        let missing = replace_outfits(&db, w.id, &[b.id, Uuid::new_v4()]).await;
        assert!(matches!(missing, Err(ServiceError::NotFound(_))));
        let kept = list_outfits(&db, w.id).await?;
        assert_eq!(kept.iter().map(|o| o.id).collect::<Vec<_>>(), vec![a.id]);

        let replaced = replace_outfits(&db, w.id, &[b.id, b.id]).await?;
        assert_eq!(replaced.iter().map(|o| o.id).collect::<Vec<_>>(), vec![b.id]);

        assert!(replace_outfits(&db, w.id, &[]).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn replace_from_outfit_side() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let ana = seed_user(&db, "ana").await?;
        let bob = seed_user(&db, "bob").await?;
        let wa = create_wishlist(&db, ana.id, None).await?;
        let wb = create_wishlist(&db, bob.id, None).await?;
        let o = seed_outfit(&db, "Party").await?;

        add_wishlist(&db, o.id, wa.id).await?;
        let now = replace_wishlists(&db, o.id, &[wb.id]).await?;
        assert_eq!(now.len(), 1);
        assert_eq!(now[0].id, wb.id);
        assert!(list_outfits(&db, wa.id).await?.is_empty());

        remove_wishlist(&db, o.id, wb.id).await?;
        assert!(list_wishlists(&db, o.id).await?.is_empty());
        Ok(())
    }
}
