use uuid::Uuid;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, info, warn};

use models::{brand, brand_store, store};
use crate::{errors::ServiceError, lookup};

/// Fields accepted on create and update. `brand_ids` replaces the brand links when present.
#[derive(Debug, Clone)]
pub struct StoreInput {
    pub name: String,
    pub address: String,
    pub opening_hours: Option<String>,
    pub location: String,
    pub brand_ids: Option<Vec<Uuid>>,
}

async fn ensure_name_free(db: &DatabaseConnection, name: &str, except: Option<Uuid>) -> Result<(), ServiceError> {
    if lookup::name_taken::<store::Entity, _>(db, store::Column::Name, store::Column::Id, name, except).await? {
        return Err(ServiceError::illegal(format!("store {name} already exists")));
    }
    Ok(())
}

/// Fails when dropping the `store_id` links of any brand outside `keep` would leave that brand without stores.
async fn ensure_brands_keep_a_store<C: ConnectionTrait>(db: &C, store_id: Uuid, keep: &[Uuid]) -> Result<(), ServiceError> {
    let links = brand_store::Entity::find()
        .filter(brand_store::Column::StoreId.eq(store_id))
        .all(db)
        .await?;
    for link in links.iter().filter(|l| !keep.contains(&l.brand_id)) {
        let others = brand_store::Entity::find()
            .filter(brand_store::Column::BrandId.eq(link.brand_id))
            .filter(brand_store::Column::StoreId.ne(store_id))
            .count(db)
            .await?;
        if others == 0 {
            warn!(%store_id, brand_id = %link.brand_id, "brand would be left without stores");
            return Err(ServiceError::illegal(format!(
                "brand {} would be left without stores",
                link.brand_id
            )));
        }
    }
    Ok(())
}

/// Create a store and link it to `brand_ids` in one transaction.
pub async fn create_store(db: &DatabaseConnection, input: StoreInput) -> Result<store::Model, ServiceError> {
    let fields = store::validate(&input.name, &input.address, input.opening_hours.as_deref(), &input.location)?;
    ensure_name_free(db, &fields.name, None).await?;
    let txn = db.begin().await?;
    let brand_ids = lookup::require_all::<brand::Entity, _>(&txn, input.brand_ids.as_deref().unwrap_or_default(), "brand").await?;
    let am = store::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(fields.name),
        address: Set(fields.address),
        opening_hours: Set(fields.opening_hours),
        location: Set(fields.location),
        created_at: Set(Utc::now().into()),
    };
    let created = am.insert(&txn).await?;
    for brand_id in &brand_ids {
        brand_store::link(&txn, *brand_id, created.id).await?;
    }
    txn.commit().await?;
    info!(id = %created.id, brands = brand_ids.len(), "store created");
    Ok(created)
}

pub async fn list_stores(db: &DatabaseConnection) -> Result<Vec<store::Model>, ServiceError> {
    Ok(store::Entity::find().order_by_asc(store::Column::Name).all(db).await?)
}

pub async fn get_store(db: &DatabaseConnection, id: Uuid) -> Result<store::Model, ServiceError> {
    debug!(%id, "get store");
    lookup::require::<store::Entity, _>(db, id, "store").await
}

/// Brands sold in the store.
pub async fn list_store_brands(db: &DatabaseConnection, id: Uuid) -> Result<Vec<brand::Model>, ServiceError> {
    let s = get_store(db, id).await?;
    Ok(s.find_related(brand::Entity).order_by_asc(brand::Column::Name).all(db).await?)
}

pub async fn update_store(db: &DatabaseConnection, id: Uuid, input: StoreInput) -> Result<store::Model, ServiceError> {
    let found = get_store(db, id).await?;
    let fields = store::validate(&input.name, &input.address, input.opening_hours.as_deref(), &input.location)?;
    ensure_name_free(db, &fields.name, Some(id)).await?;

    let txn = db.begin().await?;
    if let Some(ids) = input.brand_ids.as_deref() {
        let brand_ids = lookup::require_all::<brand::Entity, _>(&txn, ids, "brand").await?;
        ensure_brands_keep_a_store(&txn, id, &brand_ids).await?;
        brand_store::Entity::delete_many()
            .filter(brand_store::Column::StoreId.eq(id))
            .exec(&txn)
            .await?;
        for brand_id in &brand_ids {
            brand_store::link(&txn, *brand_id, id).await?;
        }
    }
    let mut am: store::ActiveModel = found.into();
    am.name = Set(fields.name);
    am.address = Set(fields.address);
    am.opening_hours = Set(fields.opening_hours);
    am.location = Set(fields.location);
    let updated = am.update(&txn).await?;
    txn.commit().await?;
    info!(id = %updated.id, "store updated");
    Ok(updated)
}

/// Delete a store unless some brand is sold only there.
pub async fn delete_store(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    get_store(db, id).await?;
    ensure_brands_keep_a_store(db, id, &[]).await?;
    store::Entity::delete_by_id(id).exec(db).await?;
    info!(%id, "store deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand_service::{create_brand, BrandInput};
    use crate::test_support::{get_db, seed_store};

    fn input(name: &str, brand_ids: Option<Vec<Uuid>>) -> StoreInput {
        StoreInput {
            name: name.into(),
            address: "Gran Vía 32".into(),
            opening_hours: Some("10-22".into()),
            location: "Madrid".into(),
            brand_ids,
        }
    }

    #[tokio::test]
    async fn store_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let s = create_store(&db, input("Centro", None)).await?;
        assert_eq!(s.opening_hours.as_deref(), Some("10-22"));
        assert!(matches!(create_store(&db, input("centro", None)).await, Err(ServiceError::IllegalOperation(_))));
        assert!(matches!(
            create_store(&db, StoreInput { location: " ".into(), ..input("Norte", None) }).await,
            Err(ServiceError::Model(_))
        ));

        let u = update_store(&db, s.id, input("Centro Sur", None)).await?;
        assert_eq!(u.name, "Centro Sur");
        assert_eq!(list_stores(&db).await?.len(), 1);

        delete_store(&db, s.id).await?;
        assert!(matches!(get_store(&db, s.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn unknown_brand_rejected_without_write() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let r = create_store(&db, input("Centro", Some(vec![Uuid::new_v4()]))).await;
        assert!(matches!(r, Err(ServiceError::NotFound(_))));
        assert!(list_stores(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn last_store_of_a_brand_is_protected() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let only = seed_store(&db, "Only").await?;
        let b = create_brand(&db, BrandInput {
            name: "Mango".into(),
            official_site: None,
            logo_url: None,
            store_ids: vec![only.id],
        })
        .await?;
        assert!(matches!(delete_store(&db, only.id).await, Err(ServiceError::IllegalOperation(_))));
        assert!(matches!(
            update_store(&db, only.id, input("Only", Some(vec![]))).await,
            Err(ServiceError::IllegalOperation(_))
        ));

        // a second store makes the first one removable
        create_store(&db, input("Second", Some(vec![b.id]))).await?;
        assert_eq!(list_store_brands(&db, only.id).await?.len(), 1);
        delete_store(&db, only.id).await?;
        Ok(())
    }
}
