use uuid::Uuid;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use models::{brand, brand_store, garment, store};
use crate::{errors::ServiceError, lookup};

/// Fields accepted on create and update. A brand is always sold in at least one store.
#[derive(Debug, Clone)]
pub struct BrandInput {
    pub name: String,
    pub official_site: Option<String>,
    pub logo_url: Option<String>,
    pub store_ids: Vec<Uuid>,
}

/// A brand with the stores that sell it.
#[derive(Debug, Clone, Serialize)]
pub struct BrandDetail {
    #[serde(flatten)]
    pub brand: brand::Model,
    pub stores: Vec<store::Model>,
}

struct BrandFields {
    name: String,
    official_site: Option<String>,
    logo_url: Option<String>,
}

fn validate(input: &BrandInput) -> Result<BrandFields, ServiceError> {
    let name = brand::validate_name(&input.name)?;
    let official_site = brand::validate_link("official_site", input.official_site.as_deref())?;
    let logo_url = brand::validate_link("logo_url", input.logo_url.as_deref())?;
    if input.store_ids.is_empty() {
        return Err(ServiceError::illegal("a brand must be sold in at least one store"));
    }
    Ok(BrandFields { name, official_site, logo_url })
}

async fn ensure_name_free(db: &DatabaseConnection, name: &str, except: Option<Uuid>) -> Result<(), ServiceError> {
    if lookup::name_taken::<brand::Entity, _>(db, brand::Column::Name, brand::Column::Id, name, except).await? {
        return Err(ServiceError::illegal(format!("brand {name} already exists")));
    }
    Ok(())
}

/// Create a brand and its store links in one transaction.
pub async fn create_brand(db: &DatabaseConnection, input: BrandInput) -> Result<brand::Model, ServiceError> {
    let fields = validate(&input)?;
    ensure_name_free(db, &fields.name, None).await?;
    let txn = db.begin().await?;
    let store_ids = lookup::require_all::<store::Entity, _>(&txn, &input.store_ids, "store").await?;
    let am = brand::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(fields.name),
        official_site: Set(fields.official_site),
        logo_url: Set(fields.logo_url),
        created_at: Set(Utc::now().into()),
    };
    let created = am.insert(&txn).await?;
    for store_id in &store_ids {
        brand_store::link(&txn, created.id, *store_id).await?;
    }
    txn.commit().await?;
    info!(id = %created.id, name = %created.name, stores = store_ids.len(), "brand created");
    Ok(created)
}

pub async fn list_brands(db: &DatabaseConnection) -> Result<Vec<brand::Model>, ServiceError> {
    Ok(brand::Entity::find().order_by_asc(brand::Column::Name).all(db).await?)
}

pub async fn get_brand(db: &DatabaseConnection, id: Uuid) -> Result<brand::Model, ServiceError> {
    debug!(%id, "get brand");
    lookup::require::<brand::Entity, _>(db, id, "brand").await
}

pub async fn get_brand_detail(db: &DatabaseConnection, id: Uuid) -> Result<BrandDetail, ServiceError> {
    let b = get_brand(db, id).await?;
    let stores = b.find_related(store::Entity).order_by_asc(store::Column::Name).all(db).await?;
    Ok(BrandDetail { brand: b, stores })
}

/// Replace the brand's fields and its store links.
pub async fn update_brand(db: &DatabaseConnection, id: Uuid, input: BrandInput) -> Result<brand::Model, ServiceError> {
    let found = get_brand(db, id).await?;
    let fields = validate(&input)?;
    ensure_name_free(db, &fields.name, Some(id)).await?;

    let txn = db.begin().await?;
    let store_ids = lookup::require_all::<store::Entity, _>(&txn, &input.store_ids, "store").await?;
    brand_store::Entity::delete_many()
        .filter(brand_store::Column::BrandId.eq(id))
        .exec(&txn)
        .await?;
    for store_id in &store_ids {
        brand_store::link(&txn, id, *store_id).await?;
    }
    let mut am: brand::ActiveModel = found.into();
    am.name = Set(fields.name);
    am.official_site = Set(fields.official_site);
    am.logo_url = Set(fields.logo_url);
    let updated = am.update(&txn).await?;
    txn.commit().await?;
    info!(id = %updated.id, stores = store_ids.len(), "brand updated");
    Ok(updated)
}

/// Delete a brand no garment refers to. Its store links and images go with it.
pub async fn delete_brand(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let b = get_brand(db, id).await?;
    let garments = b.find_related(garment::Entity).count(db).await?;
    if garments > 0 {
        warn!(%id, garments, "brand still has garments");
        return Err(ServiceError::illegal(format!("brand is referenced by {garments} garment(s)")));
    }
    brand::Entity::delete_by_id(id).exec(db).await?;
    info!(%id, "brand deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_garment, seed_store};

    #[tokio::test]
    async fn brand_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let s1 = seed_store(&db, "Centro").await?;
        let s2 = seed_store(&db, "Norte").await?;

        let b = create_brand(&db, BrandInput {
            name: "Zara".into(),
            official_site: Some("https://zara.com".into()),
            logo_url: None,
            store_ids: vec![s1.id, s1.id],
        })
        .await?;
        assert_eq!(get_brand_detail(&db, b.id).await?.stores.len(), 1);

        let u = update_brand(&db, b.id, BrandInput {
            name: "Zara Home".into(),
            official_site: None,
            logo_url: Some("https://cdn.example.com/zara.png".into()),
            store_ids: vec![s1.id, s2.id],
        })
        .await?;
        assert_eq!(u.name, "Zara Home");
        assert_eq!(u.official_site, None);
        let detail = get_brand_detail(&db, b.id).await?;
        assert_eq!(detail.stores.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(), vec!["Centro", "Norte"]);

        delete_brand(&db, b.id).await?;
        assert!(list_brands(&db).await?.is_empty());
        assert_eq!(brand_store::Entity::find().count(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn store_ids_required_and_checked() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let empty = create_brand(&db, BrandInput { name: "X".into(), official_site: None, logo_url: None, store_ids: vec![] }).await;
        assert!(matches!(empty, Err(ServiceError::IllegalOperation(_))));

        let ghost = create_brand(&db, BrandInput {
            name: "X".into(),
            official_site: None,
            logo_url: None,
            store_ids: vec![Uuid::new_v4()],
        })
        .await;
        assert!(matches!(ghost, Err(ServiceError::NotFound(_))));
        assert!(list_brands(&db).await?.is_empty());

        let s = seed_store(&db, "Centro").await?;
        let bad_site = create_brand(&db, BrandInput {
            name: "X".into(),
            official_site: Some("ftp://x".into()),
            logo_url: None,
            store_ids: vec![s.id],
        })
        .await;
        assert!(matches!(bad_site, Err(ServiceError::Model(_))));
        Ok(())
    }

    #[tokio::test]
    async fn brand_with_garments_cannot_be_deleted() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let g = seed_garment(&db, "Coat").await?;
        assert!(matches!(delete_brand(&db, g.brand_id).await, Err(ServiceError::IllegalOperation(_))));
        Ok(())
    }
}
