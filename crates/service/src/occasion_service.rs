use uuid::Uuid;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait, QueryOrder, Set};
use serde::Serialize;
use tracing::{debug, info, warn};

use models::{category, occasion};
use crate::{errors::ServiceError, lookup};

/// An occasion with the categories that suit it.
#[derive(Debug, Clone, Serialize)]
pub struct OccasionDetail {
    #[serde(flatten)]
    pub occasion: occasion::Model,
    pub categories: Vec<category::Model>,
}

async fn ensure_name_free(db: &DatabaseConnection, name: &str, except: Option<Uuid>) -> Result<(), ServiceError> {
    if lookup::name_taken::<occasion::Entity, _>(db, occasion::Column::Name, occasion::Column::Id, name, except).await? {
        return Err(ServiceError::illegal(format!("occasion {name} already exists")));
    }
    Ok(())
}

pub async fn create_occasion(db: &DatabaseConnection, name: &str) -> Result<occasion::Model, ServiceError> {
    let name = occasion::validate_name(name)?;
    ensure_name_free(db, &name, None).await?;
    let am = occasion::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        created_at: Set(Utc::now().into()),
    };
    let created = am.insert(db).await?;
    info!(id = %created.id, name = %created.name, "occasion created");
    Ok(created)
}

pub async fn list_occasions(db: &DatabaseConnection) -> Result<Vec<occasion::Model>, ServiceError> {
    Ok(occasion::Entity::find().order_by_asc(occasion::Column::Name).all(db).await?)
}

pub async fn get_occasion(db: &DatabaseConnection, id: Uuid) -> Result<occasion::Model, ServiceError> {
    debug!(%id, "get occasion");
    lookup::require::<occasion::Entity, _>(db, id, "occasion").await
}

pub async fn get_occasion_detail(db: &DatabaseConnection, id: Uuid) -> Result<OccasionDetail, ServiceError> {
    let o = get_occasion(db, id).await?;
    let categories = o.find_related(category::Entity).order_by_asc(category::Column::Name).all(db).await?;
    Ok(OccasionDetail { occasion: o, categories })
}

pub async fn update_occasion(db: &DatabaseConnection, id: Uuid, name: &str) -> Result<occasion::Model, ServiceError> {
    let found = get_occasion(db, id).await?;
    let name = occasion::validate_name(name)?;
    ensure_name_free(db, &name, Some(id)).await?;
    let mut am: occasion::ActiveModel = found.into();
    am.name = Set(name);
    let updated = am.update(db).await?;
    info!(id = %updated.id, "occasion updated");
    Ok(updated)
}

/// Delete an occasion that no category is linked to.
pub async fn delete_occasion(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let o = get_occasion(db, id).await?;
    let linked = o.find_related(category::Entity).count(db).await?;
    if linked > 0 {
        warn!(%id, linked, "occasion still linked to categories");
        return Err(ServiceError::illegal(format!("occasion is linked to {linked} category(ies)")));
    }
    occasion::Entity::delete_by_id(id).exec(db).await?;
    info!(%id, "occasion deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category_occasion_service::{add_category_to_occasion, remove_category_from_occasion};
    use crate::test_support::{get_db, seed_category};

    #[tokio::test]
    async fn occasion_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let o = create_occasion(&db, "Wedding").await?;
        assert!(matches!(create_occasion(&db, "wedding").await, Err(ServiceError::IllegalOperation(_))));
        assert!(matches!(create_occasion(&db, "").await, Err(ServiceError::Model(_))));

        let u = update_occasion(&db, o.id, "Beach wedding").await?;
        assert_eq!(u.name, "Beach wedding");
        assert_eq!(list_occasions(&db).await?.len(), 1);

        delete_occasion(&db, o.id).await?;
        assert!(matches!(delete_occasion(&db, o.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn linked_occasion_cannot_be_deleted() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let c = seed_category(&db, "Formal").await?;
        let o = create_occasion(&db, "Gala").await?;
        add_category_to_occasion(&db, o.id, c.id).await?;

        assert_eq!(get_occasion_detail(&db, o.id).await?.categories.len(), 1);
        assert!(matches!(delete_occasion(&db, o.id).await, Err(ServiceError::IllegalOperation(_))));

        remove_category_from_occasion(&db, o.id, c.id).await?;
        delete_occasion(&db, o.id).await?;
        Ok(())
    }
}
