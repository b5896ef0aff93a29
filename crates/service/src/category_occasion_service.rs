//! Which occasions a category suits, managed from either side.
use uuid::Uuid;
use sea_orm::{DatabaseConnection, ModelTrait, QueryOrder};
use tracing::info;

use models::{category, category_occasion, occasion};
use crate::{errors::ServiceError, lookup};

async fn require_pair(db: &DatabaseConnection, category_id: Uuid, occasion_id: Uuid) -> Result<(category::Model, occasion::Model), ServiceError> {
    let c = lookup::require::<category::Entity, _>(db, category_id, "category").await?;
    let o = lookup::require::<occasion::Entity, _>(db, occasion_id, "occasion").await?;
    Ok((c, o))
}

async fn link(db: &DatabaseConnection, category_id: Uuid, occasion_id: Uuid) -> Result<(category::Model, occasion::Model), ServiceError> {
    let pair = require_pair(db, category_id, occasion_id).await?;
    if category_occasion::link(db, category_id, occasion_id).await? {
        info!(%category_id, %occasion_id, "category linked to occasion");
    }
    Ok(pair)
}

async fn require_linked(db: &DatabaseConnection, category_id: Uuid, occasion_id: Uuid) -> Result<(category::Model, occasion::Model), ServiceError> {
    let pair = require_pair(db, category_id, occasion_id).await?;
    if !category_occasion::is_linked(db, category_id, occasion_id).await? {
        return Err(ServiceError::illegal("occasion is not associated with this category"));
    }
    Ok(pair)
}

async fn unlink(db: &DatabaseConnection, category_id: Uuid, occasion_id: Uuid) -> Result<(), ServiceError> {
    require_pair(db, category_id, occasion_id).await?;
    category_occasion::unlink(db, category_id, occasion_id).await?;
    info!(%category_id, %occasion_id, "category unlinked from occasion");
    Ok(())
}

/// Link an occasion to a category. Linking an existing pair again changes nothing.
pub async fn add_occasion_to_category(db: &DatabaseConnection, category_id: Uuid, occasion_id: Uuid) -> Result<occasion::Model, ServiceError> {
    Ok(link(db, category_id, occasion_id).await?.1)
}

pub async fn list_category_occasions(db: &DatabaseConnection, category_id: Uuid) -> Result<Vec<occasion::Model>, ServiceError> {
    let c = lookup::require::<category::Entity, _>(db, category_id, "category").await?;
    Ok(c.find_related(occasion::Entity).order_by_asc(occasion::Column::Name).all(db).await?)
}

pub async fn get_category_occasion(db: &DatabaseConnection, category_id: Uuid, occasion_id: Uuid) -> Result<occasion::Model, ServiceError> {
    Ok(require_linked(db, category_id, occasion_id).await?.1)
}

pub async fn remove_occasion_from_category(db: &DatabaseConnection, category_id: Uuid, occasion_id: Uuid) -> Result<(), ServiceError> {
    unlink(db, category_id, occasion_id).await
}

pub async fn add_category_to_occasion(db: &DatabaseConnection, occasion_id: Uuid, category_id: Uuid) -> Result<category::Model, ServiceError> {
    Ok(link(db, category_id, occasion_id).await?.0)
}

pub async fn list_occasion_categories(db: &DatabaseConnection, occasion_id: Uuid) -> Result<Vec<category::Model>, ServiceError> {
    let o = lookup::require::<occasion::Entity, _>(db, occasion_id, "occasion").await?;
    Ok(o.find_related(category::Entity).order_by_asc(category::Column::Name).all(db).await?)
}

pub async fn get_occasion_category(db: &DatabaseConnection, occasion_id: Uuid, category_id: Uuid) -> Result<category::Model, ServiceError> {
    Ok(require_linked(db, category_id, occasion_id).await?.0)
}

pub async fn remove_category_from_occasion(db: &DatabaseConnection, occasion_id: Uuid, category_id: Uuid) -> Result<(), ServiceError> {
    unlink(db, category_id, occasion_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occasion_service::create_occasion;
    use crate::test_support::{get_db, seed_category};

    #[tokio::test]
    async fn link_both_directions() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let c = seed_category(&db, "Formal").await?;
        let o = create_occasion(&db, "Wedding").await?;

        assert!(matches!(get_category_occasion(&db, c.id, o.id).await, Err(ServiceError::IllegalOperation(_))));
        assert_eq!(add_occasion_to_category(&db, c.id, o.id).await?.id, o.id);
        // second add is a no-op
        assert_eq!(add_category_to_occasion(&db, o.id, c.id).await?.id, c.id);
        assert_eq!(list_category_occasions(&db, c.id).await?.len(), 1);
        assert_eq!(list_occasion_categories(&db, o.id).await?.len(), 1);
        assert_eq!(get_occasion_category(&db, o.id, c.id).await?.id, c.id);

        remove_occasion_from_category(&db, c.id, o.id).await?;
        remove_occasion_from_category(&db, c.id, o.id).await?;
        assert!(list_category_occasions(&db, c.id).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn missing_side_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let c = seed_category(&db, "Formal").await?;
        assert!(matches!(add_occasion_to_category(&db, c.id, Uuid::new_v4()).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(list_occasion_categories(&db, Uuid::new_v4()).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(remove_category_from_occasion(&db, Uuid::new_v4(), c.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
