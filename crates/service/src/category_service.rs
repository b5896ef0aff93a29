use uuid::Uuid;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait, QueryOrder, Set};
use serde::Serialize;
use tracing::{debug, info, warn};

use models::{category, garment, occasion, outfit};
use crate::{errors::ServiceError, lookup};

/// A category with the occasions it suits.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryDetail {
    #[serde(flatten)]
    pub category: category::Model,
    pub occasions: Vec<occasion::Model>,
}

async fn ensure_name_free(db: &DatabaseConnection, name: &str, except: Option<Uuid>) -> Result<(), ServiceError> {
    if lookup::name_taken::<category::Entity, _>(db, category::Column::Name, category::Column::Id, name, except).await? {
        return Err(ServiceError::illegal(format!("category {name} already exists")));
    }
    Ok(())
}

/// Create a category. Names are unique regardless of case.
pub async fn create_category(db: &DatabaseConnection, name: &str, recommended_age: Option<i32>) -> Result<category::Model, ServiceError> {
    let name = category::validate_name(name)?;
    category::validate_recommended_age(recommended_age)?;
    ensure_name_free(db, &name, None).await?;
    let am = category::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        recommended_age: Set(recommended_age),
        created_at: Set(Utc::now().into()),
    };
    let created = am.insert(db).await?;
    info!(id = %created.id, name = %created.name, "category created");
    Ok(created)
}

pub async fn list_categories(db: &DatabaseConnection) -> Result<Vec<category::Model>, ServiceError> {
    Ok(category::Entity::find().order_by_asc(category::Column::Name).all(db).await?)
}

pub async fn get_category(db: &DatabaseConnection, id: Uuid) -> Result<category::Model, ServiceError> {
    debug!(%id, "get category");
    lookup::require::<category::Entity, _>(db, id, "category").await
}

pub async fn get_category_detail(db: &DatabaseConnection, id: Uuid) -> Result<CategoryDetail, ServiceError> {
    let c = get_category(db, id).await?;
    let occasions = c.find_related(occasion::Entity).order_by_asc(occasion::Column::Name).all(db).await?;
    Ok(CategoryDetail { category: c, occasions })
}

pub async fn update_category(
    db: &DatabaseConnection,
    id: Uuid,
    name: &str,
    recommended_age: Option<i32>,
) -> Result<category::Model, ServiceError> {
    let found = get_category(db, id).await?;
    let name = category::validate_name(name)?;
    category::validate_recommended_age(recommended_age)?;
    ensure_name_free(db, &name, Some(id)).await?;
    let mut am: category::ActiveModel = found.into();
    am.name = Set(name);
    am.recommended_age = Set(recommended_age);
    let updated = am.update(db).await?;
    info!(id = %updated.id, "category updated");
    Ok(updated)
}

/// Delete a category nothing refers to. Garments, outfits and linked occasions all block deletion.
pub async fn delete_category(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let c = get_category(db, id).await?;
    let garments = c.find_related(garment::Entity).count(db).await?;
    let outfits = c.find_related(outfit::Entity).count(db).await?;
    let occasions = c.find_related(occasion::Entity).count(db).await?;
    if garments > 0 || outfits > 0 || occasions > 0 {
        warn!(%id, garments, outfits, occasions, "category still in use");
        return Err(ServiceError::illegal(format!(
            "category is referenced by {garments} garment(s), {outfits} outfit(s) and {occasions} occasion(s)"
        )));
    }
    category::Entity::delete_by_id(id).exec(db).await?;
    info!(%id, "category deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category_occasion_service::add_occasion_to_category;
    use crate::occasion_service::create_occasion;
    use crate::test_support::{get_db, seed_garment};

    #[tokio::test]
    async fn category_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let c = create_category(&db, "Formal", Some(18)).await?;
        assert_eq!(c.recommended_age, Some(18));

        let u = update_category(&db, c.id, "Formal wear", None).await?;
        assert_eq!(u.name, "Formal wear");
        assert_eq!(u.recommended_age, None);

        assert_eq!(list_categories(&db).await?.len(), 1);
        delete_category(&db, c.id).await?;
        assert!(matches!(get_category(&db, c.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn names_are_case_insensitive_unique() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let c = create_category(&db, "Casual", None).await?;
        assert!(matches!(create_category(&db, "CASUAL", None).await, Err(ServiceError::IllegalOperation(_))));

        let other = create_category(&db, "Sport", None).await?;
        assert!(matches!(update_category(&db, other.id, "casual", None).await, Err(ServiceError::IllegalOperation(_))));
        // renaming to itself with a different case is allowed
        update_category(&db, c.id, "casual", None).await?;
        assert!(matches!(create_category(&db, "Kids", Some(200)).await, Err(ServiceError::Model(_))));
        Ok(())
    }

    #[tokio::test]
    async fn delete_blocked_while_referenced() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let g = seed_garment(&db, "Tee").await?;
        let used = g.category_id;
        assert!(matches!(delete_category(&db, used).await, Err(ServiceError::IllegalOperation(_))));

        let c = create_category(&db, "Evening", None).await?;
        let o = create_occasion(&db, "Gala").await?;
        add_occasion_to_category(&db, c.id, o.id).await?;
        assert!(matches!(delete_category(&db, c.id).await, Err(ServiceError::IllegalOperation(_))));

        let detail = get_category_detail(&db, c.id).await?;
        assert_eq!(detail.occasions.len(), 1);
        Ok(())
    }
}
