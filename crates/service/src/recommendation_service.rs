use uuid::Uuid;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::{debug, info, warn};

use models::{outfit, recommendation, user};
use crate::{errors::ServiceError, lookup};

async fn ensure_unique_pair(db: &DatabaseConnection, user_id: Uuid, outfit_id: Uuid, except: Option<Uuid>) -> Result<(), ServiceError> {
    let mut q = recommendation::Entity::find()
        .filter(recommendation::Column::UserId.eq(user_id))
        .filter(recommendation::Column::OutfitId.eq(outfit_id));
    if let Some(id) = except {
        q = q.filter(recommendation::Column::Id.ne(id));
    }
    if q.one(db).await?.is_some() {
        return Err(ServiceError::illegal("user has already recommended this outfit"));
    }
    Ok(())
}

/// Recommend an outfit. A user recommends a given outfit once.
pub async fn create_recommendation(
    db: &DatabaseConnection,
    user_id: Uuid,
    outfit_id: Uuid,
    text: &str,
    rating: i32,
) -> Result<recommendation::Model, ServiceError> {
    let text = recommendation::validate_text(text)?;
    recommendation::validate_rating(rating)?;
    lookup::require::<user::Entity, _>(db, user_id, "user").await?;
    lookup::require::<outfit::Entity, _>(db, outfit_id, "outfit").await?;
    ensure_unique_pair(db, user_id, outfit_id, None).await?;
    let am = recommendation::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        outfit_id: Set(outfit_id),
        text: Set(text),
        rating: Set(rating),
        created_at: Set(Utc::now().into()),
    };
    let created = am.insert(db).await?;
    info!(id = %created.id, %user_id, %outfit_id, "recommendation created");
    Ok(created)
}

pub async fn list_recommendations(db: &DatabaseConnection) -> Result<Vec<recommendation::Model>, ServiceError> {
    Ok(recommendation::Entity::find().order_by_asc(recommendation::Column::CreatedAt).all(db).await?)
}

pub async fn get_recommendation(db: &DatabaseConnection, id: Uuid) -> Result<recommendation::Model, ServiceError> {
    debug!(%id, "get recommendation");
    lookup::require::<recommendation::Entity, _>(db, id, "recommendation").await
}

/// Update text and rating, and optionally move the recommendation to another outfit. The author is fixed.
pub async fn update_recommendation(
    db: &DatabaseConnection,
    id: Uuid,
    text: &str,
    rating: i32,
    outfit_id: Option<Uuid>,
) -> Result<recommendation::Model, ServiceError> {
    let found = get_recommendation(db, id).await?;
    let text = recommendation::validate_text(text)?;
    recommendation::validate_rating(rating)?;
    let outfit_id = outfit_id.unwrap_or(found.outfit_id);
    if outfit_id != found.outfit_id {
        lookup::require::<outfit::Entity, _>(db, outfit_id, "outfit").await?;
        ensure_unique_pair(db, found.user_id, outfit_id, Some(id)).await?;
    }
    let mut am: recommendation::ActiveModel = found.into();
    am.text = Set(text);
    am.rating = Set(rating);
    am.outfit_id = Set(outfit_id);
    let updated = am.update(db).await?;
    info!(id = %updated.id, "recommendation updated");
    Ok(updated)
}

/// Only the author may delete a recommendation.
pub async fn delete_recommendation(db: &DatabaseConnection, id: Uuid, requester_id: Uuid) -> Result<(), ServiceError> {
    lookup::require::<user::Entity, _>(db, requester_id, "user").await?;
    let found = get_recommendation(db, id).await?;
    if found.user_id != requester_id {
        warn!(%id, %requester_id, "delete attempted by non-author");
        return Err(ServiceError::illegal("only the author can delete a recommendation"));
    }
    recommendation::Entity::delete_by_id(id).exec(db).await?;
    info!(%id, "recommendation deleted");
    Ok(())
}
