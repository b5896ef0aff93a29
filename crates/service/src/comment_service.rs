use uuid::Uuid;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::{debug, info, warn};

use models::{comment, garment, outfit, user};
use crate::{errors::ServiceError, lookup};

/// Post a comment as `user_id`, optionally about an outfit and/or a garment.
pub async fn create_comment(
    db: &DatabaseConnection,
    user_id: Uuid,
    text: &str,
    rating: f64,
    outfit_id: Option<Uuid>,
    garment_id: Option<Uuid>,
) -> Result<comment::Model, ServiceError> {
    lookup::require::<user::Entity, _>(db, user_id, "user").await?;
    let text = comment::validate_text(text)?;
    comment::validate_rating(rating)?;
    if let Some(id) = outfit_id {
        lookup::require::<outfit::Entity, _>(db, id, "outfit").await?;
    }
    if let Some(id) = garment_id {
        lookup::require::<garment::Entity, _>(db, id, "garment").await?;
    }
    let am = comment::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        text: Set(text),
        rating: Set(rating),
        outfit_id: Set(outfit_id),
        garment_id: Set(garment_id),
        created_at: Set(Utc::now().into()),
    };
    let created = am.insert(db).await?;
    info!(id = %created.id, user_id = %user_id, "comment created");
    Ok(created)
}

pub async fn list_comments(db: &DatabaseConnection) -> Result<Vec<comment::Model>, ServiceError> {
    Ok(comment::Entity::find().order_by_asc(comment::Column::CreatedAt).all(db).await?)
}

/// Comments written by one user.
pub async fn list_user_comments(db: &DatabaseConnection, user_id: Uuid) -> Result<Vec<comment::Model>, ServiceError> {
    lookup::require::<user::Entity, _>(db, user_id, "user").await?;
    Ok(comment::Entity::find()
        .filter(comment::Column::UserId.eq(user_id))
        .order_by_asc(comment::Column::CreatedAt)
        .all(db)
        .await?)
}

pub async fn get_comment(db: &DatabaseConnection, id: Uuid) -> Result<comment::Model, ServiceError> {
    debug!(%id, "get comment");
    lookup::require::<comment::Entity, _>(db, id, "comment").await
}

/// A comment reached through its author. Someone else's comment is an illegal access.
pub async fn get_user_comment(db: &DatabaseConnection, user_id: Uuid, comment_id: Uuid) -> Result<comment::Model, ServiceError> {
    lookup::require::<user::Entity, _>(db, user_id, "user").await?;
    let c = get_comment(db, comment_id).await?;
    if c.user_id != user_id {
        warn!(%user_id, %comment_id, "comment belongs to another user");
        return Err(ServiceError::illegal("comment is not associated with this user"));
    }
    Ok(c)
}

/// Replace text and rating. Author and subjects never change.
pub async fn update_comment(db: &DatabaseConnection, id: Uuid, text: &str, rating: f64) -> Result<comment::Model, ServiceError> {
    let found = get_comment(db, id).await?;
    apply_update(db, found, text, rating).await
}

pub async fn update_user_comment(
    db: &DatabaseConnection,
    user_id: Uuid,
    comment_id: Uuid,
    text: &str,
    rating: f64,
) -> Result<comment::Model, ServiceError> {
    let found = get_user_comment(db, user_id, comment_id).await?;
    apply_update(db, found, text, rating).await
}

async fn apply_update(db: &DatabaseConnection, found: comment::Model, text: &str, rating: f64) -> Result<comment::Model, ServiceError> {
    let text = comment::validate_text(text)?;
    comment::validate_rating(rating)?;
    let mut am: comment::ActiveModel = found.into();
    am.text = Set(text);
    am.rating = Set(rating);
    let updated = am.update(db).await?;
    info!(id = %updated.id, "comment updated");
    Ok(updated)
}

pub async fn delete_comment(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    get_comment(db, id).await?;
    comment::Entity::delete_by_id(id).exec(db).await?;
    info!(%id, "comment deleted");
    Ok(())
}

pub async fn delete_user_comment(db: &DatabaseConnection, user_id: Uuid, comment_id: Uuid) -> Result<(), ServiceError> {
    get_user_comment(db, user_id, comment_id).await?;
    comment::Entity::delete_by_id(comment_id).exec(db).await?;
    info!(id = %comment_id, %user_id, "comment deleted");
    Ok(())
}
