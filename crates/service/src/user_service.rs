use uuid::Uuid;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};
use serde::Serialize;
use tracing::{debug, info};

use models::{comment, user, wishlist};
use crate::{errors::ServiceError, lookup, pagination::{self, Pagination}};

/// A user together with its wishlist and comments.
#[derive(Debug, Clone, Serialize)]
pub struct UserDetail {
    #[serde(flatten)]
    pub user: user::Model,
    pub wishlist: Option<wishlist::Model>,
    pub comments: Vec<comment::Model>,
}

async fn ensure_email_free(db: &DatabaseConnection, email: &str, except: Option<Uuid>) -> Result<(), ServiceError> {
    let mut q = user::Entity::find().filter(user::Column::Email.eq(email));
    if let Some(id) = except {
        q = q.filter(user::Column::Id.ne(id));
    }
    if q.one(db).await?.is_some() {
        return Err(ServiceError::illegal(format!("email {email} is already registered")));
    }
    Ok(())
}

/// Create a new user. Emails are stored lowercased and must be unused.
pub async fn create_user(db: &DatabaseConnection, name: &str, email: &str) -> Result<user::Model, ServiceError> {
    let name = user::validate_name(name)?;
    let email = user::validate_email(email)?;
    ensure_email_free(db, &email, None).await?;
    let now = Utc::now();
    let am = user::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        email: Set(email),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    let created = am.insert(db).await?;
    info!(id = %created.id, "user created");
    Ok(created)
}

/// List users ordered by creation, optionally paginated.
pub async fn list_users(db: &DatabaseConnection, page: Option<Pagination>) -> Result<Vec<user::Model>, ServiceError> {
    let finder = user::Entity::find().order_by_asc(user::Column::CreatedAt);
    pagination::fetch_page(db, finder, page).await
}

/// Get a user by id.
pub async fn get_user(db: &DatabaseConnection, id: Uuid) -> Result<user::Model, ServiceError> {
    debug!(%id, "get user");
    lookup::require::<user::Entity, _>(db, id, "user").await
}

/// Get a user with its wishlist and comments.
pub async fn get_user_detail(db: &DatabaseConnection, id: Uuid) -> Result<UserDetail, ServiceError> {
    let u = get_user(db, id).await?;
    let wishlist = u.find_related(wishlist::Entity).one(db).await?;
    let comments = u
        .find_related(comment::Entity)
        .order_by_asc(comment::Column::CreatedAt)
        .all(db)
        .await?;
    Ok(UserDetail { user: u, wishlist, comments })
}

/// Replace a user's name and email.
pub async fn update_user(db: &DatabaseConnection, id: Uuid, name: &str, email: &str) -> Result<user::Model, ServiceError> {
    let found = get_user(db, id).await?;
    let name = user::validate_name(name)?;
    let email = user::validate_email(email)?;
    ensure_email_free(db, &email, Some(id)).await?;
    let mut am: user::ActiveModel = found.into();
    am.name = Set(name);
    am.email = Set(email);
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await?;
    info!(id = %updated.id, "user updated");
    Ok(updated)
}

/// Delete a user; comments, recommendations and the wishlist go with it.
pub async fn delete_user(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    get_user(db, id).await?;
    user::Entity::delete_by_id(id).exec(db).await?;
    info!(%id, "user deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn user_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let u = create_user(&db, "Ana", "Ana@Example.com").await?;
        assert_eq!(u.email, "ana@example.com");

        let found = get_user(&db, u.id).await?;
        assert_eq!(found.id, u.id);

        let updated = update_user(&db, u.id, "Ana María", "ana.maria@example.com").await?;
        assert_eq!(updated.name, "Ana María");
        assert_eq!(updated.email, "ana.maria@example.com");

        delete_user(&db, u.id).await?;
        assert!(matches!(get_user(&db, u.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(delete_user(&db, u.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_rejected() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = create_user(&db, "A", "a@example.com").await?;
        let b = create_user(&db, "B", "b@example.com").await?;

        let dup = create_user(&db, "A2", "A@EXAMPLE.COM").await;
        assert!(matches!(dup, Err(ServiceError::IllegalOperation(_))));

        let steal = update_user(&db, b.id, "B", "a@example.com").await;
        assert!(matches!(steal, Err(ServiceError::IllegalOperation(_))));

        // keeping one's own email is fine
        update_user(&db, a.id, "A renamed", "a@example.com").await?;
        Ok(())
    }

    #[tokio::test]
    async fn invalid_input_is_a_model_error() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(matches!(create_user(&db, " ", "x@example.com").await, Err(ServiceError::Model(_))));
        assert!(matches!(create_user(&db, "X", "nope").await, Err(ServiceError::Model(_))));
        Ok(())
    }

    #[tokio::test]
    async fn list_users_paginates() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        for i in 0..3 {
            create_user(&db, &format!("User{i}"), &format!("user{i}@example.com")).await?;
        }
        assert_eq!(list_users(&db, None).await?.len(), 3);
        let page1 = list_users(&db, Some(Pagination { page: 1, per_page: 2 })).await?;
        assert_eq!(page1.len(), 2);
        let page2 = list_users(&db, Some(Pagination { page: 2, per_page: 2 })).await?;
        assert_eq!(page2.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn detail_includes_wishlist_and_comments() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let u = create_user(&db, "Ana", "ana@example.com").await?;
        let empty = get_user_detail(&db, u.id).await?;
        assert!(empty.wishlist.is_none());
        assert!(empty.comments.is_empty());

        crate::wishlist_service::create_wishlist(&db, u.id, None).await?;
        crate::comment_service::create_comment(&db, u.id, "nice", 4.0, None, None).await?;
        let detail = get_user_detail(&db, u.id).await?;
        assert!(detail.wishlist.is_some());
        assert_eq!(detail.comments.len(), 1);
        Ok(())
    }
}
