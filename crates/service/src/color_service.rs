use uuid::Uuid;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait, QueryOrder, Set};
use tracing::{debug, info, warn};

use models::{color, garment};
use crate::{errors::ServiceError, lookup};

async fn ensure_name_free(db: &DatabaseConnection, name: &str, except: Option<Uuid>) -> Result<(), ServiceError> {
    if lookup::name_taken::<color::Entity, _>(db, color::Column::Name, color::Column::Id, name, except).await? {
        return Err(ServiceError::illegal(format!("color {name} already exists")));
    }
    Ok(())
}

/// Register a named color with its `#RRGGBB` code.
pub async fn create_color(db: &DatabaseConnection, name: &str, hex_code: &str) -> Result<color::Model, ServiceError> {
    let name = color::validate_name(name)?;
    let hex_code = color::validate_hex_code(hex_code)?;
    ensure_name_free(db, &name, None).await?;
    let am = color::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        hex_code: Set(hex_code),
        created_at: Set(Utc::now().into()),
    };
    let created = am.insert(db).await?;
    info!(id = %created.id, hex = %created.hex_code, "color created");
    Ok(created)
}

pub async fn list_colors(db: &DatabaseConnection) -> Result<Vec<color::Model>, ServiceError> {
    Ok(color::Entity::find().order_by_asc(color::Column::Name).all(db).await?)
}

pub async fn get_color(db: &DatabaseConnection, id: Uuid) -> Result<color::Model, ServiceError> {
    debug!(%id, "get color");
    lookup::require::<color::Entity, _>(db, id, "color").await
}

pub async fn update_color(db: &DatabaseConnection, id: Uuid, name: &str, hex_code: &str) -> Result<color::Model, ServiceError> {
    let found = get_color(db, id).await?;
    let name = color::validate_name(name)?;
    let hex_code = color::validate_hex_code(hex_code)?;
    ensure_name_free(db, &name, Some(id)).await?;
    let mut am: color::ActiveModel = found.into();
    am.name = Set(name);
    am.hex_code = Set(hex_code);
    let updated = am.update(db).await?;
    info!(id = %updated.id, "color updated");
    Ok(updated)
}

pub async fn delete_color(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let c = get_color(db, id).await?;
    let used = c.find_related(garment::Entity).count(db).await?;
    if used > 0 {
        warn!(%id, used, "color still used by garments");
        return Err(ServiceError::illegal(format!("color is used by {used} garment(s)")));
    }
    color::Entity::delete_by_id(id).exec(db).await?;
    info!(%id, "color deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::garment_service::{self, GarmentInput};
    use crate::test_support::{get_db, seed_garment};

    #[tokio::test]
    async fn color_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let red = create_color(&db, "Red", "#FF0000").await?;
        assert!(matches!(create_color(&db, "red", "#EE0000").await, Err(ServiceError::IllegalOperation(_))));
        assert!(matches!(create_color(&db, "Blue", "0000FF").await, Err(ServiceError::Model(_))));

        let u = update_color(&db, red.id, "Crimson", "#dc143c").await?;
        assert_eq!(u.hex_code, "#dc143c");
        assert_eq!(list_colors(&db).await?.len(), 1);

        delete_color(&db, red.id).await?;
        assert!(matches!(get_color(&db, red.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn used_color_cannot_be_deleted() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let black = create_color(&db, "Black", "#000000").await?;
        let g = seed_garment(&db, "Jeans").await?;
        garment_service::update_garment(&db, g.id, GarmentInput {
            name: g.name.clone(),
            garment_type: g.garment_type.clone(),
            size: g.size.clone(),
            price: g.price,
            promo_price: g.promo_price,
            brand_id: g.brand_id,
            category_id: g.category_id,
            color_id: Some(black.id),
        })
        .await?;
        assert!(matches!(delete_color(&db, black.id).await, Err(ServiceError::IllegalOperation(_))));
        Ok(())
    }
}
