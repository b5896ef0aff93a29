use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::{brand, store};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "brand_store")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub brand_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub store_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Brand,
    Store,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Brand => Entity::belongs_to(brand::Entity)
                .from(Column::BrandId)
                .to(brand::Column::Id)
                .into(),
            Relation::Store => Entity::belongs_to(store::Entity)
                .from(Column::StoreId)
                .to(store::Column::Id)
                .into(),
        }
    }
}

impl Related<brand::Entity> for Entity {
    fn to() -> RelationDef { Relation::Brand.def() }
}

impl Related<store::Entity> for Entity {
    fn to() -> RelationDef { Relation::Store.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn is_linked<C: ConnectionTrait>(db: &C, brand_id: Uuid, store_id: Uuid) -> Result<bool, ModelError> {
    Ok(Entity::find_by_id((brand_id, store_id)).one(db).await?.is_some())
}

/// Insert the pair unless it already exists. Returns whether a row was written.
pub async fn link<C: ConnectionTrait>(db: &C, brand_id: Uuid, store_id: Uuid) -> Result<bool, ModelError> {
    if is_linked(db, brand_id, store_id).await? {
        return Ok(false);
    }
    let am = ActiveModel { brand_id: Set(brand_id), store_id: Set(store_id) };
    Entity::insert(am).exec_without_returning(db).await?;
    Ok(true)
}

/// Remove the pair; a missing pair is not an error.
pub async fn unlink<C: ConnectionTrait>(db: &C, brand_id: Uuid, store_id: Uuid) -> Result<(), ModelError> {
    Entity::delete_by_id((brand_id, store_id)).exec(db).await?;
    Ok(())
}
