use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::{outfit, garment};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "outfit_garment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub outfit_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub garment_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Outfit,
    Garment,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Outfit => Entity::belongs_to(outfit::Entity)
                .from(Column::OutfitId)
                .to(outfit::Column::Id)
                .into(),
            Relation::Garment => Entity::belongs_to(garment::Entity)
                .from(Column::GarmentId)
                .to(garment::Column::Id)
                .into(),
        }
    }
}

impl Related<outfit::Entity> for Entity {
    fn to() -> RelationDef { Relation::Outfit.def() }
}

impl Related<garment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Garment.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn is_linked<C: ConnectionTrait>(db: &C, outfit_id: Uuid, garment_id: Uuid) -> Result<bool, ModelError> {
    Ok(Entity::find_by_id((outfit_id, garment_id)).one(db).await?.is_some())
}

/// Insert the pair unless it already exists. Returns whether a row was written.
pub async fn link<C: ConnectionTrait>(db: &C, outfit_id: Uuid, garment_id: Uuid) -> Result<bool, ModelError> {
    if is_linked(db, outfit_id, garment_id).await? {
        return Ok(false);
    }
    let am = ActiveModel { outfit_id: Set(outfit_id), garment_id: Set(garment_id) };
    Entity::insert(am).exec_without_returning(db).await?;
    Ok(true)
}

/// Remove the pair; a missing pair is not an error.
pub async fn unlink<C: ConnectionTrait>(db: &C, outfit_id: Uuid, garment_id: Uuid) -> Result<(), ModelError> {
    Entity::delete_by_id((outfit_id, garment_id)).exec(db).await?;
    Ok(())
}
