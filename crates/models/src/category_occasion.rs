use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::{category, occasion};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category_occasion")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub category_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub occasion_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Category,
    Occasion,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Category => Entity::belongs_to(category::Entity)
                .from(Column::CategoryId)
                .to(category::Column::Id)
                .into(),
            Relation::Occasion => Entity::belongs_to(occasion::Entity)
                .from(Column::OccasionId)
                .to(occasion::Column::Id)
                .into(),
        }
    }
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef { Relation::Category.def() }
}

impl Related<occasion::Entity> for Entity {
    fn to() -> RelationDef { Relation::Occasion.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn is_linked<C: ConnectionTrait>(db: &C, category_id: Uuid, occasion_id: Uuid) -> Result<bool, ModelError> {
    Ok(Entity::find_by_id((category_id, occasion_id)).one(db).await?.is_some())
}

/// Insert the pair unless it already exists. Returns whether a row was written.
pub async fn link<C: ConnectionTrait>(db: &C, category_id: Uuid, occasion_id: Uuid) -> Result<bool, ModelError> {
    if is_linked(db, category_id, occasion_id).await? {
        return Ok(false);
    }
    let am = ActiveModel { category_id: Set(category_id), occasion_id: Set(occasion_id) };
    Entity::insert(am).exec_without_returning(db).await?;
    Ok(true)
}

/// Remove the pair; a missing pair is not an error.
pub async fn unlink<C: ConnectionTrait>(db: &C, category_id: Uuid, occasion_id: Uuid) -> Result<(), ModelError> {
    Entity::delete_by_id((category_id, occasion_id)).exec(db).await?;
    Ok(())
}
