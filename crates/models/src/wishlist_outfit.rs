use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::{wishlist, outfit};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wishlist_outfit")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub wishlist_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub outfit_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Wishlist,
    Outfit,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Wishlist => Entity::belongs_to(wishlist::Entity)
                .from(Column::WishlistId)
                .to(wishlist::Column::Id)
                .into(),
            Relation::Outfit => Entity::belongs_to(outfit::Entity)
                .from(Column::OutfitId)
                .to(outfit::Column::Id)
                .into(),
        }
    }
}

impl Related<wishlist::Entity> for Entity {
    fn to() -> RelationDef { Relation::Wishlist.def() }
}

impl Related<outfit::Entity> for Entity {
    fn to() -> RelationDef { Relation::Outfit.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn is_linked<C: ConnectionTrait>(db: &C, wishlist_id: Uuid, outfit_id: Uuid) -> Result<bool, ModelError> {
    Ok(Entity::find_by_id((wishlist_id, outfit_id)).one(db).await?.is_some())
}

/// Insert the pair unless it already exists. Returns whether a row was written.
pub async fn link<C: ConnectionTrait>(db: &C, wishlist_id: Uuid, outfit_id: Uuid) -> Result<bool, ModelError> {
    if is_linked(db, wishlist_id, outfit_id).await? {
        return Ok(false);
    }
    let am = ActiveModel { wishlist_id: Set(wishlist_id), outfit_id: Set(outfit_id) };
    Entity::insert(am).exec_without_returning(db).await?;
    Ok(true)
}

/// Remove the pair; a missing pair is not an error.
pub async fn unlink<C: ConnectionTrait>(db: &C, wishlist_id: Uuid, outfit_id: Uuid) -> Result<(), ModelError> {
    Entity::delete_by_id((wishlist_id, outfit_id)).exec(db).await?;
    Ok(())
}
