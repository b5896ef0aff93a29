use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{self, ModelError};
use crate::{outfit, user, wishlist_outfit};

pub const DEFAULT_NAME: &str = "My wishlist";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wishlist")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub name: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    WishlistOutfit,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
            Relation::WishlistOutfit => Entity::has_many(wishlist_outfit::Entity).into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<wishlist_outfit::Entity> for Entity {
    fn to() -> RelationDef { Relation::WishlistOutfit.def() }
}

impl Related<outfit::Entity> for Entity {
    fn to() -> RelationDef { wishlist_outfit::Relation::Outfit.def() }
    fn via() -> Option<RelationDef> { Some(wishlist_outfit::Relation::Wishlist.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

/// Missing or blank names fall back to [`DEFAULT_NAME`] on creation.
pub fn name_or_default(name: Option<&str>) -> String {
    errors::optional(name).unwrap_or_else(|| DEFAULT_NAME.to_string())
}

pub fn validate_name(name: &str) -> Result<String, ModelError> {
    errors::required("name", name)
}
