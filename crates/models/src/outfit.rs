use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{self, ModelError};
use crate::{
    category, comment, garment, image, outfit_garment, recommendation, wishlist, wishlist_outfit,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "outfit")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub estimated_price: Option<f64>,
    pub category_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Category,
    Image,
    Comment,
    Recommendation,
    OutfitGarment,
    WishlistOutfit,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Category => Entity::belongs_to(category::Entity)
                .from(Column::CategoryId)
                .to(category::Column::Id)
                .into(),
            Relation::Image => Entity::has_many(image::Entity).into(),
            Relation::Comment => Entity::has_many(comment::Entity).into(),
            Relation::Recommendation => Entity::has_many(recommendation::Entity).into(),
            Relation::OutfitGarment => Entity::has_many(outfit_garment::Entity).into(),
            Relation::WishlistOutfit => Entity::has_many(wishlist_outfit::Entity).into(),
        }
    }
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef { Relation::Category.def() }
}

impl Related<image::Entity> for Entity {
    fn to() -> RelationDef { Relation::Image.def() }
}

impl Related<comment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Comment.def() }
}

impl Related<recommendation::Entity> for Entity {
    fn to() -> RelationDef { Relation::Recommendation.def() }
}

impl Related<outfit_garment::Entity> for Entity {
    fn to() -> RelationDef { Relation::OutfitGarment.def() }
}

impl Related<wishlist_outfit::Entity> for Entity {
    fn to() -> RelationDef { Relation::WishlistOutfit.def() }
}

impl Related<garment::Entity> for Entity {
    fn to() -> RelationDef { outfit_garment::Relation::Garment.def() }
    fn via() -> Option<RelationDef> { Some(outfit_garment::Relation::Outfit.def().rev()) }
}

impl Related<wishlist::Entity> for Entity {
    fn to() -> RelationDef { wishlist_outfit::Relation::Wishlist.def() }
    fn via() -> Option<RelationDef> { Some(wishlist_outfit::Relation::Outfit.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<String, ModelError> {
    errors::required("name", name)
}

pub fn validate_estimated_price(price: Option<f64>) -> Result<(), ModelError> {
    match price {
        Some(p) => errors::non_negative("estimated_price", p),
        None => Ok(()),
    }
}
