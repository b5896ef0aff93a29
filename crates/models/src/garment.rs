use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{self, ModelError};
use crate::{brand, category, color, comment, image, outfit, outfit_garment};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "garment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub garment_type: String,
    pub size: Option<String>,
    pub price: f64,
    pub promo_price: Option<f64>,
    pub brand_id: Uuid,
    pub category_id: Uuid,
    pub color_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Brand,
    Category,
    Color,
    Image,
    Comment,
    OutfitGarment,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Brand => Entity::belongs_to(brand::Entity)
                .from(Column::BrandId)
                .to(brand::Column::Id)
                .into(),
            Relation::Category => Entity::belongs_to(category::Entity)
                .from(Column::CategoryId)
                .to(category::Column::Id)
                .into(),
            Relation::Color => Entity::belongs_to(color::Entity)
                .from(Column::ColorId)
                .to(color::Column::Id)
                .into(),
            Relation::Image => Entity::has_many(image::Entity).into(),
            Relation::Comment => Entity::has_many(comment::Entity).into(),
            Relation::OutfitGarment => Entity::has_many(outfit_garment::Entity).into(),
        }
    }
}

impl Related<brand::Entity> for Entity {
    fn to() -> RelationDef { Relation::Brand.def() }
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef { Relation::Category.def() }
}

impl Related<color::Entity> for Entity {
    fn to() -> RelationDef { Relation::Color.def() }
}

impl Related<image::Entity> for Entity {
    fn to() -> RelationDef { Relation::Image.def() }
}

impl Related<comment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Comment.def() }
}

impl Related<outfit_garment::Entity> for Entity {
    fn to() -> RelationDef { Relation::OutfitGarment.def() }
}

impl Related<outfit::Entity> for Entity {
    fn to() -> RelationDef { outfit_garment::Relation::Outfit.def() }
    fn via() -> Option<RelationDef> { Some(outfit_garment::Relation::Garment.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

/// Validated scalar fields of a garment. References are checked by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct GarmentFields {
    pub name: String,
    pub garment_type: String,
    pub size: Option<String>,
    pub price: f64,
    pub promo_price: Option<f64>,
}

pub fn validate(
    name: &str,
    garment_type: &str,
    size: Option<&str>,
    price: f64,
    promo_price: Option<f64>,
) -> Result<GarmentFields, ModelError> {
    let name = errors::required("name", name)?;
    let garment_type = errors::required("garment_type", garment_type)?;
    errors::non_negative("price", price)?;
    if let Some(promo) = promo_price {
        errors::non_negative("promo_price", promo)?;
        if promo > price {
            return Err(ModelError::Validation("promo_price must not exceed price".into()));
        }
    }
    Ok(GarmentFields { name, garment_type, size: errors::optional(size), price, promo_price })
}
