use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{self, ModelError};
use crate::{category_occasion, garment, occasion, outfit};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub recommended_age: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Garment,
    Outfit,
    CategoryOccasion,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Garment => Entity::has_many(garment::Entity).into(),
            Relation::Outfit => Entity::has_many(outfit::Entity).into(),
            Relation::CategoryOccasion => Entity::has_many(category_occasion::Entity).into(),
        }
    }
}

impl Related<garment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Garment.def() }
}

impl Related<outfit::Entity> for Entity {
    fn to() -> RelationDef { Relation::Outfit.def() }
}

impl Related<category_occasion::Entity> for Entity {
    fn to() -> RelationDef { Relation::CategoryOccasion.def() }
}

impl Related<occasion::Entity> for Entity {
    fn to() -> RelationDef { category_occasion::Relation::Occasion.def() }
    fn via() -> Option<RelationDef> { Some(category_occasion::Relation::Category.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub const MAX_RECOMMENDED_AGE: i32 = 120;

pub fn validate_name(name: &str) -> Result<String, ModelError> {
    errors::required("name", name)
}

pub fn validate_recommended_age(age: Option<i32>) -> Result<(), ModelError> {
    match age {
        Some(a) if !(0..=MAX_RECOMMENDED_AGE).contains(&a) => Err(ModelError::Validation(format!(
            "recommended_age must be within 0..={MAX_RECOMMENDED_AGE}"
        ))),
        _ => Ok(()),
    }
}
