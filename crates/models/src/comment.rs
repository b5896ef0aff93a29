use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{self, ModelError};
use crate::{garment, outfit, user};

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "comment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub rating: f64,
    pub outfit_id: Option<Uuid>,
    pub garment_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Outfit,
    Garment,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
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

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<outfit::Entity> for Entity {
    fn to() -> RelationDef { Relation::Outfit.def() }
}

impl Related<garment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Garment.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_text(text: &str) -> Result<String, ModelError> {
    errors::required("text", text)
}

pub fn validate_rating(rating: f64) -> Result<(), ModelError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ModelError::Validation(format!(
            "rating must be within {MIN_RATING}..={MAX_RATING}"
        )));
    }
    Ok(())
}
