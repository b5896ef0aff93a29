use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{self, ModelError};
use crate::{brand, garment, outfit};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "image")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub url: String,
    pub outfit_id: Option<Uuid>,
    pub garment_id: Option<Uuid>,
    pub brand_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Outfit,
    Garment,
    Brand,
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
            Relation::Brand => Entity::belongs_to(brand::Entity)
                .from(Column::BrandId)
                .to(brand::Column::Id)
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

impl Related<brand::Entity> for Entity {
    fn to() -> RelationDef { Relation::Brand.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn is_attached(&self) -> bool {
        self.outfit_id.is_some() || self.garment_id.is_some() || self.brand_id.is_some()
    }
}

pub fn validate_url(url: &str) -> Result<String, ModelError> {
    errors::required("url", url)
}
