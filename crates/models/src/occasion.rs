use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{self, ModelError};
use crate::{category, category_occasion};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "occasion")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    CategoryOccasion,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::CategoryOccasion => Entity::has_many(category_occasion::Entity).into(),
        }
    }
}

impl Related<category_occasion::Entity> for Entity {
    fn to() -> RelationDef { Relation::CategoryOccasion.def() }
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef { category_occasion::Relation::Category.def() }
    fn via() -> Option<RelationDef> { Some(category_occasion::Relation::Occasion.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<String, ModelError> {
    errors::required("name", name)
}
