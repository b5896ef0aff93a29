use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{self, ModelError};
use crate::{brand, brand_store};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "store")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub address: String,
    pub opening_hours: Option<String>,
    pub location: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    BrandStore,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::BrandStore => Entity::has_many(brand_store::Entity).into(),
        }
    }
}

impl Related<brand_store::Entity> for Entity {
    fn to() -> RelationDef { Relation::BrandStore.def() }
}

impl Related<brand::Entity> for Entity {
    fn to() -> RelationDef { brand_store::Relation::Brand.def() }
    fn via() -> Option<RelationDef> { Some(brand_store::Relation::Store.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

/// Validated scalar fields of a store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreFields {
    pub name: String,
    pub address: String,
    pub opening_hours: Option<String>,
    pub location: String,
}

pub fn validate(
    name: &str,
    address: &str,
    opening_hours: Option<&str>,
    location: &str,
) -> Result<StoreFields, ModelError> {
    Ok(StoreFields {
        name: errors::required("name", name)?,
        address: address.trim().to_string(),
        opening_hours: errors::optional(opening_hours),
        location: errors::required("location", location)?,
    })
}
