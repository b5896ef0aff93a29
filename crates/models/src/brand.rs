use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{self, ModelError};
use crate::{brand_store, garment, image, store};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "brand")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub official_site: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Garment,
    Image,
    BrandStore,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Garment => Entity::has_many(garment::Entity).into(),
            Relation::Image => Entity::has_many(image::Entity).into(),
            Relation::BrandStore => Entity::has_many(brand_store::Entity).into(),
        }
    }
}

impl Related<garment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Garment.def() }
}

impl Related<image::Entity> for Entity {
    fn to() -> RelationDef { Relation::Image.def() }
}

impl Related<brand_store::Entity> for Entity {
    fn to() -> RelationDef { Relation::BrandStore.def() }
}

impl Related<store::Entity> for Entity {
    fn to() -> RelationDef { brand_store::Relation::Store.def() }
    fn via() -> Option<RelationDef> { Some(brand_store::Relation::Brand.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<String, ModelError> {
    errors::required("name", name)
}

/// Optional links must be absolute http(s) URLs.
pub fn validate_link(field: &str, url: Option<&str>) -> Result<Option<String>, ModelError> {
    match errors::optional(url) {
        Some(u) if !(u.starts_with("http://") || u.starts_with("https://")) => {
            Err(ModelError::Validation(format!("{field} must start with http(s)")))
        }
        other => Ok(other),
    }
}
