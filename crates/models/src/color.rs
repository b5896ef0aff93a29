use once_cell::sync::Lazy;
use regex::Regex;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{self, ModelError};
use crate::garment;

static HEX_CODE: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$"));

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "color")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub hex_code: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Garment,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Garment => Entity::has_many(garment::Entity).into(),
        }
    }
}

impl Related<garment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Garment.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<String, ModelError> {
    errors::required("name", name)
}

/// `#RRGGBB`, case preserved.
pub fn validate_hex_code(hex: &str) -> Result<String, ModelError> {
    let re = HEX_CODE.as_ref().map_err(|e| ModelError::Validation(e.to_string()))?;
    let hex = hex.trim();
    if !re.is_match(hex) {
        return Err(ModelError::Validation("hex_code must look like #RRGGBB".into()));
    }
    Ok(hex.to_string())
}
