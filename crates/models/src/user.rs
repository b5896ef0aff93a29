use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{self, ModelError};
use crate::{comment, recommendation, wishlist};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Comment,
    Recommendation,
    Wishlist,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Comment => Entity::has_many(comment::Entity).into(),
            Relation::Recommendation => Entity::has_many(recommendation::Entity).into(),
            Relation::Wishlist => Entity::has_one(wishlist::Entity).into(),
        }
    }
}

impl Related<comment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Comment.def() }
}

impl Related<recommendation::Entity> for Entity {
    fn to() -> RelationDef { Relation::Recommendation.def() }
}

impl Related<wishlist::Entity> for Entity {
    fn to() -> RelationDef { Relation::Wishlist.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<String, ModelError> {
    errors::required("name", name)
}

/// Trimmed, lowercased email. Must contain a local part and a domain around `@`.
pub fn validate_email(email: &str) -> Result<String, ModelError> {
    let email = errors::required("email", email)?.to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(ModelError::Validation("invalid email".into())),
    }
}
