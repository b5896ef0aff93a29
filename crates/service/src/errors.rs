use sea_orm::SqlErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("illegal operation: {0}")]
    IllegalOperation(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn illegal(msg: impl Into<String>) -> Self { Self::IllegalOperation(msg.into()) }
}

/// Constraint violations are caller errors. A concurrent insert that slips past a uniqueness check lands here.
impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::IllegalOperation(format!("duplicate value: {msg}")),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::IllegalOperation(format!("broken reference: {msg}")),
            _ => Self::Db(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use models::user;
    use sea_orm::{ActiveModelTrait, DbErr, Set};
    use uuid::Uuid;

    use crate::test_support::{get_db, seed_user};

    #[tokio::test]
    async fn unique_violation_is_an_illegal_operation() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let first = seed_user(&db, "ana").await?;
        let now = Utc::now();
        // straight to the table, skipping the email check in user_service
        let dup = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set("Ana again".into()),
            email: Set(first.email.clone()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&db)
        .await;
        let Err(e) = dup else { panic!("duplicate email inserted") };
        assert!(matches!(ServiceError::from(e), ServiceError::IllegalOperation(_)));
        Ok(())
    }

    #[test]
    fn other_db_errors_stay_internal() {
        let e = ServiceError::from(DbErr::Custom("connection reset".into()));
        assert!(matches!(e, ServiceError::Db(msg) if msg.contains("connection reset")));
    }
}
