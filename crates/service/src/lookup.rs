use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PrimaryKeyTrait, QueryFilter};
use uuid::Uuid;

use crate::errors::ServiceError;

/// Load a row by its UUID key or fail with "<entity> not found".
pub(crate) async fn require<E, C>(db: &C, id: Uuid, entity: &str) -> Result<E::Model, ServiceError>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = Uuid>,
    C: ConnectionTrait,
{
    E::find_by_id(id).one(db).await?.ok_or_else(|| ServiceError::not_found(entity))
}

/// Every id must exist; returns them deduplicated in first-seen order.
pub(crate) async fn require_all<E, C>(db: &C, ids: &[Uuid], entity: &str) -> Result<Vec<Uuid>, ServiceError>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = Uuid>,
    C: ConnectionTrait,
{
    let unique = dedup(ids);
    for id in &unique {
        require::<E, C>(db, *id, entity).await?;
    }
    Ok(unique)
}

/// Whether another row already uses `name`, compared case-insensitively.
pub(crate) async fn name_taken<E, C>(
    db: &C,
    name_col: E::Column,
    id_col: E::Column,
    name: &str,
    except: Option<Uuid>,
) -> Result<bool, ServiceError>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let mut q = E::find().filter(Expr::expr(Func::lower(Expr::col(name_col))).eq(name.to_lowercase()));
    if let Some(id) = except {
        q = q.filter(id_col.ne(id));
    }
    Ok(q.one(db).await?.is_some())
}

pub(crate) fn dedup(ids: &[Uuid]) -> Vec<Uuid> {
    let mut out: Vec<Uuid> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(id) {
            out.push(*id);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::dedup;
    use uuid::Uuid;

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(dedup(&[b, a, b, a]), vec![b, a]);
        assert!(dedup(&[]).is_empty());
    }
}
