//! Pagination utilities for service layer
//!
//! Provides a simple `Pagination` struct, helpers to normalize inputs and a
//! finder runner that either pages or returns everything.

use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, Select};

use crate::errors::ServiceError;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: u32,
    /// items per page
    pub per_page: u32,
}

impl Pagination {
    /// Clamp to sane defaults and convert to `u64`
    pub fn normalize(self) -> (u64, u64) {
        let page = if self.page == 0 { 1 } else { self.page };
        let per_page = self.per_page.clamp(1, 100);
        ((page - 1) as u64, per_page as u64)
    }

    /// `None` when neither parameter was supplied, meaning "return everything".
    pub fn from_query(page: Option<u32>, per_page: Option<u32>) -> Option<Self> {
        if page.is_none() && per_page.is_none() {
            return None;
        }
        let d = Self::default();
        Some(Self { page: page.unwrap_or(d.page), per_page: per_page.unwrap_or(d.per_page) })
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: 20 } }
}

/// Run `finder`, restricted to one page when `page` is given.
pub async fn fetch_page<E>(
    db: &DatabaseConnection,
    finder: Select<E>,
    page: Option<Pagination>,
) -> Result<Vec<E::Model>, ServiceError>
where
    E: EntityTrait,
    E::Model: Send + Sync + 'static,
{
    match page {
        Some(p) => {
            let (page_idx, per_page) = p.normalize();
            // SeaORM's paginate uses 0-based page index internally via fetch_page
            Ok(finder.paginate(db, per_page).fetch_page(page_idx).await?)
        }
        None => Ok(finder.all(db).await?),
    }
}
