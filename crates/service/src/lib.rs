//! Service layer providing business-oriented operations on top of models.
//! - Every association and deletion rule is enforced here.
//! - Reuses validation and entity definitions in `models` crate.
//! - Errors distinguish missing entities from illegal operations.

pub mod errors;
pub mod pagination;
mod lookup;
#[cfg(test)]
pub mod test_support;

pub mod user_service;
pub mod comment_service;
pub mod wishlist_service;
pub mod wishlist_outfit_service;
pub mod category_service;
pub mod occasion_service;
pub mod category_occasion_service;
pub mod color_service;
pub mod store_service;
pub mod brand_service;
pub mod garment_service;
pub mod outfit_service;
pub mod outfit_garment_service;
pub mod image_service;
pub mod recommendation_service;
