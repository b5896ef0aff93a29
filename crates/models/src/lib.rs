pub mod errors;
pub mod db;
pub mod user;
pub mod wishlist;
pub mod wishlist_outfit;
pub mod category;
pub mod occasion;
pub mod category_occasion;
pub mod color;
pub mod brand;
pub mod store;
pub mod brand_store;
pub mod garment;
pub mod outfit;
pub mod outfit_garment;
pub mod image;
pub mod comment;
pub mod recommendation;

#[cfg(test)]
mod tests;
