use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::routes::{
    brands::BrandBody, categories::CategoryBody, colors::ColorBody,
    comments::{CommentBody, NewCommentBody},
    garments::GarmentBody,
    images::{ImageBody, ImageUrlBody},
    occasions::OccasionBody,
    outfits::{NewOutfitBody, OutfitBody},
    recommendations::{NewRecommendationBody, RecommendationBody},
    stores::StoreBody,
    users::UserBody,
    wishlists::{IdListBody, NewWishlistBody, RenameWishlistBody},
};

// Response shapes. The stored rows are serialized as is; these mirror them for the document.

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct UserDoc { pub id: Uuid, pub name: String, pub email: String, pub created_at: String, pub updated_at: String }

#[derive(Serialize, ToSchema)]
pub struct CommentDoc {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub rating: f64,
    pub outfit_id: Option<Uuid>,
    pub garment_id: Option<Uuid>,
    pub created_at: String,
}

#[derive(Serialize, ToSchema)]
pub struct WishlistDoc { pub id: Uuid, pub user_id: Uuid, pub name: String, pub created_at: String }

#[derive(Serialize, ToSchema)]
pub struct CategoryDoc { pub id: Uuid, pub name: String, pub recommended_age: Option<i32>, pub created_at: String }

#[derive(Serialize, ToSchema)]
pub struct OccasionDoc { pub id: Uuid, pub name: String, pub created_at: String }

#[derive(Serialize, ToSchema)]
pub struct ColorDoc { pub id: Uuid, pub name: String, pub hex_code: String, pub created_at: String }

#[derive(Serialize, ToSchema)]
pub struct StoreDoc {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub opening_hours: Option<String>,
    pub location: String,
    pub created_at: String,
}

#[derive(Serialize, ToSchema)]
pub struct BrandDoc {
    pub id: Uuid,
    pub name: String,
    pub official_site: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: String,
}

#[derive(Serialize, ToSchema)]
pub struct GarmentDoc {
    pub id: Uuid,
    pub name: String,
    pub garment_type: String,
    pub size: Option<String>,
    pub price: f64,
    pub promo_price: Option<f64>,
    pub brand_id: Uuid,
    pub category_id: Uuid,
    pub color_id: Option<Uuid>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, ToSchema)]
pub struct OutfitDoc {
    pub id: Uuid,
    pub name: String,
    pub estimated_price: Option<f64>,
    pub category_id: Option<Uuid>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, ToSchema)]
pub struct ImageDoc {
    pub id: Uuid,
    pub url: String,
    pub outfit_id: Option<Uuid>,
    pub garment_id: Option<Uuid>,
    pub brand_id: Option<Uuid>,
    pub created_at: String,
}

#[derive(Serialize, ToSchema)]
pub struct RecommendationDoc {
    pub id: Uuid,
    pub user_id: Uuid,
    pub outfit_id: Uuid,
    pub text: String,
    pub rating: i32,
    pub created_at: String,
}

#[derive(Serialize, ToSchema)]
pub struct UserDetailDoc {
    #[serde(flatten)]
    pub user: UserDoc,
    pub wishlist: Option<WishlistDoc>,
    pub comments: Vec<CommentDoc>,
}

#[derive(Serialize, ToSchema)]
pub struct WishlistDetailDoc {
    #[serde(flatten)]
    pub wishlist: WishlistDoc,
    pub outfits: Vec<OutfitDoc>,
}

#[derive(Serialize, ToSchema)]
pub struct CategoryDetailDoc {
    #[serde(flatten)]
    pub category: CategoryDoc,
    pub occasions: Vec<OccasionDoc>,
}

#[derive(Serialize, ToSchema)]
pub struct OccasionDetailDoc {
    #[serde(flatten)]
    pub occasion: OccasionDoc,
    pub categories: Vec<CategoryDoc>,
}

#[derive(Serialize, ToSchema)]
pub struct StoreDetailDoc {
    #[serde(flatten)]
    pub store: StoreDoc,
    pub brands: Vec<BrandDoc>,
}

#[derive(Serialize, ToSchema)]
pub struct BrandDetailDoc {
    #[serde(flatten)]
    pub brand: BrandDoc,
    pub stores: Vec<StoreDoc>,
}

#[derive(Serialize, ToSchema)]
pub struct GarmentDetailDoc {
    #[serde(flatten)]
    pub garment: GarmentDoc,
    pub images: Vec<ImageDoc>,
}

#[derive(Serialize, ToSchema)]
pub struct OutfitDetailDoc {
    #[serde(flatten)]
    pub outfit: OutfitDoc,
    pub garments: Vec<GarmentDoc>,
    pub images: Vec<ImageDoc>,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::list,
        crate::routes::users::create,
        crate::routes::users::get,
        crate::routes::users::update,
        crate::routes::users::delete,
        crate::routes::comments::list,
        crate::routes::comments::get,
        crate::routes::comments::update,
        crate::routes::comments::delete,
        crate::routes::comments::list_for_user,
        crate::routes::comments::create_for_user,
        crate::routes::comments::get_for_user,
        crate::routes::comments::update_for_user,
        crate::routes::comments::delete_for_user,
        crate::routes::wishlists::get_for_user,
        crate::routes::wishlists::create_for_user,
        crate::routes::wishlists::list,
        crate::routes::wishlists::get,
        crate::routes::wishlists::rename,
        crate::routes::wishlists::delete,
        crate::routes::wishlists::list_outfits,
        crate::routes::wishlists::replace_outfits,
        crate::routes::wishlists::get_outfit,
        crate::routes::wishlists::add_outfit,
        crate::routes::wishlists::remove_outfit,
        crate::routes::outfits::list,
        crate::routes::outfits::create,
        crate::routes::outfits::get,
        crate::routes::outfits::update,
        crate::routes::outfits::delete,
        crate::routes::outfits::list_garments,
        crate::routes::outfits::replace_garments,
        crate::routes::outfits::get_garment,
        crate::routes::outfits::add_garment,
        crate::routes::outfits::remove_garment,
        crate::routes::outfits::list_wishlists,
        crate::routes::outfits::replace_wishlists,
        crate::routes::outfits::get_wishlist,
        crate::routes::outfits::add_wishlist,
        crate::routes::outfits::remove_wishlist,
        crate::routes::outfits::list_images,
        crate::routes::outfits::create_image,
        crate::routes::outfits::get_image,
        crate::routes::outfits::update_image,
        crate::routes::outfits::delete_image,
        crate::routes::garments::list,
        crate::routes::garments::create,
        crate::routes::garments::get,
        crate::routes::garments::update,
        crate::routes::garments::delete,
        crate::routes::garments::list_outfits,
        crate::routes::garments::replace_outfits,
        crate::routes::garments::get_outfit,
        crate::routes::garments::add_outfit,
        crate::routes::garments::remove_outfit,
        crate::routes::garments::list_images,
        crate::routes::garments::create_image,
        crate::routes::garments::get_image,
        crate::routes::garments::update_image,
        crate::routes::garments::delete_image,
        crate::routes::brands::list,
        crate::routes::brands::create,
        crate::routes::brands::get,
        crate::routes::brands::update,
        crate::routes::brands::delete,
        crate::routes::brands::list_images,
        crate::routes::brands::create_image,
        crate::routes::brands::get_image,
        crate::routes::brands::update_image,
        crate::routes::brands::delete_image,
        crate::routes::stores::list,
        crate::routes::stores::create,
        crate::routes::stores::get,
        crate::routes::stores::update,
        crate::routes::stores::delete,
        crate::routes::categories::list,
        crate::routes::categories::create,
        crate::routes::categories::get,
        crate::routes::categories::update,
        crate::routes::categories::delete,
        crate::routes::categories::list_occasions,
        crate::routes::categories::get_occasion,
        crate::routes::categories::add_occasion,
        crate::routes::categories::remove_occasion,
        crate::routes::occasions::list,
        crate::routes::occasions::create,
        crate::routes::occasions::get,
        crate::routes::occasions::update,
        crate::routes::occasions::delete,
        crate::routes::occasions::list_categories,
        crate::routes::occasions::get_category,
        crate::routes::occasions::add_category,
        crate::routes::occasions::remove_category,
        crate::routes::colors::list,
        crate::routes::colors::create,
        crate::routes::colors::get,
        crate::routes::colors::update,
        crate::routes::colors::delete,
        crate::routes::recommendations::list,
        crate::routes::recommendations::create,
        crate::routes::recommendations::get,
        crate::routes::recommendations::update,
        crate::routes::recommendations::delete,
        crate::routes::images::list,
        crate::routes::images::create,
        crate::routes::images::get,
        crate::routes::images::update,
        crate::routes::images::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            UserDoc, UserDetailDoc, UserBody,
            CommentDoc, NewCommentBody, CommentBody,
            WishlistDoc, WishlistDetailDoc, NewWishlistBody, RenameWishlistBody, IdListBody,
            OutfitDoc, OutfitDetailDoc, NewOutfitBody, OutfitBody,
            GarmentDoc, GarmentDetailDoc, GarmentBody,
            BrandDoc, BrandDetailDoc, BrandBody,
            StoreDoc, StoreDetailDoc, StoreBody,
            CategoryDoc, CategoryDetailDoc, CategoryBody,
            OccasionDoc, OccasionDetailDoc, OccasionBody,
            ColorDoc, ColorBody,
            RecommendationDoc, NewRecommendationBody, RecommendationBody,
            ImageDoc, ImageBody, ImageUrlBody,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "comments"),
        (name = "wishlists"),
        (name = "outfits"),
        (name = "garments"),
        (name = "brands"),
        (name = "stores"),
        (name = "categories"),
        (name = "occasions"),
        (name = "colors"),
        (name = "recommendations"),
        (name = "images")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_spanish_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/health"));
        assert!(paths.contains_key("/usuarios/{id}/comentarios/{comentario_id}"));
        assert!(paths.contains_key("/marcas/{id}/imagenes"));
        assert!(paths.contains_key("/recomendaciones/{id}"));
    }
}
