use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use models::{garment, image, outfit, wishlist};
use service::{
    image_service::{self, ImageOwner},
    outfit_garment_service,
    outfit_service::{self, OutfitDetail, OutfitInput, OutfitUpdate},
    wishlist_outfit_service,
};

use super::{images::ImageUrlBody, wishlists::IdListBody, PageQuery, ServerState};
use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct NewOutfitBody {
    pub name: String,
    #[serde(default)]
    pub estimated_price: Option<f64>,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    /// At least one garment is required.
    pub garment_ids: Vec<Uuid>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct OutfitBody {
    pub name: String,
    #[serde(default)]
    pub estimated_price: Option<f64>,
    #[serde(default)]
    pub category_id: Option<Uuid>,
}

#[utoipa::path(get, path = "/outfits", tag = "outfits", params(PageQuery),
    responses((status = 200, description = "Outfits", body = [crate::openapi::OutfitDoc])))]
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(q): ApiQuery<PageQuery>,
) -> Result<Json<Vec<outfit::Model>>, JsonApiError> {
    Ok(Json(outfit_service::list_outfits(&state.db, q.pagination()).await?))
}

#[utoipa::path(post, path = "/outfits", tag = "outfits", request_body = NewOutfitBody,
    responses((status = 201, description = "Created", body = crate::openapi::OutfitDoc), (status = 400, description = "Invalid fields or no garments"), (status = 404, description = "Unknown category or garment")))]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(body): ApiJson<NewOutfitBody>,
) -> Result<(StatusCode, Json<outfit::Model>), JsonApiError> {
    let input = OutfitInput {
        name: body.name,
        estimated_price: body.estimated_price,
        category_id: body.category_id,
        garment_ids: body.garment_ids,
    };
    let created = outfit_service::create_outfit(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/outfits/{id}", tag = "outfits", params(("id" = Uuid, Path, description = "Outfit id")),
    responses((status = 200, description = "Outfit with garments and images", body = crate::openapi::OutfitDetailDoc), (status = 404, description = "Not found")))]
pub async fn get(State(state): State<ServerState>, ApiPath(id): ApiPath<Uuid>) -> Result<Json<OutfitDetail>, JsonApiError> {
    Ok(Json(outfit_service::get_outfit_detail(&state.db, id).await?))
}

#[utoipa::path(put, path = "/outfits/{id}", tag = "outfits", params(("id" = Uuid, Path, description = "Outfit id")), request_body = OutfitBody,
    responses((status = 200, description = "Updated", body = crate::openapi::OutfitDoc), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<OutfitBody>,
) -> Result<Json<outfit::Model>, JsonApiError> {
    let input = OutfitUpdate { name: body.name, estimated_price: body.estimated_price, category_id: body.category_id };
    Ok(Json(outfit_service::update_outfit(&state.db, id, input).await?))
}

#[utoipa::path(delete, path = "/outfits/{id}", tag = "outfits", params(("id" = Uuid, Path, description = "Outfit id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn delete(State(state): State<ServerState>, ApiPath(id): ApiPath<Uuid>) -> Result<StatusCode, JsonApiError> {
    outfit_service::delete_outfit(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// garments of an outfit

#[utoipa::path(get, path = "/outfits/{id}/prendas", tag = "outfits", params(("id" = Uuid, Path, description = "Outfit id")),
    responses((status = 200, description = "Garments in the outfit", body = [crate::openapi::GarmentDoc]), (status = 404, description = "Not found")))]
pub async fn list_garments(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Vec<garment::Model>>, JsonApiError> {
    Ok(Json(outfit_garment_service::list_garments(&state.db, id).await?))
}

#[utoipa::path(put, path = "/outfits/{id}/prendas", tag = "outfits", params(("id" = Uuid, Path, description = "Outfit id")), request_body = IdListBody,
    responses((status = 200, description = "Garments after replacement", body = [crate::openapi::GarmentDoc]), (status = 404, description = "Unknown outfit or garment")))]
pub async fn replace_garments(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<IdListBody>,
) -> Result<Json<Vec<garment::Model>>, JsonApiError> {
    Ok(Json(outfit_garment_service::replace_garments(&state.db, id, &body.ids).await?))
}

#[utoipa::path(get, path = "/outfits/{id}/prendas/{prenda_id}", tag = "outfits",
    params(("id" = Uuid, Path, description = "Outfit id"), ("prenda_id" = Uuid, Path, description = "Garment id")),
    responses((status = 200, description = "Garment", body = crate::openapi::GarmentDoc), (status = 400, description = "Not part of the outfit"), (status = 404, description = "Not found")))]
pub async fn get_garment(
    State(state): State<ServerState>,
    ApiPath((id, garment_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<Json<garment::Model>, JsonApiError> {
    Ok(Json(outfit_garment_service::get_garment(&state.db, id, garment_id).await?))
}

#[utoipa::path(post, path = "/outfits/{id}/prendas/{prenda_id}", tag = "outfits",
    params(("id" = Uuid, Path, description = "Outfit id"), ("prenda_id" = Uuid, Path, description = "Garment id")),
    responses((status = 200, description = "Added", body = crate::openapi::GarmentDoc), (status = 404, description = "Not found")))]
pub async fn add_garment(
    State(state): State<ServerState>,
    ApiPath((id, garment_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<Json<garment::Model>, JsonApiError> {
    Ok(Json(outfit_garment_service::add_garment(&state.db, id, garment_id).await?))
}

#[utoipa::path(delete, path = "/outfits/{id}/prendas/{prenda_id}", tag = "outfits",
    params(("id" = Uuid, Path, description = "Outfit id"), ("prenda_id" = Uuid, Path, description = "Garment id")),
    responses((status = 204, description = "Removed"), (status = 404, description = "Not found")))]
pub async fn remove_garment(
    State(state): State<ServerState>,
    ApiPath((id, garment_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<StatusCode, JsonApiError> {
    outfit_garment_service::remove_garment(&state.db, id, garment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// wishlists holding an outfit

#[utoipa::path(get, path = "/outfits/{id}/listasdeseos", tag = "outfits", params(("id" = Uuid, Path, description = "Outfit id")),
    responses((status = 200, description = "Wishlists holding the outfit", body = [crate::openapi::WishlistDoc]), (status = 404, description = "Not found")))]
pub async fn list_wishlists(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Vec<wishlist::Model>>, JsonApiError> {
    Ok(Json(wishlist_outfit_service::list_wishlists(&state.db, id).await?))
}

#[utoipa::path(put, path = "/outfits/{id}/listasdeseos", tag = "outfits", params(("id" = Uuid, Path, description = "Outfit id")), request_body = IdListBody,
    responses((status = 200, description = "Wishlists after replacement", body = [crate::openapi::WishlistDoc]), (status = 404, description = "Unknown outfit or wishlist")))]
pub async fn replace_wishlists(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<IdListBody>,
) -> Result<Json<Vec<wishlist::Model>>, JsonApiError> {
    Ok(Json(wishlist_outfit_service::replace_wishlists(&state.db, id, &body.ids).await?))
}

#[utoipa::path(get, path = "/outfits/{id}/listasdeseos/{lista_id}", tag = "outfits",
    params(("id" = Uuid, Path, description = "Outfit id"), ("lista_id" = Uuid, Path, description = "Wishlist id")),
    responses((status = 200, description = "Wishlist", body = crate::openapi::WishlistDoc), (status = 400, description = "Outfit not in the wishlist"), (status = 404, description = "Not found")))]
pub async fn get_wishlist(
    State(state): State<ServerState>,
    ApiPath((id, wishlist_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<Json<wishlist::Model>, JsonApiError> {
    Ok(Json(wishlist_outfit_service::get_wishlist(&state.db, id, wishlist_id).await?))
}

#[utoipa::path(post, path = "/outfits/{id}/listasdeseos/{lista_id}", tag = "outfits",
    params(("id" = Uuid, Path, description = "Outfit id"), ("lista_id" = Uuid, Path, description = "Wishlist id")),
    responses((status = 200, description = "Added", body = crate::openapi::WishlistDoc), (status = 400, description = "Already in the wishlist"), (status = 404, description = "Not found")))]
pub async fn add_wishlist(
    State(state): State<ServerState>,
    ApiPath((id, wishlist_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<Json<wishlist::Model>, JsonApiError> {
    Ok(Json(wishlist_outfit_service::add_wishlist(&state.db, id, wishlist_id).await?))
}

#[utoipa::path(delete, path = "/outfits/{id}/listasdeseos/{lista_id}", tag = "outfits",
    params(("id" = Uuid, Path, description = "Outfit id"), ("lista_id" = Uuid, Path, description = "Wishlist id")),
    responses((status = 204, description = "Removed"), (status = 404, description = "Not found")))]
pub async fn remove_wishlist(
    State(state): State<ServerState>,
    ApiPath((id, wishlist_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<StatusCode, JsonApiError> {
    wishlist_outfit_service::remove_wishlist(&state.db, id, wishlist_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// images of an outfit

#[utoipa::path(get, path = "/outfits/{id}/imagenes", tag = "outfits", params(("id" = Uuid, Path, description = "Outfit id")),
    responses((status = 200, description = "Images", body = [crate::openapi::ImageDoc]), (status = 404, description = "Not found")))]
pub async fn list_images(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Vec<image::Model>>, JsonApiError> {
    Ok(Json(image_service::list_owned_images(&state.db, ImageOwner::Outfit, id).await?))
}

#[utoipa::path(post, path = "/outfits/{id}/imagenes", tag = "outfits", params(("id" = Uuid, Path, description = "Outfit id")), request_body = ImageUrlBody,
    responses((status = 201, description = "Created", body = crate::openapi::ImageDoc), (status = 404, description = "Not found")))]
pub async fn create_image(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<ImageUrlBody>,
) -> Result<(StatusCode, Json<image::Model>), JsonApiError> {
    let created = image_service::create_owned_image(&state.db, ImageOwner::Outfit, id, &body.url).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/outfits/{id}/imagenes/{imagen_id}", tag = "outfits",
    params(("id" = Uuid, Path, description = "Outfit id"), ("imagen_id" = Uuid, Path, description = "Image id")),
    responses((status = 200, description = "Image", body = crate::openapi::ImageDoc), (status = 400, description = "Image of another owner"), (status = 404, description = "Not found")))]
pub async fn get_image(
    State(state): State<ServerState>,
    ApiPath((id, image_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<Json<image::Model>, JsonApiError> {
    Ok(Json(image_service::get_owned_image(&state.db, ImageOwner::Outfit, id, image_id).await?))
}

#[utoipa::path(put, path = "/outfits/{id}/imagenes/{imagen_id}", tag = "outfits",
    params(("id" = Uuid, Path, description = "Outfit id"), ("imagen_id" = Uuid, Path, description = "Image id")), request_body = ImageUrlBody,
    responses((status = 200, description = "Updated", body = crate::openapi::ImageDoc), (status = 400, description = "Image of another owner"), (status = 404, description = "Not found")))]
pub async fn update_image(
    State(state): State<ServerState>,
    ApiPath((id, image_id)): ApiPath<(Uuid, Uuid)>,
    ApiJson(body): ApiJson<ImageUrlBody>,
) -> Result<Json<image::Model>, JsonApiError> {
    Ok(Json(image_service::update_owned_image(&state.db, ImageOwner::Outfit, id, image_id, &body.url).await?))
}

#[utoipa::path(delete, path = "/outfits/{id}/imagenes/{imagen_id}", tag = "outfits",
    params(("id" = Uuid, Path, description = "Outfit id"), ("imagen_id" = Uuid, Path, description = "Image id")),
    responses((status = 204, description = "Deleted"), (status = 400, description = "Image of another owner"), (status = 404, description = "Not found")))]
pub async fn delete_image(
    State(state): State<ServerState>,
    ApiPath((id, image_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<StatusCode, JsonApiError> {
    image_service::delete_owned_image(&state.db, ImageOwner::Outfit, id, image_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
