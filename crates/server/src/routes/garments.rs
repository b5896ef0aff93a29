use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use models::{garment, image, outfit};
use service::{
    garment_service::{self, GarmentDetail, GarmentInput},
    image_service::{self, ImageOwner},
    outfit_garment_service,
};

use super::{images::ImageUrlBody, wishlists::IdListBody, PageQuery, ServerState};
use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct GarmentBody {
    pub name: String,
    pub garment_type: String,
    #[serde(default)]
    pub size: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub promo_price: Option<f64>,
    pub brand_id: Uuid,
    pub category_id: Uuid,
    #[serde(default)]
    pub color_id: Option<Uuid>,
}

impl From<GarmentBody> for GarmentInput {
    fn from(b: GarmentBody) -> Self {
        GarmentInput {
            name: b.name,
            garment_type: b.garment_type,
            size: b.size,
            price: b.price,
            promo_price: b.promo_price,
            brand_id: b.brand_id,
            category_id: b.category_id,
            color_id: b.color_id,
        }
    }
}

#[utoipa::path(get, path = "/prendas", tag = "garments", params(PageQuery),
    responses((status = 200, description = "Garments", body = [crate::openapi::GarmentDoc])))]
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(q): ApiQuery<PageQuery>,
) -> Result<Json<Vec<garment::Model>>, JsonApiError> {
    Ok(Json(garment_service::list_garments(&state.db, q.pagination()).await?))
}

#[utoipa::path(post, path = "/prendas", tag = "garments", request_body = GarmentBody,
    responses((status = 201, description = "Created", body = crate::openapi::GarmentDoc), (status = 400, description = "Invalid fields"), (status = 404, description = "Unknown brand, category or color")))]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(body): ApiJson<GarmentBody>,
) -> Result<(StatusCode, Json<garment::Model>), JsonApiError> {
    let created = garment_service::create_garment(&state.db, body.into()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/prendas/{id}", tag = "garments", params(("id" = Uuid, Path, description = "Garment id")),
    responses((status = 200, description = "Garment with images", body = crate::openapi::GarmentDetailDoc), (status = 404, description = "Not found")))]
pub async fn get(State(state): State<ServerState>, ApiPath(id): ApiPath<Uuid>) -> Result<Json<GarmentDetail>, JsonApiError> {
    Ok(Json(garment_service::get_garment_detail(&state.db, id).await?))
}

#[utoipa::path(put, path = "/prendas/{id}", tag = "garments", params(("id" = Uuid, Path, description = "Garment id")), request_body = GarmentBody,
    responses((status = 200, description = "Updated", body = crate::openapi::GarmentDoc), (status = 400, description = "Invalid fields"), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<GarmentBody>,
) -> Result<Json<garment::Model>, JsonApiError> {
    Ok(Json(garment_service::update_garment(&state.db, id, body.into()).await?))
}

#[utoipa::path(delete, path = "/prendas/{id}", tag = "garments", params(("id" = Uuid, Path, description = "Garment id")),
    responses((status = 204, description = "Deleted"), (status = 400, description = "Garment has images or belongs to outfits"), (status = 404, description = "Not found")))]
pub async fn delete(State(state): State<ServerState>, ApiPath(id): ApiPath<Uuid>) -> Result<StatusCode, JsonApiError> {
    garment_service::delete_garment(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(get, path = "/prendas/{id}/outfits", tag = "garments", params(("id" = Uuid, Path, description = "Garment id")),
    responses((status = 200, description = "Outfits using the garment", body = [crate::openapi::OutfitDoc]), (status = 404, description = "Not found")))]
pub async fn list_outfits(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Vec<outfit::Model>>, JsonApiError> {
    Ok(Json(outfit_garment_service::list_outfits(&state.db, id).await?))
}

#[utoipa::path(put, path = "/prendas/{id}/outfits", tag = "garments", params(("id" = Uuid, Path, description = "Garment id")), request_body = IdListBody,
    responses((status = 200, description = "Outfits after replacement", body = [crate::openapi::OutfitDoc]), (status = 404, description = "Unknown garment or outfit")))]
pub async fn replace_outfits(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<IdListBody>,
) -> Result<Json<Vec<outfit::Model>>, JsonApiError> {
    Ok(Json(outfit_garment_service::replace_outfits(&state.db, id, &body.ids).await?))
}

#[utoipa::path(get, path = "/prendas/{id}/outfits/{outfit_id}", tag = "garments",
    params(("id" = Uuid, Path, description = "Garment id"), ("outfit_id" = Uuid, Path, description = "Outfit id")),
    responses((status = 200, description = "Outfit", body = crate::openapi::OutfitDoc), (status = 400, description = "Garment not in the outfit"), (status = 404, description = "Not found")))]
pub async fn get_outfit(
    State(state): State<ServerState>,
    ApiPath((id, outfit_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<Json<outfit::Model>, JsonApiError> {
    Ok(Json(outfit_garment_service::get_outfit(&state.db, id, outfit_id).await?))
}

#[utoipa::path(post, path = "/prendas/{id}/outfits/{outfit_id}", tag = "garments",
    params(("id" = Uuid, Path, description = "Garment id"), ("outfit_id" = Uuid, Path, description = "Outfit id")),
    responses((status = 200, description = "Added", body = crate::openapi::OutfitDoc), (status = 404, description = "Not found")))]
pub async fn add_outfit(
    State(state): State<ServerState>,
    ApiPath((id, outfit_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<Json<outfit::Model>, JsonApiError> {
    Ok(Json(outfit_garment_service::add_outfit(&state.db, id, outfit_id).await?))
}

#[utoipa::path(delete, path = "/prendas/{id}/outfits/{outfit_id}", tag = "garments",
    params(("id" = Uuid, Path, description = "Garment id"), ("outfit_id" = Uuid, Path, description = "Outfit id")),
    responses((status = 204, description = "Removed"), (status = 404, description = "Not found")))]
pub async fn remove_outfit(
    State(state): State<ServerState>,
    ApiPath((id, outfit_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<StatusCode, JsonApiError> {
    outfit_garment_service::remove_outfit(&state.db, id, outfit_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(get, path = "/prendas/{id}/imagenes", tag = "garments", params(("id" = Uuid, Path, description = "Garment id")),
    responses((status = 200, description = "Images", body = [crate::openapi::ImageDoc]), (status = 404, description = "Not found")))]
pub async fn list_images(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Vec<image::Model>>, JsonApiError> {
    Ok(Json(image_service::list_owned_images(&state.db, ImageOwner::Garment, id).await?))
}

#[utoipa::path(post, path = "/prendas/{id}/imagenes", tag = "garments", params(("id" = Uuid, Path, description = "Garment id")), request_body = ImageUrlBody,
    responses((status = 201, description = "Created", body = crate::openapi::ImageDoc), (status = 404, description = "Not found")))]
pub async fn create_image(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<ImageUrlBody>,
) -> Result<(StatusCode, Json<image::Model>), JsonApiError> {
    let created = image_service::create_owned_image(&state.db, ImageOwner::Garment, id, &body.url).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/prendas/{id}/imagenes/{imagen_id}", tag = "garments",
    params(("id" = Uuid, Path, description = "Garment id"), ("imagen_id" = Uuid, Path, description = "Image id")),
    responses((status = 200, description = "Image", body = crate::openapi::ImageDoc), (status = 400, description = "Image of another owner"), (status = 404, description = "Not found")))]
pub async fn get_image(
    State(state): State<ServerState>,
    ApiPath((id, image_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<Json<image::Model>, JsonApiError> {
    Ok(Json(image_service::get_owned_image(&state.db, ImageOwner::Garment, id, image_id).await?))
}

#[utoipa::path(put, path = "/prendas/{id}/imagenes/{imagen_id}", tag = "garments",
    params(("id" = Uuid, Path, description = "Garment id"), ("imagen_id" = Uuid, Path, description = "Image id")), request_body = ImageUrlBody,
    responses((status = 200, description = "Updated", body = crate::openapi::ImageDoc), (status = 400, description = "Image of another owner"), (status = 404, description = "Not found")))]
pub async fn update_image(
    State(state): State<ServerState>,
    ApiPath((id, image_id)): ApiPath<(Uuid, Uuid)>,
    ApiJson(body): ApiJson<ImageUrlBody>,
) -> Result<Json<image::Model>, JsonApiError> {
    Ok(Json(image_service::update_owned_image(&state.db, ImageOwner::Garment, id, image_id, &body.url).await?))
}

#[utoipa::path(delete, path = "/prendas/{id}/imagenes/{imagen_id}", tag = "garments",
    params(("id" = Uuid, Path, description = "Garment id"), ("imagen_id" = Uuid, Path, description = "Image id")),
    responses((status = 204, description = "Deleted"), (status = 400, description = "Image of another owner"), (status = 404, description = "Not found")))]
pub async fn delete_image(
    State(state): State<ServerState>,
    ApiPath((id, image_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<StatusCode, JsonApiError> {
    image_service::delete_owned_image(&state.db, ImageOwner::Garment, id, image_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
