use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use models::{brand, image};
use service::{
    brand_service::{self, BrandDetail, BrandInput},
    image_service::{self, ImageOwner},
};

use super::{images::ImageUrlBody, ServerState};
use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct BrandBody {
    pub name: String,
    #[serde(default)]
    pub official_site: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Stores selling the brand. Must not be empty.
    #[serde(default)]
    pub store_ids: Vec<Uuid>,
}

impl From<BrandBody> for BrandInput {
    fn from(b: BrandBody) -> Self {
        BrandInput { name: b.name, official_site: b.official_site, logo_url: b.logo_url, store_ids: b.store_ids }
    }
}

#[utoipa::path(get, path = "/marcas", tag = "brands",
    responses((status = 200, description = "Brands", body = [crate::openapi::BrandDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<brand::Model>>, JsonApiError> {
    Ok(Json(brand_service::list_brands(&state.db).await?))
}

#[utoipa::path(post, path = "/marcas", tag = "brands", request_body = BrandBody,
    responses((status = 201, description = "Created", body = crate::openapi::BrandDoc), (status = 400, description = "Invalid fields, duplicate name or no stores"), (status = 404, description = "Unknown store")))]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(body): ApiJson<BrandBody>,
) -> Result<(StatusCode, Json<brand::Model>), JsonApiError> {
    let created = brand_service::create_brand(&state.db, body.into()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/marcas/{id}", tag = "brands", params(("id" = Uuid, Path, description = "Brand id")),
    responses((status = 200, description = "Brand with its stores", body = crate::openapi::BrandDetailDoc), (status = 404, description = "Not found")))]
pub async fn get(State(state): State<ServerState>, ApiPath(id): ApiPath<Uuid>) -> Result<Json<BrandDetail>, JsonApiError> {
    Ok(Json(brand_service::get_brand_detail(&state.db, id).await?))
}

#[utoipa::path(put, path = "/marcas/{id}", tag = "brands", params(("id" = Uuid, Path, description = "Brand id")), request_body = BrandBody,
    responses((status = 200, description = "Updated", body = crate::openapi::BrandDoc), (status = 400, description = "Invalid fields"), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<BrandBody>,
) -> Result<Json<brand::Model>, JsonApiError> {
    Ok(Json(brand_service::update_brand(&state.db, id, body.into()).await?))
}

#[utoipa::path(delete, path = "/marcas/{id}", tag = "brands", params(("id" = Uuid, Path, description = "Brand id")),
    responses((status = 204, description = "Deleted"), (status = 400, description = "Garments reference the brand"), (status = 404, description = "Not found")))]
pub async fn delete(State(state): State<ServerState>, ApiPath(id): ApiPath<Uuid>) -> Result<StatusCode, JsonApiError> {
    brand_service::delete_brand(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(get, path = "/marcas/{id}/imagenes", tag = "brands", params(("id" = Uuid, Path, description = "Brand id")),
    responses((status = 200, description = "Images", body = [crate::openapi::ImageDoc]), (status = 404, description = "Not found")))]
pub async fn list_images(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Vec<image::Model>>, JsonApiError> {
    Ok(Json(image_service::list_owned_images(&state.db, ImageOwner::Brand, id).await?))
}

#[utoipa::path(post, path = "/marcas/{id}/imagenes", tag = "brands", params(("id" = Uuid, Path, description = "Brand id")), request_body = ImageUrlBody,
    responses((status = 201, description = "Created", body = crate::openapi::ImageDoc), (status = 404, description = "Not found")))]
pub async fn create_image(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<ImageUrlBody>,
) -> Result<(StatusCode, Json<image::Model>), JsonApiError> {
    let created = image_service::create_owned_image(&state.db, ImageOwner::Brand, id, &body.url).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/marcas/{id}/imagenes/{imagen_id}", tag = "brands",
    params(("id" = Uuid, Path, description = "Brand id"), ("imagen_id" = Uuid, Path, description = "Image id")),
    responses((status = 200, description = "Image", body = crate::openapi::ImageDoc), (status = 400, description = "Image of another owner"), (status = 404, description = "Not found")))]
pub async fn get_image(
    State(state): State<ServerState>,
    ApiPath((id, image_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<Json<image::Model>, JsonApiError> {
    Ok(Json(image_service::get_owned_image(&state.db, ImageOwner::Brand, id, image_id).await?))
}

#[utoipa::path(put, path = "/marcas/{id}/imagenes/{imagen_id}", tag = "brands",
    params(("id" = Uuid, Path, description = "Brand id"), ("imagen_id" = Uuid, Path, description = "Image id")), request_body = ImageUrlBody,
    responses((status = 200, description = "Updated", body = crate::openapi::ImageDoc), (status = 400, description = "Image of another owner"), (status = 404, description = "Not found")))]
pub async fn update_image(
    State(state): State<ServerState>,
    ApiPath((id, image_id)): ApiPath<(Uuid, Uuid)>,
    ApiJson(body): ApiJson<ImageUrlBody>,
) -> Result<Json<image::Model>, JsonApiError> {
    Ok(Json(image_service::update_owned_image(&state.db, ImageOwner::Brand, id, image_id, &body.url).await?))
}

#[utoipa::path(delete, path = "/marcas/{id}/imagenes/{imagen_id}", tag = "brands",
    params(("id" = Uuid, Path, description = "Brand id"), ("imagen_id" = Uuid, Path, description = "Image id")),
    responses((status = 204, description = "Deleted"), (status = 400, description = "Image of another owner"), (status = 404, description = "Not found")))]
pub async fn delete_image(
    State(state): State<ServerState>,
    ApiPath((id, image_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<StatusCode, JsonApiError> {
    image_service::delete_owned_image(&state.db, ImageOwner::Brand, id, image_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
