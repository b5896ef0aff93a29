use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use models::image;
use service::image_service::{self, ImageInput};

use super::ServerState;
use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath};

/// Body for images created under an outfit, garment or brand.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ImageUrlBody {
    pub url: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ImageBody {
    pub url: String,
    #[serde(default)]
    pub outfit_id: Option<Uuid>,
    #[serde(default)]
    pub garment_id: Option<Uuid>,
    #[serde(default)]
    pub brand_id: Option<Uuid>,
}

impl From<ImageBody> for ImageInput {
    fn from(b: ImageBody) -> Self {
        ImageInput { url: b.url, outfit_id: b.outfit_id, garment_id: b.garment_id, brand_id: b.brand_id }
    }
}

#[utoipa::path(get, path = "/imagenes", tag = "images",
    responses((status = 200, description = "All images", body = [crate::openapi::ImageDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<image::Model>>, JsonApiError> {
    Ok(Json(image_service::list_images(&state.db).await?))
}

#[utoipa::path(post, path = "/imagenes", tag = "images", request_body = ImageBody,
    responses((status = 201, description = "Created", body = crate::openapi::ImageDoc), (status = 400, description = "Blank url"), (status = 404, description = "Unknown owner")))]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(body): ApiJson<ImageBody>,
) -> Result<(StatusCode, Json<image::Model>), JsonApiError> {
    let created = image_service::create_image(&state.db, body.into()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/imagenes/{id}", tag = "images", params(("id" = Uuid, Path, description = "Image id")),
    responses((status = 200, description = "Image", body = crate::openapi::ImageDoc), (status = 404, description = "Not found")))]
pub async fn get(State(state): State<ServerState>, ApiPath(id): ApiPath<Uuid>) -> Result<Json<image::Model>, JsonApiError> {
    Ok(Json(image_service::get_image(&state.db, id).await?))
}

#[utoipa::path(put, path = "/imagenes/{id}", tag = "images", params(("id" = Uuid, Path, description = "Image id")), request_body = ImageBody,
    responses((status = 200, description = "Updated", body = crate::openapi::ImageDoc), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<ImageBody>,
) -> Result<Json<image::Model>, JsonApiError> {
    Ok(Json(image_service::update_image(&state.db, id, body.into()).await?))
}

#[utoipa::path(delete, path = "/imagenes/{id}", tag = "images", params(("id" = Uuid, Path, description = "Image id")),
    responses((status = 204, description = "Deleted"), (status = 400, description = "Image still attached"), (status = 404, description = "Not found")))]
pub async fn delete(State(state): State<ServerState>, ApiPath(id): ApiPath<Uuid>) -> Result<StatusCode, JsonApiError> {
    image_service::delete_image(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
