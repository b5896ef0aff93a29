use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use models::color;
use service::color_service;

use super::ServerState;
use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ColorBody {
    pub name: String,
    /// `#RRGGBB`
    pub hex_code: String,
}

#[utoipa::path(get, path = "/colores", tag = "colors",
    responses((status = 200, description = "Colors", body = [crate::openapi::ColorDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<color::Model>>, JsonApiError> {
    Ok(Json(color_service::list_colors(&state.db).await?))
}

#[utoipa::path(post, path = "/colores", tag = "colors", request_body = ColorBody,
    responses((status = 201, description = "Created", body = crate::openapi::ColorDoc), (status = 400, description = "Invalid hex code or duplicate name")))]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(body): ApiJson<ColorBody>,
) -> Result<(StatusCode, Json<color::Model>), JsonApiError> {
    let created = color_service::create_color(&state.db, &body.name, &body.hex_code).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/colores/{id}", tag = "colors", params(("id" = Uuid, Path, description = "Color id")),
    responses((status = 200, description = "Color", body = crate::openapi::ColorDoc), (status = 404, description = "Not found")))]
pub async fn get(State(state): State<ServerState>, ApiPath(id): ApiPath<Uuid>) -> Result<Json<color::Model>, JsonApiError> {
    Ok(Json(color_service::get_color(&state.db, id).await?))
}

#[utoipa::path(put, path = "/colores/{id}", tag = "colors", params(("id" = Uuid, Path, description = "Color id")), request_body = ColorBody,
    responses((status = 200, description = "Updated", body = crate::openapi::ColorDoc), (status = 400, description = "Invalid fields"), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<ColorBody>,
) -> Result<Json<color::Model>, JsonApiError> {
    Ok(Json(color_service::update_color(&state.db, id, &body.name, &body.hex_code).await?))
}

#[utoipa::path(delete, path = "/colores/{id}", tag = "colors", params(("id" = Uuid, Path, description = "Color id")),
    responses((status = 204, description = "Deleted"), (status = 400, description = "Garments use the color"), (status = 404, description = "Not found")))]
pub async fn delete(State(state): State<ServerState>, ApiPath(id): ApiPath<Uuid>) -> Result<StatusCode, JsonApiError> {
    color_service::delete_color(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
