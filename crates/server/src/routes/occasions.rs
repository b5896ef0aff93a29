use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use models::{category, occasion};
use service::{
    category_occasion_service,
    occasion_service::{self, OccasionDetail},
};

use super::ServerState;
use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct OccasionBody {
    pub name: String,
}

#[utoipa::path(get, path = "/ocasiones", tag = "occasions",
    responses((status = 200, description = "Occasions", body = [crate::openapi::OccasionDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<occasion::Model>>, JsonApiError> {
    Ok(Json(occasion_service::list_occasions(&state.db).await?))
}

#[utoipa::path(post, path = "/ocasiones", tag = "occasions", request_body = OccasionBody,
    responses((status = 201, description = "Created", body = crate::openapi::OccasionDoc), (status = 400, description = "Invalid or duplicate name")))]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(body): ApiJson<OccasionBody>,
) -> Result<(StatusCode, Json<occasion::Model>), JsonApiError> {
    let created = occasion_service::create_occasion(&state.db, &body.name).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/ocasiones/{id}", tag = "occasions", params(("id" = Uuid, Path, description = "Occasion id")),
    responses((status = 200, description = "Occasion with categories", body = crate::openapi::OccasionDetailDoc), (status = 404, description = "Not found")))]
pub async fn get(State(state): State<ServerState>, ApiPath(id): ApiPath<Uuid>) -> Result<Json<OccasionDetail>, JsonApiError> {
    Ok(Json(occasion_service::get_occasion_detail(&state.db, id).await?))
}

#[utoipa::path(put, path = "/ocasiones/{id}", tag = "occasions", params(("id" = Uuid, Path, description = "Occasion id")), request_body = OccasionBody,
    responses((status = 200, description = "Updated", body = crate::openapi::OccasionDoc), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<OccasionBody>,
) -> Result<Json<occasion::Model>, JsonApiError> {
    Ok(Json(occasion_service::update_occasion(&state.db, id, &body.name).await?))
}

#[utoipa::path(delete, path = "/ocasiones/{id}", tag = "occasions", params(("id" = Uuid, Path, description = "Occasion id")),
    responses((status = 204, description = "Deleted"), (status = 400, description = "Categories still linked"), (status = 404, description = "Not found")))]
pub async fn delete(State(state): State<ServerState>, ApiPath(id): ApiPath<Uuid>) -> Result<StatusCode, JsonApiError> {
    occasion_service::delete_occasion(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(get, path = "/ocasiones/{id}/categorias", tag = "occasions", params(("id" = Uuid, Path, description = "Occasion id")),
    responses((status = 200, description = "Categories of the occasion", body = [crate::openapi::CategoryDoc]), (status = 404, description = "Not found")))]
pub async fn list_categories(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Vec<category::Model>>, JsonApiError> {
    Ok(Json(category_occasion_service::list_occasion_categories(&state.db, id).await?))
}

#[utoipa::path(get, path = "/ocasiones/{id}/categorias/{categoria_id}", tag = "occasions",
    params(("id" = Uuid, Path, description = "Occasion id"), ("categoria_id" = Uuid, Path, description = "Category id")),
    responses((status = 200, description = "Category", body = crate::openapi::CategoryDoc), (status = 400, description = "Not linked"), (status = 404, description = "Not found")))]
pub async fn get_category(
    State(state): State<ServerState>,
    ApiPath((id, category_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<Json<category::Model>, JsonApiError> {
    Ok(Json(category_occasion_service::get_occasion_category(&state.db, id, category_id).await?))
}

#[utoipa::path(post, path = "/ocasiones/{id}/categorias/{categoria_id}", tag = "occasions",
    params(("id" = Uuid, Path, description = "Occasion id"), ("categoria_id" = Uuid, Path, description = "Category id")),
    responses((status = 200, description = "Linked", body = crate::openapi::CategoryDoc), (status = 404, description = "Not found")))]
pub async fn add_category(
    State(state): State<ServerState>,
    ApiPath((id, category_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<Json<category::Model>, JsonApiError> {
    Ok(Json(category_occasion_service::add_category_to_occasion(&state.db, id, category_id).await?))
}

#[utoipa::path(delete, path = "/ocasiones/{id}/categorias/{categoria_id}", tag = "occasions",
    params(("id" = Uuid, Path, description = "Occasion id"), ("categoria_id" = Uuid, Path, description = "Category id")),
    responses((status = 204, description = "Unlinked"), (status = 404, description = "Not found")))]
pub async fn remove_category(
    State(state): State<ServerState>,
    ApiPath((id, category_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<StatusCode, JsonApiError> {
    category_occasion_service::remove_category_from_occasion(&state.db, id, category_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
