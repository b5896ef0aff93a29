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
    category_service::{self, CategoryDetail},
};

use super::ServerState;
use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CategoryBody {
    pub name: String,
    /// Years, 0 to 120.
    #[serde(default)]
    pub recommended_age: Option<i32>,
}

#[utoipa::path(get, path = "/categorias", tag = "categories",
    responses((status = 200, description = "Categories", body = [crate::openapi::CategoryDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<category::Model>>, JsonApiError> {
    Ok(Json(category_service::list_categories(&state.db).await?))
}

#[utoipa::path(post, path = "/categorias", tag = "categories", request_body = CategoryBody,
    responses((status = 201, description = "Created", body = crate::openapi::CategoryDoc), (status = 400, description = "Invalid or duplicate name")))]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(body): ApiJson<CategoryBody>,
) -> Result<(StatusCode, Json<category::Model>), JsonApiError> {
    let created = category_service::create_category(&state.db, &body.name, body.recommended_age).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/categorias/{id}", tag = "categories", params(("id" = Uuid, Path, description = "Category id")),
    responses((status = 200, description = "Category with occasions", body = crate::openapi::CategoryDetailDoc), (status = 404, description = "Not found")))]
pub async fn get(State(state): State<ServerState>, ApiPath(id): ApiPath<Uuid>) -> Result<Json<CategoryDetail>, JsonApiError> {
    Ok(Json(category_service::get_category_detail(&state.db, id).await?))
}

#[utoipa::path(put, path = "/categorias/{id}", tag = "categories", params(("id" = Uuid, Path, description = "Category id")), request_body = CategoryBody,
    responses((status = 200, description = "Updated", body = crate::openapi::CategoryDoc), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<CategoryBody>,
) -> Result<Json<category::Model>, JsonApiError> {
    Ok(Json(category_service::update_category(&state.db, id, &body.name, body.recommended_age).await?))
}

#[utoipa::path(delete, path = "/categorias/{id}", tag = "categories", params(("id" = Uuid, Path, description = "Category id")),
    responses((status = 204, description = "Deleted"), (status = 400, description = "Category still in use"), (status = 404, description = "Not found")))]
pub async fn delete(State(state): State<ServerState>, ApiPath(id): ApiPath<Uuid>) -> Result<StatusCode, JsonApiError> {
    category_service::delete_category(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(get, path = "/categorias/{id}/ocasiones", tag = "categories", params(("id" = Uuid, Path, description = "Category id")),
    responses((status = 200, description = "Occasions of the category", body = [crate::openapi::OccasionDoc]), (status = 404, description = "Not found")))]
pub async fn list_occasions(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Vec<occasion::Model>>, JsonApiError> {
    Ok(Json(category_occasion_service::list_category_occasions(&state.db, id).await?))
}

#[utoipa::path(get, path = "/categorias/{id}/ocasiones/{ocasion_id}", tag = "categories",
    params(("id" = Uuid, Path, description = "Category id"), ("ocasion_id" = Uuid, Path, description = "Occasion id")),
    responses((status = 200, description = "Occasion", body = crate::openapi::OccasionDoc), (status = 400, description = "Not linked"), (status = 404, description = "Not found")))]
pub async fn get_occasion(
    State(state): State<ServerState>,
    ApiPath((id, occasion_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<Json<occasion::Model>, JsonApiError> {
    Ok(Json(category_occasion_service::get_category_occasion(&state.db, id, occasion_id).await?))
}

#[utoipa::path(post, path = "/categorias/{id}/ocasiones/{ocasion_id}", tag = "categories",
    params(("id" = Uuid, Path, description = "Category id"), ("ocasion_id" = Uuid, Path, description = "Occasion id")),
    responses((status = 200, description = "Linked", body = crate::openapi::OccasionDoc), (status = 404, description = "Not found")))]
pub async fn add_occasion(
    State(state): State<ServerState>,
    ApiPath((id, occasion_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<Json<occasion::Model>, JsonApiError> {
    Ok(Json(category_occasion_service::add_occasion_to_category(&state.db, id, occasion_id).await?))
}

#[utoipa::path(delete, path = "/categorias/{id}/ocasiones/{ocasion_id}", tag = "categories",
    params(("id" = Uuid, Path, description = "Category id"), ("ocasion_id" = Uuid, Path, description = "Occasion id")),
    responses((status = 204, description = "Unlinked"), (status = 404, description = "Not found")))]
pub async fn remove_occasion(
    State(state): State<ServerState>,
    ApiPath((id, occasion_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<StatusCode, JsonApiError> {
    category_occasion_service::remove_occasion_from_category(&state.db, id, occasion_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
