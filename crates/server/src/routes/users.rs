use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use models::user;
use service::user_service::{self, UserDetail};

use super::{PageQuery, ServerState};
use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UserBody {
    pub name: String,
    pub email: String,
}

#[utoipa::path(get, path = "/usuarios", tag = "users", params(PageQuery),
    responses((status = 200, description = "Users", body = [crate::openapi::UserDoc])))]
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(q): ApiQuery<PageQuery>,
) -> Result<Json<Vec<user::Model>>, JsonApiError> {
    Ok(Json(user_service::list_users(&state.db, q.pagination()).await?))
}

#[utoipa::path(post, path = "/usuarios", tag = "users", request_body = UserBody,
    responses((status = 201, description = "Created", body = crate::openapi::UserDoc), (status = 400, description = "Invalid or duplicate email")))]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(body): ApiJson<UserBody>,
) -> Result<(StatusCode, Json<user::Model>), JsonApiError> {
    let created = user_service::create_user(&state.db, &body.name, &body.email).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/usuarios/{id}", tag = "users", params(("id" = Uuid, Path, description = "User id")),
    responses((status = 200, description = "User with wishlist and comments", body = crate::openapi::UserDetailDoc), (status = 404, description = "Not found")))]
pub async fn get(State(state): State<ServerState>, ApiPath(id): ApiPath<Uuid>) -> Result<Json<UserDetail>, JsonApiError> {
    Ok(Json(user_service::get_user_detail(&state.db, id).await?))
}

#[utoipa::path(put, path = "/usuarios/{id}", tag = "users", params(("id" = Uuid, Path, description = "User id")), request_body = UserBody,
    responses((status = 200, description = "Updated", body = crate::openapi::UserDoc), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<UserBody>,
) -> Result<Json<user::Model>, JsonApiError> {
    Ok(Json(user_service::update_user(&state.db, id, &body.name, &body.email).await?))
}

#[utoipa::path(delete, path = "/usuarios/{id}", tag = "users", params(("id" = Uuid, Path, description = "User id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn delete(State(state): State<ServerState>, ApiPath(id): ApiPath<Uuid>) -> Result<StatusCode, JsonApiError> {
    user_service::delete_user(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
