use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use models::comment;
use service::comment_service;

use super::ServerState;
use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct NewCommentBody {
    pub text: String,
    pub rating: f64,
    #[serde(default)]
    pub outfit_id: Option<Uuid>,
    #[serde(default)]
    pub garment_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CommentBody {
    pub text: String,
    pub rating: f64,
}

#[utoipa::path(get, path = "/comentarios", tag = "comments",
    responses((status = 200, description = "All comments", body = [crate::openapi::CommentDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<comment::Model>>, JsonApiError> {
    Ok(Json(comment_service::list_comments(&state.db).await?))
}

#[utoipa::path(get, path = "/comentarios/{id}", tag = "comments", params(("id" = Uuid, Path, description = "Comment id")),
    responses((status = 200, description = "Comment", body = crate::openapi::CommentDoc), (status = 404, description = "Not found")))]
pub async fn get(State(state): State<ServerState>, ApiPath(id): ApiPath<Uuid>) -> Result<Json<comment::Model>, JsonApiError> {
    Ok(Json(comment_service::get_comment(&state.db, id).await?))
}

#[utoipa::path(put, path = "/comentarios/{id}", tag = "comments", params(("id" = Uuid, Path, description = "Comment id")), request_body = CommentBody,
    responses((status = 200, description = "Updated", body = crate::openapi::CommentDoc), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<CommentBody>,
) -> Result<Json<comment::Model>, JsonApiError> {
    Ok(Json(comment_service::update_comment(&state.db, id, &body.text, body.rating).await?))
}

#[utoipa::path(delete, path = "/comentarios/{id}", tag = "comments", params(("id" = Uuid, Path, description = "Comment id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn delete(State(state): State<ServerState>, ApiPath(id): ApiPath<Uuid>) -> Result<StatusCode, JsonApiError> {
    comment_service::delete_comment(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(get, path = "/usuarios/{id}/comentarios", tag = "comments", params(("id" = Uuid, Path, description = "User id")),
    responses((status = 200, description = "Comments written by the user", body = [crate::openapi::CommentDoc]), (status = 404, description = "Unknown user")))]
pub async fn list_for_user(
    State(state): State<ServerState>,
    ApiPath(user_id): ApiPath<Uuid>,
) -> Result<Json<Vec<comment::Model>>, JsonApiError> {
    Ok(Json(comment_service::list_user_comments(&state.db, user_id).await?))
}

#[utoipa::path(post, path = "/usuarios/{id}/comentarios", tag = "comments", params(("id" = Uuid, Path, description = "User id")), request_body = NewCommentBody,
    responses((status = 201, description = "Created", body = crate::openapi::CommentDoc), (status = 400, description = "Invalid text or rating"), (status = 404, description = "Unknown user, outfit or garment")))]
pub async fn create_for_user(
    State(state): State<ServerState>,
    ApiPath(user_id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<NewCommentBody>,
) -> Result<(StatusCode, Json<comment::Model>), JsonApiError> {
    let created = comment_service::create_comment(&state.db, user_id, &body.text, body.rating, body.outfit_id, body.garment_id).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/usuarios/{id}/comentarios/{comentario_id}", tag = "comments",
    params(("id" = Uuid, Path, description = "User id"), ("comentario_id" = Uuid, Path, description = "Comment id")),
    responses((status = 200, description = "Comment", body = crate::openapi::CommentDoc), (status = 400, description = "Comment belongs to another user"), (status = 404, description = "Not found")))]
pub async fn get_for_user(
    State(state): State<ServerState>,
    ApiPath((user_id, comment_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<Json<comment::Model>, JsonApiError> {
    Ok(Json(comment_service::get_user_comment(&state.db, user_id, comment_id).await?))
}

#[utoipa::path(put, path = "/usuarios/{id}/comentarios/{comentario_id}", tag = "comments",
    params(("id" = Uuid, Path, description = "User id"), ("comentario_id" = Uuid, Path, description = "Comment id")), request_body = CommentBody,
    responses((status = 200, description = "Updated", body = crate::openapi::CommentDoc), (status = 400, description = "Invalid or not the user's comment"), (status = 404, description = "Not found")))]
pub async fn update_for_user(
    State(state): State<ServerState>,
    ApiPath((user_id, comment_id)): ApiPath<(Uuid, Uuid)>,
    ApiJson(body): ApiJson<CommentBody>,
) -> Result<Json<comment::Model>, JsonApiError> {
    let updated = comment_service::update_user_comment(&state.db, user_id, comment_id, &body.text, body.rating).await?;
    Ok(Json(updated))
}

#[utoipa::path(delete, path = "/usuarios/{id}/comentarios/{comentario_id}", tag = "comments",
    params(("id" = Uuid, Path, description = "User id"), ("comentario_id" = Uuid, Path, description = "Comment id")),
    responses((status = 204, description = "Deleted"), (status = 400, description = "Not the user's comment"), (status = 404, description = "Not found")))]
pub async fn delete_for_user(
    State(state): State<ServerState>,
    ApiPath((user_id, comment_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<StatusCode, JsonApiError> {
    comment_service::delete_user_comment(&state.db, user_id, comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
