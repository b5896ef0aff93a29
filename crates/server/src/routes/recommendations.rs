use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use models::recommendation;
use service::recommendation_service;

use super::ServerState;
use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct NewRecommendationBody {
    pub user_id: Uuid,
    pub outfit_id: Uuid,
    pub text: String,
    /// 1 to 5
    pub rating: i32,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RecommendationBody {
    pub text: String,
    pub rating: i32,
    #[serde(default)]
    pub outfit_id: Option<Uuid>,
}

/// The author deleting a recommendation identifies itself with `?usuario_id=`.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RequesterQuery {
    pub usuario_id: Uuid,
}

#[utoipa::path(get, path = "/recomendaciones", tag = "recommendations",
    responses((status = 200, description = "Recommendations", body = [crate::openapi::RecommendationDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<recommendation::Model>>, JsonApiError> {
    Ok(Json(recommendation_service::list_recommendations(&state.db).await?))
}

#[utoipa::path(post, path = "/recomendaciones", tag = "recommendations", request_body = NewRecommendationBody,
    responses((status = 201, description = "Created", body = crate::openapi::RecommendationDoc), (status = 400, description = "Invalid fields or already recommended"), (status = 404, description = "Unknown user or outfit")))]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(body): ApiJson<NewRecommendationBody>,
) -> Result<(StatusCode, Json<recommendation::Model>), JsonApiError> {
    let created =
        recommendation_service::create_recommendation(&state.db, body.user_id, body.outfit_id, &body.text, body.rating).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/recomendaciones/{id}", tag = "recommendations", params(("id" = Uuid, Path, description = "Recommendation id")),
    responses((status = 200, description = "Recommendation", body = crate::openapi::RecommendationDoc), (status = 404, description = "Not found")))]
pub async fn get(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<recommendation::Model>, JsonApiError> {
    Ok(Json(recommendation_service::get_recommendation(&state.db, id).await?))
}

#[utoipa::path(put, path = "/recomendaciones/{id}", tag = "recommendations", params(("id" = Uuid, Path, description = "Recommendation id")), request_body = RecommendationBody,
    responses((status = 200, description = "Updated", body = crate::openapi::RecommendationDoc), (status = 400, description = "Invalid fields"), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<RecommendationBody>,
) -> Result<Json<recommendation::Model>, JsonApiError> {
    let updated = recommendation_service::update_recommendation(&state.db, id, &body.text, body.rating, body.outfit_id).await?;
    Ok(Json(updated))
}

#[utoipa::path(delete, path = "/recomendaciones/{id}", tag = "recommendations",
    params(("id" = Uuid, Path, description = "Recommendation id"), RequesterQuery),
    responses((status = 204, description = "Deleted"), (status = 400, description = "Requester is not the author"), (status = 404, description = "Not found")))]
pub async fn delete(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiQuery(q): ApiQuery<RequesterQuery>,
) -> Result<StatusCode, JsonApiError> {
    recommendation_service::delete_recommendation(&state.db, id, q.usuario_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
