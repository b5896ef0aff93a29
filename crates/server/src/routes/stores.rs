use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::{brand, store};
use service::store_service::{self, StoreInput};

use super::ServerState;
use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct StoreBody {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub opening_hours: Option<String>,
    pub location: String,
    /// When present on update, replaces the brands sold by the store.
    #[serde(default)]
    pub brand_ids: Option<Vec<Uuid>>,
}

impl From<StoreBody> for StoreInput {
    fn from(b: StoreBody) -> Self {
        StoreInput {
            name: b.name,
            address: b.address,
            opening_hours: b.opening_hours,
            location: b.location,
            brand_ids: b.brand_ids,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StoreView {
    #[serde(flatten)]
    pub store: store::Model,
    pub brands: Vec<brand::Model>,
}

#[utoipa::path(get, path = "/tiendas", tag = "stores",
    responses((status = 200, description = "Stores", body = [crate::openapi::StoreDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<store::Model>>, JsonApiError> {
    Ok(Json(store_service::list_stores(&state.db).await?))
}

#[utoipa::path(post, path = "/tiendas", tag = "stores", request_body = StoreBody,
    responses((status = 201, description = "Created", body = crate::openapi::StoreDoc), (status = 400, description = "Invalid fields or duplicate name"), (status = 404, description = "Unknown brand")))]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(body): ApiJson<StoreBody>,
) -> Result<(StatusCode, Json<store::Model>), JsonApiError> {
    let created = store_service::create_store(&state.db, body.into()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/tiendas/{id}", tag = "stores", params(("id" = Uuid, Path, description = "Store id")),
    responses((status = 200, description = "Store with the brands it sells", body = crate::openapi::StoreDetailDoc), (status = 404, description = "Not found")))]
pub async fn get(State(state): State<ServerState>, ApiPath(id): ApiPath<Uuid>) -> Result<Json<StoreView>, JsonApiError> {
    let store = store_service::get_store(&state.db, id).await?;
    let brands = store_service::list_store_brands(&state.db, id).await?;
    Ok(Json(StoreView { store, brands }))
}

#[utoipa::path(put, path = "/tiendas/{id}", tag = "stores", params(("id" = Uuid, Path, description = "Store id")), request_body = StoreBody,
    responses((status = 200, description = "Updated", body = crate::openapi::StoreDoc), (status = 400, description = "Invalid fields or a brand would lose its last store"), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<StoreBody>,
) -> Result<Json<store::Model>, JsonApiError> {
    Ok(Json(store_service::update_store(&state.db, id, body.into()).await?))
}

#[utoipa::path(delete, path = "/tiendas/{id}", tag = "stores", params(("id" = Uuid, Path, description = "Store id")),
    responses((status = 204, description = "Deleted"), (status = 400, description = "A brand would be left without stores"), (status = 404, description = "Not found")))]
pub async fn delete(State(state): State<ServerState>, ApiPath(id): ApiPath<Uuid>) -> Result<StatusCode, JsonApiError> {
    store_service::delete_store(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
