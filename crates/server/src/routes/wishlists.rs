use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use models::{outfit, wishlist};
use service::{
    wishlist_outfit_service,
    wishlist_service::{self, WishlistDetail},
};

use super::ServerState;
use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath};

#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct NewWishlistBody {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RenameWishlistBody {
    pub name: String,
}

/// Body of the link replacement endpoints.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct IdListBody {
    pub ids: Vec<Uuid>,
}

#[utoipa::path(get, path = "/usuarios/{id}/listadeseos", tag = "wishlists", params(("id" = Uuid, Path, description = "User id")),
    responses((status = 200, description = "The user's wishlist", body = crate::openapi::WishlistDoc), (status = 404, description = "Unknown user or no wishlist")))]
pub async fn get_for_user(
    State(state): State<ServerState>,
    ApiPath(user_id): ApiPath<Uuid>,
) -> Result<Json<wishlist::Model>, JsonApiError> {
    Ok(Json(wishlist_service::get_user_wishlist(&state.db, user_id).await?))
}

/// The body is optional. An empty one means the default name; anything else must be a valid `NewWishlistBody`.
fn parse_new_wishlist(raw: &[u8]) -> Result<NewWishlistBody, JsonApiError> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(NewWishlistBody::default());
    }
    serde_json::from_slice(raw)
        .map_err(|e| JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(format!("invalid wishlist body: {e}"))))
}

#[utoipa::path(post, path = "/usuarios/{id}/listadeseos", tag = "wishlists", params(("id" = Uuid, Path, description = "User id")), request_body = NewWishlistBody,
    responses((status = 201, description = "Created", body = crate::openapi::WishlistDoc), (status = 400, description = "User already has a wishlist"), (status = 404, description = "Unknown user")))]
pub async fn create_for_user(
    State(state): State<ServerState>,
    ApiPath(user_id): ApiPath<Uuid>,
    body: Bytes,
) -> Result<(StatusCode, Json<wishlist::Model>), JsonApiError> {
    let body = parse_new_wishlist(&body)?;
    let created = wishlist_service::create_wishlist(&state.db, user_id, body.name.as_deref()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/listasdeseos", tag = "wishlists",
    responses((status = 200, description = "All wishlists", body = [crate::openapi::WishlistDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<wishlist::Model>>, JsonApiError> {
    Ok(Json(wishlist_service::list_wishlists(&state.db).await?))
}

#[utoipa::path(get, path = "/listasdeseos/{id}", tag = "wishlists", params(("id" = Uuid, Path, description = "Wishlist id")),
    responses((status = 200, description = "Wishlist with its outfits", body = crate::openapi::WishlistDetailDoc), (status = 404, description = "Not found")))]
pub async fn get(State(state): State<ServerState>, ApiPath(id): ApiPath<Uuid>) -> Result<Json<WishlistDetail>, JsonApiError> {
    Ok(Json(wishlist_service::get_wishlist_detail(&state.db, id).await?))
}

#[utoipa::path(put, path = "/listasdeseos/{id}", tag = "wishlists", params(("id" = Uuid, Path, description = "Wishlist id")), request_body = RenameWishlistBody,
    responses((status = 200, description = "Renamed", body = crate::openapi::WishlistDoc), (status = 404, description = "Not found")))]
pub async fn rename(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<RenameWishlistBody>,
) -> Result<Json<wishlist::Model>, JsonApiError> {
    Ok(Json(wishlist_service::rename_wishlist(&state.db, id, &body.name).await?))
}

#[utoipa::path(delete, path = "/listasdeseos/{id}", tag = "wishlists", params(("id" = Uuid, Path, description = "Wishlist id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn delete(State(state): State<ServerState>, ApiPath(id): ApiPath<Uuid>) -> Result<StatusCode, JsonApiError> {
    wishlist_service::delete_wishlist(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(get, path = "/listasdeseos/{id}/outfits", tag = "wishlists", params(("id" = Uuid, Path, description = "Wishlist id")),
    responses((status = 200, description = "Outfits in the wishlist", body = [crate::openapi::OutfitDoc]), (status = 404, description = "Not found")))]
pub async fn list_outfits(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Vec<outfit::Model>>, JsonApiError> {
    Ok(Json(wishlist_outfit_service::list_outfits(&state.db, id).await?))
}

#[utoipa::path(put, path = "/listasdeseos/{id}/outfits", tag = "wishlists", params(("id" = Uuid, Path, description = "Wishlist id")), request_body = IdListBody,
    responses((status = 200, description = "Outfits after replacement", body = [crate::openapi::OutfitDoc]), (status = 404, description = "Unknown wishlist or outfit")))]
pub async fn replace_outfits(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<IdListBody>,
) -> Result<Json<Vec<outfit::Model>>, JsonApiError> {
    Ok(Json(wishlist_outfit_service::replace_outfits(&state.db, id, &body.ids).await?))
}

#[utoipa::path(get, path = "/listasdeseos/{id}/outfits/{outfit_id}", tag = "wishlists",
    params(("id" = Uuid, Path, description = "Wishlist id"), ("outfit_id" = Uuid, Path, description = "Outfit id")),
    responses((status = 200, description = "Outfit", body = crate::openapi::OutfitDoc), (status = 400, description = "Not in the wishlist"), (status = 404, description = "Not found")))]
pub async fn get_outfit(
    State(state): State<ServerState>,
    ApiPath((id, outfit_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<Json<outfit::Model>, JsonApiError> {
    Ok(Json(wishlist_outfit_service::get_outfit(&state.db, id, outfit_id).await?))
}

#[utoipa::path(post, path = "/listasdeseos/{id}/outfits/{outfit_id}", tag = "wishlists",
    params(("id" = Uuid, Path, description = "Wishlist id"), ("outfit_id" = Uuid, Path, description = "Outfit id")),
    responses((status = 200, description = "Added", body = crate::openapi::OutfitDoc), (status = 400, description = "Already in the wishlist"), (status = 404, description = "Not found")))]
pub async fn add_outfit(
    State(state): State<ServerState>,
    ApiPath((id, outfit_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<Json<outfit::Model>, JsonApiError> {
    Ok(Json(wishlist_outfit_service::add_outfit(&state.db, id, outfit_id).await?))
}

#[utoipa::path(delete, path = "/listasdeseos/{id}/outfits/{outfit_id}", tag = "wishlists",
    params(("id" = Uuid, Path, description = "Wishlist id"), ("outfit_id" = Uuid, Path, description = "Outfit id")),
    responses((status = 204, description = "Removed"), (status = 404, description = "Not found")))]
pub async fn remove_outfit(
    State(state): State<ServerState>,
    ApiPath((id, outfit_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<StatusCode, JsonApiError> {
    wishlist_outfit_service::remove_outfit(&state.db, id, outfit_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_wishlist_body_uses_default() {
        for raw in [&b""[..], b"  \n"] {
            assert!(parse_new_wishlist(raw).is_ok_and(|b| b.name.is_none()));
        }
        assert!(parse_new_wishlist(b"{}").is_ok_and(|b| b.name.is_none()));
        assert!(parse_new_wishlist(br#"{"name":"Fiesta"}"#).is_ok_and(|b| b.name.as_deref() == Some("Fiesta")));
    }

    #[test]
    fn malformed_wishlist_body_is_rejected() {
        for raw in [&b"{\"name\":"[..], br#"{"name": 3}"#, b"not json"] {
            let e = parse_new_wishlist(raw).err();
            assert!(e.is_some_and(|e| e.status == StatusCode::BAD_REQUEST && e.title == "Validation Error"));
        }
    }
}
