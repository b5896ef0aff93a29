use axum::{
    routing::{get, put},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::pagination::Pagination;

pub mod brands;
pub mod categories;
pub mod colors;
pub mod comments;
pub mod garments;
pub mod images;
pub mod occasions;
pub mod outfits;
pub mod recommendations;
pub mod stores;
pub mod users;
pub mod wishlists;

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

/// `?page=&per_page=` on paginated listings. Both absent means the full list.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl PageQuery {
    pub fn pagination(&self) -> Option<Pagination> {
        Pagination::from_query(self.page, self.per_page)
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(crate::openapi::ApiDoc::openapi())
}

/// Build the full application router
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    let people = Router::new()
        .route("/usuarios", get(users::list).post(users::create))
        .route("/usuarios/:id", get(users::get).put(users::update).delete(users::delete))
        .route("/usuarios/:id/comentarios", get(comments::list_for_user).post(comments::create_for_user))
        .route(
            "/usuarios/:id/comentarios/:comentario_id",
            get(comments::get_for_user).put(comments::update_for_user).delete(comments::delete_for_user),
        )
        .route("/usuarios/:id/listadeseos", get(wishlists::get_for_user).post(wishlists::create_for_user))
        .route("/comentarios", get(comments::list))
        .route("/comentarios/:id", get(comments::get).put(comments::update).delete(comments::delete))
        .route("/listasdeseos", get(wishlists::list))
        .route("/listasdeseos/:id", get(wishlists::get).put(wishlists::rename).delete(wishlists::delete))
        .route("/listasdeseos/:id/outfits", get(wishlists::list_outfits).put(wishlists::replace_outfits))
        .route(
            "/listasdeseos/:id/outfits/:outfit_id",
            get(wishlists::get_outfit).post(wishlists::add_outfit).delete(wishlists::remove_outfit),
        )
        .route("/recomendaciones", get(recommendations::list).post(recommendations::create))
        .route(
            "/recomendaciones/:id",
            get(recommendations::get).put(recommendations::update).delete(recommendations::delete),
        );

    let looks = Router::new()
        .route("/outfits", get(outfits::list).post(outfits::create))
        .route("/outfits/:id", get(outfits::get).put(outfits::update).delete(outfits::delete))
        .route("/outfits/:id/prendas", get(outfits::list_garments).put(outfits::replace_garments))
        .route(
            "/outfits/:id/prendas/:prenda_id",
            get(outfits::get_garment).post(outfits::add_garment).delete(outfits::remove_garment),
        )
        .route("/outfits/:id/listasdeseos", get(outfits::list_wishlists).put(outfits::replace_wishlists))
        .route(
            "/outfits/:id/listasdeseos/:lista_id",
            get(outfits::get_wishlist).post(outfits::add_wishlist).delete(outfits::remove_wishlist),
        )
        .route("/outfits/:id/imagenes", get(outfits::list_images).post(outfits::create_image))
        .route(
            "/outfits/:id/imagenes/:imagen_id",
            get(outfits::get_image).put(outfits::update_image).delete(outfits::delete_image),
        )
        .route("/prendas", get(garments::list).post(garments::create))
        .route("/prendas/:id", get(garments::get).put(garments::update).delete(garments::delete))
        .route("/prendas/:id/outfits", get(garments::list_outfits).put(garments::replace_outfits))
        .route(
            "/prendas/:id/outfits/:outfit_id",
            get(garments::get_outfit).post(garments::add_outfit).delete(garments::remove_outfit),
        )
        .route("/prendas/:id/imagenes", get(garments::list_images).post(garments::create_image))
        .route(
            "/prendas/:id/imagenes/:imagen_id",
            get(garments::get_image).put(garments::update_image).delete(garments::delete_image),
        )
        .route("/imagenes", get(images::list).post(images::create))
        .route("/imagenes/:id", get(images::get).put(images::update).delete(images::delete));

    let catalog = Router::new()
        .route("/marcas", get(brands::list).post(brands::create))
        .route("/marcas/:id", get(brands::get).put(brands::update).delete(brands::delete))
        .route("/marcas/:id/imagenes", get(brands::list_images).post(brands::create_image))
        .route(
            "/marcas/:id/imagenes/:imagen_id",
            get(brands::get_image).put(brands::update_image).delete(brands::delete_image),
        )
        .route("/tiendas", get(stores::list).post(stores::create))
        .route("/tiendas/:id", get(stores::get).put(stores::update).delete(stores::delete))
        .route("/categorias", get(categories::list).post(categories::create))
        .route("/categorias/:id", get(categories::get).put(categories::update).delete(categories::delete))
        .route("/categorias/:id/ocasiones", get(categories::list_occasions))
        .route(
            "/categorias/:id/ocasiones/:ocasion_id",
            get(categories::get_occasion).post(categories::add_occasion).delete(categories::remove_occasion),
        )
        .route("/ocasiones", get(occasions::list).post(occasions::create))
        .route("/ocasiones/:id", get(occasions::get).put(occasions::update).delete(occasions::delete))
        .route("/ocasiones/:id/categorias", get(occasions::list_categories))
        .route(
            "/ocasiones/:id/categorias/:categoria_id",
            get(occasions::get_category).post(occasions::add_category).delete(occasions::remove_category),
        )
        .route("/colores", get(colors::list).post(colors::create))
        .route("/colores/:id", put(colors::update).get(colors::get).delete(colors::delete));

    public
        .merge(people)
        .merge(looks)
        .merge(catalog)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one span per request with method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and the like at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
