//! Request extractors whose rejections render as `JsonApiError` bodies.
use axum::extract::{FromRequest, FromRequestParts};

use crate::errors::JsonApiError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(JsonApiError))]
pub struct ApiJson<T>(pub T);

/// Query string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(JsonApiError))]
pub struct ApiQuery<T>(pub T);

/// Path segments.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(JsonApiError))]
pub struct ApiPath<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
    use serde::Deserialize;
    use uuid::Uuid;

    #[derive(Debug, Deserialize)]
    struct Named {
        name: String,
        #[allow(dead_code)]
        email: String,
    }

    #[derive(Debug, Deserialize)]
    struct Requester {
        usuario_id: Uuid,
    }

    fn json_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/usuarios")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .expect("request")
    }

    #[tokio::test]
    async fn malformed_json_is_a_validation_error() {
        for body in ["{\"name\": \"Ana\"", "{\"name\": \"Ana\"}", "[]"] {
            let Err(e) = ApiJson::<Named>::from_request(json_request(body), &()).await else {
                panic!("accepted {body}");
            };
            assert_eq!(e.status, StatusCode::BAD_REQUEST);
            assert_eq!(e.title, "Validation Error");
            assert!(e.detail.is_some());
        }
    }

    #[tokio::test]
    async fn missing_content_type_is_rejected_as_json() {
        let req = Request::builder().method("POST").uri("/usuarios").body(Body::from("{}")).expect("request");
        let Err(e) = ApiJson::<Named>::from_request(req, &()).await else {
            panic!("accepted body without content type");
        };
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn well_formed_json_passes_through() {
        let ApiJson(named) = ApiJson::<Named>::from_request(json_request("{\"name\":\"Ana\",\"email\":\"a@b.c\"}"), &())
            .await
            .expect("valid body");
        assert_eq!(named.name, "Ana");
    }

    #[tokio::test]
    async fn missing_query_parameter_is_a_validation_error() {
        let (mut parts, _) = Request::builder().uri("/recomendaciones/x").body(()).expect("request").into_parts();
        let Err(e) = ApiQuery::<Requester>::from_request_parts(&mut parts, &()).await else {
            panic!("accepted missing usuario_id");
        };
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert!(e.detail.as_deref().is_some_and(|d| d.contains("usuario_id")));

        let id = Uuid::new_v4();
        let (mut parts, _) = Request::builder().uri(format!("/recomendaciones/x?usuario_id={id}")).body(()).expect("request").into_parts();
        let ApiQuery(q) = ApiQuery::<Requester>::from_request_parts(&mut parts, &()).await.expect("valid query");
        assert_eq!(q.usuario_id, id);
    }
}
