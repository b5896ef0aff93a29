use std::net::SocketAddr;

use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use uuid::Uuid;

struct TestApp {
    base_url: String,
    client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post(&self, path: &str, body: Value) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.post(self.url(path)).json(&body).send().await?;
        let status = res.status();
        Ok((status, res.json::<Value>().await.unwrap_or(Value::Null)))
    }

    async fn post_raw(&self, path: &str, body: &'static str) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self
            .client
            .post(self.url(path))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let status = res.status();
        Ok((status, res.json::<Value>().await.unwrap_or(Value::Null)))
    }

    async fn get(&self, path: &str) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.get(self.url(path)).send().await?;
        let status = res.status();
        Ok((status, res.json::<Value>().await.unwrap_or(Value::Null)))
    }

    async fn put(&self, path: &str, body: Value) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.put(self.url(path)).json(&body).send().await?;
        let status = res.status();
        Ok((status, res.json::<Value>().await.unwrap_or(Value::Null)))
    }

    async fn delete(&self, path: &str) -> anyhow::Result<HttpStatusCode> {
        Ok(self.client.delete(self.url(path)).send().await?.status())
    }
}

/// Every test gets its own in-memory database and server on an ephemeral port.
async fn start_server() -> anyhow::Result<TestApp> {
    let db = models::db::connect_sqlite_memory().await?;
    migration::Migrator::up(&db, None).await?;

    let app = server::startup::app(db);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, client: reqwest::Client::new() })
}

fn id_of(v: &Value) -> String {
    v["id"].as_str().unwrap_or_default().to_string()
}

async fn seed_category(app: &TestApp, name: &str) -> anyhow::Result<String> {
    let (status, category) = app.post("/categorias", json!({"name": name})).await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    Ok(id_of(&category))
}

/// Store, brand, category, color and one garment. Returns the garment id.
async fn seed_garment(app: &TestApp, name: &str) -> anyhow::Result<String> {
    let (_, store) = app
        .post("/tiendas", json!({"name": format!("{name} shop"), "address": "Calle 1", "location": "Centro"}))
        .await?;
    let (_, brand) = app.post("/marcas", json!({"name": format!("{name} brand"), "store_ids": [id_of(&store)]})).await?;
    let category_id = seed_category(app, &format!("{name} category")).await?;
    let (_, color) = app.post("/colores", json!({"name": format!("{name} color"), "hex_code": "#112233"})).await?;
    let (status, garment) = app
        .post(
            "/prendas",
            json!({
                "name": name,
                "garment_type": "shirt",
                "price": 40.0,
                "brand_id": id_of(&brand),
                "category_id": category_id,
                "color_id": id_of(&color)
            }),
        )
        .await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    Ok(id_of(&garment))
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (status, body) = app.get("/health").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document_served() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (status, body) = app.get("/api-docs/openapi.json").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert!(body["paths"]["/usuarios"].is_object());
    Ok(())
}

#[tokio::test]
async fn e2e_user_crud() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (status, user) = app.post("/usuarios", json!({"name": "Ana", "email": "Ana@Example.com"})).await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    assert_eq!(user["email"], "ana@example.com");
    let id = id_of(&user);

    let (status, _) = app.post("/usuarios", json!({"name": "Other", "email": "ana@example.com"})).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);

    let (status, detail) = app.get(&format!("/usuarios/{id}")).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(detail["name"], "Ana");
    assert!(detail["comments"].as_array().is_some_and(|c| c.is_empty()));

    let (status, updated) = app.put(&format!("/usuarios/{id}"), json!({"name": "Ana B", "email": "ana@example.com"})).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(updated["name"], "Ana B");

    let (status, list) = app.get("/usuarios?page=1&per_page=10").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(list.as_array().map(|l| l.len()), Some(1));

    assert_eq!(app.delete(&format!("/usuarios/{id}")).await?, HttpStatusCode::NO_CONTENT);
    let (status, _) = app.get(&format!("/usuarios/{id}")).await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_error_bodies() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (status, body) = app.get(&format!("/outfits/{}", Uuid::new_v4())).await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
    assert!(body["detail"].as_str().is_some_and(|d| d.contains("outfit")));

    let (status, body) = app.post("/colores", json!({"name": "Rojo", "hex_code": "red"})).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");
    Ok(())
}

#[tokio::test]
async fn e2e_outfit_requires_garments() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (status, _) = app.post("/outfits", json!({"name": "Empty", "garment_ids": []})).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);

    let garment_id = seed_garment(&app, "Linen shirt").await?;
    let category_id = seed_category(&app, "Summer").await?;
    let (status, body) = app.post("/outfits", json!({"name": "Summer", "garment_ids": [garment_id]})).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");
    let (status, outfit) = app
        .post("/outfits", json!({"name": "Summer", "category_id": category_id, "garment_ids": [garment_id]}))
        .await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    let outfit_id = id_of(&outfit);

    let (status, detail) = app.get(&format!("/outfits/{outfit_id}")).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(detail["garments"][0]["id"], garment_id.as_str());

    // garment in use cannot be deleted
    assert_eq!(app.delete(&format!("/prendas/{garment_id}")).await?, HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_associations() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (_, category) = app.post("/categorias", json!({"name": "Formal", "recommended_age": 18})).await?;
    let (_, occasion) = app.post("/ocasiones", json!({"name": "Wedding"})).await?;
    let (cid, oid) = (id_of(&category), id_of(&occasion));

    let path = format!("/categorias/{cid}/ocasiones/{oid}");
    let (status, _) = app.get(&path).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    let (status, _) = app.post(&path, json!({})).await?;
    assert_eq!(status, HttpStatusCode::OK);
    let (status, _) = app.post(&path, json!({})).await?;
    assert_eq!(status, HttpStatusCode::OK);

    let (_, listed) = app.get(&format!("/ocasiones/{oid}/categorias")).await?;
    assert_eq!(listed.as_array().map(|l| l.len()), Some(1));

    // linked occasion blocks deletion until unlinked
    assert_eq!(app.delete(&format!("/ocasiones/{oid}")).await?, HttpStatusCode::BAD_REQUEST);
    assert_eq!(app.delete(&path).await?, HttpStatusCode::NO_CONTENT);
    assert_eq!(app.delete(&format!("/ocasiones/{oid}")).await?, HttpStatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn e2e_wishlist_flow() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (_, user) = app.post("/usuarios", json!({"name": "Luis", "email": "luis@example.com"})).await?;
    let uid = id_of(&user);
    let (status, wishlist) = app.post(&format!("/usuarios/{uid}/listadeseos"), json!({})).await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    assert_eq!(wishlist["name"], "My wishlist");
    let wid = id_of(&wishlist);

    let (status, _) = app.post(&format!("/usuarios/{uid}/listadeseos"), json!({"name": "Again"})).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);

    let garment_id = seed_garment(&app, "Coat").await?;
    let category_id = seed_category(&app, "Winter").await?;
    let (_, outfit) = app
        .post("/outfits", json!({"name": "Winter", "category_id": category_id, "garment_ids": [garment_id]}))
        .await?;
    let oid = id_of(&outfit);

    let (status, _) = app.post(&format!("/listasdeseos/{wid}/outfits/{oid}"), json!({})).await?;
    assert_eq!(status, HttpStatusCode::OK);
    let (status, _) = app.post(&format!("/listasdeseos/{wid}/outfits/{oid}"), json!({})).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);

    let (status, wishlists) = app.get(&format!("/outfits/{oid}/listasdeseos")).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(wishlists[0]["id"], wid.as_str());

    let (status, replaced) = app.put(&format!("/listasdeseos/{wid}/outfits"), json!({"ids": []})).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(replaced.as_array().map(|l| l.len()), Some(0));
    Ok(())
}

#[tokio::test]
async fn e2e_recommendation_delete_requires_author() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (_, author) = app.post("/usuarios", json!({"name": "Eva", "email": "eva@example.com"})).await?;
    let (_, other) = app.post("/usuarios", json!({"name": "Max", "email": "max@example.com"})).await?;
    let garment_id = seed_garment(&app, "Boots").await?;
    let category_id = seed_category(&app, "Outdoor").await?;
    let (_, outfit) = app
        .post("/outfits", json!({"name": "Hiking", "category_id": category_id, "garment_ids": [garment_id]}))
        .await?;

    let body = json!({"user_id": id_of(&author), "outfit_id": id_of(&outfit), "text": "Great", "rating": 5});
    let (status, rec) = app.post("/recomendaciones", body.clone()).await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    let (status, _) = app.post("/recomendaciones", body).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);

    let rid = id_of(&rec);
    let status = app.delete(&format!("/recomendaciones/{rid}?usuario_id={}", id_of(&other))).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    let status = app.delete(&format!("/recomendaciones/{rid}?usuario_id={}", id_of(&author))).await?;
    assert_eq!(status, HttpStatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn e2e_owned_images() -> anyhow::Result<()> {
    let app = start_server().await?;
    let garment_id = seed_garment(&app, "Scarf").await?;

    let (status, img) = app
        .post(&format!("/prendas/{garment_id}/imagenes"), json!({"url": "https://cdn.example.com/scarf.png"}))
        .await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    let iid = id_of(&img);

    // attached images go through their owner
    assert_eq!(app.delete(&format!("/imagenes/{iid}")).await?, HttpStatusCode::BAD_REQUEST);
    assert_eq!(app.delete(&format!("/prendas/{garment_id}/imagenes/{iid}")).await?, HttpStatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn e2e_garment_requires_color() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (_, store) = app.post("/tiendas", json!({"name": "Plain shop", "address": "Calle 2", "location": "Centro"})).await?;
    let (_, brand) = app.post("/marcas", json!({"name": "Plain", "store_ids": [id_of(&store)]})).await?;
    let category_id = seed_category(&app, "Basics").await?;

    let body = json!({"name": "Tee", "garment_type": "shirt", "price": 10.0, "brand_id": id_of(&brand), "category_id": category_id});
    let (status, err) = app.post("/prendas", body).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(err["error"], "Validation Error");
    assert!(err["detail"].as_str().is_some_and(|d| d.contains("color_id")));

    let (_, list) = app.get("/prendas").await?;
    assert_eq!(list.as_array().map(|l| l.len()), Some(0));
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_requests_get_json_errors() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (status, body) = app.post("/usuarios", json!({"name": "Ana"})).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");
    assert!(body["detail"].as_str().is_some_and(|d| d.contains("email")));

    let (status, body) = app.post_raw("/usuarios", "{\"name\": ").await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");

    let (status, body) = app.get("/usuarios/not-a-uuid").await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");

    let (status, body) = app.get("/usuarios?page=first").await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");

    let res = app.client.delete(app.url(&format!("/recomendaciones/{}", Uuid::new_v4()))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert!(body["detail"].as_str().is_some_and(|d| d.contains("usuario_id")));
    Ok(())
}

#[tokio::test]
async fn e2e_wishlist_body_is_optional_but_checked() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (_, user) = app.post("/usuarios", json!({"name": "Sara", "email": "sara@example.com"})).await?;
    let uid = id_of(&user);

    let (status, body) = app.post_raw(&format!("/usuarios/{uid}/listadeseos"), "{\"name\": 42}").await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");
    let (status, _) = app.get(&format!("/usuarios/{uid}/listadeseos")).await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);

    let res = app.client.post(app.url(&format!("/usuarios/{uid}/listadeseos"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    assert_eq!(res.json::<Value>().await?["name"], "My wishlist");
    Ok(())
}
