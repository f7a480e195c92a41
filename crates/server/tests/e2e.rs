use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use migration::MigratorTrait;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode as HttpStatusCode;
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use configs::UploadConfig;
use models::db::{connect_with_config, DatabaseConfig};
use server::{routes, state::ServerState};
use service::assets::DiskAssetStore;

struct TestApp {
    base_url: String,
    db: DatabaseConnection,
    upload_dir: PathBuf,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn upload_count(&self) -> usize {
        let mut n = 0;
        if let Ok(mut entries) = tokio::fs::read_dir(&self.upload_dir).await {
            while let Ok(Some(_)) = entries.next_entry().await { n += 1; }
        }
        n
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.upload_dir);
    }
}

async fn start_server() -> anyhow::Result<TestApp> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;

    let upload_dir = std::env::temp_dir().join(format!("hotel-e2e-{}", Uuid::new_v4()));
    tokio::fs::create_dir_all(&upload_dir).await?;
    let uploads = UploadConfig {
        dir: upload_dir.to_string_lossy().into_owned(),
        public_prefix: "/uploads".into(),
        max_bytes: 1024 * 1024,
    };

    let assets = Arc::new(DiskAssetStore::new(&upload_dir, &uploads.public_prefix));
    let state = ServerState::new(db.clone(), assets);
    let app: Router = routes::build_router(state, &uploads, CorsLayer::very_permissive());

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, db, upload_dir })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

fn owner_form(name: &str, image: Option<(&str, &[u8])>) -> anyhow::Result<Form> {
    let mut form = Form::new().text("name", name.to_string()).text("info", "Family-run since 1998");
    if let Some((file_name, bytes)) = image {
        let part = Part::bytes(bytes.to_vec()).file_name(file_name.to_string()).mime_str("image/png")?;
        form = form.part("image", part);
    }
    Ok(form)
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(app.url("/health")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document_served() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(app.url("/api-docs/openapi.json")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let doc = res.json::<Value>().await?;
    assert!(doc["paths"]["/api/rooms/{id}/price"].is_object());
    Ok(())
}

#[tokio::test]
async fn e2e_room_price_update() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let room = models::room::create(&app.db, "Sea View", "120", Some("/img/sea.jpg")).await?;

    let res = c.get(app.url("/api/rooms")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let rooms = res.json::<Vec<Value>>().await?;
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["booked"], false);

    let res = c
        .put(app.url(&format!("/api/rooms/{}/price", room.id)))
        .json(&json!({"price": "150"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["price"], "150");
    assert_eq!(body["id"], room.id.to_string());
    assert_eq!(body["name"], "Sea View");
    assert_eq!(body["image"], "/img/sea.jpg");
    assert_eq!(body["booked"], false);
    assert!(body["createdAt"].is_string());

    // numeric prices are stored as text
    let res = c
        .put(app.url(&format!("/api/rooms/{}/price", room.id)))
        .json(&json!({"price": 175}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?["price"], "175");
    Ok(())
}

#[tokio::test]
async fn e2e_room_price_errors() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let room = models::room::create(&app.db, "Garden", "90", None).await?;

    // empty object, blank price and no body at all
    for req in [
        c.put(app.url(&format!("/api/rooms/{}/price", room.id))).json(&json!({})),
        c.put(app.url(&format!("/api/rooms/{}/price", room.id))).json(&json!({"price": "  "})),
        c.put(app.url(&format!("/api/rooms/{}/price", room.id))),
    ] {
        let res = req.send().await?;
        assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
        let body = res.json::<Value>().await?;
        assert_eq!(body["message"], "price is required");
    }
    let stored = models::room::Entity::find_by_id(room.id).one(&app.db).await?.unwrap();
    assert_eq!(stored, room);

    let res = c
        .put(app.url(&format!("/api/rooms/{}/price", Uuid::new_v4())))
        .json(&json!({"price": "150"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = c.put(app.url("/api/rooms/not-an-id/price")).json(&json!({"price": "150"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert!(res.json::<Value>().await?["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn e2e_reviews_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    for body in [json!({"name": "", "text": "Great stay"}), json!({"name": "Alice"}), json!({})] {
        let res = c.post(app.url("/api/reviews")).json(&body).send().await?;
        assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    }
    let res = c.get(app.url("/api/reviews")).send().await?;
    assert!(res.json::<Vec<Value>>().await?.is_empty());

    let res = c.post(app.url("/api/reviews")).json(&json!({"name": "Bob", "text": "Quiet rooms"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let res = c.post(app.url("/api/reviews")).json(&json!({"name": "Alice", "text": "Great stay"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<Value>().await?;
    assert_eq!(created["name"], "Alice");
    assert_eq!(created["text"], "Great stay");
    assert!(created["id"].as_str().and_then(|s| Uuid::parse_str(s).ok()).is_some());
    assert!(created["createdAt"].is_string());

    let listed = c.get(app.url("/api/reviews")).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["id"], created["id"]);

    // listing has no side effects
    let again = c.get(app.url("/api/reviews")).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(again, listed);

    let id = created["id"].as_str().unwrap_or_default().to_string();
    let res = c.delete(app.url(&format!("/api/reviews/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"success": true}));

    let res = c.delete(app.url(&format!("/api/reviews/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_owner_image_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let png: &[u8] = b"\x89PNG\r\n\x1a\nfake";

    let res = c.post(app.url("/api/owner")).multipart(owner_form("Maria", Some(("maria.png", png)))?).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let owner = res.json::<Value>().await?;
    assert_eq!(owner["name"], "Maria");
    assert_eq!(owner["info"], "Family-run since 1998");
    let image = owner["image"].as_str().unwrap_or_default().to_string();
    assert!(image.starts_with("/uploads/") && image.ends_with(".png"), "{image}");
    assert_eq!(app.upload_count().await, 1);

    let res = c.get(app.url(&image)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.bytes().await?.as_ref(), png);

    let listed = c.get(app.url("/api/owner")).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(listed, vec![owner.clone()]);

    let id = owner["id"].as_str().unwrap_or_default().to_string();
    let res = c.delete(app.url(&format!("/api/owner/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"success": true}));

    let res = c.get(app.url(&image)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(app.upload_count().await, 0);

    let res = c.delete(app.url(&format!("/api/owner/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_owner_without_image() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.post(app.url("/api/owner")).multipart(owner_form("Jon", None)?).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let owner = res.json::<Value>().await?;
    assert_eq!(owner["image"], "");
    assert_eq!(app.upload_count().await, 0);

    let id = owner["id"].as_str().unwrap_or_default().to_string();
    let res = c.delete(app.url(&format!("/api/owner/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(c.get(app.url("/api/owner")).send().await?.json::<Vec<Value>>().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_owner_rejected_uploads_leave_no_files() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.post(app.url("/api/owner")).multipart(owner_form("", Some(("x.png", &b"data"[..])))?).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let two_images = owner_form("Ana", Some(("a.png", &b"one"[..])))?
        .part("image", Part::bytes(b"two".to_vec()).file_name("b.png"));
    let res = c.post(app.url("/api/owner")).multipart(two_images).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c.post(app.url("/api/owner")).json(&json!({"name": "Ana"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    assert_eq!(app.upload_count().await, 0);
    assert!(c.get(app.url("/api/owner")).send().await?.json::<Vec<Value>>().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_owner_store_failure_leaves_no_file() -> anyhow::Result<()> {
    let app = start_server().await?;
    app.db.execute_unprepared("DROP TABLE owner").await?;

    let res = client()
        .post(app.url("/api/owner"))
        .multipart(owner_form("Maria", Some(("maria.png", &b"png"[..])))?)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    assert!(res.json::<Value>().await?["error"].is_string());
    assert_eq!(app.upload_count().await, 0);
    Ok(())
}
