use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::Value;
use tokio::net::TcpListener;
use uuid::Uuid;

use server::startup::build_app;
use server::state::ServerState;
use service::catalog::{
    fallback::StaticCatalog,
    repository::{
        mock::{project_model, service_model, MockCatalogRepository},
        CatalogRepository,
    },
    CatalogService,
};

struct TestApp {
    base_url: String,
    repo: Arc<MockCatalogRepository>,
    static_dir: std::path::PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.static_dir);
    }
}

async fn start_server(repo: MockCatalogRepository) -> anyhow::Result<TestApp> {
    // 每次测试使用独立的前端目录
    let static_dir = std::env::temp_dir().join(format!("site-e2e-{}", Uuid::new_v4()));
    tokio::fs::create_dir_all(&static_dir).await?;
    let index = "<!doctype html><div id=\"root\"></div>";
    tokio::fs::write(static_dir.join("index.html"), index).await?;

    let repo = Arc::new(repo);
    let dyn_repo: Arc<dyn CatalogRepository> = repo.clone();
    let catalog = CatalogService::new(dyn_repo, Arc::new(StaticCatalog::builtin()));
    let app = build_app(ServerState::new(Arc::new(catalog)), &static_dir.to_string_lossy());

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url, repo, static_dir })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().build().expect("reqwest client")
}

impl TestApp {
    async fn get(&self, path: &str) -> reqwest::Result<reqwest::Response> {
        client().get(format!("{}{}", self.base_url, path)).send().await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> reqwest::Result<T> {
        self.get(path).await?.json().await
    }
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server(MockCatalogRepository::default()).await?;
    let res = app.get("/health").await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_services_from_store() -> anyhow::Result<()> {
    let web = service_model("web", "Website Development");
    let repo = MockCatalogRepository::with_data(vec![web.clone()], vec![]);
    let app = start_server(repo).await?;

    let list: Vec<Value> = app.get_json("/api/services").await?;
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], web.id.to_string());

    let one: Value = app.get_json("/api/services/web").await?;
    assert_eq!(one["title"], "Website Development");
    Ok(())
}

#[tokio::test]
async fn e2e_services_fall_back_when_store_down() -> anyhow::Result<()> {
    let repo = MockCatalogRepository::default();
    repo.fail_all();
    let app = start_server(repo).await?;

    let list: Vec<Value> = app.get_json("/api/services").await?;
    assert_eq!(list.len(), 6);
    assert_eq!(list[0]["id"], "1");

    let svc: Value = app.get_json("/api/services/ai").await?;
    assert_eq!(svc["title"], "AI & Automation");
    Ok(())
}

#[tokio::test]
async fn e2e_unknown_service_is_plain_text_404() -> anyhow::Result<()> {
    let app = start_server(MockCatalogRepository::default()).await?;
    let res = app.get("/api/services/nope").await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.text().await?, "Service not found");
    Ok(())
}

#[tokio::test]
async fn e2e_service_projects_store_then_fallback() -> anyhow::Result<()> {
    let web = service_model("web", "Website Development");
    let mut p = project_model("Clinic portal");
    p.service_ref = Some(web.id.to_string());
    let repo = MockCatalogRepository::with_data(vec![web], vec![p.clone()]);
    let app = start_server(repo).await?;

    let list: Vec<Value> = app.get_json("/api/projects/service/web").await?;
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], p.id.to_string());

    app.repo.fail_all();
    let list: Vec<Value> = app.get_json("/api/projects/service/web").await?;
    let ids: Vec<&str> = list.iter().filter_map(|v| v["id"].as_str()).collect();
    assert_eq!(ids, vec!["10", "5", "11"]);
    Ok(())
}

#[tokio::test]
async fn e2e_reserved_slug_yields_empty_list_without_store() -> anyhow::Result<()> {
    let app = start_server(MockCatalogRepository::default()).await?;
    let res = app.get("/api/projects/service/undefined").await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let list: Vec<Value> = res.json().await?;
    assert!(list.is_empty());
    assert_eq!(app.repo.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn e2e_project_detail() -> anyhow::Result<()> {
    let p = project_model("Blood bank platform");
    let repo = MockCatalogRepository::with_data(vec![], vec![p.clone()]);
    let app = start_server(repo).await?;

    // slug 段不参与查找
    let one: Value = app.get_json(&format!("/api/projects/anything/{}", p.id)).await?;
    assert_eq!(one["title"], "Blood bank platform");

    // 非 UUID 的 id 命中内置数据
    let one: Value = app.get_json("/api/projects/ai/1").await?;
    assert_eq!(one["title"], "eclean.live");
    assert_eq!(one["serviceId"], "4");

    let res = app.get(&format!("/api/projects/web/{}", Uuid::new_v4())).await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.text().await?, "Project not found");
    Ok(())
}

#[tokio::test]
async fn e2e_spa_fallback_serves_index() -> anyhow::Result<()> {
    let app = start_server(MockCatalogRepository::default()).await?;
    let res = app.get("/portfolio/web").await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.text().await?.contains("id=\"root\""));
    Ok(())
}

#[tokio::test]
async fn e2e_unknown_api_path_is_404_not_index() -> anyhow::Result<()> {
    let app = start_server(MockCatalogRepository::default()).await?;
    for path in ["/api/services/web/extra", "/api/unknown", "/api/projects/a/b/c"] {
        let res = app.get(path).await?;
        assert_eq!(res.status(), HttpStatusCode::NOT_FOUND, "{path}");
        assert!(!res.text().await?.contains("id=\"root\""), "{path} served the SPA");
    }
    Ok(())
}

#[tokio::test]
async fn e2e_metrics_count_fallbacks() -> anyhow::Result<()> {
    let repo = MockCatalogRepository::default();
    repo.fail_all();
    let app = start_server(repo).await?;
    let _ = app.get("/api/services").await?;

    let res = app.get("/metrics").await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let text = res.text().await?;
    assert!(text.contains("catalog_fallback_total"));
    assert!(text.contains("catalog_requests_total"));
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document() -> anyhow::Result<()> {
    let app = start_server(MockCatalogRepository::default()).await?;
    let doc: Value = app.get_json("/api-docs/openapi.json").await?;
    assert!(doc["paths"]["/api/projects/service/{slug}"].is_object());
    Ok(())
}
