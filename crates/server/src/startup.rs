use std::sync::Arc;

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use models::db::LazyDatabase;
use service::catalog::{
    fallback::StaticCatalog,
    repo::seaorm::SeaOrmCatalogRepository,
    repository::CatalogRepository,
    CatalogService,
};
use service::runtime;

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Wire the catalog over a lazily connected database.
///
/// No connection is attempted here; the first catalog request connects, and a
/// failed attempt is retried on the next request while the static dataset
/// answers in between.
pub fn build_state(cfg: &AppConfig) -> ServerState {
    let db = Arc::new(LazyDatabase::new(&cfg.database));
    let repo: Arc<dyn CatalogRepository> = Arc::new(SeaOrmCatalogRepository::new(db));
    let catalog = CatalogService::new(repo, Arc::new(StaticCatalog::builtin()));
    ServerState::new(Arc::new(catalog))
}

/// Router with the given state; used by `run` and by the integration tests.
pub fn build_app(state: ServerState, static_dir: &str) -> Router {
    routes::build_router(state, build_cors(), static_dir)
}

async fn shutdown_signal() {
    // 收到 Ctrl+C 后停止接收新连接，等待进行中的请求完成
    let _ = tokio::signal::ctrl_c().await;
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    runtime::ensure_static_dir(&cfg.server.static_dir).await;

    let state = build_state(&cfg);
    let app = build_app(state, &cfg.server.static_dir);

    // Bind and serve
    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, static_dir = %cfg.server.static_dir, "starting server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
