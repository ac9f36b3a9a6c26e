use axum::{http::StatusCode, routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod catalog;

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "OK", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

pub async fn metrics() -> (StatusCode, String) {
    common::metrics::encode_metrics()
}

async fn api_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Build the full application router: catalog API, ops endpoints, docs and the SPA.
pub fn build_router(state: ServerState, cors: CorsLayer, static_dir: &str) -> Router {
    // 前端路由（/portfolio、/projects/... 等）统一回落到 index.html
    let index = format!("{}/index.html", static_dir.trim_end_matches('/'));
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(index));

    // /api 下未匹配的路径返回 404，而不是落到前端 index.html
    let api = Router::new()
        .route("/services", get(catalog::list_services))
        .route("/services/:slug", get(catalog::get_service))
        .route("/projects/service/:slug", get(catalog::projects_for_service))
        .route("/projects/:service_slug/:project_id", get(catalog::get_project))
        .fallback(api_not_found);

    let docs = SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi());

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .nest("/api", api)
        .merge(docs)
        .fallback_service(spa)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
