use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use service::catalog::domain::{ProjectRecord, ServiceRecord};

use crate::errors::ApiError;
use crate::state::ServerState;

/// 列出所有服务（存储不可用时返回内置数据）
#[utoipa::path(
    get,
    path = "/api/services",
    tag = "catalog",
    responses((status = 200, description = "All services", body = [crate::openapi::ServiceDoc]))
)]
pub async fn list_services(State(state): State<ServerState>) -> Json<Vec<ServiceRecord>> {
    Json(state.catalog.list_services().await)
}

/// 按 slug 获取服务
#[utoipa::path(
    get,
    path = "/api/services/{slug}",
    tag = "catalog",
    params(("slug" = String, Path, description = "Service slug")),
    responses(
        (status = 200, description = "Service", body = crate::openapi::ServiceDoc),
        (status = 404, description = "Service not found")
    )
)]
pub async fn get_service(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> Result<Json<ServiceRecord>, ApiError> {
    let svc = state.catalog.get_service(&slug).await?;
    Ok(Json(svc))
}

/// 获取某服务下的全部项目（可能为空）
#[utoipa::path(
    get,
    path = "/api/projects/service/{slug}",
    tag = "catalog",
    params(("slug" = String, Path, description = "Service slug")),
    responses(
        (
            status = 200,
            description = "Projects of the service, possibly empty",
            body = [crate::openapi::ProjectDoc]
        )
    )
)]
pub async fn projects_for_service(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> Json<Vec<ProjectRecord>> {
    let projects = state.catalog.projects_for_service(&slug).await;
    info!(%slug, count = projects.len(), "service_projects_resolved");
    Json(projects)
}

/// 获取单个项目；服务 slug 仅用于日志
#[utoipa::path(
    get,
    path = "/api/projects/{service_slug}/{project_id}",
    tag = "catalog",
    params(
        ("service_slug" = String, Path, description = "Service slug (informational)"),
        ("project_id" = String, Path, description = "Project id: store UUID or static id")
    ),
    responses(
        (status = 200, description = "Project", body = crate::openapi::ProjectDoc),
        (status = 404, description = "Project not found")
    )
)]
pub async fn get_project(
    State(state): State<ServerState>,
    Path((service_slug, project_id)): Path<(String, String)>,
) -> Result<Json<ProjectRecord>, ApiError> {
    let project = state.catalog.get_project(&service_slug, &project_id).await?;
    Ok(Json(project))
}
