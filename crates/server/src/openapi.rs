use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetailsDoc {
    pub overview: String,
    pub process: Vec<String>,
    pub technologies: Vec<String>,
    pub timeline: String,
    pub deliverables: Vec<String>,
}

/// `id` 为存储中的 UUID 字符串，或内置数据中的 "1".."6"
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDoc {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub gradient: Option<String>,
    pub features: Vec<String>,
    pub details: Option<ServiceDetailsDoc>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDoc {
    pub id: String,
    pub title: String,
    pub description: String,
    pub brief_description: Option<String>,
    pub image: Option<String>,
    pub images: Vec<String>,
    pub service_id: Option<String>,
    pub service_slug: Option<String>,
    pub category: Option<String>,
    pub service_name: Option<String>,
    pub tags: Vec<String>,
    pub features: Vec<String>,
    pub video_url: Option<String>,
    pub live_url: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::catalog::list_services,
        crate::routes::catalog::get_service,
        crate::routes::catalog::projects_for_service,
        crate::routes::catalog::get_project,
    ),
    components(
        schemas(
            HealthResponse,
            ServiceDetailsDoc,
            ServiceDoc,
            ProjectDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "catalog")
    )
)]
pub struct ApiDoc;
