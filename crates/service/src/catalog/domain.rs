use serde::{Deserialize, Serialize};

/// 服务详情（弹窗展示用）：概述、流程、技术栈、周期与交付物
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetails {
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub process: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub deliverables: Vec<String>,
}

/// Service as returned by the API. `id` is always a plain string, whether it
/// came from the store (UUID) or from the static dataset (`"1"`, `"2"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ServiceDetails>,
}

/// Project as returned by the API.
///
/// `service_id` carries whatever service reference the record had, normalized
/// to a string. The legacy association fields are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brief_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

/// JSON 列中的字符串数组；非字符串元素与非数组值一律忽略
fn string_list(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_owned))
            .collect(),
        _ => Vec::new(),
    }
}

impl From<models::service::Model> for ServiceRecord {
    fn from(m: models::service::Model) -> Self {
        let details = m
            .details
            .and_then(|v| serde_json::from_value::<ServiceDetails>(v).ok());
        Self {
            id: m.id.to_string(),
            slug: m.slug,
            title: m.title,
            description: m.description,
            icon: m.icon,
            gradient: m.gradient,
            features: string_list(&m.features),
            details,
        }
    }
}

impl From<models::project::Model> for ProjectRecord {
    fn from(m: models::project::Model) -> Self {
        // 原生 UUID 引用优先，其次是字符串形式的旧引用
        let service_id = m.service_id.map(|id| id.to_string()).or(m.service_ref);
        Self {
            id: m.id.to_string(),
            title: m.title,
            description: m.description,
            brief_description: m.brief_description,
            image: m.image,
            images: string_list(&m.images),
            service_id,
            service_slug: m.service_slug,
            category: m.category,
            service_name: m.service_name,
            tags: string_list(&m.tags),
            features: string_list(&m.features),
            video_url: m.video_url,
            live_url: m.live_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::repository::mock::{project_model, service_model};
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn service_id_is_stringified() {
        let m = service_model("web", "Website Development");
        let id = m.id;
        let rec = ServiceRecord::from(m);
        assert_eq!(rec.id, id.to_string());
        assert_eq!(rec.slug, "web");
    }

    #[test]
    fn service_details_parse_and_tolerate_garbage() {
        let mut m = service_model("ai", "AI & Automation");
        m.details = Some(json!({"overview": "ML", "timeline": "8-20 weeks"}));
        let rec = ServiceRecord::from(m.clone());
        let d = rec.details.expect("details");
        assert_eq!(d.overview, "ML");
        assert!(d.process.is_empty());

        m.details = Some(json!("not an object"));
        assert!(ServiceRecord::from(m).details.is_none());
    }

    #[test]
    fn project_native_reference_wins_over_legacy_string() {
        let sid = Uuid::new_v4();
        let mut m = project_model("Blood bank platform");
        m.service_id = Some(sid);
        m.service_ref = Some("legacy".into());
        assert_eq!(ProjectRecord::from(m.clone()).service_id, Some(sid.to_string()));

        m.service_id = None;
        assert_eq!(ProjectRecord::from(m).service_id, Some("legacy".into()));
    }

    #[test]
    fn project_lists_skip_non_strings() {
        let mut m = project_model("Restaurant site");
        m.tags = json!(["React", 3, null, "Tailwind CSS"]);
        m.images = json!({"a": 1});
        let rec = ProjectRecord::from(m);
        assert_eq!(rec.tags, vec!["React".to_string(), "Tailwind CSS".to_string()]);
        assert!(rec.images.is_empty());
    }

    #[test]
    fn project_serializes_camel_case_and_omits_absent_fields() {
        let mut m = project_model("QR menu");
        m.brief_description = Some("digital menu".into());
        m.video_url = Some("https://www.youtube.com/embed/x".into());
        let v = serde_json::to_value(ProjectRecord::from(m)).expect("serialize");
        assert_eq!(v["briefDescription"], "digital menu");
        assert_eq!(v["videoUrl"], "https://www.youtube.com/embed/x");
        assert!(v.get("liveUrl").is_none());
        assert!(v.get("serviceId").is_none());
    }
}
