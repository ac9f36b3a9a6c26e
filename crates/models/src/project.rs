use chrono::Utc;
use sea_orm::{
    entity::prelude::*, ActiveModelTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

/// `project` 集合：作品条目。
///
/// 与服务的关联历史上存在多种写法，均保留为独立列：
/// - `service_id`：服务的原生 UUID
/// - `service_ref`：服务 id 的字符串形式
/// - `service_slug` / `category`：服务 slug
/// - `service_name`：服务标题
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub brief_description: Option<String>,
    pub image: Option<String>,
    pub images: Json,
    pub service_id: Option<Uuid>,
    pub service_ref: Option<String>,
    pub service_slug: Option<String>,
    pub category: Option<String>,
    pub service_name: Option<String>,
    pub tags: Json,
    pub features: Json,
    pub video_url: Option<String>,
    pub live_url: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_url(u: &str) -> Result<(), errors::ModelError> {
    if !(u.starts_with("http://") || u.starts_with("https://")) {
        return Err(errors::ModelError::Validation("link must start with http(s)".into()));
    }
    Ok(())
}

#[derive(Clone, Debug, Default)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub brief_description: Option<String>,
    pub image: Option<String>,
    pub images: Vec<String>,
    pub service_id: Option<Uuid>,
    pub service_slug: Option<String>,
    pub tags: Vec<String>,
    pub features: Vec<String>,
    pub video_url: Option<String>,
    pub live_url: Option<String>,
}

fn to_json(v: &[String]) -> Result<Json, errors::ModelError> {
    serde_json::to_value(v).map_err(|e| errors::ModelError::Validation(e.to_string()))
}

/// Insert a project unless one with the same title already belongs to the same service.
pub async fn insert_if_absent(
    db: &DatabaseConnection,
    input: NewProject,
) -> Result<Model, errors::ModelError> {
    for link in input.video_url.iter().chain(input.live_url.iter()) {
        validate_url(link)?;
    }

    let mut existing = Entity::find().filter(Column::Title.eq(input.title.clone()));
    if let Some(sid) = input.service_id {
        existing = existing.filter(Column::ServiceId.eq(sid));
    }
    if let Some(found) = existing.one(db).await? {
        return Ok(found);
    }

    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        description: Set(input.description),
        brief_description: Set(input.brief_description),
        image: Set(input.image),
        images: Set(to_json(&input.images)?),
        service_id: Set(input.service_id),
        service_ref: Set(None),
        service_slug: Set(input.service_slug),
        category: Set(None),
        service_name: Set(None),
        tags: Set(to_json(&input.tags)?),
        features: Set(to_json(&input.features)?),
        video_url: Set(input.video_url),
        live_url: Set(input.live_url),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}
