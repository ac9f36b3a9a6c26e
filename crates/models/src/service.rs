use chrono::Utc;
use sea_orm::{
    entity::prelude::*, ActiveModelTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

/// `service` 集合：对外展示的服务条目
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub slug: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub icon: Option<String>,
    pub gradient: Option<String>,
    pub features: Json,
    pub details: Option<Json>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// slug 只允许小写字母、数字与连字符
pub fn validate_slug(slug: &str) -> Result<(), errors::ModelError> {
    let ok = !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !ok {
        return Err(errors::ModelError::Validation(format!("invalid slug: {slug:?}")));
    }
    Ok(())
}

/// 新增数据时的输入（不含 id 与时间戳）
#[derive(Clone, Debug, Default)]
pub struct NewService {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub gradient: Option<String>,
    pub features: Vec<String>,
    pub details: Option<serde_json::Value>,
}

/// Insert or update a service keyed by slug.
pub async fn upsert_by_slug(
    db: &DatabaseConnection,
    input: NewService,
) -> Result<Model, errors::ModelError> {
    validate_slug(&input.slug)?;
    let now = Utc::now().into();
    let features = serde_json::to_value(&input.features)
        .map_err(|e| errors::ModelError::Validation(e.to_string()))?;

    let existing = Entity::find()
        .filter(Column::Slug.eq(input.slug.clone()))
        .one(db)
        .await?;

    match existing {
        Some(found) => {
            let mut am: ActiveModel = found.into();
            am.title = Set(input.title);
            am.description = Set(input.description);
            am.icon = Set(input.icon);
            am.gradient = Set(input.gradient);
            am.features = Set(features);
            am.details = Set(input.details);
            am.updated_at = Set(now);
            Ok(am.update(db).await?)
        }
        None => {
            let am = ActiveModel {
                id: Set(Uuid::new_v4()),
                slug: Set(input.slug),
                title: Set(input.title),
                description: Set(input.description),
                icon: Set(input.icon),
                gradient: Set(input.gradient),
                features: Set(features),
                details: Set(input.details),
                created_at: Set(now),
                updated_at: Set(now),
            };
            Ok(am.insert(db).await?)
        }
    }
}
