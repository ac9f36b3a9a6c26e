use std::sync::Arc;

use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use models::db::LazyDatabase;
use models::{project, service};

use crate::catalog::errors::CatalogError;
use crate::catalog::query::{ProjectMatch, ProjectQuery, ServiceLookup};
use crate::catalog::repository::CatalogRepository;

/// SeaORM-backed repository implementation.
///
/// Every call goes through the shared lazy handle, so a database that is down
/// at startup simply shows up as a per-request repository error.
pub struct SeaOrmCatalogRepository {
    pub db: Arc<LazyDatabase>,
}

impl SeaOrmCatalogRepository {
    pub fn new(db: Arc<LazyDatabase>) -> Self {
        Self { db }
    }
}

fn lower_eq<C: ColumnTrait>(col: C, value: &str) -> sea_orm::sea_query::SimpleExpr {
    Expr::expr(Func::lower(Expr::col(col))).eq(value.to_string())
}

pub fn service_condition(lookup: &ServiceLookup) -> Condition {
    match lookup {
        ServiceLookup::Slug(slug) => Condition::all().add(service::Column::Slug.eq(slug.clone())),
        ServiceLookup::Relaxed { slug, title } => Condition::any()
            .add(lower_eq(service::Column::Slug, slug))
            .add(lower_eq(service::Column::Title, title)),
    }
}

pub fn project_condition(query: &ProjectQuery) -> Condition {
    query.conditions().iter().fold(Condition::any(), |cond, m| match m {
        ProjectMatch::ServiceId(id) => cond.add(project::Column::ServiceId.eq(*id)),
        ProjectMatch::ServiceRef(id) => cond.add(project::Column::ServiceRef.eq(id.clone())),
        ProjectMatch::ServiceSlug(slug) => cond.add(project::Column::ServiceSlug.eq(slug.clone())),
        ProjectMatch::Category(slug) => cond.add(project::Column::Category.eq(slug.clone())),
        ProjectMatch::ServiceName(name) => cond.add(project::Column::ServiceName.eq(name.clone())),
    })
}

#[async_trait::async_trait]
impl CatalogRepository for SeaOrmCatalogRepository {
    async fn list_services(&self) -> Result<Vec<service::Model>, CatalogError> {
        let db = self.db.connection().await?;
        let rows = service::Entity::find()
            .order_by_asc(service::Column::CreatedAt)
            .order_by_asc(service::Column::Slug)
            .all(db)
            .await?;
        Ok(rows)
    }

    async fn find_service(
        &self,
        lookup: &ServiceLookup,
    ) -> Result<Option<service::Model>, CatalogError> {
        let db = self.db.connection().await?;
        let row = service::Entity::find()
            .filter(service_condition(lookup))
            .order_by_asc(service::Column::CreatedAt)
            .one(db)
            .await?;
        Ok(row)
    }

    async fn find_projects(
        &self,
        query: &ProjectQuery,
    ) -> Result<Vec<project::Model>, CatalogError> {
        let db = self.db.connection().await?;
        let rows = project::Entity::find()
            .filter(project_condition(query))
            .order_by_asc(project::Column::CreatedAt)
            .order_by_asc(project::Column::Id)
            .all(db)
            .await?;
        Ok(rows)
    }

    async fn find_project(&self, id: Uuid) -> Result<Option<project::Model>, CatalogError> {
        let db = self.db.connection().await?;
        let row = project::Entity::find_by_id(id).one(db).await?;
        Ok(row)
    }
}
