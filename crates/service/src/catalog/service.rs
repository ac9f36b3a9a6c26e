use std::sync::Arc;

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::domain::{ProjectRecord, ServiceRecord};
use super::errors::CatalogError;
use super::fallback::StaticCatalog;
use super::metrics::{record_fallback, record_request, FallbackReason};
use super::query::{is_unusable_slug, ProjectQuery, ServiceLookup};
use super::repository::CatalogRepository;

const OP_LIST_SERVICES: &str = "list_services";
const OP_GET_SERVICE: &str = "get_service";
const OP_SERVICE_PROJECTS: &str = "projects_for_service";
const OP_GET_PROJECT: &str = "get_project";

/// Resolves services and projects from the store, degrading to the static
/// dataset on any store failure or miss. Only "absent from both sources"
/// is reported to the caller.
pub struct CatalogService<R: CatalogRepository + ?Sized> {
    repo: Arc<R>,
    fallback: Arc<StaticCatalog>,
}

impl<R: CatalogRepository + ?Sized> CatalogService<R> {
    pub fn new(repo: Arc<R>, fallback: Arc<StaticCatalog>) -> Self {
        Self { repo, fallback }
    }

    fn fell_back(&self, operation: &str, reason: FallbackReason, error: Option<&CatalogError>) {
        record_fallback(operation, reason);
        match error {
            Some(e) => warn!(
                operation,
                reason = reason.as_str(),
                error = %e,
                code = e.code(),
                "catalog_fallback"
            ),
            None => info!(operation, reason = reason.as_str(), "catalog_fallback"),
        }
    }

    /// All services; never fails.
    ///
    /// # Examples
    /// ```
    /// use service::catalog::fallback::StaticCatalog;
    /// use service::catalog::repository::mock::MockCatalogRepository;
    /// use service::catalog::service::CatalogService;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockCatalogRepository::default());
    /// let svc = CatalogService::new(repo, Arc::new(StaticCatalog::builtin()));
    /// // 存储为空时返回内置数据
    /// let services = tokio_test::block_on(svc.list_services());
    /// assert_eq!(services, StaticCatalog::builtin().services().to_vec());
    /// ```
    #[instrument(skip(self))]
    pub async fn list_services(&self) -> Vec<ServiceRecord> {
        record_request(OP_LIST_SERVICES);
        match self.repo.list_services().await {
            Ok(rows) if !rows.is_empty() => rows.into_iter().map(ServiceRecord::from).collect(),
            Ok(_) => {
                self.fell_back(OP_LIST_SERVICES, FallbackReason::StoreEmpty, None);
                self.fallback.services().to_vec()
            }
            Err(e) => {
                self.fell_back(OP_LIST_SERVICES, FallbackReason::StoreError, Some(&e));
                self.fallback.services().to_vec()
            }
        }
    }

    /// One service by exact slug, store first then static data.
    #[instrument(skip(self))]
    pub async fn get_service(&self, slug: &str) -> Result<ServiceRecord, CatalogError> {
        record_request(OP_GET_SERVICE);
        match self.repo.find_service(&ServiceLookup::exact(slug)).await {
            Ok(Some(row)) => return Ok(ServiceRecord::from(row)),
            Ok(None) => self.fell_back(OP_GET_SERVICE, FallbackReason::StoreMiss, None),
            Err(e) => self.fell_back(OP_GET_SERVICE, FallbackReason::StoreError, Some(&e)),
        }
        self.fallback
            .service_by_slug(slug)
            .cloned()
            .ok_or(CatalogError::ServiceNotFound)
    }

    /// Projects associated with the service `slug`; never fails, possibly empty.
    ///
    /// # Examples
    /// ```
    /// use service::catalog::fallback::StaticCatalog;
    /// use service::catalog::repository::mock::MockCatalogRepository;
    /// use service::catalog::service::CatalogService;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockCatalogRepository::default());
    /// let svc = CatalogService::new(repo, Arc::new(StaticCatalog::builtin()));
    /// assert!(tokio_test::block_on(svc.projects_for_service("undefined")).is_empty());
    /// assert_eq!(tokio_test::block_on(svc.projects_for_service("web")).len(), 3);
    /// ```
    #[instrument(skip(self))]
    pub async fn projects_for_service(&self, slug: &str) -> Vec<ProjectRecord> {
        record_request(OP_SERVICE_PROJECTS);
        if is_unusable_slug(slug) {
            debug!(slug, "unusable service slug; returning no projects");
            return Vec::new();
        }

        let resolved = match self.resolve_store_service(slug).await {
            Ok(resolved) => resolved,
            Err(e) => {
                self.fell_back(OP_SERVICE_PROJECTS, FallbackReason::StoreError, Some(&e));
                return self.fallback.projects_for_slug(slug);
            }
        };
        if resolved.is_none() {
            debug!(slug, "service not in store; matching projects by slug only");
        }

        let query = ProjectQuery::for_service(slug, resolved.as_ref());
        match self.repo.find_projects(&query).await {
            Ok(rows) if !rows.is_empty() => rows.into_iter().map(ProjectRecord::from).collect(),
            Ok(_) => {
                self.fell_back(OP_SERVICE_PROJECTS, FallbackReason::StoreEmpty, None);
                self.fallback.projects_for_slug(slug)
            }
            Err(e) => {
                self.fell_back(OP_SERVICE_PROJECTS, FallbackReason::StoreError, Some(&e));
                self.fallback.projects_for_slug(slug)
            }
        }
    }

    /// Exact slug first, then case-insensitive slug or slug-derived title.
    async fn resolve_store_service(
        &self,
        slug: &str,
    ) -> Result<Option<models::service::Model>, CatalogError> {
        if let Some(found) = self.repo.find_service(&ServiceLookup::exact(slug)).await? {
            return Ok(Some(found));
        }
        self.repo.find_service(&ServiceLookup::relaxed(slug)).await
    }

    /// One project by id. `service_slug` only annotates logs; it does not filter.
    #[instrument(skip(self))]
    pub async fn get_project(
        &self,
        service_slug: &str,
        project_id: &str,
    ) -> Result<ProjectRecord, CatalogError> {
        record_request(OP_GET_PROJECT);
        match Uuid::parse_str(project_id) {
            Ok(id) => match self.repo.find_project(id).await {
                Ok(Some(row)) => return Ok(ProjectRecord::from(row)),
                Ok(None) => self.fell_back(OP_GET_PROJECT, FallbackReason::StoreMiss, None),
                Err(e) => self.fell_back(OP_GET_PROJECT, FallbackReason::StoreError, Some(&e)),
            },
            Err(e) => {
                let err = CatalogError::InvalidId(e.to_string());
                self.fell_back(OP_GET_PROJECT, FallbackReason::InvalidId, Some(&err));
            }
        }
        self.fallback
            .project_by_id(project_id)
            .cloned()
            .ok_or(CatalogError::ProjectNotFound)
    }
}
