use async_trait::async_trait;
use uuid::Uuid;

use models::{project, service};

use super::errors::CatalogError;
use super::query::{ProjectQuery, ServiceLookup};

/// Read-only access to the `service` and `project` collections.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_services(&self) -> Result<Vec<service::Model>, CatalogError>;
    async fn find_service(
        &self,
        lookup: &ServiceLookup,
    ) -> Result<Option<service::Model>, CatalogError>;
    async fn find_projects(
        &self,
        query: &ProjectQuery,
    ) -> Result<Vec<project::Model>, CatalogError>;
    async fn find_project(&self, id: Uuid) -> Result<Option<project::Model>, CatalogError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use chrono::Utc;
    use serde_json::json;

    /// Repository operations that can be made to fail.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Op {
        ListServices,
        FindService,
        FindProjects,
        FindProject,
    }

    #[derive(Default)]
    pub struct MockCatalogRepository {
        services: Mutex<Vec<service::Model>>,
        projects: Mutex<Vec<project::Model>>,
        failing: Mutex<Vec<Op>>,
        calls: AtomicUsize,
    }

    impl MockCatalogRepository {
        pub fn with_data(services: Vec<service::Model>, projects: Vec<project::Model>) -> Self {
            Self {
                services: Mutex::new(services),
                projects: Mutex::new(projects),
                ..Default::default()
            }
        }

        /// Make `op` return a repository error from now on.
        pub fn fail_on(&self, op: Op) {
            self.failing.lock().unwrap().push(op);
        }

        /// Simulate the store being down.
        pub fn fail_all(&self) {
            let mut failing = self.failing.lock().unwrap();
            failing.extend([
                Op::ListServices,
                Op::FindService,
                Op::FindProjects,
                Op::FindProject,
            ]);
        }

        pub fn recover(&self) {
            self.failing.lock().unwrap().clear();
        }

        /// Number of repository calls made so far.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn enter(&self, op: Op) -> Result<(), CatalogError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.lock().unwrap().contains(&op) {
                return Err(CatalogError::Repository(format!("mock failure on {op:?}")));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl CatalogRepository for MockCatalogRepository {
        async fn list_services(&self) -> Result<Vec<service::Model>, CatalogError> {
            self.enter(Op::ListServices)?;
            Ok(self.services.lock().unwrap().clone())
        }

        async fn find_service(
        &self,
        lookup: &ServiceLookup,
    ) -> Result<Option<service::Model>, CatalogError> {
            self.enter(Op::FindService)?;
            let services = self.services.lock().unwrap();
            Ok(services.iter().find(|m| lookup.matches(m)).cloned())
        }

        async fn find_projects(
        &self,
        query: &ProjectQuery,
    ) -> Result<Vec<project::Model>, CatalogError> {
            self.enter(Op::FindProjects)?;
            let projects = self.projects.lock().unwrap();
            Ok(projects.iter().filter(|m| query.matches(m)).cloned().collect())
        }

        async fn find_project(&self, id: Uuid) -> Result<Option<project::Model>, CatalogError> {
            self.enter(Op::FindProject)?;
            let projects = self.projects.lock().unwrap();
            Ok(projects.iter().find(|m| m.id == id).cloned())
        }
    }

    /// Store row for a service with a fresh id and empty display metadata.
    pub fn service_model(slug: &str, title: &str) -> service::Model {
        let now = Utc::now().into();
        service::Model {
            id: Uuid::new_v4(),
            slug: slug.to_string(),
            title: title.to_string(),
            description: format!("{title} services"),
            icon: None,
            gradient: None,
            features: json!([]),
            details: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Store row for a project with no service association at all.
    pub fn project_model(title: &str) -> project::Model {
        let now = Utc::now().into();
        project::Model {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: format!("{title} description"),
            brief_description: None,
            image: None,
            images: json!([]),
            service_id: None,
            service_ref: None,
            service_slug: None,
            category: None,
            service_name: None,
            tags: json!([]),
            features: json!([]),
            video_url: None,
            live_url: None,
            created_at: now,
            updated_at: now,
        }
    }
}
