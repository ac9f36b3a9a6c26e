use std::sync::Arc;

use service::catalog::{repository::CatalogRepository, CatalogService};

pub type SharedCatalog = Arc<CatalogService<dyn CatalogRepository>>;

#[derive(Clone)]
pub struct ServerState {
    pub catalog: SharedCatalog,
}

impl ServerState {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self { catalog }
    }
}
