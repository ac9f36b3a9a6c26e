use thiserror::Error;

use models::errors::ModelError;

/// Business errors for catalog lookups.
///
/// Only the two not-found variants ever leave `CatalogService`; store-side
/// failures are turned into a fallback to the static dataset.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Service not found")]
    ServiceNotFound,
    #[error("Project not found")]
    ProjectNotFound,
    #[error("invalid identifier: {0}")]
    InvalidId(String),
    #[error("repository error: {0}")]
    Repository(String),
}

impl CatalogError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            CatalogError::ServiceNotFound => 2001,
            CatalogError::ProjectNotFound => 2002,
            CatalogError::InvalidId(_) => 2101,
            CatalogError::Repository(_) => 2200,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::ServiceNotFound | CatalogError::ProjectNotFound)
    }
}

impl From<ModelError> for CatalogError {
    fn from(e: ModelError) -> Self {
        CatalogError::Repository(e.to_string())
    }
}

impl From<sea_orm::DbErr> for CatalogError {
    fn from(e: sea_orm::DbErr) -> Self {
        CatalogError::Repository(e.to_string())
    }
}
