//! Catalog module: services and projects shown on the site.
//!
//! Layout follows the usual split: domain records, store-agnostic query
//! predicates, a repository trait with a SeaORM implementation, and the
//! resolution service that owns the fallback to the static dataset.

pub mod domain;
pub mod errors;
pub mod fallback;
pub mod metrics;
pub mod query;
pub mod repo;
pub mod repository;
pub mod service;

pub use service::CatalogService;
