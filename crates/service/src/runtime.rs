//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` to keep binary crates importing
//! `service::runtime::ensure_static_dir` without depending directly on `common`.

/// Warn when the frontend build directory is missing.
pub async fn ensure_static_dir(static_dir: &str) -> bool {
    common::env::ensure_static_dir(static_dir).await
}
