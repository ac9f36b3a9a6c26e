//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::warn;

/// Warn when the static frontend directory is missing; the API still works without it.
pub async fn ensure_static_dir(static_dir: &str) -> bool {
    match tokio::fs::metadata(static_dir).await {
        Ok(meta) if meta.is_dir() => true,
        Ok(_) => {
            warn!(%static_dir, "static path is not a directory; frontend routes will 404");
            false
        }
        Err(_) => {
            warn!(%static_dir, "frontend assets directory not found; static assets may 404");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_static_dir_is_reported() {
        assert!(!ensure_static_dir("/definitely/not/here/frontend").await);
    }

    #[tokio::test]
    async fn existing_dir_is_accepted() {
        let dir = std::env::temp_dir();
        assert!(ensure_static_dir(dir.to_str().expect("utf8 temp dir")).await);
    }
}
