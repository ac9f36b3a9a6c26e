#![cfg(test)]
use std::sync::Arc;

use tokio::sync::OnceCell;
use migration::MigratorTrait;
use configs::DatabaseConfig;
use models::db::{connect, LazyDatabase};

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

fn test_config() -> Option<DatabaseConfig> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let url = std::env::var("DATABASE_URL").ok()?;
    Some(DatabaseConfig { url, ..DatabaseConfig::default() })
}

/// Shared lazy handle for DB-backed tests; `None` when no database is configured.
pub async fn get_db() -> Option<Arc<LazyDatabase>> {
    let cfg = test_config()?;
    let migrated = *MIGRATED
        .get_or_init(|| async {
            match connect(&cfg).await {
                Ok(db) => migration::Migrator::up(&db, None).await.is_ok(),
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {e}");
                    false
                }
            }
        })
        .await;
    if !migrated {
        return None;
    }
    Some(Arc::new(LazyDatabase::new(&cfg)))
}
