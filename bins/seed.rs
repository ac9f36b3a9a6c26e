//! Catalog seeder.
//!
//! Applies pending migrations, then writes the built-in services and projects
//! into the database so the store and the static dataset start out equal.
//! Services are upserted by slug; projects are inserted only when a project
//! with the same title does not already exist for that service, so running
//! the seeder twice is harmless.
//!
//! Usage:
//! ```bash
//! # uses DATABASE_URL (or config.toml) like the server does
//! cargo run --bin seed
//! ```

use std::collections::HashMap;
use std::process::ExitCode;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tracing::{error, info};
use uuid::Uuid;

use models::project;
use models::service as service_entity;
use service::catalog::domain::{ProjectRecord, ServiceRecord};
use service::catalog::fallback::StaticCatalog;

fn new_service(rec: &ServiceRecord) -> Result<service_entity::NewService> {
    let details = rec
        .details
        .as_ref()
        .map(serde_json::to_value)
        .transpose()
        .context("serialize service details")?;
    Ok(service_entity::NewService {
        slug: rec.slug.clone(),
        title: rec.title.clone(),
        description: rec.description.clone(),
        icon: rec.icon.clone(),
        gradient: rec.gradient.clone(),
        features: rec.features.clone(),
        details,
    })
}

/// 内置项目引用的是内置服务 id（"1".."6"），这里换成入库后的 UUID
fn new_project(
    rec: &ProjectRecord,
    stored: &HashMap<String, (Uuid, String)>,
) -> project::NewProject {
    let target = rec.service_id.as_ref().and_then(|sid| stored.get(sid));
    project::NewProject {
        title: rec.title.clone(),
        description: rec.description.clone(),
        brief_description: rec.brief_description.clone(),
        image: rec.image.clone(),
        images: rec.images.clone(),
        service_id: target.map(|(id, _)| *id),
        service_slug: target.map(|(_, slug)| slug.clone()),
        tags: rec.tags.clone(),
        features: rec.features.clone(),
        video_url: rec.video_url.clone(),
        live_url: rec.live_url.clone(),
    }
}

async fn seed(db: &DatabaseConnection, catalog: &StaticCatalog) -> Result<(usize, usize)> {
    let mut stored = HashMap::new();
    for rec in catalog.services() {
        let row = service_entity::upsert_by_slug(db, new_service(rec)?)
            .await
            .with_context(|| format!("upsert service {}", rec.slug))?;
        info!(event = "service_seeded", slug = %row.slug, id = %row.id);
        stored.insert(rec.id.clone(), (row.id, row.slug));
    }

    let mut projects = 0;
    for rec in catalog.projects() {
        let row = project::insert_if_absent(db, new_project(rec, &stored))
            .await
            .with_context(|| format!("insert project {}", rec.title))?;
        info!(event = "project_seeded", title = %row.title, id = %row.id);
        projects += 1;
    }
    Ok((stored.len(), projects))
}

async fn run() -> Result<()> {
    let cfg = configs::AppConfig::load_and_validate()?;
    let db = models::db::connect(&cfg.database).await?;
    Migrator::up(&db, None).await.context("apply migrations")?;

    let (services, projects) = seed(&db, &StaticCatalog::builtin()).await?;
    info!(event = "seed_done", services, projects, "catalog seeded");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(event = "seed_failed", error = ?e, "seeding failed");
            ExitCode::FAILURE
        }
    }
}
