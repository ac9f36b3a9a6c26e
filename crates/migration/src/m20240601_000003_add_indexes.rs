use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Service: slug is unique
        manager
            .create_index(
                Index::create()
                    .name("uniq_service_slug")
                    .table(Service::Table)
                    .col(Service::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Project: one index per association column used by the OR query
        for (name, col) in [
            ("idx_project_service_id", Project::ServiceId),
            ("idx_project_service_ref", Project::ServiceRef),
            ("idx_project_service_slug", Project::ServiceSlug),
            ("idx_project_category", Project::Category),
            ("idx_project_service_name", Project::ServiceName),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Project::Table)
                        .col(col)
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_project_service_name",
            "idx_project_category",
            "idx_project_service_slug",
            "idx_project_service_ref",
            "idx_project_service_id",
        ] {
            manager
                .drop_index(Index::drop().name(name).table(Project::Table).to_owned())
                .await?;
        }
        manager
            .drop_index(Index::drop().name("uniq_service_slug").table(Service::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Service { Table, Slug }

#[derive(DeriveIden)]
enum Project { Table, ServiceId, ServiceRef, ServiceSlug, Category, ServiceName }
