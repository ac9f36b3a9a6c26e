//! Create `project` table.
//! Projects reference their service through several legacy columns
//! (`service_id`, `service_ref`, `service_slug`, `category`, `service_name`),
//! so there is deliberately no foreign key to `service`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(uuid(Project::Id).primary_key())
                    .col(string_len(Project::Title, 256).not_null())
                    .col(text(Project::Description).not_null())
                    .col(text_null(Project::BriefDescription))
                    .col(string_len_null(Project::Image, 512))
                    .col(json_binary(Project::Images).not_null())
                    .col(uuid_null(Project::ServiceId))
                    .col(string_len_null(Project::ServiceRef, 128))
                    .col(string_len_null(Project::ServiceSlug, 128))
                    .col(string_len_null(Project::Category, 128))
                    .col(string_len_null(Project::ServiceName, 256))
                    .col(json_binary(Project::Tags).not_null())
                    .col(json_binary(Project::Features).not_null())
                    .col(string_len_null(Project::VideoUrl, 512))
                    .col(string_len_null(Project::LiveUrl, 512))
                    .col(timestamp_with_time_zone(Project::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Project::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Project::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Project {
    Table,
    Id,
    Title,
    Description,
    BriefDescription,
    Image,
    Images,
    ServiceId,
    ServiceRef,
    ServiceSlug,
    Category,
    ServiceName,
    Tags,
    Features,
    VideoUrl,
    LiveUrl,
    CreatedAt,
    UpdatedAt,
}
