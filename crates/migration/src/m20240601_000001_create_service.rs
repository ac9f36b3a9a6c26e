//! Create `service` table.
//! One row per offered service; `slug` is the public lookup key.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Service::Table)
                    .if_not_exists()
                    .col(uuid(Service::Id).primary_key())
                    .col(string_len(Service::Slug, 128).not_null())
                    .col(string_len(Service::Title, 256).not_null())
                    .col(text(Service::Description).not_null())
                    .col(string_len_null(Service::Icon, 64))
                    .col(string_len_null(Service::Gradient, 128))
                    .col(json_binary(Service::Features).not_null())
                    .col(json_binary_null(Service::Details))
                    .col(timestamp_with_time_zone(Service::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Service::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Service::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Service {
    Table,
    Id,
    Slug,
    Title,
    Description,
    Icon,
    Gradient,
    Features,
    Details,
    CreatedAt,
    UpdatedAt,
}
