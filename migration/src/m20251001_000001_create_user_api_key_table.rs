use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserApiKey::Table)
                    .if_not_exists()
                    .col(string(UserApiKey::UserId).primary_key())
                    .col(string(UserApiKey::ApiKey))
                    .col(timestamp_with_time_zone(UserApiKey::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserApiKey::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserApiKey {
    Table,
    UserId,
    ApiKey,
    CreatedAt,
}
