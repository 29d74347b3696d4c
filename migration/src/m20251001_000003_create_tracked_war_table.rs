use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrackedWar::Table)
                    .if_not_exists()
                    .col(pk_auto(TrackedWar::Id))
                    .col(string_uniq(TrackedWar::WarId))
                    .col(big_integer(TrackedWar::AllianceId))
                    .col(string(TrackedWar::AttackerNation))
                    .col(string(TrackedWar::DefenderNation))
                    .col(timestamp_with_time_zone(TrackedWar::WarDate))
                    .col(boolean(TrackedWar::Notified).default(false))
                    .col(timestamp_with_time_zone(TrackedWar::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Undelivered wars are polled every cycle
        manager
            .create_index(
                Index::create()
                    .name("idx_tracked_war_notified")
                    .table(TrackedWar::Table)
                    .col(TrackedWar::Notified)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_tracked_war_notified")
                    .table(TrackedWar::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TrackedWar::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TrackedWar {
    Table,
    Id,
    WarId,
    AllianceId,
    AttackerNation,
    DefenderNation,
    WarDate,
    Notified,
    CreatedAt,
}
