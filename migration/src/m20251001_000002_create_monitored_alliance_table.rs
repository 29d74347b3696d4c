use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MonitoredAlliance::Table)
                    .if_not_exists()
                    .col(pk_auto(MonitoredAlliance::Id))
                    .col(big_integer(MonitoredAlliance::AllianceId))
                    .col(string(MonitoredAlliance::GuildId))
                    .col(string(MonitoredAlliance::ChannelId))
                    .col(string(MonitoredAlliance::UserId))
                    .col(timestamp_with_time_zone(MonitoredAlliance::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // An alliance may be monitored by many guilds, but only once per guild
        manager
            .create_index(
                Index::create()
                    .name("idx_monitored_alliance_alliance_guild")
                    .table(MonitoredAlliance::Table)
                    .col(MonitoredAlliance::AllianceId)
                    .col(MonitoredAlliance::GuildId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_monitored_alliance_alliance_guild")
                    .table(MonitoredAlliance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MonitoredAlliance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MonitoredAlliance {
    Table,
    Id,
    AllianceId,
    GuildId,
    ChannelId,
    UserId,
    CreatedAt,
}
