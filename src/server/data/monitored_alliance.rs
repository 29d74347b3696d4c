//! Alliance subscription repository.
//!
//! This module provides the `MonitoredAllianceRepository` for managing which guild channels
//! receive war alerts for which alliances. Subscriptions are unique per alliance and guild;
//! the notification fan-out for an alliance is computed by filtering on its ID.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::monitored_alliance::{MonitoredAlliance, UpsertMonitoredAllianceParam};

/// Repository providing database operations for alliance subscriptions.
pub struct MonitoredAllianceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MonitoredAllianceRepository<'a> {
    /// Creates a new MonitoredAllianceRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MonitoredAllianceRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or replaces the subscription of a guild to an alliance.
    ///
    /// If the guild already monitors the alliance, its channel and owning user are replaced
    /// and the original creation timestamp is kept; otherwise a new subscription is created.
    ///
    /// # Arguments
    /// - `param` - Alliance, guild, channel and owning user
    ///
    /// # Returns
    /// - `Ok(MonitoredAlliance)` - The created or updated subscription
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        param: UpsertMonitoredAllianceParam,
    ) -> Result<MonitoredAlliance, DbErr> {
        let existing = self
            .find_entity(param.alliance_id, &param.guild_id)
            .await?;

        let entity = if let Some(existing) = existing {
            let mut active: entity::monitored_alliance::ActiveModel = existing.into();
            active.channel_id = ActiveValue::Set(param.channel_id);
            active.user_id = ActiveValue::Set(param.user_id);
            active.update(self.db).await?
        } else {
            entity::monitored_alliance::ActiveModel {
                id: ActiveValue::NotSet,
                alliance_id: ActiveValue::Set(param.alliance_id),
                guild_id: ActiveValue::Set(param.guild_id),
                channel_id: ActiveValue::Set(param.channel_id),
                user_id: ActiveValue::Set(param.user_id),
                created_at: ActiveValue::Set(Utc::now()),
            }
            .insert(self.db)
            .await?
        };

        Ok(MonitoredAlliance::from_entity(entity))
    }

    /// Removes the subscription of a guild to an alliance.
    ///
    /// # Returns
    /// - `Ok(true)` - Subscription deleted
    /// - `Ok(false)` - The guild did not monitor the alliance
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, alliance_id: i64, guild_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::MonitoredAlliance::delete_many()
            .filter(entity::monitored_alliance::Column::AllianceId.eq(alliance_id))
            .filter(entity::monitored_alliance::Column::GuildId.eq(guild_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets every subscription, oldest first.
    pub async fn get_all(&self) -> Result<Vec<MonitoredAlliance>, DbErr> {
        let entities = entity::prelude::MonitoredAlliance::find()
            .order_by_asc(entity::monitored_alliance::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(MonitoredAlliance::from_entity)
            .collect())
    }

    /// Gets the subscriptions of a guild, oldest first.
    pub async fn get_by_guild_id(&self, guild_id: &str) -> Result<Vec<MonitoredAlliance>, DbErr> {
        let entities = entity::prelude::MonitoredAlliance::find()
            .filter(entity::monitored_alliance::Column::GuildId.eq(guild_id))
            .order_by_asc(entity::monitored_alliance::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(MonitoredAlliance::from_entity)
            .collect())
    }

    async fn find_entity(
        &self,
        alliance_id: i64,
        guild_id: &str,
    ) -> Result<Option<entity::monitored_alliance::Model>, DbErr> {
        entity::prelude::MonitoredAlliance::find()
            .filter(entity::monitored_alliance::Column::AllianceId.eq(alliance_id))
            .filter(entity::monitored_alliance::Column::GuildId.eq(guild_id))
            .one(self.db)
            .await
    }
}
