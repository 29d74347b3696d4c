use sea_orm::DatabaseConnection;

use crate::server::{
    data::monitored_alliance::MonitoredAllianceRepository,
    error::AppError,
    model::monitored_alliance::{MonitoredAlliance, UpsertMonitoredAllianceParam},
};

/// Manages alliance subscriptions for the REST API and slash commands.
pub struct MonitoringService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MonitoringService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Subscribes a guild channel to an alliance, replacing the guild's existing
    /// subscription to that alliance.
    ///
    /// # Returns
    /// - `Ok(MonitoredAlliance)` - The stored subscription
    /// - `Err(AppError::BadRequest)` - Alliance ID is not positive
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn add(
        &self,
        param: UpsertMonitoredAllianceParam,
    ) -> Result<MonitoredAlliance, AppError> {
        if param.alliance_id <= 0 {
            return Err(AppError::BadRequest(format!(
                "Invalid alliance ID {}",
                param.alliance_id
            )));
        }

        let subscription = MonitoredAllianceRepository::new(self.db)
            .upsert(param)
            .await?;

        Ok(subscription)
    }

    /// Removes a guild's subscription to an alliance.
    ///
    /// # Returns
    /// - `Ok(())` - Subscription removed
    /// - `Err(AppError::NotFound)` - The guild does not monitor the alliance
    pub async fn remove(&self, alliance_id: i64, guild_id: &str) -> Result<(), AppError> {
        let deleted = MonitoredAllianceRepository::new(self.db)
            .delete(alliance_id, guild_id)
            .await?;

        if !deleted {
            return Err(AppError::NotFound(format!(
                "Guild {} does not monitor alliance {}",
                guild_id, alliance_id
            )));
        }

        Ok(())
    }

    pub async fn get_all(&self) -> Result<Vec<MonitoredAlliance>, AppError> {
        Ok(MonitoredAllianceRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_guild(&self, guild_id: &str) -> Result<Vec<MonitoredAlliance>, AppError> {
        Ok(MonitoredAllianceRepository::new(self.db)
            .get_by_guild_id(guild_id)
            .await?)
    }
}
