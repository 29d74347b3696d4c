use sea_orm::DatabaseConnection;

use crate::server::{
    data::guild_setting::GuildSettingRepository,
    error::AppError,
    model::guild_setting::{GuildSetting, UpsertGuildSettingParam},
    util::parse::parse_discord_id,
};

pub struct GuildSettingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets the default notification channel of a guild.
    ///
    /// # Returns
    /// - `Ok(GuildSetting)` - The stored setting
    /// - `Err(AppError::BadRequest)` - Guild or channel ID is not a Discord snowflake
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn set_notification_channel(
        &self,
        param: UpsertGuildSettingParam,
    ) -> Result<GuildSetting, AppError> {
        for (name, value) in [
            ("guild", &param.guild_id),
            ("channel", &param.notification_channel_id),
        ] {
            if parse_discord_id(value).is_err() {
                return Err(AppError::BadRequest(format!(
                    "Invalid {} ID '{}'",
                    name, value
                )));
            }
        }

        Ok(GuildSettingRepository::new(self.db).upsert(param).await?)
    }

    /// Gets the default notification channel of a guild.
    ///
    /// # Returns
    /// - `Ok(Some(GuildSetting))` - A channel is configured
    /// - `Ok(None)` - The guild has no settings or no channel set
    pub async fn get_notification_channel(
        &self,
        guild_id: &str,
    ) -> Result<Option<GuildSetting>, AppError> {
        let setting = GuildSettingRepository::new(self.db)
            .get_by_guild_id(guild_id)
            .await?;

        Ok(setting.filter(|s| s.notification_channel_id.is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;

    /// Expect a stored channel to be returned for its guild
    #[tokio::test]
    async fn stores_and_returns_channel() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::GuildSetting)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = GuildSettingService::new(db);
        service
            .set_notification_channel(UpsertGuildSettingParam {
                guild_id: "111".to_string(),
                notification_channel_id: "222".to_string(),
            })
            .await?;

        let setting = service.get_notification_channel("111").await?.unwrap();
        assert_eq!(setting.notification_channel_id.as_deref(), Some("222"));

        Ok(())
    }

    /// Expect non-snowflake channel IDs to be rejected
    #[tokio::test]
    async fn rejects_invalid_channel_id() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::GuildSetting)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = GuildSettingService::new(db)
            .set_notification_channel(UpsertGuildSettingParam {
                guild_id: "111".to_string(),
                notification_channel_id: "general".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }
}
