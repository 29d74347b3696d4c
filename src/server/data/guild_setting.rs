use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::guild_setting::{GuildSetting, UpsertGuildSettingParam};

pub struct GuildSettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the notification settings of a guild
    pub async fn get_by_guild_id(&self, guild_id: &str) -> Result<Option<GuildSetting>, DbErr> {
        let entity = entity::prelude::GuildSetting::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(GuildSetting::from_entity))
    }

    /// Sets the default notification channel of a guild, creating the settings row if needed
    pub async fn upsert(&self, param: UpsertGuildSettingParam) -> Result<GuildSetting, DbErr> {
        let existing = entity::prelude::GuildSetting::find_by_id(param.guild_id.clone())
            .one(self.db)
            .await?;

        let active = entity::guild_setting::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id),
            notification_channel_id: ActiveValue::Set(Some(param.notification_channel_id)),
            updated_at: ActiveValue::Set(Utc::now()),
        };

        let entity = match existing {
            Some(_) => active.update(self.db).await?,
            None => active.insert(self.db).await?,
        };

        Ok(GuildSetting::from_entity(entity))
    }
}
