//! Domain models for per-guild notification settings.

use chrono::{DateTime, Utc};

use crate::model::bot::NotificationChannelDto;

/// Default notification channel configured for a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSetting {
    /// Discord guild ID (stored as String).
    pub guild_id: String,
    /// Discord channel ID for notifications, if one has been set.
    pub notification_channel_id: Option<String>,
    /// Timestamp when the setting was last changed.
    pub updated_at: DateTime<Utc>,
}

impl GuildSetting {
    /// Converts an entity model to a guild setting domain model at the repository boundary.
    pub fn from_entity(entity: entity::guild_setting::Model) -> Self {
        Self {
            guild_id: entity.guild_id,
            notification_channel_id: entity.notification_channel_id,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the setting to a DTO, returning `None` when no channel is configured.
    pub fn into_dto(self) -> Option<NotificationChannelDto> {
        let channel_id = self.notification_channel_id?;

        Some(NotificationChannelDto {
            guild_id: self.guild_id,
            channel_id,
        })
    }
}

/// Parameters for setting a guild's notification channel.
#[derive(Debug, Clone)]
pub struct UpsertGuildSettingParam {
    /// Discord guild ID.
    pub guild_id: String,
    /// Discord channel ID for notifications.
    pub notification_channel_id: String,
}
