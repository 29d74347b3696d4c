//! Domain models for alliance subscriptions.
//!
//! A subscription routes war alerts for one alliance to one channel of one guild, and names
//! the user whose stored credential is used to poll the upstream API for it.

use chrono::{DateTime, Utc};

use crate::model::monitoring::{AddMonitoringDto, MonitoredAllianceDto};

/// Owner recorded for subscriptions created through the REST API without a user.
pub const WEB_INTERFACE_USER_ID: &str = "web-interface";

/// Subscription of a guild channel to war alerts for an alliance.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitoredAlliance {
    /// Unique identifier for the subscription record.
    pub id: i32,
    /// Politics and War alliance ID being monitored.
    pub alliance_id: i64,
    /// Discord guild ID receiving alerts (stored as String).
    pub guild_id: String,
    /// Discord channel ID receiving alerts (stored as String).
    pub channel_id: String,
    /// Discord user ID whose credential polls this alliance (stored as String).
    pub user_id: String,
    /// Timestamp when the subscription was created.
    pub created_at: DateTime<Utc>,
}

impl MonitoredAlliance {
    /// Converts an entity model to a subscription domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `MonitoredAlliance` - The converted subscription domain model
    pub fn from_entity(entity: entity::monitored_alliance::Model) -> Self {
        Self {
            id: entity.id,
            alliance_id: entity.alliance_id,
            guild_id: entity.guild_id,
            channel_id: entity.channel_id,
            user_id: entity.user_id,
            created_at: entity.created_at,
        }
    }

    /// Converts the subscription domain model to a DTO for API responses.
    pub fn into_dto(self) -> MonitoredAllianceDto {
        MonitoredAllianceDto {
            id: self.id,
            alliance_id: self.alliance_id,
            guild_id: self.guild_id,
            channel_id: self.channel_id,
            user_id: self.user_id,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating or replacing a subscription.
///
/// Subscriptions are unique per (alliance_id, guild_id); an existing pair has its channel
/// and owning user replaced.
#[derive(Debug, Clone)]
pub struct UpsertMonitoredAllianceParam {
    /// Alliance to monitor.
    pub alliance_id: i64,
    /// Discord guild ID receiving alerts.
    pub guild_id: String,
    /// Discord channel ID receiving alerts.
    pub channel_id: String,
    /// Discord user ID owning the subscription.
    pub user_id: String,
}

impl UpsertMonitoredAllianceParam {
    /// Converts an API request into upsert parameters, defaulting the owner to
    /// `web-interface` when none is given.
    pub fn from_dto(dto: AddMonitoringDto) -> Self {
        Self {
            alliance_id: dto.alliance_id,
            guild_id: dto.guild_id,
            channel_id: dto.channel_id,
            user_id: dto
                .user_id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| WEB_INTERFACE_USER_ID.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_dto_defaults_missing_user_to_web_interface() {
        let param = UpsertMonitoredAllianceParam::from_dto(AddMonitoringDto {
            alliance_id: 10523,
            guild_id: "111".to_string(),
            channel_id: "222".to_string(),
            user_id: None,
        });

        assert_eq!(param.user_id, WEB_INTERFACE_USER_ID);
    }

    #[test]
    fn from_dto_keeps_given_user() {
        let param = UpsertMonitoredAllianceParam::from_dto(AddMonitoringDto {
            alliance_id: 10523,
            guild_id: "111".to_string(),
            channel_id: "222".to_string(),
            user_id: Some("333".to_string()),
        });

        assert_eq!(param.user_id, "333");
    }
}
