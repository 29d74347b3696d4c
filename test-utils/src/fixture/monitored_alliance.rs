//! Monitored alliance fixtures for creating in-memory test data.

use chrono::Utc;
use entity::monitored_alliance;

/// Default monitored alliance ID.
pub const DEFAULT_ALLIANCE_ID: i64 = 10523;

/// Default destination guild ID.
pub const DEFAULT_GUILD_ID: &str = "111111111";

/// Default destination channel ID.
pub const DEFAULT_CHANNEL_ID: &str = "222222222";

/// Default owning user ID.
pub const DEFAULT_USER_ID: &str = "333333333";

/// Creates a monitored alliance entity model with default values.
pub fn entity() -> monitored_alliance::Model {
    entity_builder().build()
}

/// Creates a customizable monitored alliance entity builder.
pub fn entity_builder() -> MonitoredAllianceEntityBuilder {
    MonitoredAllianceEntityBuilder::default()
}

/// Builder for monitored alliance entity models.
pub struct MonitoredAllianceEntityBuilder {
    id: i32,
    alliance_id: i64,
    guild_id: String,
    channel_id: String,
    user_id: String,
}

impl Default for MonitoredAllianceEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            alliance_id: DEFAULT_ALLIANCE_ID,
            guild_id: DEFAULT_GUILD_ID.to_string(),
            channel_id: DEFAULT_CHANNEL_ID.to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
        }
    }
}

impl MonitoredAllianceEntityBuilder {
    /// Sets the row ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the monitored alliance ID.
    pub fn alliance_id(mut self, alliance_id: i64) -> Self {
        self.alliance_id = alliance_id;
        self
    }

    /// Sets the destination channel ID.
    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    /// Builds the entity model.
    pub fn build(self) -> monitored_alliance::Model {
        monitored_alliance::Model {
            id: self.id,
            alliance_id: self.alliance_id,
            guild_id: self.guild_id,
            channel_id: self.channel_id,
            user_id: self.user_id,
            created_at: Utc::now(),
        }
    }
}
