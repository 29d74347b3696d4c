//! Monitored alliance factory for creating alliance subscriptions.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test subscriptions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let subscription = MonitoredAllianceFactory::new(&db, 10523, "user")
///     .guild_id("111")
///     .channel_id("222")
///     .build()
///     .await?;
/// ```
pub struct MonitoredAllianceFactory<'a> {
    db: &'a DatabaseConnection,
    alliance_id: i64,
    guild_id: String,
    channel_id: String,
    user_id: String,
}

impl<'a> MonitoredAllianceFactory<'a> {
    /// Creates a new MonitoredAllianceFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: `"{id}"` where id is auto-incremented
    /// - channel_id: `"{id}"` from a second counter value
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `alliance_id` - Alliance to monitor
    /// - `user_id` - Discord user ID owning the subscription
    pub fn new(db: &'a DatabaseConnection, alliance_id: i64, user_id: impl Into<String>) -> Self {
        Self {
            db,
            alliance_id,
            guild_id: next_id().to_string(),
            channel_id: next_id().to_string(),
            user_id: user_id.into(),
        }
    }

    /// Sets the destination guild ID.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the destination channel ID.
    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    /// Builds and inserts the subscription into the database.
    ///
    /// # Returns
    /// - `Ok(entity::monitored_alliance::Model)` - Created entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::monitored_alliance::Model, DbErr> {
        entity::monitored_alliance::ActiveModel {
            id: ActiveValue::NotSet,
            alliance_id: ActiveValue::Set(self.alliance_id),
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a subscription for the given alliance and owning user with default guild/channel.
pub async fn create_subscription(
    db: &DatabaseConnection,
    alliance_id: i64,
    user_id: &str,
) -> Result<entity::monitored_alliance::Model, DbErr> {
    MonitoredAllianceFactory::new(db, alliance_id, user_id)
        .build()
        .await
}
