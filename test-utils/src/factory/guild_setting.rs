//! Guild setting factory for creating per-guild notification settings.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a guild setting pointing at a fresh channel ID.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID
///
/// # Returns
/// - `Ok(entity::guild_setting::Model)` - Created entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_guild_setting(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::guild_setting::Model, DbErr> {
    entity::guild_setting::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        notification_channel_id: ActiveValue::Set(Some(next_id().to_string())),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
