//! Bot status and guild channel lookups for the REST API.

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use serenity::{
    all::{ChannelType, GuildId},
    http::{Http, HttpError},
};
use std::sync::Arc;

use crate::{
    model::bot::{BotConfigInfoDto, BotStatusDto, GuildChannelDto},
    server::{error::AppError, util::parse::parse_discord_id},
};

/// Version reported by the configuration endpoint.
const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct BotService {
    http: Arc<Http>,
}

impl BotService {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Reports whether the bot can reach Discord, along with its guild count and uptime.
    ///
    /// Discord failures are reported as `online: false` rather than returned.
    pub async fn get_status(&self, started_at: DateTime<Utc>) -> BotStatusDto {
        let uptime_seconds = (Utc::now() - started_at).num_seconds();

        let user = match self.http.get_current_user().await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Failed to fetch bot user: {}", e);
                return BotStatusDto {
                    online: false,
                    username: None,
                    guilds: 0,
                    uptime_seconds,
                };
            }
        };

        let guilds = match self.http.get_guilds(None, None).await {
            Ok(guilds) => guilds.len(),
            Err(e) => {
                tracing::warn!("Failed to fetch bot guilds: {}", e);
                0
            }
        };

        BotStatusDto {
            online: true,
            username: Some(user.name.clone()),
            guilds,
            uptime_seconds,
        }
    }

    /// Lists the text channels of a guild, ordered by position.
    ///
    /// # Returns
    /// - `Ok(Vec<GuildChannelDto>)` - Text channels of the guild
    /// - `Err(AppError::BadRequest)` - Guild ID is not a Discord snowflake
    /// - `Err(AppError::NotFound)` - The bot is not in the guild or it does not exist
    /// - `Err(AppError::DiscordErr)` - Other Discord API failure
    pub async fn get_text_channels(&self, guild_id: &str) -> Result<Vec<GuildChannelDto>, AppError> {
        let id = parse_discord_id(guild_id)
            .map_err(|_| AppError::BadRequest(format!("Invalid guild ID '{}'", guild_id)))?;

        let channels = match self.http.get_channels(GuildId::new(id)).await {
            Ok(channels) => channels,
            Err(e) if is_missing_guild(&e) => {
                return Err(AppError::NotFound(format!("Guild {} not found", guild_id)))
            }
            Err(e) => return Err(e.into()),
        };

        let mut channels: Vec<GuildChannelDto> = channels
            .into_iter()
            .filter(|c| c.kind == ChannelType::Text)
            .map(|c| GuildChannelDto {
                id: c.id.to_string(),
                name: c.name,
                position: c.position,
            })
            .collect();
        channels.sort_by_key(|c| c.position);

        Ok(channels)
    }
}

/// Static configuration reported by the REST API.
pub fn config_info(war_check_cron: &str) -> BotConfigInfoDto {
    BotConfigInfoDto {
        version: VERSION.to_string(),
        monitoring_enabled: true,
        check_interval_minutes: interval_minutes(war_check_cron),
        check_schedule: war_check_cron.to_string(),
    }
}

/// Extracts `N` from a `0 */N * * * *` schedule.
fn interval_minutes(cron: &str) -> Option<u32> {
    let fields: Vec<&str> = cron.split_whitespace().collect();

    match fields.as_slice() {
        ["0", minutes, "*", "*", "*", "*"] => minutes.strip_prefix("*/")?.parse().ok(),
        _ => None,
    }
}

/// Discord answers 404 for unknown guilds and 403 for guilds the bot is not in.
fn is_missing_guild(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
            matches!(response.status_code.as_u16(), 403 | 404)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_minute_interval_from_schedule() {
        assert_eq!(interval_minutes("0 */5 * * * *"), Some(5));
        assert_eq!(interval_minutes("0 */15 * * * *"), Some(15));
    }

    #[test]
    fn other_schedules_have_no_interval() {
        assert_eq!(interval_minutes("0 0 4 * * *"), None);
        assert_eq!(interval_minutes("*/30 * * * * *"), None);
        assert_eq!(interval_minutes(""), None);
    }

    #[test]
    fn config_info_reports_schedule() {
        let info = config_info("0 */5 * * * *");

        assert!(info.monitoring_enabled);
        assert_eq!(info.check_interval_minutes, Some(5));
        assert_eq!(info.check_schedule, "0 */5 * * * *");
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    }
}
