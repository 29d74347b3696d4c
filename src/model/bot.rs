use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::monitoring::MonitoredAllianceDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BotStatusDto {
    pub online: bool,
    pub username: Option<String>,
    pub guilds: usize,
    pub uptime_seconds: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GuildChannelDto {
    pub id: String,
    pub name: String,
    pub position: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BotConfigInfoDto {
    pub version: String,
    pub monitoring_enabled: bool,
    /// Minutes between war checks, when the schedule is a plain minute interval.
    pub check_interval_minutes: Option<u32>,
    pub check_schedule: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BotConfigDto {
    pub config: BotConfigInfoDto,
    pub monitoring: Vec<MonitoredAllianceDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NotificationChannelDto {
    pub guild_id: String,
    pub channel_id: String,
}
