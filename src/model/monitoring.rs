use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonitoredAllianceDto {
    pub id: i32,
    pub alliance_id: i64,
    pub guild_id: String,
    pub channel_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for subscribing a guild channel to an alliance.
///
/// `user_id` names the owner whose stored credential is used to poll the alliance.
/// When omitted it defaults to `web-interface`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddMonitoringDto {
    pub alliance_id: i64,
    pub guild_id: String,
    pub channel_id: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrackedWarDto {
    pub war_id: String,
    pub alliance_id: i64,
    pub attacker_nation: String,
    pub defender_nation: String,
    pub war_date: DateTime<Utc>,
    pub notified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WarSummaryDto {
    pub alliance_id: i64,
    pub total_wars: usize,
    pub recent_wars: usize,
    pub active_wars: Vec<TrackedWarDto>,
}
