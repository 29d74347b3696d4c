use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        bot::{BotConfigDto, BotStatusDto, GuildChannelDto, NotificationChannelDto},
    },
    server::{
        error::AppError,
        model::guild_setting::UpsertGuildSettingParam,
        service::{
            bot::{config_info, BotService},
            guild_setting::GuildSettingService,
            monitoring::MonitoringService,
        },
        state::AppState,
    },
};

pub static BOT_TAG: &str = "bot";

/// Get whether the bot is connected, with its guild count and uptime
#[utoipa::path(
    get,
    path = "/api/bot/status",
    tag = BOT_TAG,
    responses(
        (status = 200, description = "Bot status", body = BotStatusDto),
    ),
)]
pub async fn get_status(State(state): State<AppState>) -> impl IntoResponse {
    let status = BotService::new(state.discord_http.clone())
        .get_status(state.started_at)
        .await;

    Json(status)
}

#[utoipa::path(
    get,
    path = "/api/bot/channels/{guild_id}",
    tag = BOT_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Text channels of the guild ordered by position", body = Vec<GuildChannelDto>),
        (status = 400, description = "Invalid guild ID", body = ErrorDto),
        (status = 404, description = "Guild not found or bot is not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guild_channels(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let channels = BotService::new(state.discord_http.clone())
        .get_text_channels(&guild_id)
        .await?;

    Ok(Json(channels))
}

/// Get the bot configuration along with every alliance subscription
#[utoipa::path(
    get,
    path = "/api/bot/config",
    tag = BOT_TAG,
    responses(
        (status = 200, description = "Bot configuration", body = BotConfigDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_config(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let monitoring = MonitoringService::new(&state.db).get_all().await?;

    Ok(Json(BotConfigDto {
        config: config_info(&state.war_check_cron),
        monitoring: monitoring.into_iter().map(|m| m.into_dto()).collect(),
    }))
}

/// Set the default notification channel of a guild
#[utoipa::path(
    post,
    path = "/api/bot/config/channel",
    tag = BOT_TAG,
    request_body = NotificationChannelDto,
    responses(
        (status = 200, description = "Notification channel stored", body = NotificationChannelDto),
        (status = 400, description = "Invalid guild or channel ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_notification_channel(
    State(state): State<AppState>,
    Json(payload): Json<NotificationChannelDto>,
) -> Result<impl IntoResponse, AppError> {
    GuildSettingService::new(&state.db)
        .set_notification_channel(UpsertGuildSettingParam {
            guild_id: payload.guild_id.clone(),
            notification_channel_id: payload.channel_id.clone(),
        })
        .await?;

    Ok(Json(payload))
}

#[utoipa::path(
    get,
    path = "/api/bot/config/channel/{guild_id}",
    tag = BOT_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Default notification channel of the guild", body = NotificationChannelDto),
        (status = 404, description = "No notification channel configured", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notification_channel(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let channel = GuildSettingService::new(&state.db)
        .get_notification_channel(&guild_id)
        .await?
        .and_then(|setting| setting.into_dto())
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No notification channel configured for guild {}",
                guild_id
            ))
        })?;

    Ok(Json(channel))
}
