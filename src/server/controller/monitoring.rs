use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        monitoring::{AddMonitoringDto, MonitoredAllianceDto, WarSummaryDto},
    },
    server::{
        error::AppError,
        model::monitored_alliance::UpsertMonitoredAllianceParam,
        service::{monitoring::MonitoringService, tracked_war::TrackedWarService},
        state::AppState,
    },
};

pub static MONITORING_TAG: &str = "monitoring";

#[utoipa::path(
    get,
    path = "/api/bot/monitoring",
    tag = MONITORING_TAG,
    responses(
        (status = 200, description = "Every alliance subscription", body = Vec<MonitoredAllianceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_monitoring(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let subscriptions = MonitoringService::new(&state.db).get_all().await?;

    Ok(Json(
        subscriptions
            .into_iter()
            .map(|s| s.into_dto())
            .collect::<Vec<MonitoredAllianceDto>>(),
    ))
}

/// Subscribe a guild channel to an alliance
///
/// Replaces the guild's existing subscription to the alliance. Subscriptions created here
/// are owned by the `web-interface` user unless `user_id` is given.
#[utoipa::path(
    post,
    path = "/api/bot/monitoring",
    tag = MONITORING_TAG,
    request_body = AddMonitoringDto,
    responses(
        (status = 201, description = "Subscription stored", body = MonitoredAllianceDto),
        (status = 400, description = "Invalid alliance ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_monitoring(
    State(state): State<AppState>,
    Json(payload): Json<AddMonitoringDto>,
) -> Result<impl IntoResponse, AppError> {
    let subscription = MonitoringService::new(&state.db)
        .add(UpsertMonitoredAllianceParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(subscription.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/bot/monitoring/{alliance_id}/{guild_id}",
    tag = MONITORING_TAG,
    params(
        ("alliance_id" = i64, Path, description = "Politics and War alliance ID"),
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Subscription removed", body = SuccessDto),
        (status = 404, description = "Guild does not monitor the alliance", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_monitoring(
    State(state): State<AppState>,
    Path((alliance_id, guild_id)): Path<(i64, String)>,
) -> Result<impl IntoResponse, AppError> {
    MonitoringService::new(&state.db)
        .remove(alliance_id, &guild_id)
        .await?;

    Ok(Json(SuccessDto {
        success: true,
        message: format!("Stopped monitoring alliance {}", alliance_id),
    }))
}

/// Summarize the wars tracked for an alliance
#[utoipa::path(
    get,
    path = "/api/bot/monitoring/{alliance_id}/wars",
    tag = MONITORING_TAG,
    params(
        ("alliance_id" = i64, Path, description = "Politics and War alliance ID")
    ),
    responses(
        (status = 200, description = "War summary", body = WarSummaryDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_war_summary(
    State(state): State<AppState>,
    Path(alliance_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let summary = TrackedWarService::new(&state.db)
        .get_summary(alliance_id, Utc::now())
        .await?;

    Ok(Json(summary.into_dto()))
}
