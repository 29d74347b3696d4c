//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! serves interactive documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, state::AppState};

/// Builds the HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/bot/status` - Bot connectivity, guild count and uptime
/// - `GET /api/bot/channels/{guild_id}` - Text channels of a guild
/// - `GET /api/bot/config` - Bot configuration and all subscriptions
/// - `POST /api/bot/config/channel` - Set a guild's default notification channel
/// - `GET /api/bot/config/channel/{guild_id}` - Get a guild's default notification channel
/// - `GET /api/bot/monitoring` - List subscriptions
/// - `POST /api/bot/monitoring` - Add or replace a subscription
/// - `DELETE /api/bot/monitoring/{alliance_id}/{guild_id}` - Remove a subscription
/// - `GET /api/bot/monitoring/{alliance_id}/wars` - War summary for an alliance
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Valinor", description = "Valinor war alert bot API"), tags(
        (name = controller::bot::BOT_TAG, description = "Bot status and configuration routes"),
        (name = controller::monitoring::MONITORING_TAG, description = "Alliance subscription routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::bot::get_status))
        .routes(routes!(controller::bot::get_guild_channels))
        .routes(routes!(controller::bot::get_config))
        .routes(routes!(controller::bot::set_notification_channel))
        .routes(routes!(controller::bot::get_notification_channel))
        .routes(routes!(
            controller::monitoring::get_monitoring,
            controller::monitoring::add_monitoring
        ))
        .routes(routes!(controller::monitoring::remove_monitoring))
        .routes(routes!(controller::monitoring::get_war_summary))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
