//! `/alert`: subscribes the current channel to war alerts for an alliance.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, CreateEmbed, Timestamp};

use crate::server::{
    bot::command::{CommandResponse, ERROR_COLOR, SUCCESS_COLOR, WARNING_COLOR},
    error::AppError,
    model::monitored_alliance::UpsertMonitoredAllianceParam,
    pnw::{model::Alliance, PnwClient},
    service::{api_key::ApiKeyService, monitoring::MonitoringService},
};

pub const NAME: &str = "alert";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Monitor an alliance for war declarations")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "alliance_id",
                "The alliance ID to monitor",
            )
            .min_int_value(1)
            .required(true),
        )
}

/// Where the command was invoked and by whom.
pub struct AlertTarget<'a> {
    pub user_id: &'a str,
    pub guild_id: &'a str,
    pub channel_id: &'a str,
}

/// Subscribes the invoking channel to the alliance, then describes the alliance.
///
/// The subscription is kept even when the alliance details cannot be fetched; the reply then
/// warns the user to double check the ID.
///
/// # Returns
/// - `Ok(CommandResponse)` - Confirmation, warning, or missing-key reply
/// - `Err(AppError::BadRequest)` - Alliance ID is not positive
/// - `Err(AppError::DbErr)` - Database error while storing the subscription
pub async fn run(
    db: &DatabaseConnection,
    pnw: &PnwClient,
    target: AlertTarget<'_>,
    alliance_id: i64,
) -> Result<CommandResponse, AppError> {
    let Some(credential) = ApiKeyService::new(db, pnw)
        .get_for_user(target.user_id)
        .await?
    else {
        return Ok(missing_key_response());
    };

    MonitoringService::new(db)
        .add(UpsertMonitoredAllianceParam {
            alliance_id,
            guild_id: target.guild_id.to_string(),
            channel_id: target.channel_id.to_string(),
            user_id: target.user_id.to_string(),
        })
        .await?;

    tracing::info!(
        "Guild {} channel {} now monitors alliance {}",
        target.guild_id,
        target.channel_id,
        alliance_id
    );

    match pnw.get_alliance_info(alliance_id, &credential.api_key).await {
        Ok(alliance) => Ok(CommandResponse::public(started_embed(&alliance))),
        Err(e) => {
            tracing::warn!("Failed to fetch alliance {} info: {}", alliance_id, e);
            Ok(CommandResponse::ephemeral(unverified_embed(alliance_id)))
        }
    }
}

fn missing_key_response() -> CommandResponse {
    CommandResponse::ephemeral(
        CreateEmbed::new()
            .title("❌ API Key Required")
            .description("Please set your API key first using `/api <your_key>`")
            .color(ERROR_COLOR)
            .timestamp(Timestamp::now()),
    )
}

fn started_embed(alliance: &Alliance) -> CreateEmbed {
    CreateEmbed::new()
        .title("🔔 Alliance Monitoring Started")
        .description(format!(
            "Now monitoring **{}** ({}) for war declarations.",
            alliance.name, alliance.acronym
        ))
        .field("Alliance ID", alliance.id.to_string(), true)
        .field("Nations", alliance.nations.len().to_string(), true)
        .field("Score", format_score(alliance.score), true)
        .color(SUCCESS_COLOR)
        .timestamp(Timestamp::now())
}

fn unverified_embed(alliance_id: i64) -> CreateEmbed {
    CreateEmbed::new()
        .title("⚠️ Alliance Added with Warning")
        .description(format!(
            "Alliance ID {} has been added to monitoring, but we couldn't fetch alliance details. \
             Please verify the alliance ID is correct.",
            alliance_id
        ))
        .color(WARNING_COLOR)
        .timestamp(Timestamp::now())
}

/// Formats a score with thousands separators and two decimals, e.g. `98,765.25`.
fn format_score(score: f64) -> String {
    let formatted = format!("{:.2}", score.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if score < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, fraction)
}
