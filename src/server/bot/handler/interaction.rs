//! Slash command dispatch.
//!
//! Extracts option values from the interaction, runs the matching command and sends its
//! reply. A command that fails is logged and answered with an ephemeral error embed so the
//! user is never left without a response.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, Context, CreateEmbed, Interaction, ResolvedOption, ResolvedValue,
    Timestamp,
};

use crate::server::{
    bot::command::{self, alert::AlertTarget, CommandResponse, ERROR_COLOR},
    error::AppError,
    pnw::PnwClient,
};

/// Handles an interaction, ignoring everything except slash commands.
pub async fn handle_interaction_create(
    db: &DatabaseConnection,
    pnw: &PnwClient,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(interaction) = interaction else {
        return;
    };

    let response = match dispatch(db, pnw, &interaction).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(
                "Error handling command /{} for user {}: {}",
                interaction.data.name,
                interaction.user.id,
                e
            );
            command::error_response()
        }
    };

    if let Err(e) = interaction
        .create_response(&ctx.http, response.into_interaction_response())
        .await
    {
        tracing::error!(
            "Failed to reply to command /{}: {}",
            interaction.data.name,
            e
        );
    }
}

async fn dispatch(
    db: &DatabaseConnection,
    pnw: &PnwClient,
    interaction: &CommandInteraction,
) -> Result<CommandResponse, AppError> {
    let options = interaction.data.options();
    let user_id = interaction.user.id.to_string();

    tracing::debug!("Received command /{} from {}", interaction.data.name, user_id);

    match interaction.data.name.as_str() {
        command::api::NAME => {
            let key = string_option(&options, "key")?;
            command::api::run(db, pnw, &user_id, key).await
        }
        command::alert::NAME => {
            let Some(guild_id) = interaction.guild_id else {
                return Ok(guild_only_response());
            };
            let alliance_id = integer_option(&options, "alliance_id")?;
            let guild_id = guild_id.to_string();
            let channel_id = interaction.channel_id.to_string();
            let target = AlertTarget {
                user_id: &user_id,
                guild_id: &guild_id,
                channel_id: &channel_id,
            };

            command::alert::run(db, pnw, target, alliance_id).await
        }
        command::status::NAME => {
            let Some(guild_id) = interaction.guild_id else {
                return Ok(guild_only_response());
            };
            command::status::run(db, &guild_id.to_string()).await
        }
        command::help::NAME => Ok(command::help::run()),
        other => Err(AppError::BadRequest(format!("Unknown command /{}", other))),
    }
}

fn string_option<'a>(options: &[ResolvedOption<'a>], name: &str) -> Result<&'a str, AppError> {
    options
        .iter()
        .find_map(|option| match option.value {
            ResolvedValue::String(value) if option.name == name => Some(value),
            _ => None,
        })
        .ok_or_else(|| AppError::BadRequest(format!("Missing string option '{}'", name)))
}

fn integer_option(options: &[ResolvedOption<'_>], name: &str) -> Result<i64, AppError> {
    options
        .iter()
        .find_map(|option| match option.value {
            ResolvedValue::Integer(value) if option.name == name => Some(value),
            _ => None,
        })
        .ok_or_else(|| AppError::BadRequest(format!("Missing integer option '{}'", name)))
}

fn guild_only_response() -> CommandResponse {
    CommandResponse::ephemeral(
        CreateEmbed::new()
            .title("❌ Server Only")
            .description("This command can only be used in a server.")
            .color(ERROR_COLOR)
            .timestamp(Timestamp::now()),
    )
}
