//! Ready event handler.
//!
//! Fired once the bot has authenticated with the gateway. Registers the slash commands
//! globally so they are available in every guild the bot is in.

use dioxus_logger::tracing;
use serenity::all::{Command, Context, Ready};

use crate::server::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// Registration failures are logged; the bot keeps running so scheduled alerts are still
/// delivered.
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    match Command::set_global_commands(&ctx.http, command::all_commands()).await {
        Ok(commands) => tracing::info!("Registered {} global commands", commands.len()),
        Err(e) => tracing::error!("Failed to register global commands: {}", e),
    }
}
