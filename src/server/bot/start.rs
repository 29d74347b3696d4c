use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::{
    all::{Client, GatewayIntents},
    http::Http,
};
use std::sync::Arc;

use crate::server::{
    bot::handler::Handler, config::Config, error::AppError, pnw::PnwClient,
};

/// Builds the Discord client without connecting to the gateway.
///
/// The returned `Arc<Http>` is shared with the notification sink and the REST API so they
/// can talk to Discord without their own connection.
///
/// # Arguments
/// - `config` - Application configuration providing the bot token
/// - `db` - Database connection used by the command handlers
/// - `pnw` - Politics and War client used by the command handlers
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to be started and its HTTP handle
/// - `Err(AppError::DiscordErr)` - Client could not be built
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    pnw: PnwClient,
) -> Result<(Client, Arc<Http>), AppError> {
    // Slash commands arrive as interactions, which need no privileged intents
    let intents = GatewayIntents::GUILDS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(db, pnw))
        .await?;
    let http = client.http.clone();

    Ok((client, http))
}

/// Connects the bot to the gateway, blocking until the connection ends.
///
/// Should be called from within a `tokio::spawn` task.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
