use sea_orm::DatabaseConnection;
use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, CreateEmbed, Timestamp};

use crate::server::{
    bot::command::{CommandResponse, ERROR_COLOR, SUCCESS_COLOR},
    error::AppError,
    pnw::PnwClient,
    service::api_key::ApiKeyService,
};

pub const NAME: &str = "api";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Set your Politics and War API key")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "key",
                "Your Politics and War API key",
            )
            .required(true),
        )
}

/// Validates the key upstream and stores it for the invoking user.
///
/// Both outcomes reply ephemerally so the key is never echoed to the channel.
pub async fn run(
    db: &DatabaseConnection,
    pnw: &PnwClient,
    user_id: &str,
    key: &str,
) -> Result<CommandResponse, AppError> {
    let stored = ApiKeyService::new(db, pnw).register(user_id, key).await?;

    let embed = if stored {
        CreateEmbed::new()
            .title("✅ API Key Set")
            .description("Your Politics and War API key has been securely stored.")
            .color(SUCCESS_COLOR)
    } else {
        CreateEmbed::new()
            .title("❌ Invalid API Key")
            .description("Politics and War rejected this API key. Please check it and try again.")
            .color(ERROR_COLOR)
    };

    Ok(CommandResponse::ephemeral(embed.timestamp(Timestamp::now())))
}
