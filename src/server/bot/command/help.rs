use serenity::all::{CreateCommand, CreateEmbed, Timestamp};

use crate::server::bot::command::{CommandResponse, INFO_COLOR};

pub const NAME: &str = "help";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Show available commands")
}

pub fn run() -> CommandResponse {
    CommandResponse::public(
        CreateEmbed::new()
            .title("🤖 Valinor Alliance Monitor Bot")
            .description("Monitor Politics and War alliances for war declarations")
            .field(
                "🔑 `/api <key>`",
                "Set your Politics and War API key (required first step)",
                false,
            )
            .field(
                "🔔 `/alert <alliance_id>`",
                "Start monitoring an alliance for war declarations",
                false,
            )
            .field(
                "📊 `/status`",
                "Check which alliances are being monitored",
                false,
            )
            .field("❓ `/help`", "Show this help message", false)
            .field(
                "🔗 Links",
                "[Politics and War](https://politicsandwar.com) • \
                 [Valinor Alliance](https://politicsandwar.com/alliance/id=10523)",
                false,
            )
            .color(INFO_COLOR)
            .timestamp(Timestamp::now()),
    )
}
