//! Slash commands exposed by the bot.
//!
//! Each command module provides a `register` function describing the command to Discord and a
//! `run` function taking the already-extracted option values. `run` returns a
//! [`CommandResponse`] instead of replying itself, so the interaction handler owns all Discord
//! I/O and commands can be exercised without a gateway connection.

pub mod alert;
pub mod api;
pub mod help;
pub mod status;

use serenity::all::{CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage};

pub const SUCCESS_COLOR: u32 = 0x00FF00;
pub const INFO_COLOR: u32 = 0x0099FF;
pub const WARNING_COLOR: u32 = 0xFFFF00;
pub const ERROR_COLOR: u32 = 0xFF0000;

/// Embed reply to a slash command.
pub struct CommandResponse {
    pub embed: CreateEmbed,
    /// Only the invoking user sees the reply.
    pub ephemeral: bool,
}

impl CommandResponse {
    pub fn public(embed: CreateEmbed) -> Self {
        Self {
            embed,
            ephemeral: false,
        }
    }

    pub fn ephemeral(embed: CreateEmbed) -> Self {
        Self {
            embed,
            ephemeral: true,
        }
    }

    pub fn into_interaction_response(self) -> CreateInteractionResponse {
        CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .embed(self.embed)
                .ephemeral(self.ephemeral),
        )
    }
}

/// Definitions of every slash command, registered globally when the bot connects.
pub fn all_commands() -> Vec<serenity::all::CreateCommand> {
    vec![
        api::register(),
        alert::register(),
        status::register(),
        help::register(),
    ]
}

/// Reply sent when a command fails unexpectedly.
pub fn error_response() -> CommandResponse {
    CommandResponse::ephemeral(
        CreateEmbed::new()
            .title("❌ Error")
            .description("An error occurred while processing your command.")
            .color(ERROR_COLOR)
            .timestamp(serenity::all::Timestamp::now()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_every_command() {
        let names: Vec<String> = all_commands()
            .into_iter()
            .map(|command| {
                serde_json::to_value(command).unwrap()["name"]
                    .as_str()
                    .unwrap()
                    .to_string()
            })
            .collect();

        assert_eq!(names, vec!["api", "alert", "status", "help"]);
    }

    #[test]
    fn error_response_is_ephemeral_and_red() {
        let response = error_response();
        let embed = serde_json::to_value(&response.embed).unwrap();

        assert!(response.ephemeral);
        assert_eq!(embed["title"], "❌ Error");
        assert_eq!(embed["color"], ERROR_COLOR);
    }
}
