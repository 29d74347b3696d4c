use sea_orm::DatabaseConnection;
use serenity::all::{CreateCommand, CreateEmbed, Timestamp};

use crate::server::{
    bot::command::{CommandResponse, INFO_COLOR, WARNING_COLOR},
    error::AppError,
    model::monitored_alliance::MonitoredAlliance,
    service::monitoring::MonitoringService,
};

pub const NAME: &str = "status";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Check current monitoring status")
}

/// Lists the alliances monitored in the guild along with their alert channels.
pub async fn run(db: &DatabaseConnection, guild_id: &str) -> Result<CommandResponse, AppError> {
    let subscriptions = MonitoringService::new(db).get_by_guild(guild_id).await?;

    Ok(CommandResponse::public(status_embed(&subscriptions)))
}

fn status_embed(subscriptions: &[MonitoredAlliance]) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title("📊 Monitoring Status")
        .timestamp(Timestamp::now());

    if subscriptions.is_empty() {
        return embed
            .description("No alliances are currently being monitored in this server.")
            .color(WARNING_COLOR);
    }

    let list = subscriptions
        .iter()
        .map(|s| format!("• Alliance {} (Channel: <#{}>)", s.alliance_id, s.channel_id))
        .collect::<Vec<_>>()
        .join("\n");

    embed
        .description(format!(
            "Currently monitoring {} alliance(s):",
            subscriptions.len()
        ))
        .field("Monitored Alliances", list, false)
        .color(INFO_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory::monitored_alliance::MonitoredAllianceFactory};

    /// Expect an empty guild to get the "nothing monitored" reply
    #[tokio::test]
    async fn reports_no_subscriptions() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::MonitoredAlliance)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let response = run(db, "111").await?;
        let embed = serde_json::to_value(&response.embed).unwrap();

        assert_eq!(
            embed["description"],
            "No alliances are currently being monitored in this server."
        );
        assert_eq!(embed["color"], WARNING_COLOR);

        Ok(())
    }

    /// Expect only the invoking guild's subscriptions to be listed
    #[tokio::test]
    async fn lists_guild_subscriptions() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::MonitoredAlliance)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        MonitoredAllianceFactory::new(db, 10523, "42")
            .guild_id("111")
            .channel_id("222")
            .build()
            .await?;
        MonitoredAllianceFactory::new(db, 7000, "42")
            .guild_id("999")
            .channel_id("333")
            .build()
            .await?;

        let response = run(db, "111").await?;
        let embed = serde_json::to_value(&response.embed).unwrap();

        assert!(!response.ephemeral);
        assert_eq!(embed["description"], "Currently monitoring 1 alliance(s):");
        assert_eq!(
            embed["fields"][0]["value"],
            "• Alliance 10523 (Channel: <#222>)"
        );

        Ok(())
    }
}
