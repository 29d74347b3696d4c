use serenity::{
    all::{ChannelId, CreateMessage},
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::server::{
    error::AppError,
    model::war_alert::WarAlert,
    service::war_notification::{builder::build_war_alert_embed, NotificationSink},
};

/// Posts war alerts as embeds using the bot's HTTP client.
pub struct DiscordNotificationSink {
    /// Discord HTTP client shared with the gateway client
    http: Arc<Http>,
}

impl DiscordNotificationSink {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl NotificationSink for DiscordNotificationSink {
    async fn deliver(&self, channel_id: ChannelId, alert: &WarAlert) -> Result<(), AppError> {
        let embed = build_war_alert_embed(alert)?;
        let message = CreateMessage::new().embed(embed);

        channel_id.send_message(&self.http, message).await?;

        Ok(())
    }
}
