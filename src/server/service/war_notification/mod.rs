//! War alert delivery to Discord channels.
//!
//! The war check cycle hands each destination channel to a [`NotificationSink`]. The
//! production sink posts an embed through the serenity HTTP client; tests substitute an
//! in-memory sink.
//!
//! - `builder` - Embed formatting for war alerts
//! - `sink` - Discord-backed sink

pub mod builder;
pub mod sink;

use serenity::{all::ChannelId, async_trait};

use crate::server::{error::AppError, model::war_alert::WarAlert};

pub use sink::DiscordNotificationSink;

/// Destination for war alerts.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Delivers one alert to one channel.
    ///
    /// # Returns
    /// - `Ok(())` - Message posted
    /// - `Err(AppError)` - Delivery failed, e.g. channel deleted or permission revoked
    async fn deliver(&self, channel_id: ChannelId, alert: &WarAlert) -> Result<(), AppError>;
}
