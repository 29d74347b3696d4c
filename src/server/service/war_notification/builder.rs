//! War alert embed builder.
//!
//! One alert covers every undelivered war against an alliance. A single war is shown as
//! discrete attacker, defender and start time fields; several wars are shown as a capped
//! list of `attacker → defender` lines.

use chrono::Utc;
use serenity::all::{CreateEmbed, Timestamp};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::war_alert::WarAlert,
};

/// Embed color for war alerts.
pub const WAR_ALERT_COLOR: u32 = 0xFF0000;

/// Maximum number of wars listed individually in a multi-war alert.
pub const MAX_LISTED_WARS: usize = 10;

/// Builds the Discord embed for a war alert.
///
/// # Arguments
/// - `alert` - Alliance and its undelivered wars, most recent first
///
/// # Returns
/// - `Ok(CreateEmbed)` - Discord embed ready for posting
/// - `Err(AppError::InternalErr)` - Current time could not be converted to a Discord timestamp
pub fn build_war_alert_embed(alert: &WarAlert) -> Result<CreateEmbed, AppError> {
    let now = Utc::now().timestamp();
    let timestamp = Timestamp::from_unix_timestamp(now).map_err(|e| {
        InternalError::InvalidDiscordTimestamp {
            timestamp: now,
            reason: e.to_string(),
        }
    })?;

    let mut embed = CreateEmbed::new()
        .title("🚨 WAR DECLARATION ALERT")
        .description(format!(
            "**Alliance {}** members are under attack!",
            alert.alliance_id
        ))
        .color(WAR_ALERT_COLOR)
        .timestamp(timestamp);

    match alert.wars.as_slice() {
        [war] => {
            embed = embed
                .field("⚔️ Attacker", &war.attacker_nation, true)
                .field("🛡️ Defender", &war.defender_nation, true)
                .field(
                    "📅 War Started",
                    format!("<t:{}:F>", war.war_date.timestamp()),
                    true,
                );
        }
        wars => {
            embed = embed.field(
                format!("⚔️ {} New Wars", wars.len()),
                format_war_list(alert),
                false,
            );
        }
    }

    Ok(embed.field(
        "🔗 Politics and War",
        format!("[Alliance Page]({})", alert.alliance_url()),
        false,
    ))
}

/// Discord rejects embeds whose field values exceed this many characters.
pub const MAX_FIELD_VALUE_CHARS: usize = 1024;

const MORE_WARS_SUFFIX: &str = "\n*...and more*";

/// Lists up to [`MAX_LISTED_WARS`] wars, one `• **attacker** → **defender**` line each.
///
/// Lines that would push the value past [`MAX_FIELD_VALUE_CHARS`] are dropped, and any war
/// left out is summarized by the `...and more` suffix.
fn format_war_list(alert: &WarAlert) -> String {
    let budget = MAX_FIELD_VALUE_CHARS - MORE_WARS_SUFFIX.chars().count();

    let mut list = String::new();
    let mut list_chars = 0;
    let mut listed = 0;

    for war in alert.wars.iter().take(MAX_LISTED_WARS) {
        let line = format!("• **{}** → **{}**", war.attacker_nation, war.defender_nation);
        let separator = usize::from(listed > 0);
        let line_chars = line.chars().count();

        if list_chars + separator + line_chars > budget {
            if listed == 0 {
                // A single oversized line is cut rather than leaving the field empty
                list = line.chars().take(budget).collect();
                listed = 1;
            }
            break;
        }

        if separator == 1 {
            list.push('\n');
        }
        list.push_str(&line);
        list_chars += separator + line_chars;
        listed += 1;
    }

    if listed < alert.wars.len() {
        list.push_str(MORE_WARS_SUFFIX);
    }

    list
}
