//! SeaORM entity models for the alert bot's persistent store.

pub mod prelude;

pub mod guild_setting;
pub mod monitored_alliance;
pub mod tracked_war;
pub mod user_api_key;
