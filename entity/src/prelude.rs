pub use super::guild_setting::Entity as GuildSetting;
pub use super::monitored_alliance::Entity as MonitoredAlliance;
pub use super::tracked_war::Entity as TrackedWar;
pub use super::user_api_key::Entity as UserApiKey;
