mod api_key;
mod guild_setting;
mod monitored_alliance;
mod tracked_war;
