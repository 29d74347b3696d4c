//! Discord bot integration.
//!
//! The bot exposes slash commands for registering API keys and managing alliance
//! subscriptions. War alerts themselves are posted by the scheduler through the bot's HTTP
//! client, which is shared so alerts and REST lookups do not open their own connections.
//!
//! The bot is initialized during startup and runs in a separate tokio task to avoid blocking
//! the HTTP server.
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is requested. Slash commands are delivered as interactions, so neither
//! message content nor member intents are needed.

pub mod command;
pub mod handler;
pub mod start;
