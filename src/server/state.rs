//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned into each handler through Axum's state
//! extraction.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<Http>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Discord HTTP client shared with the bot, used for status and channel lookups.
    pub discord_http: Arc<Http>,

    /// When the process started, used to report uptime.
    pub started_at: DateTime<Utc>,

    /// Cron expression of the war check job, reported by the configuration endpoint.
    pub war_check_cron: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        discord_http: Arc<Http>,
        started_at: DateTime<Utc>,
        war_check_cron: String,
    ) -> Self {
        Self {
            db,
            discord_http,
            started_at,
            war_check_cron,
        }
    }
}
