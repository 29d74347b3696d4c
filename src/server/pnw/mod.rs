//! Politics and War GraphQL API client.
//!
//! The client holds no credential; every call takes the caller's API key, which is sent as the
//! `api_key` query parameter. Responses are deserialized into the typed structs of [`model`]
//! and failures are classified by [`UpstreamError`].
//!
//! The war check cycle depends on the [`WarSource`] trait rather than the concrete client so it
//! can be exercised against in-memory fakes.

pub mod client;
pub mod model;
mod query;

use serenity::async_trait;

use crate::server::{error::upstream::UpstreamError, pnw::model::War};

pub use client::PnwClient;

/// Source of wars involving an alliance.
#[async_trait]
pub trait WarSource: Send + Sync {
    /// Fetches wars involving `alliance_id` on either side.
    ///
    /// # Arguments
    /// - `alliance_id` - Alliance to query
    /// - `api_key` - Credential of the user who owns the subscription
    /// - `active_only` - Restrict to wars that have not ended
    async fn get_alliance_wars(
        &self,
        alliance_id: i64,
        api_key: &str,
        active_only: bool,
    ) -> Result<Vec<War>, UpstreamError>;
}

#[async_trait]
impl WarSource for PnwClient {
    async fn get_alliance_wars(
        &self,
        alliance_id: i64,
        api_key: &str,
        active_only: bool,
    ) -> Result<Vec<War>, UpstreamError> {
        PnwClient::get_alliance_wars(self, alliance_id, api_key, active_only).await
    }
}
