use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::api_key::UserApiKeyRepository,
    error::AppError,
    model::api_key::{UpsertUserApiKeyParam, UserApiKey},
    pnw::PnwClient,
};

/// Stores and looks up users' Politics and War API keys.
pub struct ApiKeyService<'a> {
    db: &'a DatabaseConnection,
    pnw: &'a PnwClient,
}

impl<'a> ApiKeyService<'a> {
    pub fn new(db: &'a DatabaseConnection, pnw: &'a PnwClient) -> Self {
        Self { db, pnw }
    }

    /// Validates a key upstream and stores it for the user when accepted.
    ///
    /// # Returns
    /// - `Ok(true)` - Key accepted and stored, replacing any previous key
    /// - `Ok(false)` - Key rejected upstream; nothing stored
    /// - `Err(AppError::UpstreamErr)` - Validity could not be determined
    /// - `Err(AppError::DbErr)` - Database error while storing
    pub async fn register(&self, user_id: &str, api_key: &str) -> Result<bool, AppError> {
        let api_key = api_key.trim();
        if api_key.is_empty() || !self.pnw.validate_api_key(api_key).await? {
            return Ok(false);
        }

        UserApiKeyRepository::new(self.db)
            .upsert(UpsertUserApiKeyParam {
                user_id: user_id.to_string(),
                api_key: api_key.to_string(),
            })
            .await?;

        tracing::info!("Stored API key for user {}", user_id);

        Ok(true)
    }

    pub async fn get_for_user(&self, user_id: &str) -> Result<Option<UserApiKey>, AppError> {
        Ok(UserApiKeyRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?)
    }
}
