//! Stored upstream credential repository.
//!
//! Each Discord user stores at most one Politics and War API key. The war check cycle reads
//! these to poll the alliances the user subscribed.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::api_key::{UpsertUserApiKeyParam, UserApiKey};

/// Repository providing database operations for stored credentials.
pub struct UserApiKeyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserApiKeyRepository<'a> {
    /// Creates a new UserApiKeyRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserApiKeyRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the credential stored for a user.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID as a string slice
    ///
    /// # Returns
    /// - `Ok(Some(UserApiKey))` - Credential found
    /// - `Ok(None)` - The user has not stored a credential
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user_id(&self, user_id: &str) -> Result<Option<UserApiKey>, DbErr> {
        let entity = entity::prelude::UserApiKey::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(UserApiKey::from_entity))
    }

    /// Stores a credential for a user, replacing any existing one.
    ///
    /// The creation timestamp is reset on replacement since it records when the current key
    /// was provided.
    ///
    /// # Arguments
    /// - `param` - User ID and API key to store
    ///
    /// # Returns
    /// - `Ok(UserApiKey)` - The stored credential
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, param: UpsertUserApiKeyParam) -> Result<UserApiKey, DbErr> {
        let existing = entity::prelude::UserApiKey::find_by_id(param.user_id.clone())
            .one(self.db)
            .await?;

        let now = Utc::now();

        let entity = if existing.is_some() {
            entity::user_api_key::ActiveModel {
                user_id: ActiveValue::Unchanged(param.user_id),
                api_key: ActiveValue::Set(param.api_key),
                created_at: ActiveValue::Set(now),
            }
            .update(self.db)
            .await?
        } else {
            entity::user_api_key::ActiveModel {
                user_id: ActiveValue::Set(param.user_id),
                api_key: ActiveValue::Set(param.api_key),
                created_at: ActiveValue::Set(now),
            }
            .insert(self.db)
            .await?
        };

        Ok(UserApiKey::from_entity(entity))
    }
}
