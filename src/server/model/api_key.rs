//! Domain models for stored upstream credentials.

use chrono::{DateTime, Utc};

/// Politics and War API key stored for a Discord user.
#[derive(Clone, PartialEq)]
pub struct UserApiKey {
    /// Discord user ID owning the credential (stored as String).
    pub user_id: String,
    /// Politics and War API key.
    pub api_key: String,
    /// Timestamp when the credential was stored.
    pub created_at: DateTime<Utc>,
}

impl UserApiKey {
    /// Converts an entity model to a credential domain model at the repository boundary.
    pub fn from_entity(entity: entity::user_api_key::Model) -> Self {
        Self {
            user_id: entity.user_id,
            api_key: entity.api_key,
            created_at: entity.created_at,
        }
    }
}

impl std::fmt::Debug for UserApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserApiKey")
            .field("user_id", &self.user_id)
            .field("api_key", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Parameters for storing a credential. Replaces any key already stored for the user.
#[derive(Clone)]
pub struct UpsertUserApiKeyParam {
    /// Discord user ID owning the credential.
    pub user_id: String,
    /// Politics and War API key.
    pub api_key: String,
}
