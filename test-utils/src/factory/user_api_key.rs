//! User API key factory for creating stored upstream credentials.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test credentials with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let key = UserApiKeyFactory::new(&db)
///     .user_id("123456789")
///     .api_key("secret")
///     .build()
///     .await?;
/// ```
pub struct UserApiKeyFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    api_key: String,
}

impl<'a> UserApiKeyFactory<'a> {
    /// Creates a new UserApiKeyFactory with default values.
    ///
    /// Defaults:
    /// - user_id: `"{id}"` where id is auto-incremented
    /// - api_key: `"api_key_{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: id.to_string(),
            api_key: format!("api_key_{}", id),
        }
    }

    /// Sets the Discord user ID owning the credential.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Sets the credential value.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Builds and inserts the credential into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user_api_key::Model)` - Created entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user_api_key::Model, DbErr> {
        entity::user_api_key::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            api_key: ActiveValue::Set(self.api_key),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a credential with default values.
pub async fn create_api_key(db: &DatabaseConnection) -> Result<entity::user_api_key::Model, DbErr> {
    UserApiKeyFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_api_key_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(UserApiKey)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let key = create_api_key(db).await?;

        assert!(!key.user_id.is_empty());
        assert!(key.api_key.starts_with("api_key_"));

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_keys() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(UserApiKey)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_api_key(db).await?;
        let second = create_api_key(db).await?;

        assert_ne!(first.user_id, second.user_id);
        assert_ne!(first.api_key, second.api_key);

        Ok(())
    }
}
