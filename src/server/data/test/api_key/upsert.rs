use super::*;

/// Tests storing a credential for a user without one.
///
/// Verifies that the repository inserts a new record keyed by the user ID.
///
/// Expected: Ok with record created
#[tokio::test]
async fn stores_new_credential() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserApiKeyRepository::new(db);
    let stored = repo
        .upsert(UpsertUserApiKeyParam {
            user_id: "123456789".to_string(),
            api_key: "secret".to_string(),
        })
        .await?;

    assert_eq!(stored.user_id, "123456789");
    assert_eq!(stored.api_key, "secret");

    let row = entity::prelude::UserApiKey::find_by_id("123456789".to_string())
        .one(db)
        .await?;
    assert_eq!(row.unwrap().api_key, "secret");

    Ok(())
}

/// Tests replacing a user's stored credential.
///
/// Verifies that storing a second key for the same user overwrites the first
/// rather than adding another row.
///
/// Expected: Ok with single record holding the new key
#[tokio::test]
async fn replaces_existing_credential() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user_api_key::UserApiKeyFactory::new(db)
        .api_key("old-key")
        .build()
        .await?;

    let repo = UserApiKeyRepository::new(db);
    let stored = repo
        .upsert(UpsertUserApiKeyParam {
            user_id: existing.user_id.clone(),
            api_key: "new-key".to_string(),
        })
        .await?;

    assert_eq!(stored.user_id, existing.user_id);
    assert_eq!(stored.api_key, "new-key");

    let count = entity::prelude::UserApiKey::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
