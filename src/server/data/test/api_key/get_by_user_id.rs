use super::*;

/// Tests retrieving a stored credential.
///
/// Expected: Ok(Some) with the stored key
#[tokio::test]
async fn returns_stored_credential() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let key = factory::create_api_key(db).await?;

    let repo = UserApiKeyRepository::new(db);
    let result = repo.get_by_user_id(&key.user_id).await?;

    assert!(result.is_some());
    assert_eq!(result.unwrap().api_key, key.api_key);

    Ok(())
}

/// Tests retrieving a credential for a user who never stored one.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_api_key(db).await?;

    let repo = UserApiKeyRepository::new(db);
    let result = repo.get_by_user_id("999999999999").await?;

    assert!(result.is_none());

    Ok(())
}
