use super::*;

/// Tests retrieving guild settings.
///
/// Expected: Ok(Some) for a configured guild, Ok(None) otherwise
#[tokio::test]
async fn returns_setting_only_for_configured_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_guild_setting(db, "111").await?;

    let repo = GuildSettingRepository::new(db);

    let found = repo.get_by_guild_id("111").await?;
    assert_eq!(
        found.and_then(|s| s.notification_channel_id),
        created.notification_channel_id
    );

    let missing = repo.get_by_guild_id("222").await?;
    assert!(missing.is_none());

    Ok(())
}
