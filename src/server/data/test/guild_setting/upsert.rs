use super::*;

/// Tests setting a notification channel for a guild without settings.
///
/// Expected: Ok with settings row created
#[tokio::test]
async fn creates_setting_for_new_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingRepository::new(db);
    let setting = repo
        .upsert(UpsertGuildSettingParam {
            guild_id: "111".to_string(),
            notification_channel_id: "222".to_string(),
        })
        .await?;

    assert_eq!(setting.guild_id, "111");
    assert_eq!(setting.notification_channel_id.as_deref(), Some("222"));

    Ok(())
}

/// Tests changing the notification channel of a guild.
///
/// Verifies that the existing row is updated in place.
///
/// Expected: Ok with one row holding the new channel
#[tokio::test]
async fn updates_existing_setting() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_guild_setting(db, "111").await?;

    let repo = GuildSettingRepository::new(db);
    let setting = repo
        .upsert(UpsertGuildSettingParam {
            guild_id: "111".to_string(),
            notification_channel_id: "999".to_string(),
        })
        .await?;

    assert_eq!(setting.notification_channel_id.as_deref(), Some("999"));
    assert_ne!(existing.notification_channel_id.as_deref(), Some("999"));

    let count = entity::prelude::GuildSetting::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
