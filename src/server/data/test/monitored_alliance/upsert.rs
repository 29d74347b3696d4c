use super::*;

/// Tests creating a new subscription.
///
/// Verifies that the repository inserts a subscription with every field set
/// from the parameters.
///
/// Expected: Ok with subscription created
#[tokio::test]
async fn creates_new_subscription() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MonitoredAlliance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MonitoredAllianceRepository::new(db);
    let subscription = repo
        .upsert(UpsertMonitoredAllianceParam {
            alliance_id: 10523,
            guild_id: "111".to_string(),
            channel_id: "222".to_string(),
            user_id: "333".to_string(),
        })
        .await?;

    assert_eq!(subscription.alliance_id, 10523);
    assert_eq!(subscription.guild_id, "111");
    assert_eq!(subscription.channel_id, "222");
    assert_eq!(subscription.user_id, "333");

    let count = entity::prelude::MonitoredAlliance::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests re-adding an alliance already monitored by the guild.
///
/// Verifies that the channel and owning user are replaced on the existing
/// record instead of adding a second subscription for the same pair.
///
/// Expected: Ok with one subscription carrying the new channel and user
#[tokio::test]
async fn replaces_channel_and_user_for_existing_pair() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MonitoredAlliance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::monitored_alliance::MonitoredAllianceFactory::new(db, 10523, "333")
        .guild_id("111")
        .channel_id("222")
        .build()
        .await?;

    let repo = MonitoredAllianceRepository::new(db);
    let subscription = repo
        .upsert(UpsertMonitoredAllianceParam {
            alliance_id: 10523,
            guild_id: "111".to_string(),
            channel_id: "444".to_string(),
            user_id: "555".to_string(),
        })
        .await?;

    assert_eq!(subscription.id, existing.id);
    assert_eq!(subscription.channel_id, "444");
    assert_eq!(subscription.user_id, "555");
    assert_eq!(subscription.created_at, existing.created_at);

    let count = entity::prelude::MonitoredAlliance::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests monitoring the same alliance from two guilds.
///
/// Expected: Ok with two independent subscriptions
#[tokio::test]
async fn keeps_separate_subscriptions_per_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MonitoredAlliance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MonitoredAllianceRepository::new(db);
    for guild_id in ["111", "222"] {
        repo.upsert(UpsertMonitoredAllianceParam {
            alliance_id: 10523,
            guild_id: guild_id.to_string(),
            channel_id: "999".to_string(),
            user_id: "333".to_string(),
        })
        .await?;
    }

    let count = entity::prelude::MonitoredAlliance::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
