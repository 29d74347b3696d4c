use super::*;

/// Tests listing the subscriptions of one guild.
///
/// Expected: Ok with only that guild's subscriptions
#[tokio::test]
async fn returns_only_guild_subscriptions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MonitoredAlliance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::monitored_alliance::MonitoredAllianceFactory::new(db, 10523, "333")
        .guild_id("111")
        .build()
        .await?;
    factory::monitored_alliance::MonitoredAllianceFactory::new(db, 7452, "333")
        .guild_id("111")
        .build()
        .await?;
    factory::monitored_alliance::MonitoredAllianceFactory::new(db, 10523, "333")
        .guild_id("222")
        .build()
        .await?;

    let repo = MonitoredAllianceRepository::new(db);
    let subscriptions = repo.get_by_guild_id("111").await?;

    assert_eq!(subscriptions.len(), 2);
    assert!(subscriptions.iter().all(|s| s.guild_id == "111"));

    Ok(())
}
