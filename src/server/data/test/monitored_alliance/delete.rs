use super::*;

/// Tests removing a subscription.
///
/// Verifies that only the subscription matching both alliance and guild is
/// deleted.
///
/// Expected: Ok(true) with other guild's subscription intact
#[tokio::test]
async fn deletes_matching_subscription_only() -> Result<(), AppError> {
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
    let other = factory::monitored_alliance::MonitoredAllianceFactory::new(db, 10523, "333")
        .guild_id("222")
        .build()
        .await?;

    let repo = MonitoredAllianceRepository::new(db);
    let deleted = repo.delete(10523, "111").await?;

    assert!(deleted);

    let remaining = entity::prelude::MonitoredAlliance::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, other.id);

    Ok(())
}

/// Tests removing a subscription that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_nothing_deleted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MonitoredAlliance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MonitoredAllianceRepository::new(db);
    let deleted = repo.delete(10523, "111").await?;

    assert!(!deleted);

    Ok(())
}
