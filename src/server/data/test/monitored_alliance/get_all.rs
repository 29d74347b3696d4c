use super::*;

/// Tests listing every subscription.
///
/// Expected: Ok with all subscriptions in creation order
#[tokio::test]
async fn returns_all_subscriptions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MonitoredAlliance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_subscription(db, 10523, "333").await?;
    let second = factory::create_subscription(db, 7452, "444").await?;

    let repo = MonitoredAllianceRepository::new(db);
    let subscriptions = repo.get_all().await?;

    assert_eq!(subscriptions.len(), 2);
    assert_eq!(subscriptions[0].id, first.id);
    assert_eq!(subscriptions[1].id, second.id);

    Ok(())
}

/// Tests listing subscriptions on an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_without_subscriptions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MonitoredAlliance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MonitoredAllianceRepository::new(db);
    let subscriptions = repo.get_all().await?;

    assert!(subscriptions.is_empty());

    Ok(())
}
