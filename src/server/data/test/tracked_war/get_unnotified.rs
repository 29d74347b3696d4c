use super::*;

/// Tests loading undelivered wars.
///
/// Verifies that notified wars are excluded and the rest are ordered by
/// declaration date, most recent first.
///
/// Expected: Ok with undelivered wars newest first
#[tokio::test]
async fn returns_undelivered_wars_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrackedWar)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::tracked_war::TrackedWarFactory::new(db)
        .war_id("older")
        .war_date(now - Duration::hours(2))
        .build()
        .await?;
    factory::tracked_war::TrackedWarFactory::new(db)
        .war_id("newer")
        .war_date(now - Duration::hours(1))
        .build()
        .await?;
    factory::tracked_war::TrackedWarFactory::new(db)
        .war_id("delivered")
        .notified(true)
        .build()
        .await?;

    let repo = TrackedWarRepository::new(db);
    let wars = repo.get_unnotified().await?;

    let ids: Vec<&str> = wars.iter().map(|w| w.war_id.as_str()).collect();
    assert_eq!(ids, vec!["newer", "older"]);

    Ok(())
}
