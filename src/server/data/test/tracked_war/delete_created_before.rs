use super::*;

/// Tests retention cleanup of tracked wars.
///
/// Verifies that a war tracked 31 days ago is deleted while one tracked 29
/// days ago is kept, regardless of notified status.
///
/// Expected: Ok(1) with only the recent war remaining
#[tokio::test]
async fn deletes_wars_older_than_cutoff() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrackedWar)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::tracked_war::TrackedWarFactory::new(db)
        .war_id("expired")
        .notified(false)
        .created_at(now - Duration::days(31))
        .build()
        .await?;
    factory::tracked_war::TrackedWarFactory::new(db)
        .war_id("retained")
        .notified(true)
        .created_at(now - Duration::days(29))
        .build()
        .await?;

    let repo = TrackedWarRepository::new(db);
    let deleted = repo.delete_created_before(now - Duration::days(30)).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_war_id("expired").await?.is_none());
    assert!(repo.find_by_war_id("retained").await?.is_some());

    Ok(())
}
