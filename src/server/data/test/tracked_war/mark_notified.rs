use super::*;

/// Tests marking undelivered wars as notified.
///
/// Verifies that only the listed wars are updated.
///
/// Expected: Ok(2) with the third war still undelivered
#[tokio::test]
async fn marks_listed_wars_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrackedWar)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for war_id in ["war1", "war2", "war3"] {
        factory::tracked_war::TrackedWarFactory::new(db)
            .war_id(war_id)
            .build()
            .await?;
    }

    let repo = TrackedWarRepository::new(db);
    let updated = repo
        .mark_notified(&["war1".to_string(), "war2".to_string()])
        .await?;

    assert_eq!(updated, 2);
    assert!(repo.find_by_war_id("war1").await?.unwrap().notified);
    assert!(repo.find_by_war_id("war2").await?.unwrap().notified);
    assert!(!repo.find_by_war_id("war3").await?.unwrap().notified);

    Ok(())
}

/// Tests marking a war that is already notified.
///
/// Verifies that the flag transitions only once.
///
/// Expected: Ok(0) on the second call
#[tokio::test]
async fn transitions_only_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrackedWar)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tracked_war::TrackedWarFactory::new(db)
        .war_id("war1")
        .build()
        .await?;

    let repo = TrackedWarRepository::new(db);
    let ids = vec!["war1".to_string()];

    assert_eq!(repo.mark_notified(&ids).await?, 1);
    assert_eq!(repo.mark_notified(&ids).await?, 0);

    Ok(())
}

/// Tests marking with no war IDs.
///
/// Expected: Ok(0) without touching the table
#[tokio::test]
async fn empty_list_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrackedWar)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_tracked_war(db, 10523).await?;

    let repo = TrackedWarRepository::new(db);
    assert_eq!(repo.mark_notified(&[]).await?, 0);
    assert_eq!(repo.get_unnotified().await?.len(), 1);

    Ok(())
}
