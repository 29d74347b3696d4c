use super::*;

/// Tests recording a war seen for the first time.
///
/// Expected: Ok(true) with an undelivered record
#[tokio::test]
async fn records_new_war() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrackedWar)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrackedWarRepository::new(db);
    let created = repo.create_if_absent(war_param("war1")).await?;

    assert!(created);

    let war = repo.find_by_war_id("war1").await?.unwrap();
    assert_eq!(war.alliance_id, 10523);
    assert_eq!(war.attacker_nation, "Enemy");
    assert_eq!(war.defender_nation, "Nation Beta");
    assert_eq!(war.war_date, fixture::tracked_war::default_war_date());
    assert!(!war.notified);

    Ok(())
}

/// Tests recording the same war twice.
///
/// Verifies that the second insert is ignored and leaves exactly one row.
///
/// Expected: Ok(false) on the duplicate with a single row
#[tokio::test]
async fn ignores_duplicate_war_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrackedWar)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrackedWarRepository::new(db);
    assert!(repo.create_if_absent(war_param("war1")).await?);
    assert!(!repo.create_if_absent(war_param("war1")).await?);

    let count = entity::prelude::TrackedWar::find()
        .filter(entity::tracked_war::Column::WarId.eq("war1"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests re-detecting a war that was already announced.
///
/// Verifies that the existing record is not overwritten, so a war is never
/// re-notified because it was fetched again.
///
/// Expected: Ok(false) with notified still true and original names kept
#[tokio::test]
async fn does_not_reset_notified_war() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrackedWar)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tracked_war::TrackedWarFactory::new(db)
        .war_id("war1")
        .attacker_nation("Original Attacker")
        .notified(true)
        .build()
        .await?;

    let repo = TrackedWarRepository::new(db);
    let created = repo.create_if_absent(war_param("war1")).await?;

    assert!(!created);

    let war = repo.find_by_war_id("war1").await?.unwrap();
    assert!(war.notified);
    assert_eq!(war.attacker_nation, "Original Attacker");

    Ok(())
}
