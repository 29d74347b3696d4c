use super::*;

/// Tests loading recent wars for an alliance.
///
/// Verifies that the limit is applied after ordering by declaration date and
/// that other alliances' wars are excluded.
///
/// Expected: Ok with the newest `limit` wars of the alliance
#[tokio::test]
async fn returns_newest_wars_up_to_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrackedWar)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for hours in 1..=4 {
        factory::tracked_war::TrackedWarFactory::new(db)
            .war_id(format!("war{}", hours))
            .alliance_id(10523)
            .war_date(now - Duration::hours(hours))
            .build()
            .await?;
    }
    factory::tracked_war::TrackedWarFactory::new(db)
        .war_id("other")
        .alliance_id(7452)
        .war_date(now)
        .build()
        .await?;

    let repo = TrackedWarRepository::new(db);
    let wars = repo.get_recent_by_alliance_id(10523, 3).await?;

    let ids: Vec<&str> = wars.iter().map(|w| w.war_id.as_str()).collect();
    assert_eq!(ids, vec!["war1", "war2", "war3"]);

    Ok(())
}
