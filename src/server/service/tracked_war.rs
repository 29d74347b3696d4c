use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::tracked_war::TrackedWarRepository, error::AppError, model::tracked_war::WarSummary,
};

/// Number of most recent wars considered by a summary.
const SUMMARY_WAR_LIMIT: u64 = 50;

/// Number of wars listed individually in a summary.
const SUMMARY_ACTIVE_WARS: usize = 5;

/// Tracked wars are deleted this many days after they were first recorded.
pub const RETENTION_DAYS: i64 = 30;

pub struct TrackedWarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrackedWarService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Summarizes the wars tracked for an alliance.
    ///
    /// Considers the 50 most recently declared wars. `recent_wars` counts those declared within
    /// the 24 hours before `now`, and `active_wars` lists the first five.
    pub async fn get_summary(
        &self,
        alliance_id: i64,
        now: DateTime<Utc>,
    ) -> Result<WarSummary, AppError> {
        let war_repo = TrackedWarRepository::new(self.db);
        let wars = war_repo
            .get_recent_by_alliance_id(alliance_id, SUMMARY_WAR_LIMIT)
            .await?;

        let recent_cutoff = now - Duration::hours(24);
        let recent_wars = wars.iter().filter(|w| w.war_date > recent_cutoff).count();

        Ok(WarSummary {
            alliance_id,
            total_wars: wars.len(),
            recent_wars,
            active_wars: wars.into_iter().take(SUMMARY_ACTIVE_WARS).collect(),
        })
    }

    /// Deletes tracked wars recorded more than [`RETENTION_DAYS`] before `now`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted wars
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn cleanup_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let cutoff = now - Duration::days(RETENTION_DAYS);
        let deleted = TrackedWarRepository::new(self.db)
            .delete_created_before(cutoff)
            .await?;

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests summarizing an alliance's tracked wars.
    ///
    /// Verifies that wars declared in the last 24 hours are counted as recent
    /// and only five wars are listed, newest first.
    ///
    /// Expected: Ok with 7 total, 3 recent and 5 listed
    #[tokio::test]
    async fn summarizes_recent_wars() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::TrackedWar)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let now = Utc::now();
        for hours in [1, 5, 23, 25, 48, 72, 96] {
            factory::tracked_war::TrackedWarFactory::new(db)
                .war_id(format!("war-{}h", hours))
                .alliance_id(10523)
                .war_date(now - Duration::hours(hours))
                .build()
                .await?;
        }
        factory::create_tracked_war(db, 7452).await?;

        let summary = TrackedWarService::new(db).get_summary(10523, now).await?;

        assert_eq!(summary.alliance_id, 10523);
        assert_eq!(summary.total_wars, 7);
        assert_eq!(summary.recent_wars, 3);
        assert_eq!(summary.active_wars.len(), 5);
        assert_eq!(summary.active_wars[0].war_id, "war-1h");

        Ok(())
    }

    /// Tests the summary of an alliance without tracked wars.
    ///
    /// Expected: Ok with zero counts
    #[tokio::test]
    async fn summary_of_unknown_alliance_is_empty() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::TrackedWar)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let summary = TrackedWarService::new(db)
            .get_summary(10523, Utc::now())
            .await?;

        assert_eq!(summary.total_wars, 0);
        assert_eq!(summary.recent_wars, 0);
        assert!(summary.active_wars.is_empty());

        Ok(())
    }

    /// Tests retention cleanup.
    ///
    /// Verifies that a war tracked 31 days ago is deleted and one tracked 29
    /// days ago is retained.
    ///
    /// Expected: Ok(1)
    #[tokio::test]
    async fn cleanup_applies_thirty_day_retention() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::TrackedWar)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let now = Utc::now();
        factory::tracked_war::TrackedWarFactory::new(db)
            .war_id("old")
            .created_at(now - Duration::days(31))
            .build()
            .await?;
        factory::tracked_war::TrackedWarFactory::new(db)
            .war_id("young")
            .created_at(now - Duration::days(29))
            .build()
            .await?;

        let deleted = TrackedWarService::new(db).cleanup_expired(now).await?;

        assert_eq!(deleted, 1);
        let repo = TrackedWarRepository::new(db);
        assert!(repo.find_by_war_id("old").await?.is_none());
        assert!(repo.find_by_war_id("young").await?.is_some());

        Ok(())
    }
}
