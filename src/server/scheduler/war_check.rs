use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use std::{sync::Arc, time::Duration};
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    model::war_monitor::CycleReport,
    pnw::WarSource,
    service::{
        tracked_war::TrackedWarService, war_monitor::WarMonitor,
        war_notification::NotificationSink,
    },
};

/// Schedule of the daily tracked war retention cleanup.
const RETENTION_CRON: &str = "0 0 4 * * *";

/// War check shared between scheduler ticks.
///
/// Holds a guard so that a tick firing while the previous cycle is still running is skipped
/// instead of overlapping it.
#[derive(Clone)]
pub struct WarCheckJob {
    db: DatabaseConnection,
    source: Arc<dyn WarSource>,
    sink: Arc<dyn NotificationSink>,
    /// Bound for each upstream fetch and delivery within a cycle
    timeout: Duration,
    running: Arc<Mutex<()>>,
}

impl WarCheckJob {
    pub fn new(
        db: DatabaseConnection,
        source: Arc<dyn WarSource>,
        sink: Arc<dyn NotificationSink>,
        timeout: Duration,
    ) -> Self {
        Self {
            db,
            source,
            sink,
            timeout,
            running: Arc::new(Mutex::new(())),
        }
    }

    /// Runs one war check cycle unless one is already in progress.
    ///
    /// # Returns
    /// - `Some(CycleReport)` - Cycle completed
    /// - `None` - Skipped because a cycle was running, or aborted by a database error
    pub async fn run(&self) -> Option<CycleReport> {
        let Ok(_guard) = self.running.try_lock() else {
            tracing::warn!("Previous war check still running, skipping this tick");
            return None;
        };

        tracing::info!("Starting war check");

        let monitor = WarMonitor::new(
            &self.db,
            self.source.as_ref(),
            self.sink.as_ref(),
            self.timeout,
        );

        match monitor.run_cycle().await {
            Ok(report) => {
                tracing::info!("War check finished: {}", report);
                Some(report)
            }
            Err(e) => {
                tracing::error!("War check failed: {}", e);
                None
            }
        }
    }
}

/// Starts the war check and retention scheduler
///
/// Registers two jobs:
/// - The war check, on `war_check_cron` (every 5 minutes by default)
/// - Retention cleanup of tracked wars, daily at 04:00 UTC
///
/// # Arguments
/// - `db`: Database connection
/// - `war_check`: War check job shared across ticks
/// - `war_check_cron`: Six-field cron expression for the war check
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler handle
/// - `Err(AppError::SchedulerErr)` - Invalid cron expression or scheduler failure
pub async fn start_scheduler(
    db: DatabaseConnection,
    war_check: WarCheckJob,
    war_check_cron: &str,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let war_check_job = Job::new_async(war_check_cron, move |_uuid, _lock| {
        let war_check = war_check.clone();

        Box::pin(async move {
            war_check.run().await;
        })
    })?;

    let retention_job = Job::new_async(RETENTION_CRON, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            match TrackedWarService::new(&db).cleanup_expired(Utc::now()).await {
                Ok(deleted) => tracing::info!("Deleted {} expired tracked war(s)", deleted),
                Err(e) => tracing::error!("Error cleaning up tracked wars: {}", e),
            }
        })
    })?;

    scheduler.add(war_check_job).await?;
    scheduler.add(retention_job).await?;
    scheduler.start().await?;

    tracing::info!("War check scheduler started ({})", war_check_cron);

    Ok(scheduler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{
        error::upstream::UpstreamError, model::war_alert::WarAlert, pnw::model::War,
    };
    use sea_orm::EntityTrait;
    use serenity::{all::ChannelId, async_trait};
    use test_utils::{builder::TestBuilder, factory, upstream::war::WarPayload};

    struct StaticWarSource(Vec<War>);

    #[async_trait]
    impl WarSource for StaticWarSource {
        async fn get_alliance_wars(
            &self,
            _alliance_id: i64,
            _api_key: &str,
            _active_only: bool,
        ) -> Result<Vec<War>, UpstreamError> {
            Ok(self.0.clone())
        }
    }

    struct NoopSink;

    #[async_trait]
    impl NotificationSink for NoopSink {
        async fn deliver(&self, _channel_id: ChannelId, _alert: &WarAlert) -> Result<(), AppError> {
            Ok(())
        }
    }

    async fn job(db: &DatabaseConnection) -> WarCheckJob {
        let war: War = serde_json::from_value(
            WarPayload::new("war1")
                .defender("Nation Beta", Some(10523))
                .into_json(),
        )
        .unwrap();

        WarCheckJob::new(
            db.clone(),
            Arc::new(StaticWarSource(vec![war])),
            Arc::new(NoopSink),
            Duration::from_secs(5),
        )
    }

    /// Tests that an idle job runs a full cycle.
    ///
    /// Expected: Some report with the war tracked
    #[tokio::test]
    async fn runs_cycle_when_idle() -> Result<(), AppError> {
        let test = TestBuilder::new().with_alert_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::helpers::create_subscription_with_api_key(db, 10523).await?;

        let report = job(db).await.run().await;

        assert_eq!(report.map(|r| r.wars_tracked), Some(1));

        Ok(())
    }

    /// Tests the overlap guard.
    ///
    /// Verifies that a tick arriving while a cycle holds the guard is skipped
    /// without touching the database.
    ///
    /// Expected: None and no war tracked
    #[tokio::test]
    async fn skips_tick_while_cycle_running() -> Result<(), AppError> {
        let test = TestBuilder::new().with_alert_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::helpers::create_subscription_with_api_key(db, 10523).await?;

        let job = job(db).await;
        let in_flight = job.running.clone();
        let _held = in_flight.lock().await;

        let report = job.run().await;

        assert!(report.is_none());
        let tracked = entity::prelude::TrackedWar::find().all(db).await?;
        assert!(tracked.is_empty());

        Ok(())
    }

    /// Tests that a failed cycle does not take the job down.
    ///
    /// Verifies that a database error ends the cycle with `None`, releases the guard,
    /// and that the next tick runs a fresh cycle instead of being skipped.
    ///
    /// Expected: None twice with the guard free after each run
    #[tokio::test]
    async fn failed_cycle_releases_guard_for_next_tick() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::UserApiKey)
            .with_table(entity::prelude::MonitoredAlliance)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        factory::helpers::create_subscription_with_api_key(db, 10523).await?;

        let job = job(db).await;

        assert!(job.run().await.is_none());
        assert!(job.running.try_lock().is_ok());

        assert!(job.run().await.is_none());
        assert!(job.running.try_lock().is_ok());

        Ok(())
    }
}
