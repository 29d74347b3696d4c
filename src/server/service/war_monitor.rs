//! War check cycle.
//!
//! One cycle polls the upstream API for every monitored alliance using the credential of the
//! subscription's owner, records newly seen defensive wars, then announces every undelivered
//! war to each channel subscribed to its alliance and marks the wars as notified.
//!
//! Failure handling per stage:
//! - Upstream fetch failures skip the affected subscription for this cycle.
//! - Database failures abort the cycle before anything further is marked notified.
//! - Delivery failures are isolated per destination and never retried.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::ChannelId;
use std::{collections::BTreeMap, time::Duration};

use crate::server::{
    data::{
        api_key::UserApiKeyRepository, monitored_alliance::MonitoredAllianceRepository,
        tracked_war::TrackedWarRepository,
    },
    error::AppError,
    model::{
        monitored_alliance::MonitoredAlliance,
        tracked_war::{CreateTrackedWarParam, TrackedWar},
        war_alert::WarAlert,
        war_monitor::CycleReport,
    },
    pnw::WarSource,
    service::war_notification::NotificationSink,
    util::parse::parse_discord_id,
};

/// Runs war check cycles against a war source and notification sink.
pub struct WarMonitor<'a> {
    db: &'a DatabaseConnection,
    source: &'a dyn WarSource,
    sink: &'a dyn NotificationSink,
    /// Upper bound for each upstream fetch and each delivery
    timeout: Duration,
}

impl<'a> WarMonitor<'a> {
    /// Creates a new WarMonitor instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `source` - Upstream war source
    /// - `sink` - Destination for war alerts
    /// - `timeout` - Bound applied to every upstream fetch and every delivery
    pub fn new(
        db: &'a DatabaseConnection,
        source: &'a dyn WarSource,
        sink: &'a dyn NotificationSink,
        timeout: Duration,
    ) -> Self {
        Self {
            db,
            source,
            sink,
            timeout,
        }
    }

    /// Runs one war check cycle.
    ///
    /// # Returns
    /// - `Ok(CycleReport)` - Cycle completed; upstream and delivery failures are counted
    ///   in the report rather than returned
    /// - `Err(AppError::DbErr)` - A database operation failed and the cycle was aborted
    pub async fn run_cycle(&self) -> Result<CycleReport, AppError> {
        let mut report = CycleReport::default();

        let subscriptions = MonitoredAllianceRepository::new(self.db).get_all().await?;
        if subscriptions.is_empty() {
            return Ok(report);
        }

        self.track_new_wars(&subscriptions, &mut report).await?;
        self.notify_undelivered_wars(&subscriptions, &mut report)
            .await?;

        Ok(report)
    }

    /// Fetches wars for every subscription whose owner has a credential and records the
    /// defensive ones.
    async fn track_new_wars(
        &self,
        subscriptions: &[MonitoredAlliance],
        report: &mut CycleReport,
    ) -> Result<(), AppError> {
        let api_key_repo = UserApiKeyRepository::new(self.db);
        let war_repo = TrackedWarRepository::new(self.db);

        let mut by_user: BTreeMap<&str, Vec<&MonitoredAlliance>> = BTreeMap::new();
        for subscription in subscriptions {
            by_user
                .entry(subscription.user_id.as_str())
                .or_default()
                .push(subscription);
        }

        for (user_id, user_subscriptions) in by_user {
            let Some(api_key) = api_key_repo.get_by_user_id(user_id).await? else {
                tracing::debug!(
                    "Skipping {} subscription(s) of user {}: no API key stored",
                    user_subscriptions.len(),
                    user_id
                );
                report.subscriptions_skipped += user_subscriptions.len();
                continue;
            };

            for subscription in user_subscriptions {
                report.subscriptions_checked += 1;
                let alliance_id = subscription.alliance_id;

                let fetch = self
                    .source
                    .get_alliance_wars(alliance_id, &api_key.api_key, true);
                let wars = match tokio::time::timeout(self.timeout, fetch).await {
                    Ok(Ok(wars)) => wars,
                    Ok(Err(e)) => {
                        tracing::warn!("Failed to fetch wars for alliance {}: {}", alliance_id, e);
                        report.fetch_failures += 1;
                        continue;
                    }
                    Err(_) => {
                        tracing::warn!(
                            "Fetching wars for alliance {} timed out after {:?}",
                            alliance_id,
                            self.timeout
                        );
                        report.fetch_failures += 1;
                        continue;
                    }
                };

                tracing::debug!(
                    "Fetched {} war(s) involving alliance {}",
                    wars.len(),
                    alliance_id
                );

                for war in wars.into_iter().filter(|w| w.is_defended_by(alliance_id)) {
                    let created = war_repo
                        .create_if_absent(CreateTrackedWarParam {
                            war_id: war.id,
                            alliance_id,
                            attacker_nation: war.attacker.nation_name,
                            defender_nation: war.defender.nation_name,
                            war_date: war.date,
                        })
                        .await?;

                    if created {
                        report.wars_tracked += 1;
                    }
                }
            }
        }

        Ok(())
    }

    /// Announces undelivered wars, one alert per alliance and destination, then marks them
    /// notified regardless of delivery outcomes.
    async fn notify_undelivered_wars(
        &self,
        subscriptions: &[MonitoredAlliance],
        report: &mut CycleReport,
    ) -> Result<(), AppError> {
        let war_repo = TrackedWarRepository::new(self.db);

        let mut by_alliance: BTreeMap<i64, Vec<TrackedWar>> = BTreeMap::new();
        for war in war_repo.get_unnotified().await? {
            by_alliance.entry(war.alliance_id).or_default().push(war);
        }

        for (alliance_id, wars) in by_alliance {
            let war_ids: Vec<String> = wars.iter().map(|w| w.war_id.clone()).collect();
            let alert = WarAlert::new(alliance_id, wars);

            let destinations = subscriptions
                .iter()
                .filter(|s| s.alliance_id == alliance_id);

            for destination in destinations {
                report.deliveries_attempted += 1;
                if !self.deliver(destination, &alert).await {
                    report.deliveries_failed += 1;
                }
            }

            let marked = war_repo.mark_notified(&war_ids).await?;
            report.wars_notified += marked as usize;
        }

        Ok(())
    }

    /// Delivers an alert to one destination, logging any failure.
    ///
    /// # Returns
    /// - `true` - Delivered
    /// - `false` - Invalid channel ID, delivery error or timeout
    async fn deliver(&self, destination: &MonitoredAlliance, alert: &WarAlert) -> bool {
        let channel_id = match parse_discord_id(&destination.channel_id) {
            Ok(id) => ChannelId::new(id),
            Err(e) => {
                tracing::warn!(
                    "Skipping war alert for guild {}: invalid channel: {}",
                    destination.guild_id,
                    e
                );
                return false;
            }
        };

        match tokio::time::timeout(self.timeout, self.sink.deliver(channel_id, alert)).await {
            Ok(Ok(())) => {
                tracing::info!(
                    "Sent war alert for alliance {} ({} war(s)) to channel {}",
                    alert.alliance_id,
                    alert.wars.len(),
                    channel_id
                );
                true
            }
            Ok(Err(e)) => {
                tracing::error!(
                    "Failed to send war alert for alliance {} to channel {}: {}",
                    alert.alliance_id,
                    channel_id,
                    e
                );
                false
            }
            Err(_) => {
                tracing::error!(
                    "Sending war alert for alliance {} to channel {} timed out",
                    alert.alliance_id,
                    channel_id
                );
                false
            }
        }
    }
}
