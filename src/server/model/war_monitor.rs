//! Outcome of a single war check cycle.

use std::fmt;

/// Counters collected while running one war check cycle.
///
/// Logged at the end of every cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Subscriptions whose alliance was queried upstream.
    pub subscriptions_checked: usize,
    /// Subscriptions skipped because their owner has no stored credential.
    pub subscriptions_skipped: usize,
    /// Subscriptions whose upstream fetch failed.
    pub fetch_failures: usize,
    /// Wars recorded for the first time.
    pub wars_tracked: usize,
    /// Wars marked as notified.
    pub wars_notified: usize,
    /// Deliveries attempted across all destinations.
    pub deliveries_attempted: usize,
    /// Deliveries that failed.
    pub deliveries_failed: usize,
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "checked={} skipped={} fetch_failures={} tracked={} notified={} deliveries={}/{}",
            self.subscriptions_checked,
            self.subscriptions_skipped,
            self.fetch_failures,
            self.wars_tracked,
            self.wars_notified,
            self.deliveries_attempted.saturating_sub(self.deliveries_failed),
            self.deliveries_attempted,
        )
    }
}
