//! War alert payload delivered to subscribed channels.

use crate::server::model::tracked_war::TrackedWar;

const ALLIANCE_PAGE_URL: &str = "https://politicsandwar.com/alliance/id=";

/// Undelivered wars against one alliance, rendered as a single message per destination.
#[derive(Debug, Clone, PartialEq)]
pub struct WarAlert {
    /// Alliance under attack.
    pub alliance_id: i64,
    /// Wars included in the alert, most recent first.
    pub wars: Vec<TrackedWar>,
}

impl WarAlert {
    pub fn new(alliance_id: i64, wars: Vec<TrackedWar>) -> Self {
        Self { alliance_id, wars }
    }

    /// Public Politics and War page of the alliance.
    pub fn alliance_url(&self) -> String {
        format!("{}{}", ALLIANCE_PAGE_URL, self.alliance_id)
    }
}
