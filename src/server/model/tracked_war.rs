//! Domain models for tracked wars.
//!
//! A tracked war is recorded the first time a defensive war against a monitored alliance is
//! seen upstream, and is immutable apart from its `notified` flag.

use chrono::{DateTime, Utc};

use crate::model::monitoring::{TrackedWarDto, WarSummaryDto};

/// Defensive war against a monitored alliance.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedWar {
    /// Unique identifier for the tracked war record.
    pub id: i32,
    /// Upstream war ID, unique across all records.
    pub war_id: String,
    /// Monitored alliance on the defending side.
    pub alliance_id: i64,
    /// Name of the attacking nation.
    pub attacker_nation: String,
    /// Name of the defending nation.
    pub defender_nation: String,
    /// Timestamp when the war was declared.
    pub war_date: DateTime<Utc>,
    /// Whether an alert has been sent for this war.
    pub notified: bool,
    /// Timestamp when the war was first tracked.
    pub created_at: DateTime<Utc>,
}

impl TrackedWar {
    /// Converts an entity model to a tracked war domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `TrackedWar` - The converted tracked war domain model
    pub fn from_entity(entity: entity::tracked_war::Model) -> Self {
        Self {
            id: entity.id,
            war_id: entity.war_id,
            alliance_id: entity.alliance_id,
            attacker_nation: entity.attacker_nation,
            defender_nation: entity.defender_nation,
            war_date: entity.war_date,
            notified: entity.notified,
            created_at: entity.created_at,
        }
    }

    /// Converts the tracked war domain model to a DTO for API responses.
    pub fn into_dto(self) -> TrackedWarDto {
        TrackedWarDto {
            war_id: self.war_id,
            alliance_id: self.alliance_id,
            attacker_nation: self.attacker_nation,
            defender_nation: self.defender_nation,
            war_date: self.war_date,
            notified: self.notified,
        }
    }
}

/// Parameters for recording a newly seen war.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTrackedWarParam {
    /// Upstream war ID.
    pub war_id: String,
    /// Monitored alliance on the defending side.
    pub alliance_id: i64,
    /// Name of the attacking nation.
    pub attacker_nation: String,
    /// Name of the defending nation.
    pub defender_nation: String,
    /// Timestamp when the war was declared.
    pub war_date: DateTime<Utc>,
}

/// Overview of the wars tracked for an alliance.
#[derive(Debug, Clone, PartialEq)]
pub struct WarSummary {
    /// Alliance the summary describes.
    pub alliance_id: i64,
    /// Number of tracked wars considered (most recent 50 by war date).
    pub total_wars: usize,
    /// Wars declared within the last 24 hours.
    pub recent_wars: usize,
    /// The five most recent wars.
    pub active_wars: Vec<TrackedWar>,
}

impl WarSummary {
    /// Converts the summary to a DTO for API responses.
    pub fn into_dto(self) -> WarSummaryDto {
        WarSummaryDto {
            alliance_id: self.alliance_id,
            total_wars: self.total_wars,
            recent_wars: self.recent_wars,
            active_wars: self
                .active_wars
                .into_iter()
                .map(TrackedWar::into_dto)
                .collect(),
        }
    }
}
