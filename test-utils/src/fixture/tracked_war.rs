//! Tracked war fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::tracked_war;

/// Default upstream war ID.
pub const DEFAULT_WAR_ID: &str = "war1";

/// Default defending alliance ID.
pub const DEFAULT_ALLIANCE_ID: i64 = 10523;

/// Default attacking nation name.
pub const DEFAULT_ATTACKER: &str = "Enemy";

/// Default defending nation name.
pub const DEFAULT_DEFENDER: &str = "Nation Beta";

/// Fixed war declaration time used by fixtures (2025-01-01 12:00:00 UTC).
pub fn default_war_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Creates a tracked war entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - war_id: `"war1"`
/// - alliance_id: `10523`
/// - attacker_nation: `"Enemy"`
/// - defender_nation: `"Nation Beta"`
/// - notified: `false`
pub fn entity() -> tracked_war::Model {
    entity_builder().build()
}

/// Creates a customizable tracked war entity builder.
pub fn entity_builder() -> TrackedWarEntityBuilder {
    TrackedWarEntityBuilder::default()
}

/// Builder for tracked war entity models.
pub struct TrackedWarEntityBuilder {
    id: i32,
    war_id: String,
    alliance_id: i64,
    attacker_nation: String,
    defender_nation: String,
    war_date: DateTime<Utc>,
    notified: bool,
}

impl Default for TrackedWarEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            war_id: DEFAULT_WAR_ID.to_string(),
            alliance_id: DEFAULT_ALLIANCE_ID,
            attacker_nation: DEFAULT_ATTACKER.to_string(),
            defender_nation: DEFAULT_DEFENDER.to_string(),
            war_date: default_war_date(),
            notified: false,
        }
    }
}

impl TrackedWarEntityBuilder {
    /// Sets the row ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the upstream war ID.
    pub fn war_id(mut self, war_id: impl Into<String>) -> Self {
        self.war_id = war_id.into();
        self
    }

    /// Sets the defending alliance ID.
    pub fn alliance_id(mut self, alliance_id: i64) -> Self {
        self.alliance_id = alliance_id;
        self
    }

    /// Sets the attacking nation's name.
    pub fn attacker_nation(mut self, name: impl Into<String>) -> Self {
        self.attacker_nation = name.into();
        self
    }

    /// Sets the defending nation's name.
    pub fn defender_nation(mut self, name: impl Into<String>) -> Self {
        self.defender_nation = name.into();
        self
    }

    /// Sets when the war was declared.
    pub fn war_date(mut self, war_date: DateTime<Utc>) -> Self {
        self.war_date = war_date;
        self
    }

    /// Sets the notified flag.
    pub fn notified(mut self, notified: bool) -> Self {
        self.notified = notified;
        self
    }

    /// Builds the entity model. `created_at` is the war date.
    pub fn build(self) -> tracked_war::Model {
        tracked_war::Model {
            id: self.id,
            war_id: self.war_id,
            alliance_id: self.alliance_id,
            attacker_nation: self.attacker_nation,
            defender_nation: self.defender_nation,
            war_date: self.war_date,
            notified: self.notified,
            created_at: self.war_date,
        }
    }
}
