//! War, nation and alliance payload builders.

use serde_json::{json, Value};

/// Default declaration timestamp used for war payloads.
pub const DEFAULT_WAR_DATE: &str = "2025-01-01T12:00:00+00:00";

/// Builder for a single `War` object as returned by the GraphQL API.
///
/// IDs are emitted as strings, matching the upstream `ID` scalar.
pub struct WarPayload {
    id: String,
    date: String,
    turns_left: i32,
    attacker: Value,
    defender: Value,
}

impl WarPayload {
    /// Creates a war payload with unaffiliated default participants.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date: DEFAULT_WAR_DATE.to_string(),
            turns_left: 60,
            attacker: participant("1", "Attacker", None),
            defender: participant("2", "Defender", None),
        }
    }

    /// Sets the attacking nation name and optional alliance ID.
    pub fn attacker(mut self, nation_name: &str, alliance_id: Option<i64>) -> Self {
        self.attacker = participant("1", nation_name, alliance_id);
        self
    }

    /// Sets the defending nation name and optional alliance ID.
    pub fn defender(mut self, nation_name: &str, alliance_id: Option<i64>) -> Self {
        self.defender = participant("2", nation_name, alliance_id);
        self
    }

    /// Sets the declaration timestamp (RFC 3339).
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Consumes the builder and returns the JSON object.
    pub fn into_json(self) -> Value {
        json!({
            "id": self.id,
            "date": self.date,
            "turns_left": self.turns_left,
            "attacker": self.attacker,
            "defender": self.defender,
        })
    }
}

fn participant(nation_id: &str, nation_name: &str, alliance_id: Option<i64>) -> Value {
    let alliance = alliance_id.map(|id| {
        json!({
            "id": id.to_string(),
            "name": format!("Alliance {}", id),
        })
    });

    json!({
        "id": nation_id,
        "nation_name": nation_name,
        "alliance": alliance,
    })
}

/// Creates a nation payload with the given active wars.
pub fn nation(id: i64, nation_name: &str, alliance_id: i64, wars: Vec<Value>) -> Value {
    json!({
        "id": id.to_string(),
        "nation_name": nation_name,
        "leader_name": format!("Leader of {}", nation_name),
        "alliance_id": alliance_id.to_string(),
        "alliance_position": "MEMBER",
        "score": 1234.5,
        "num_cities": 12,
        "wars": wars,
    })
}

/// Creates an alliance payload with the given member nations.
pub fn alliance(id: i64, name: &str, acronym: &str, nations: Vec<Value>) -> Value {
    json!({
        "id": id.to_string(),
        "name": name,
        "acronym": acronym,
        "score": 98765.25,
        "nations": nations,
    })
}
