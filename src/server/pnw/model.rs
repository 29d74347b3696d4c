//! Typed responses of the Politics and War GraphQL API.
//!
//! IDs use the GraphQL `ID` scalar and arrive as strings; they are accepted as strings or
//! numbers and parsed at this boundary.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer};

/// Alliance with its member nations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Alliance {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub acronym: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub nations: Vec<Nation>,
}

/// Nation, with its recent active wars when queried individually.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Nation {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub nation_name: String,
    #[serde(default)]
    pub leader_name: String,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub alliance_id: Option<i64>,
    #[serde(default)]
    pub alliance_position: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub num_cities: i32,
    #[serde(default)]
    pub wars: Vec<War>,
}

/// War between two nations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct War {
    #[serde(deserialize_with = "deserialize_string_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_war_date")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub turns_left: i32,
    pub attacker: WarParticipant,
    pub defender: WarParticipant,
}

impl War {
    /// Whether the defending nation belongs to `alliance_id`.
    pub fn is_defended_by(&self, alliance_id: i64) -> bool {
        self.defender.alliance_id() == Some(alliance_id)
    }
}

/// One side of a war.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WarParticipant {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub nation_name: String,
    pub alliance: Option<AllianceRef>,
}

impl WarParticipant {
    pub fn alliance_id(&self) -> Option<i64> {
        self.alliance.as_ref().map(|alliance| alliance.id)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AllianceRef {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub name: String,
}

/// GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub(super) struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GraphQlError {
    pub message: String,
}

/// Paginated list wrapper, `{ data: [...] }`.
#[derive(Debug, Deserialize)]
pub(super) struct Page<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(super) struct WarsData {
    pub wars: Option<Page<War>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AlliancesData {
    pub alliances: Option<Page<Alliance>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct NationsData<N> {
    pub nations: Option<Page<N>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Int(i64),
    Str(String),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match IdRepr::deserialize(deserializer)? {
        IdRepr::Int(id) => Ok(id),
        IdRepr::Str(id) => id.parse().map_err(de::Error::custom),
    }
}

/// Nations outside any alliance report `alliance_id` as `0` or null.
fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match Option::<IdRepr>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(IdRepr::Int(id)) => id,
        Some(IdRepr::Str(id)) => id.parse().map_err(de::Error::custom)?,
    };

    Ok((id != 0).then_some(id))
}

fn deserialize_string_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match IdRepr::deserialize(deserializer)? {
        IdRepr::Int(id) => Ok(id.to_string()),
        IdRepr::Str(id) => Ok(id),
    }
}

/// Accepts RFC 3339 timestamps and the naive `YYYY-MM-DD HH:MM:SS` form, read as UTC.
fn deserialize_war_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    if let Ok(date) = DateTime::parse_from_rfc3339(&value) {
        return Ok(date.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(&value, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| de::Error::custom(format!("invalid war date '{}': {}", value, e)))
}
