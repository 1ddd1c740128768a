//! Wire types for demonlist API payloads.

use serde::{Deserialize, Serialize};

/// One entry of the global player ranking (`/users/top`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RankedPlayer {
    pub id: u64,
    pub place: u32,
    pub username: String,
    pub score: f64,
    pub country: String,
}

/// One entry of the classic list (`/levels/classic`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RankedLevel {
    pub place: u32,
    pub level_id: u64,
    pub name: String,
    pub verifier: String,
    pub creator: String,
    pub video: String,
    /// Minimum completion percentage required for a record to count.
    pub minimal_percent: u8,
    pub score: f64,
    /// Present when the level is fetched by place.
    #[serde(default)]
    pub history: Vec<HistoryEvent>,
}

/// A position-change event attached to a classic-list level.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryEvent {
    pub place: u32,
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-form event details; shape varies by event type.
    #[serde(default)]
    pub args: serde_json::Value,
    pub date_created: String,
}

/// A pending challenge from the future list (`/levels/future`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FutureLevelData {
    pub name: String,
    pub verifier: String,
    /// Current best percent on the unfinished level.
    #[serde(default)]
    pub record: u8,
    pub status: u8,
}

/// Full player profile (`/users` lookup by id).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserProfile {
    pub id: u64,
    pub place: u32,
    pub score: f64,
    pub username: String,
    pub country: String,
    #[serde(default)]
    pub badge: Option<String>,
    pub hardest: HardestLevel,
    #[serde(default)]
    pub records: RecordBuckets,
}

/// The hardest level a player has completed.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HardestLevel {
    pub level_name: String,
    pub level_id: u64,
    pub place: u32,
    pub video: String,
}

/// Per-category completion buckets attached to a player profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RecordBuckets {
    #[serde(default)]
    pub main: Vec<PlayerRecordData>,
    #[serde(default)]
    pub basic: Vec<PlayerRecordData>,
    #[serde(default)]
    pub extended: Vec<PlayerRecordData>,
    #[serde(default)]
    pub beyond: Vec<PlayerRecordData>,
    #[serde(default)]
    pub verified: Vec<PlayerRecordData>,
    #[serde(default)]
    pub progress: Vec<PlayerRecordData>,
}

/// One completion inside a record bucket.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerRecordData {
    pub level_name: String,
    pub level_id: u64,
    pub place: u32,
    pub video: String,
    /// Only reported for in-progress records.
    #[serde(default)]
    pub percent: Option<u8>,
}

/// One entry of the country ranking (`/countries/top/main`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CountryRank {
    pub country: String,
    pub score: f64,
    pub place: u32,
}

/// One member of a country roster (`/countries/main`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CountryPlayer {
    #[serde(default)]
    pub id: Option<u64>,
    pub username: String,
    pub score: f64,
    #[serde(default)]
    pub place: Option<u32>,
}

/// Payload of a level's completion query (`/records`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelRecordsData {
    #[serde(default)]
    pub records: Vec<LevelRecordData>,
    pub total_count: u64,
}

/// One verified completion of a level.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelRecordData {
    pub username: String,
    pub country: String,
    pub percent: u8,
    pub video: String,
    pub level_id: u64,
}
