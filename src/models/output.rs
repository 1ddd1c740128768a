//! Output models used for text rendering and JSON serialization.

use serde::Serialize;

/// One line of the global player ranking in structured form.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerRankEntry {
    pub place: u32,
    pub name: String,
    pub score: f64,
    pub flag: String,
}

/// One classic-list level in structured form.
#[derive(Debug, Clone, Serialize)]
pub struct LevelListEntry {
    pub id: u64,
    pub name: String,
    pub pos: u32,
    pub verifier: String,
    pub video: String,
    pub creator: String,
    pub list_percent: u8,
    pub score: f64,
}

/// One future-list level with its status resolved to a display name.
#[derive(Debug, Clone, Serialize)]
pub struct FutureLevelEntry {
    pub name: String,
    pub verifier: String,
    /// Current best percent, rendered with a trailing `%`.
    pub record: String,
    pub status: String,
}

/// One of a player's completions.
///
/// `percent` is only present for the progress category.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerRecordEntry {
    pub name: String,
    pub id: u64,
    pub place: u32,
    pub video: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<u8>,
}

/// One position-change event of a level's history.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub pos: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub details: serde_json::Value,
    pub date: String,
}

/// One verified completion of a level.
///
/// `name` is always the level's name, not the player's.
#[derive(Debug, Clone, Serialize)]
pub struct LevelRecordEntry {
    pub player: String,
    pub flag: String,
    pub video: String,
    pub percent: u8,
    pub level_id: u64,
    pub name: String,
}
