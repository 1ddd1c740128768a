//! Classic-list levels and their history/record sub-resources.

use crate::api::http::ApiClient;
use crate::api::types::{LevelRecordsData, RankedLevel};
use crate::error::{DemonlistError, Result};
use crate::flags::display_flag;
use crate::models::output::{HistoryEntry, LevelRecordEntry};
use crate::options::DisplayMode;

/// One ranked challenge from the classic list.
///
/// Construction scans the classic list for the first name match and fails
/// when nothing matches. There is no lookup-by-name endpoint, so the scan
/// is linear in the list size.
#[derive(Debug, Clone)]
pub struct Level {
    client: ApiClient,
    name: String,
    pub place: u32,
    pub id: u64,
    pub video: String,
    pub verifier: String,
    pub creator: String,
    /// Minimum completion percentage required for a record to count.
    pub list_percent: u8,
    pub score: f64,
}

/// A level's position-change history in the requested display shape.
#[derive(Debug, Clone)]
pub enum History {
    /// Lines `"Position: <pos>, type: <type>, date: <date>"`, one per
    /// event, with the newline baked into each line.
    Text(String),
    /// Structured events in API order.
    Events(Vec<HistoryEntry>),
}

/// A level's completion list in the requested display shape.
#[derive(Debug, Clone)]
pub enum LevelRecords {
    /// Total completion count only.
    Count(u64),
    /// Lines `"<username> <percent>% on <level name>"`.
    Text(String),
    /// Structured completions; `name` is the level's name on every entry.
    Entries(Vec<LevelRecordEntry>),
}

impl Level {
    /// Look up a level by exact name; the first classic-list match wins.
    pub async fn by_name(client: &ApiClient, name: &str) -> Result<Self> {
        let data = client.fetch("/levels/classic", &[]).await?;
        let levels: Vec<RankedLevel> = serde_json::from_value(data)?;
        let level = levels
            .into_iter()
            .find(|level| level.name == name)
            .ok_or_else(|| DemonlistError::LevelNotFound {
                name: name.to_string(),
            })?;

        Ok(Self {
            client: client.clone(),
            name: level.name,
            place: level.place,
            id: level.level_id,
            video: level.video,
            verifier: level.verifier,
            creator: level.creator,
            list_percent: level.minimal_percent,
            score: level.score,
        })
    }

    /// The level's name as listed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position-change history for the level's current place, re-fetched
    /// on every call.
    pub async fn history(&self, display_mode: Option<&str>) -> Result<History> {
        let mode = DisplayMode::resolve(display_mode)?;
        let params = [("place", self.place.to_string())];
        let data = self.client.fetch("/levels/classic", &params).await?;
        let mut levels: Vec<RankedLevel> = serde_json::from_value(data)?;
        if levels.is_empty() {
            return Err(DemonlistError::NoData);
        }
        let events = levels.remove(0).history;

        match mode {
            DisplayMode::Default => {
                let mut changes = String::new();
                for event in &events {
                    changes += &format!(
                        "Position: {}, type: {}, date: {}\n",
                        event.place, event.kind, event.date_created
                    );
                }
                Ok(History::Text(changes))
            }
            DisplayMode::List => Ok(History::Events(
                events
                    .into_iter()
                    .map(|event| HistoryEntry {
                        pos: event.place,
                        kind: event.kind,
                        details: event.args,
                        date: event.date_created,
                    })
                    .collect(),
            )),
        }
    }

    /// Verified completions of this level.
    ///
    /// `amount = true` returns only the total count and cannot be combined
    /// with a `display_mode`. `offset` pages the completion list; the
    /// validation happens before the request is issued.
    pub async fn records(
        &self,
        amount: bool,
        display_mode: Option<&str>,
        offset: u32,
    ) -> Result<LevelRecords> {
        if amount && display_mode.is_some() {
            return Err(DemonlistError::ConflictingOptions {
                left: "display_mode",
                right: "amount",
            });
        }
        let mode = DisplayMode::resolve(display_mode)?;

        let params = [
            ("level_id", self.id.to_string()),
            ("status", "1".to_string()),
            ("without_verifiers", "true".to_string()),
            ("offset", offset.to_string()),
        ];
        let data = self.client.fetch("/records", &params).await?;
        let payload: LevelRecordsData = serde_json::from_value(data)?;

        if amount {
            return Ok(LevelRecords::Count(payload.total_count));
        }

        match mode {
            DisplayMode::Default => {
                let mut victors = String::new();
                for record in &payload.records {
                    victors += &format!(
                        "{} {}% on {}\n",
                        record.username, record.percent, self.name
                    );
                }
                Ok(LevelRecords::Text(victors))
            }
            DisplayMode::List => {
                let mut victors = Vec::with_capacity(payload.records.len());
                for record in payload.records {
                    let flag = display_flag(&record.country)?;
                    victors.push(LevelRecordEntry {
                        player: record.username,
                        flag,
                        video: record.video,
                        percent: record.percent,
                        level_id: record.level_id,
                        name: self.name.clone(),
                    });
                }
                Ok(LevelRecords::Entries(victors))
            }
        }
    }
}
