//! Classic and future demonlist retrieval.

use crate::api::http::ApiClient;
use crate::api::types::{FutureLevelData, RankedLevel};
use crate::error::{DemonlistError, Result};
use crate::models::output::{FutureLevelEntry, LevelListEntry};
use crate::options::{DisplayMode, ListKind};

use super::PAGE_SIZE;

/// Status names for future-list levels, indexed by wire value.
const FUTURE_STATUSES: [&str; 5] = [
    "Unknown",
    "In progress",
    "Verifying",
    "Open verification",
    "Finished",
];

/// Display name for a future-level status code. Values outside the known
/// table fall back to `"Unknown"`.
fn status_name(status: u8) -> &'static str {
    FUTURE_STATUSES
        .get(status as usize)
        .copied()
        .unwrap_or(FUTURE_STATUSES[0])
}

/// A slice of the demonlist in the requested display shape.
#[derive(Debug, Clone)]
pub enum LevelList {
    /// Pre-rendered text block, one line per level.
    Text(String),
    /// Structured classic-list entries.
    Levels(Vec<LevelListEntry>),
    /// Level names only, in list order.
    Names(Vec<String>),
    /// Future-list entries with resolved status names.
    Future(Vec<FutureLevelEntry>),
}

/// Fetch a slice of the demonlist.
///
/// `kind` selects the source: `"classic"` pages 50 levels starting at
/// `offset`, `"future"` returns the unpaged future list and ignores
/// `offset` and `as_names`. `as_names` yields names only and cannot be
/// combined with a `display_mode`. All option validation happens before
/// any request is issued.
pub async fn level_list(
    client: &ApiClient,
    offset: u32,
    display_mode: Option<&str>,
    kind: &str,
    as_names: bool,
) -> Result<LevelList> {
    if as_names && display_mode.is_some() {
        return Err(DemonlistError::ConflictingOptions {
            left: "display_mode",
            right: "as_names",
        });
    }

    match kind.parse::<ListKind>()? {
        ListKind::Future => future_list(client, display_mode).await,
        ListKind::Classic => {
            let mode = DisplayMode::resolve(display_mode)?;
            let params = [
                ("limit", PAGE_SIZE.to_string()),
                ("offset", offset.to_string()),
            ];
            let data = client.fetch("/levels/classic", &params).await?;
            let levels: Vec<RankedLevel> = serde_json::from_value(data)?;

            if as_names {
                return Ok(LevelList::Names(
                    levels.into_iter().map(|level| level.name).collect(),
                ));
            }

            match mode {
                DisplayMode::Default => {
                    let mut top = String::new();
                    for level in &levels {
                        top += &format!(
                            "{}. {} verified by {}\n",
                            level.place, level.name, level.verifier
                        );
                    }
                    Ok(LevelList::Text(top))
                }
                DisplayMode::List => Ok(LevelList::Levels(
                    levels
                        .into_iter()
                        .map(|level| LevelListEntry {
                            id: level.level_id,
                            name: level.name,
                            pos: level.place,
                            verifier: level.verifier,
                            video: level.video,
                            creator: level.creator,
                            list_percent: level.minimal_percent,
                            score: level.score,
                        })
                        .collect(),
                )),
            }
        }
    }
}

/// Fetch the unpaged future list.
pub(crate) async fn future_list(
    client: &ApiClient,
    display_mode: Option<&str>,
) -> Result<LevelList> {
    let mode = DisplayMode::resolve(display_mode)?;
    let data = client.fetch("/levels/future", &[]).await?;
    let levels: Vec<FutureLevelData> = serde_json::from_value(data)?;

    match mode {
        DisplayMode::Default => {
            let mut top = String::new();
            for level in &levels {
                top += &format!("{} | Status: {}\n", level.name, status_name(level.status));
            }
            Ok(LevelList::Text(top))
        }
        DisplayMode::List => Ok(LevelList::Future(
            levels
                .into_iter()
                .map(|level| FutureLevelEntry {
                    record: format!("{}%", level.record),
                    status: status_name(level.status).to_string(),
                    name: level.name,
                    verifier: level.verifier,
                })
                .collect(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_name_table() {
        assert_eq!(status_name(0), "Unknown");
        assert_eq!(status_name(1), "In progress");
        assert_eq!(status_name(2), "Verifying");
        assert_eq!(status_name(3), "Open verification");
        assert_eq!(status_name(4), "Finished");
    }

    #[test]
    fn test_status_name_out_of_range() {
        assert_eq!(status_name(5), "Unknown");
        assert_eq!(status_name(255), "Unknown");
    }
}
