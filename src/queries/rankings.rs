//! Global player ranking retrieval.

use crate::api::http::ApiClient;
use crate::api::types::RankedPlayer;
use crate::error::Result;
use crate::flags::display_flag;
use crate::models::output::PlayerRankEntry;
use crate::options::DisplayMode;

use super::PAGE_SIZE;

/// A page of the player ranking in the requested display shape.
#[derive(Debug, Clone)]
pub enum Ranking {
    /// Pre-rendered text block, one line per entry.
    Text(String),
    /// Structured entries in page order.
    Entries(Vec<PlayerRankEntry>),
}

/// Fetch a 50-entry page of the global player ranking starting at `offset`.
///
/// With `offset = 300` the page covers places 301-350. `display_mode`
/// selects the output shape: `None` or `"default"` renders
/// `"<place>. <flag><name> | Score: <score>"` lines with the flag
/// suppressed for the `"Unknown"` country sentinel, `"list"` yields
/// structured entries. Anything else is rejected before the request is
/// issued.
pub async fn players_ranking(
    client: &ApiClient,
    offset: u32,
    display_mode: Option<&str>,
) -> Result<Ranking> {
    let mode = DisplayMode::resolve(display_mode)?;
    let params = [
        ("limit", PAGE_SIZE.to_string()),
        ("offset", offset.to_string()),
    ];
    let data = client.fetch("/users/top", &params).await?;
    let players: Vec<RankedPlayer> = serde_json::from_value(data)?;

    match mode {
        DisplayMode::Default => {
            let mut top = String::new();
            for player in &players {
                let flag = display_flag(&player.country)?;
                top += &format!(
                    "{}. {}{} | Score: {}\n",
                    player.place, flag, player.username, player.score
                );
            }
            Ok(Ranking::Text(top))
        }
        DisplayMode::List => {
            let mut top = Vec::with_capacity(players.len());
            for player in players {
                let flag = display_flag(&player.country)?;
                top.push(PlayerRankEntry {
                    place: player.place,
                    name: player.username,
                    score: player.score,
                    flag,
                });
            }
            Ok(Ranking::Entries(top))
        }
    }
}
