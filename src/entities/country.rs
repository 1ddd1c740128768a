//! Country standings and rosters.

use crate::api::http::ApiClient;
use crate::api::types::{CountryPlayer, CountryRank};
use crate::error::{DemonlistError, Result};
use crate::flags::country_flag;
use crate::options::DisplayMode;
use crate::queries::PAGE_SIZE;

/// One country's standing in the country ranking.
///
/// Construction fails when the name matches no ranking entry rather than
/// leaving the ranking fields unset.
#[derive(Debug, Clone)]
pub struct Country {
    client: ApiClient,
    name: String,
    pub flag: String,
    pub score: f64,
    pub place: u32,
}

/// A country's player roster in the requested display shape.
#[derive(Debug, Clone)]
pub enum CountryPlayers {
    /// Lines `"<index>. <username> | Score: <score>"` concatenated without
    /// a separator; the index is the entry's position in the full roster.
    Text(String),
    /// The windowed roster entries.
    Entries(Vec<CountryPlayer>),
}

impl Country {
    /// Look up a country by name.
    ///
    /// Spaces normalize to the API's hyphenated wire form before the flag
    /// resolution and the ranking scan.
    pub async fn by_name(client: &ApiClient, name: &str) -> Result<Self> {
        let wire_name = name.replace(' ', "-");
        let flag = country_flag(&wire_name)?;

        let data = client.fetch("/countries/top/main", &[]).await?;
        let ranking: Vec<CountryRank> = serde_json::from_value(data)?;
        let entry = ranking
            .into_iter()
            .find(|country| country.country == wire_name)
            .ok_or_else(|| DemonlistError::CountryNotFound {
                name: name.to_string(),
            })?;

        Ok(Self {
            client: client.clone(),
            name: wire_name,
            flag,
            score: entry.score,
            place: entry.place,
        })
    }

    /// The country's wire-form name (spaces replaced by hyphens).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One 50-entry window of the country's player roster.
    ///
    /// Both display modes window the roster to the same half-open
    /// `[offset, offset + 50)` slice; the roster is re-fetched on every
    /// call.
    pub async fn players(
        &self,
        offset: u32,
        display_mode: Option<&str>,
    ) -> Result<CountryPlayers> {
        let mode = DisplayMode::resolve(display_mode)?;
        let params = [("country", self.name.clone())];
        let data = self.client.fetch("/countries/main", &params).await?;
        let roster: Vec<CountryPlayer> = serde_json::from_value(data)?;

        let window: Vec<(usize, CountryPlayer)> = roster
            .into_iter()
            .enumerate()
            .skip(offset as usize)
            .take(PAGE_SIZE as usize)
            .collect();

        match mode {
            DisplayMode::Default => {
                let mut players = String::new();
                for (index, player) in &window {
                    players += &format!("{}. {} | Score: {}", index, player.username, player.score);
                }
                Ok(CountryPlayers::Text(players))
            }
            DisplayMode::List => Ok(CountryPlayers::Entries(
                window.into_iter().map(|(_, player)| player).collect(),
            )),
        }
    }
}
