//! Player profiles and their record buckets.

use crate::api::http::ApiClient;
use crate::api::types::{HardestLevel, PlayerRecordData, RankedPlayer, RecordBuckets, UserProfile};
use crate::error::{DemonlistError, Result};
use crate::flags::display_flag;
use crate::models::output::PlayerRecordEntry;
use crate::options::RecordCategory;

/// A player profile fetched once at construction time.
///
/// All fields are copied from a single lookup response; [`Player::records`]
/// reshapes the cached buckets without further requests.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: u64,
    pub place: u32,
    pub score: f64,
    pub username: String,
    pub country: String,
    /// Flag glyph for `country`; empty for the `"Unknown"` sentinel.
    pub flag: String,
    pub badge: Option<String>,
    pub hardest: HardestLevel,
    records: RecordBuckets,
}

impl Player {
    /// Look up a player by numeric id.
    pub async fn by_id(client: &ApiClient, id: u64) -> Result<Self> {
        let data = client.fetch("/users", &[("id", id.to_string())]).await?;
        let profile: UserProfile = serde_json::from_value(data)?;
        Self::from_profile(profile)
    }

    /// Look up a player by username.
    ///
    /// Resolves the id through a ranking search first, then fetches the
    /// full profile; the two requests run strictly in sequence.
    pub async fn by_name(client: &ApiClient, name: &str) -> Result<Self> {
        let params = [
            ("limit", "1".to_string()),
            ("offset", "0".to_string()),
            ("username_search", name.to_string()),
        ];
        let data = client.fetch("/users/top", &params).await?;
        let matches: Vec<RankedPlayer> = serde_json::from_value(data)?;
        let found = matches
            .first()
            .ok_or_else(|| DemonlistError::PlayerNotFound {
                name: name.to_string(),
            })?;

        Self::by_id(client, found.id).await
    }

    fn from_profile(profile: UserProfile) -> Result<Self> {
        let flag = display_flag(&profile.country)?;
        Ok(Self {
            id: profile.id,
            place: profile.place,
            score: profile.score,
            username: profile.username,
            country: profile.country,
            flag,
            badge: profile.badge,
            hardest: profile.hardest,
            records: profile.records,
        })
    }

    /// Records in one category, or `"all"` for main + basic + extended +
    /// beyond. Verified and progress records are never part of `"all"`.
    ///
    /// `limit` truncates to the first entries in the order the API
    /// reported them; `None` keeps everything. Progress records carry
    /// their `percent` value; other categories omit it.
    pub fn records(&self, category: &str, limit: Option<usize>) -> Result<Vec<PlayerRecordEntry>> {
        let category = category.parse::<RecordCategory>()?;
        let buckets = &self.records;
        let levels: Vec<&PlayerRecordData> = match category {
            RecordCategory::Main => buckets.main.iter().collect(),
            RecordCategory::Basic => buckets.basic.iter().collect(),
            RecordCategory::Extended => buckets.extended.iter().collect(),
            RecordCategory::Beyond => buckets.beyond.iter().collect(),
            RecordCategory::Verified => buckets.verified.iter().collect(),
            RecordCategory::Progress => buckets.progress.iter().collect(),
            RecordCategory::All => buckets
                .main
                .iter()
                .chain(&buckets.basic)
                .chain(&buckets.extended)
                .chain(&buckets.beyond)
                .collect(),
        };

        let take = limit.unwrap_or(levels.len());
        Ok(levels
            .into_iter()
            .take(take)
            .map(|level| PlayerRecordEntry {
                name: level.level_name.clone(),
                id: level.level_id,
                place: level.place,
                video: level.video.clone(),
                percent: if category == RecordCategory::Progress {
                    level.percent
                } else {
                    None
                },
            })
            .collect())
    }
}
