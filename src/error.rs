//! Error types for the demonlist API client

use thiserror::Error;


pub type Result<T> = std::result::Result<T, DemonlistError>;

#[derive(Error, Debug)]
pub enum DemonlistError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{url} gave the wrong answer: {status}. Check your internet connection, or disable VPN/proxy")]
    Transport {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Demonlist API returned no data")]
    NoData,

    #[error("Unknown display_mode {mode:?}. Use \"default\" or \"list\"")]
    InvalidDisplayMode { mode: String },

    #[error("Unknown demonlist type {kind:?}. Use \"classic\" or \"future\"")]
    InvalidListKind { kind: String },

    #[error("Invalid record category {category:?}. Use \"main\", \"basic\", \"extended\", \"beyond\", \"verified\", \"progress\" or \"all\"")]
    InvalidRecordCategory { category: String },

    #[error("'{left}' cannot be combined with '{right}'")]
    ConflictingOptions {
        left: &'static str,
        right: &'static str,
    },

    #[error("Unrecognized country: {name}")]
    UnknownCountry { name: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Level not found: {name}")]
    LevelNotFound { name: String },

    #[error("Country not found: {name}")]
    CountryNotFound { name: String },
}
