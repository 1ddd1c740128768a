//! Demonlist API Client Library
//!
//! A Rust client for the demonlist ranking API, covering the global player
//! ranking, the classic and future level lists, and player/level/country
//! lookups with their record and history sub-queries.
//!
//! ## Features
//!
//! - **Ranking Retrieval**: 50-entry pages of the player and level rankings
//! - **Entity Lookups**: players by id or username, levels and countries by name
//! - **Display Modes**: pre-rendered text blocks or structured records
//! - **Typed Errors**: every operation returns [`Result`] instead of
//!   swallowing failures; transport errors are also logged via `tracing`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use demonlist::{players_ranking, ApiClient, Player};
//!
//! # async fn example() -> demonlist::Result<()> {
//! let client = ApiClient::new();
//!
//! // Top 50 players as a ready-to-print text block
//! let top = players_ranking(&client, 0, None).await?;
//!
//! // One player with their completed-level records
//! let player = Player::by_name(&client, "zoink").await?;
//! let hardest_records = player.records("main", Some(10))?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod entities;
pub mod error;
pub mod flags;
pub mod models;
pub mod options;
pub mod queries;

// Re-export commonly used types
pub use api::{ApiClient, DEMONLIST_BASE_URL};
pub use entities::{Country, Level, Player};
pub use error::{DemonlistError, Result};
pub use options::{DisplayMode, ListKind, RecordCategory};
pub use queries::{level_list, players_ranking, LevelList, Ranking, PAGE_SIZE};
