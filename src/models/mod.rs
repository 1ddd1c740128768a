//! Output models shared by queries and entities.

pub mod output;
