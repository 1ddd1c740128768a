//! Option selectors shared across the public query surface.

use crate::error::DemonlistError;
use std::fmt;
use std::str::FromStr;

/// Output-shape selector applied uniformly across query functions.
///
/// Every query that renders results accepts an optional selector string
/// from the caller; `None` and `"default"` produce the pre-rendered text
/// form, `"list"` produces structured records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    #[default]
    Default,
    List,
}

impl DisplayMode {
    /// Resolve a caller-supplied selector, treating `None` as the default
    /// text form.
    pub fn resolve(mode: Option<&str>) -> Result<Self, DemonlistError> {
        match mode {
            None => Ok(DisplayMode::Default),
            Some(s) => s.parse(),
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DisplayMode::Default => "default",
            DisplayMode::List => "list",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for DisplayMode {
    type Err = DemonlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(DisplayMode::Default),
            "list" => Ok(DisplayMode::List),
            _ => Err(DemonlistError::InvalidDisplayMode {
                mode: s.to_string(),
            }),
        }
    }
}

/// Which demonlist collection a level query reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// The currently-active ranked list.
    Classic,
    /// Pending challenges that have not been finalized.
    Future,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ListKind::Classic => "classic",
            ListKind::Future => "future",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ListKind {
    type Err = DemonlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(ListKind::Classic),
            "future" => Ok(ListKind::Future),
            _ => Err(DemonlistError::InvalidListKind {
                kind: s.to_string(),
            }),
        }
    }
}

/// One of a player's record buckets, or the combined `"all"` selection.
///
/// `All` concatenates main + basic + extended + beyond; verified and
/// progress records are not part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordCategory {
    Main,
    Basic,
    Extended,
    Beyond,
    Verified,
    Progress,
    All,
}

impl fmt::Display for RecordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecordCategory::Main => "main",
            RecordCategory::Basic => "basic",
            RecordCategory::Extended => "extended",
            RecordCategory::Beyond => "beyond",
            RecordCategory::Verified => "verified",
            RecordCategory::Progress => "progress",
            RecordCategory::All => "all",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for RecordCategory {
    type Err = DemonlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(RecordCategory::Main),
            "basic" => Ok(RecordCategory::Basic),
            "extended" => Ok(RecordCategory::Extended),
            "beyond" => Ok(RecordCategory::Beyond),
            "verified" => Ok(RecordCategory::Verified),
            "progress" => Ok(RecordCategory::Progress),
            "all" => Ok(RecordCategory::All),
            _ => Err(DemonlistError::InvalidRecordCategory {
                category: s.to_string(),
            }),
        }
    }
}
