//! Country-flag resolution for ranking and record displays.

use crate::error::{DemonlistError, Result};

/// Sentinel country value the API reports for players without a country.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// Resolve a country name to its flag glyph.
///
/// Accepts the API's hyphenated wire form (`"United-States"`) as well as
/// plain names. Names the glyph database does not recognize fail with
/// [`DemonlistError::UnknownCountry`].
pub fn country_flag(name: &str) -> Result<String> {
    let readable = name.replace('-', " ");
    country_emoji::flag(&readable).ok_or_else(|| DemonlistError::UnknownCountry {
        name: name.to_string(),
    })
}

/// Flag glyph for a record's country field.
///
/// The `"Unknown"` sentinel renders as an empty glyph instead of an error.
pub fn display_flag(country: &str) -> Result<String> {
    if country == UNKNOWN_COUNTRY {
        Ok(String::new())
    } else {
        country_flag(country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_flag_by_name() {
        assert_eq!(country_flag("Poland").unwrap(), "\u{1F1F5}\u{1F1F1}");
    }

    #[test]
    fn test_country_flag_hyphenated_wire_form() {
        let flag = country_flag("United-States").unwrap();
        assert!(!flag.is_empty());
    }

    #[test]
    fn test_country_flag_unrecognized() {
        let err = country_flag("Atlantis").unwrap_err();
        match err {
            DemonlistError::UnknownCountry { name } => assert_eq!(name, "Atlantis"),
            _ => panic!("Expected UnknownCountry error"),
        }
    }

    #[test]
    fn test_display_flag_suppresses_unknown_sentinel() {
        assert_eq!(display_flag(UNKNOWN_COUNTRY).unwrap(), "");
    }

    #[test]
    fn test_display_flag_resolves_real_countries() {
        assert_eq!(display_flag("Poland").unwrap(), "\u{1F1F5}\u{1F1F1}");
    }
}
