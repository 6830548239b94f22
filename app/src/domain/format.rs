//! # Display formatting
//!
//! Pure functions mapping raw stored date/status values to the French
//! display labels the legacy UI rendered. Date formatting fails on malformed
//! input; callers isolate that per record instead of aborting a whole list.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Capitalized three-letter French month abbreviations. June and July both
/// shorten to "Jui", matching the legacy labels.
const MONTHS_FR: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("unparseable bill date '{0}'")]
    BadDate(String),
}

/// Format a raw stored date (`YYYY-MM-DD`, optionally with a trailing
/// RFC 3339 time part) as the legacy short form, e.g. `4 Avr. 04`.
pub fn format_date(raw: &str) -> Result<String, FormatError> {
    let date_part = raw.split('T').next().unwrap_or(raw);
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| FormatError::BadDate(raw.to_string()))?;

    let month = MONTHS_FR[date.month0() as usize];
    Ok(format!("{} {}. {:02}", date.day(), month, date.year() % 100))
}

/// Map a canonical status value to its display label. Unrecognized input is
/// passed through unchanged rather than treated as an error.
pub fn format_status(raw: &str) -> String {
    match raw {
        "pending" => "En attente".to_string(),
        "accepted" => "Accepté".to_string(),
        "refused" => "Refusé".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_dates_in_legacy_short_form() {
        assert_eq!(format_date("2004-04-04").unwrap(), "4 Avr. 04");
        assert_eq!(format_date("2023-06-13").unwrap(), "13 Jui. 23");
        assert_eq!(format_date("2021-11-02").unwrap(), "2 Nov. 21");
    }

    #[test]
    fn tolerates_a_trailing_time_part() {
        assert_eq!(format_date("2004-04-04T10:30:00Z").unwrap(), "4 Avr. 04");
    }

    #[test]
    fn fails_on_malformed_dates() {
        assert_eq!(
            format_date("not-a-date"),
            Err(FormatError::BadDate("not-a-date".to_string()))
        );
        assert!(format_date("2004-13-40").is_err());
        assert!(format_date("").is_err());
    }

    #[test]
    fn maps_the_three_canonical_statuses() {
        assert_eq!(format_status("pending"), "En attente");
        assert_eq!(format_status("accepted"), "Accepté");
        assert_eq!(format_status("refused"), "Refusé");
    }

    #[test]
    fn passes_unknown_statuses_through() {
        assert_eq!(format_status("archived"), "archived");
        assert_eq!(format_status(""), "");
    }
}
