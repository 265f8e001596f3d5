use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::constants::DEFAULT_LOCALE;
use crate::errors::Result;

/// Month-name tables for the locales the dashboard ships translations for.
/// Unknown locale tags fall back to en-US, matching the frontend behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateLocale {
    EnUs,
    DeDe,
    FrFr,
    EsEs,
}

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTHS_DE: [&str; 12] = [
    "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.", "Dez.",
];
const MONTHS_FR: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];
const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

impl DateLocale {
    fn from_tag(tag: &str) -> Self {
        let lang = tag.split(['-', '_']).next().unwrap_or("");
        match lang.to_ascii_lowercase().as_str() {
            "de" => DateLocale::DeDe,
            "fr" => DateLocale::FrFr,
            "es" => DateLocale::EsEs,
            _ => DateLocale::EnUs,
        }
    }

    fn month_abbrev(self, date: NaiveDate) -> &'static str {
        let table = match self {
            DateLocale::EnUs => &MONTHS_EN,
            DateLocale::DeDe => &MONTHS_DE,
            DateLocale::FrFr => &MONTHS_FR,
            DateLocale::EsEs => &MONTHS_ES,
        };
        table[date.month0() as usize]
    }

    fn render(self, date: NaiveDate) -> String {
        let month = self.month_abbrev(date);
        let (day, year) = (date.day(), date.year());
        match self {
            DateLocale::EnUs => format!("{} {}, {}", month, day, year),
            DateLocale::DeDe => format!("{}. {} {}", day, month, year),
            DateLocale::FrFr | DateLocale::EsEs => format!("{} {} {}", day, month, year),
        }
    }
}

/// Parses the date-like strings the dashboard passes around: RFC 3339
/// timestamps, bare `YYYY-MM-DDTHH:MM:SS`, or plain `YYYY-MM-DD` dates.
fn parse_date_like(date_str: &str) -> Result<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }
    Ok(NaiveDate::parse_from_str(date_str, "%Y-%m-%d")?)
}

/// Renders a date-like string as "day month-abbrev year" per the given
/// locale's conventions (e.g. "Mar 5, 2024" for en-US, "5 mars 2024" for
/// fr-FR).
///
/// Malformed input is a [`crate::errors::ValidationError::DateTimeParse`]
/// error rather than an "Invalid Date" placeholder string.
pub fn format_date_to_local(date_str: &str, locale: &str) -> Result<String> {
    let date = parse_date_like(date_str)?;
    Ok(DateLocale::from_tag(locale).render(date))
}

/// Convenience wrapper using the default en-US locale.
/// Equivalent to `format_date_to_local(date_str, DEFAULT_LOCALE)`.
pub fn format_date(date_str: &str) -> Result<String> {
    format_date_to_local(date_str, DEFAULT_LOCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_date_en_us() {
        assert_eq!(format_date("2024-03-05").unwrap(), "Mar 5, 2024");
    }

    #[test]
    fn test_rfc3339_timestamp() {
        assert_eq!(
            format_date_to_local("2024-03-05T10:30:00Z", "en-US").unwrap(),
            "Mar 5, 2024"
        );
    }

    #[test]
    fn test_naive_datetime() {
        assert_eq!(
            format_date_to_local("2023-12-31T23:59:59", "en-US").unwrap(),
            "Dec 31, 2023"
        );
    }

    #[test]
    fn test_french_conventions() {
        assert_eq!(
            format_date_to_local("2024-03-05", "fr-FR").unwrap(),
            "5 mars 2024"
        );
    }

    #[test]
    fn test_german_conventions() {
        assert_eq!(
            format_date_to_local("2024-03-05", "de-DE").unwrap(),
            "5. März 2024"
        );
    }

    #[test]
    fn test_unknown_locale_falls_back_to_en_us() {
        assert_eq!(
            format_date_to_local("2024-03-05", "ja-JP").unwrap(),
            "Mar 5, 2024"
        );
    }

    #[test]
    fn test_malformed_date_is_an_error() {
        assert!(format_date("not-a-date").is_err());
        assert!(format_date("2024-13-45").is_err());
        assert!(format_date("").is_err());
    }
}
