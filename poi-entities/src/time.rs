use std::{fmt, str::FromStr};

use thiserror::Error;
use time::{
    format_description::{well_known::Rfc3339, FormatItem},
    macros::format_description,
    Date, OffsetDateTime, PrimitiveDateTime,
};

// The moderation backend emits naive date times in several shapes,
// they are all interpreted as UTC.
const DATE_TIME_SPACE: &[FormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
const DATE_TIME_SPACE_SUBSEC: &[FormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]");
const DATE_TIME_T: &[FormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
const DATE_TIME_T_SUBSEC: &[FormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");
const DATE_ONLY: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

const DISPLAY_DATE: &[FormatItem<'_>] = format_description!("[day]/[month]/[year]");
const DISPLAY_DATE_TIME: &[FormatItem<'_>] =
    format_description!("[day]/[month]/[year] [hour]:[minute]");

/// A point in time with second precision, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unrecognized timestamp: {0}")]
pub struct TimestampParseError(String);

impl Timestamp {
    /// Date formatted as `dd/mm/yyyy`.
    pub fn format_date(self) -> String {
        self.0.format(DISPLAY_DATE).unwrap_or_default()
    }

    /// Date and time formatted as `dd/mm/yyyy hh:mm`.
    pub fn format_date_time(self) -> String {
        self.0.format(DISPLAY_DATE_TIME).unwrap_or_default()
    }
}

impl FromStr for Timestamp {
    type Err = TimestampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(dt) = OffsetDateTime::parse(s, &Rfc3339) {
            return Ok(Self(dt));
        }
        for format in [
            DATE_TIME_SPACE,
            DATE_TIME_SPACE_SUBSEC,
            DATE_TIME_T,
            DATE_TIME_T_SUBSEC,
        ] {
            if let Ok(dt) = PrimitiveDateTime::parse(s, format) {
                return Ok(Self(dt.assume_utc()));
            }
        }
        if let Ok(date) = Date::parse(s, DATE_ONLY) {
            return Ok(Self(date.midnight().assume_utc()));
        }
        Err(TimestampParseError(s.to_owned()))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0.format(&Rfc3339).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_backend_formats() {
        let a: Timestamp = "2024-05-01 12:34:56".parse().unwrap();
        let b: Timestamp = "2024-05-01T12:34:56".parse().unwrap();
        let c: Timestamp = "2024-05-01T12:34:56Z".parse().unwrap();
        let d: Timestamp = "2024-05-01T12:34:56.123456".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert!(d > c);
        let date_only: Timestamp = "2024-05-01".parse().unwrap();
        assert!(date_only < a);
    }

    #[test]
    fn reject_garbage() {
        assert!("yesterday".parse::<Timestamp>().is_err());
        assert!("".parse::<Timestamp>().is_err());
    }

    #[test]
    fn format_for_display() {
        let ts: Timestamp = "2024-05-01 08:04:00".parse().unwrap();
        assert_eq!(ts.format_date(), "01/05/2024");
        assert_eq!(ts.format_date_time(), "01/05/2024 08:04");
    }
}
