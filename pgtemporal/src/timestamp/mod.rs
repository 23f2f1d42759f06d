//! Postgres `date`, `time` and `timestamp` values.
//!
//! - [`PgDate`]
//! - [`PgTime`]
//! - [`PgTimestamp`]
//! - [`PgTimestampFormatter`]
use std::{fmt, str::FromStr};

use crate::error::InvalidDate;

mod date;
mod time_of_day;
mod parser;
mod formatter;

pub use date::{CivilDate, DateComponents, Era, PgDate};
pub use time_of_day::{PgTime, Zone};
pub use parser::{NumericField, PartialTimestamp, TimestampState};
pub use formatter::{PgTimestampFormatter, Style};

/// Postgres `timestamp` value.
///
/// The time of day of a sentinel date is always [`None`].
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct PgTimestamp {
    pub(crate) date: PgDate,
    pub(crate) time: Option<PgTime>,
}

impl PgTimestamp {
    /// `-infinity`
    pub const DISTANT_PAST: PgTimestamp = PgTimestamp { date: PgDate::DistantPast, time: None };

    /// `infinity`
    pub const DISTANT_FUTURE: PgTimestamp = PgTimestamp { date: PgDate::DistantFuture, time: None };

    /// Create timestamp, `time` is dropped when `date` is a sentinel.
    pub fn new(date: PgDate, time: impl Into<Option<PgTime>>) -> Self {
        let time = match date.is_sentinel() {
            true => None,
            false => time.into(),
        };
        Self { date, time }
    }

    pub const fn date(&self) -> &PgDate {
        &self.date
    }

    pub const fn time(&self) -> Option<&PgTime> {
        self.time.as_ref()
    }

    pub fn into_parts(self) -> (PgDate, Option<PgTime>) {
        (self.date, self.time)
    }
}

impl From<PgDate> for PgTimestamp {
    fn from(date: PgDate) -> Self {
        Self::new(date, None)
    }
}

impl fmt::Display for PgTimestamp {
    /// Timestamp style when time of day is present, date style otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = match self.time {
            Some(_) => Style::Timestamp,
            None => Style::Date,
        };
        // both styles are satisfied by the check above
        PgTimestampFormatter::new(style).write(self, f).unwrap_or(Ok(()))
    }
}

impl fmt::Debug for PgTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for PgDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PgDate::DistantPast => f.write_str("-infinity"),
            PgDate::DistantFuture => f.write_str("infinity"),
            PgDate::Date(date) => date.fmt(f),
        }
    }
}

impl FromStr for PgTimestamp {
    type Err = InvalidDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PgTimestampFormatter::new(Style::Timestamp).parse(s)
    }
}

impl FromStr for PgDate {
    type Err = InvalidDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PgTimestampFormatter::new(Style::Date).parse(s).map(|ts| ts.date)
    }
}

impl FromStr for PgTime {
    type Err = InvalidDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // accepting states of the time style always commit a time of day
        PgTimestampFormatter::new(Style::Time).parse(s).map(|ts| ts.time.unwrap_or_default())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sentinel_drops_time() {
        let ts = PgTimestamp::new(PgDate::DistantFuture, PgTime::midnight());
        assert_eq!(ts, PgTimestamp::DISTANT_FUTURE);
        assert!(ts.time().is_none());
    }

    #[test]
    fn displays_by_presence_of_time() {
        let date = PgDate::new(Era::Ad, 2024, 1, 15).unwrap();
        assert_eq!(PgTimestamp::from(date).to_string(), "2024-01-15");
        assert_eq!(
            PgTimestamp::new(date, PgTime::midnight()).to_string(),
            "2024-01-15 00:00:00"
        );
        assert_eq!(PgTimestamp::DISTANT_PAST.to_string(), "-infinity");
        assert_eq!(PgDate::DistantFuture.to_string(), "infinity");
    }

    #[test]
    fn from_str() {
        let ts: PgTimestamp = "2024-01-15 13:45:30.5+05:30".parse().unwrap();
        assert_eq!(ts.to_string(), "2024-01-15 13:45:30.5+0530");

        let date: PgDate = "0044-03-15 BC".parse().unwrap();
        assert_eq!(date, PgDate::new(Era::Bc, 44, 3, 15).unwrap());

        let time: PgTime = "23:59:59".parse().unwrap();
        assert_eq!((time.hour(), time.minute()), (23, 59));

        assert!("infinity".parse::<PgTime>().is_err());
        assert_eq!("-infinity".parse::<PgDate>().unwrap(), PgDate::DistantPast);
    }
}
