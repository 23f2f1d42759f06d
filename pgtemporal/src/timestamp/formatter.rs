use std::fmt::{self, Write};

use super::{
    CivilDate, Era, PgDate, PgTime, PgTimestamp,
    parser::TimestampParser,
};
use crate::{error::InvalidDate, ext::PadExt, parser::StringParser};

/// Which parts of a [`PgTimestamp`] are read and written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Style {
    /// `YYYY-MM-DD HH:MM:SS[.f][±HHMM][ BC]`
    ///
    /// Parsing also accepts a date with no time of day.
    #[default]
    Timestamp,
    /// `YYYY-MM-DD[ BC]`
    Date,
    /// `HH:MM:SS[.f][±HHMM]`
    Time,
}

/// Parse and format postgres `timestamp`, `date` and `time` text.
///
/// # Examples
///
/// ```
/// use pgtemporal::{PgTimestampFormatter, Style};
///
/// let formatter = PgTimestampFormatter::new(Style::Date);
/// let date = formatter.parse("0044-03-15 BC").unwrap();
///
/// assert_eq!(formatter.format(&date).as_deref(), Some("0044-03-15 BC"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PgTimestampFormatter {
    style: Style,
}

impl PgTimestampFormatter {
    pub const fn new(style: Style) -> Self {
        Self { style }
    }

    pub const fn style(&self) -> Style {
        self.style
    }

    pub const fn include_date(&self) -> bool {
        !matches!(self.style, Style::Time)
    }

    pub const fn include_time(&self) -> bool {
        !matches!(self.style, Style::Date)
    }

    /// Parse text in this formatter style.
    ///
    /// `infinity` and `-infinity` are accepted when the style includes a date.
    pub fn parse(&self, text: &str) -> Result<PgTimestamp, InvalidDate> {
        if self.include_date() {
            match text {
                "infinity" => return Ok(PgTimestamp::DISTANT_FUTURE),
                "-infinity" => return Ok(PgTimestamp::DISTANT_PAST),
                _ => {}
            }
        }

        TimestampParser::new(*self).parse(text)
    }

    /// Format in this formatter style.
    ///
    /// Returns [`None`] if the style requires a time of day and `timestamp` has none.
    pub fn format(&self, timestamp: &PgTimestamp) -> Option<String> {
        let mut out = String::with_capacity(32);
        match self.write(timestamp, &mut out)? {
            Ok(()) => Some(out),
            // writing to `String` is infallible
            Err(_) => None,
        }
    }

    /// Write in this formatter style.
    ///
    /// Returns [`None`] if the style requires a time of day and `timestamp` has none.
    pub fn write<W: Write>(&self, timestamp: &PgTimestamp, out: &mut W) -> Option<fmt::Result> {
        if !self.include_date() {
            let time = timestamp.time.as_ref()?;
            return Some(write!(out, "{time}"));
        }

        let date = match &timestamp.date {
            PgDate::DistantPast => return Some(out.write_str("-infinity")),
            PgDate::DistantFuture => return Some(out.write_str("infinity")),
            PgDate::Date(date) => date,
        };

        let time = match self.include_time() {
            true => Some(timestamp.time.as_ref()?),
            false => None,
        };

        Some(write_date_time(out, date, time))
    }
}

fn write_date_time<W: Write>(out: &mut W, date: &CivilDate, time: Option<&PgTime>) -> fmt::Result {
    write!(out, "{}-{}-{}", date.year().padded(4), date.month().padded(2), date.day().padded(2))?;
    if let Some(time) = time {
        write!(out, " {time}")?;
    }
    if let Era::Bc = date.era() {
        out.write_str(" BC")?;
    }
    Ok(())
}
