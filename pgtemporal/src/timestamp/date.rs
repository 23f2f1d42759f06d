use std::fmt;

use crate::{error::ConversionError, ext::PadExt};

/// Calendar era.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Era {
    /// Anno Domini, the default.
    #[default]
    Ad,
    /// Before Christ, written with a ` BC` suffix.
    Bc,
}

/// Unvalidated date fields, as carried by [`ConversionError::NonexistentDate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateComponents {
    pub era: Era,
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl DateComponents {
    /// Check the fields without relating them to each other.
    ///
    /// Year is positive, month is within `1..=12` and day is within the longest
    /// length of that month.
    pub(crate) fn check_partial(self) -> Result<Self, ConversionError> {
        // year zero is 1 BC, a leap year
        let longest = |month| days_in_month(0, month);
        match self.year >= 1
            && (1..=12).contains(&self.month)
            && (1..=longest(self.month)).contains(&self.day)
        {
            true => Ok(self),
            false => Err(ConversionError::NonexistentDate(self)),
        }
    }
}

impl Default for DateComponents {
    fn default() -> Self {
        CivilDate::EPOCH.components()
    }
}

impl fmt::Display for DateComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year.padded(4), self.month.padded(2), self.day.padded(2))?;
        if let Era::Bc = self.era {
            f.write_str(" BC")?;
        }
        Ok(())
    }
}

/// A calendar day in the proleptic Gregorian calendar.
///
/// Years count from 1 in both eras, there is no year zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilDate {
    era: Era,
    year: i32,
    month: u8,
    day: u8,
}

impl CivilDate {
    /// 2000-01-01, the postgres epoch.
    pub const EPOCH: CivilDate = CivilDate { era: Era::Ad, year: 2000, month: 1, day: 1 };

    /// Create a validated date.
    pub fn new(era: Era, year: i32, month: u8, day: u8) -> Result<Self, ConversionError> {
        Self::from_components(DateComponents { era, year, month, day })
    }

    pub fn from_components(c: DateComponents) -> Result<Self, ConversionError> {
        if c.year < 1 || !(1..=12).contains(&c.month) {
            return Err(ConversionError::NonexistentDate(c));
        }
        if c.day < 1 || c.day > days_in_month(astronomical_year(c.era, c.year), c.month) {
            return Err(ConversionError::NonexistentDate(c));
        }
        Ok(Self { era: c.era, year: c.year, month: c.month, day: c.day })
    }

    pub const fn era(&self) -> Era {
        self.era
    }

    /// Year within the era, starting from 1.
    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Signed year where 1 BC is `0`, 2 BC is `-1`, and so on.
    pub fn astronomical_year(&self) -> i64 {
        astronomical_year(self.era, self.year)
    }

    /// Create from a signed year where `0` is 1 BC.
    pub fn from_astronomical(year: i64, month: u8, day: u8) -> Result<Self, ConversionError> {
        let (era, year) = match year {
            1.. => (Era::Ad, year),
            _ => (Era::Bc, 1 - year),
        };
        let Ok(year) = i32::try_from(year) else {
            return Err(ConversionError::OutOfRange { field: "year", value: year.to_string() });
        };
        Self::new(era, year, month, day)
    }

    pub const fn components(&self) -> DateComponents {
        DateComponents { era: self.era, year: self.year, month: self.month, day: self.day }
    }
}

impl Default for CivilDate {
    fn default() -> Self {
        Self::EPOCH
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.components().fmt(f)
    }
}

impl fmt::Debug for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

/// Postgres `date` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PgDate {
    /// `-infinity`
    DistantPast,
    /// `infinity`
    DistantFuture,
    /// A calendar day.
    Date(CivilDate),
}

impl PgDate {
    /// Create a validated calendar date.
    pub fn new(era: Era, year: i32, month: u8, day: u8) -> Result<Self, ConversionError> {
        CivilDate::new(era, year, month, day).map(Self::Date)
    }

    /// Returns `true` for `infinity` and `-infinity`.
    pub const fn is_sentinel(&self) -> bool {
        !matches!(self, Self::Date(_))
    }

    /// Returns the calendar day, [`None`] for sentinels.
    pub const fn civil(&self) -> Option<&CivilDate> {
        match self {
            Self::Date(date) => Some(date),
            _ => None,
        }
    }
}

impl Default for PgDate {
    fn default() -> Self {
        Self::Date(CivilDate::EPOCH)
    }
}

impl From<CivilDate> for PgDate {
    fn from(date: CivilDate) -> Self {
        Self::Date(date)
    }
}

fn astronomical_year(era: Era, year: i32) -> i64 {
    match era {
        Era::Ad => year.into(),
        Era::Bc => 1 - i64::from(year),
    }
}

fn is_leap_year(year: i64) -> bool {
    // From: https://github.com/BurntSushi/jiff/pull/23
    let d = if year % 25 != 0 { 4 } else { 16 };
    (year % d) == 0
}

fn days_in_month(year: i64, month: u8) -> u8 {
    if month == 2 {
        if is_leap_year(year) { 29 } else { 28 }
    } else {
        30 | (month ^ month >> 3)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        // 1 BC
        assert!(is_leap_year(0));
        // 5 BC
        assert!(is_leap_year(-4));
        // 4 BC
        assert!(!is_leap_year(-3));
    }

    #[test]
    fn month_lengths() {
        let lengths = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (month, len) in (1..=12).zip(lengths) {
            assert_eq!(days_in_month(2023, month), len, "month {month}");
        }
        assert_eq!(days_in_month(2024, 2), 29);
    }

    #[test]
    fn validates_components() {
        assert!(CivilDate::new(Era::Ad, 2024, 2, 29).is_ok());
        assert!(CivilDate::new(Era::Bc, 1, 2, 29).is_ok());

        let bad = [
            DateComponents { era: Era::Ad, year: 2023, month: 2, day: 29 },
            DateComponents { era: Era::Bc, year: 4, month: 2, day: 29 },
            DateComponents { era: Era::Ad, year: 2024, month: 13, day: 1 },
            DateComponents { era: Era::Ad, year: 2024, month: 0, day: 1 },
            DateComponents { era: Era::Ad, year: 2024, month: 4, day: 31 },
            DateComponents { era: Era::Ad, year: 2024, month: 4, day: 0 },
            DateComponents { era: Era::Ad, year: 0, month: 1, day: 1 },
        ];
        for c in bad {
            assert_eq!(
                CivilDate::from_components(c),
                Err(ConversionError::NonexistentDate(c))
            );
        }
    }

    #[test]
    fn astronomical() {
        let date = CivilDate::new(Era::Bc, 44, 3, 15).unwrap();
        assert_eq!(date.astronomical_year(), -43);
        assert_eq!(CivilDate::from_astronomical(-43, 3, 15), Ok(date));
        assert_eq!(
            CivilDate::from_astronomical(0, 1, 1).map(|d| (d.era(), d.year())),
            Ok((Era::Bc, 1))
        );
    }

    #[test]
    fn partial_check() {
        let c = |month, day| DateComponents { era: Era::Ad, year: 2023, month, day };
        assert!(c(2, 29).check_partial().is_ok());
        assert!(c(2, 30).check_partial().is_err());
        assert!(c(4, 31).check_partial().is_err());
        assert!(c(13, 1).check_partial().is_err());
        assert!(c(0, 1).check_partial().is_err());
        assert!(c(1, 0).check_partial().is_err());
        assert!(DateComponents { year: 0, ..c(1, 1) }.check_partial().is_err());
    }

    #[test]
    fn displays_components() {
        let date = CivilDate::new(Era::Bc, 44, 3, 15).unwrap();
        assert_eq!(date.to_string(), "0044-03-15 BC");
    }
}
