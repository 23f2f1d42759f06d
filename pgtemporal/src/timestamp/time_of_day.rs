use bigdecimal::{BigDecimal, Zero};
use std::fmt;

use crate::{
    error::ConversionError,
    ext::{DecimalExt, PadExt},
};

/// Signed offset from UTC.
///
/// Both components carry the offset sign, `-09:30` is `(-9, -30)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Zone {
    hours: i8,
    minutes: i8,
}

impl Zone {
    pub const UTC: Zone = Zone { hours: 0, minutes: 0 };

    /// Create a validated offset.
    ///
    /// Hours are within `-12..=12`, minutes within `-59..=59` with the same
    /// sign as hours, and only non zero when hours are.
    pub fn new(hours: i8, minutes: i8) -> Result<Self, ConversionError> {
        let out_of_range = || ConversionError::OutOfRange {
            field: "time zone",
            value: format!("{hours}:{minutes}"),
        };
        if !(-12..=12).contains(&hours) || !(-59..=59).contains(&minutes) {
            return Err(out_of_range());
        }
        if minutes != 0 && (hours == 0 || hours.signum() != minutes.signum()) {
            return Err(out_of_range());
        }
        Ok(Self { hours, minutes })
    }

    pub const fn hours(&self) -> i8 {
        self.hours
    }

    pub const fn minutes(&self) -> i8 {
        self.minutes
    }

    /// Total offset in seconds, positive east of UTC.
    pub fn seconds(&self) -> i32 {
        i32::from(self.hours) * 3600 + i32::from(self.minutes) * 60
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.hours < 0 { "-" } else { "+" };
        write!(
            f,
            "{sign}{}{}",
            self.hours.unsigned_abs().padded(2),
            self.minutes.unsigned_abs().padded(2),
        )
    }
}

/// Postgres time of day, with an optional offset.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PgTime {
    hour: u8,
    minute: u8,
    second: BigDecimal,
    time_zone: Option<Zone>,
}

impl PgTime {
    /// Create a validated time of day without offset.
    pub fn new(hour: u8, minute: u8, second: BigDecimal) -> Result<Self, ConversionError> {
        let mut me = Self::midnight();
        me.set_hour(hour)?;
        me.set_minute(minute)?;
        me.set_second(second)?;
        Ok(me)
    }

    /// `00:00:00` without offset.
    pub fn midnight() -> Self {
        Self { hour: 0, minute: 0, second: BigDecimal::zero(), time_zone: None }
    }

    /// Returns self with the given offset.
    pub fn with_time_zone(mut self, zone: impl Into<Option<Zone>>) -> Self {
        self.time_zone = zone.into();
        self
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Seconds with fraction, within `0 <= second < 60`.
    pub fn second(&self) -> &BigDecimal {
        &self.second
    }

    pub const fn time_zone(&self) -> Option<Zone> {
        self.time_zone
    }

    pub(crate) fn set_hour(&mut self, hour: u8) -> Result<(), ConversionError> {
        if hour > 23 {
            return Err(ConversionError::OutOfRange { field: "hour", value: hour.to_string() });
        }
        self.hour = hour;
        Ok(())
    }

    pub(crate) fn set_minute(&mut self, minute: u8) -> Result<(), ConversionError> {
        if minute > 59 {
            return Err(ConversionError::OutOfRange { field: "minute", value: minute.to_string() });
        }
        self.minute = minute;
        Ok(())
    }

    pub(crate) fn set_second(&mut self, second: BigDecimal) -> Result<(), ConversionError> {
        if second < BigDecimal::zero() || second >= BigDecimal::from(60) {
            return Err(ConversionError::OutOfRange { field: "second", value: second.to_string() });
        }
        self.second = second;
        Ok(())
    }

    pub(crate) fn set_time_zone(&mut self, zone: Zone) {
        self.time_zone = Some(zone);
    }
}

impl Default for PgTime {
    fn default() -> Self {
        Self::midnight()
    }
}

impl fmt::Display for PgTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (whole, fraction) = self.second.split_fraction();
        write!(f, "{}:{}:{whole:0>2}", self.hour.padded(2), self.minute.padded(2))?;
        if !fraction.is_empty() {
            write!(f, ".{fraction}")?;
        }
        if let Some(zone) = self.time_zone {
            zone.fmt(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for PgTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
