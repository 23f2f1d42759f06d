//! Postgres `interval` values.
//!
//! An interval is a set of components, each given at most once:
//!
//! ```
//! use pgtemporal::interval::{Component, PgInterval, Quantity};
//!
//! let iv: PgInterval = "1 year 2 mons -3 days 04:05:06.5".parse().unwrap();
//! assert_eq!(iv.quantity(Component::Days), Some(Quantity::Integer(-3)));
//! assert_eq!(iv.to_string(), "1 year 2 mons -3 days +04:05:06.5");
//! ```
use bigdecimal::BigDecimal;
use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use crate::error::{ConversionError, InvalidInterval};

mod format;
mod parser;
mod units;

pub use parser::{ClockField, IntervalParser, IntervalState};
pub use units::IntervalUnits;

/// Named interval field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Component {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Component {
    /// Every component, largest first.
    pub const ALL: [Component; 6] = [
        Component::Years,
        Component::Months,
        Component::Days,
        Component::Hours,
        Component::Minutes,
        Component::Seconds,
    ];
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Component::Years => "years",
            Component::Months => "months",
            Component::Days => "days",
            Component::Hours => "hours",
            Component::Minutes => "minutes",
            Component::Seconds => "seconds",
        })
    }
}

/// Signed amount of a [`Component`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Quantity {
    Integer(i64),
    /// Only seconds may be fractional.
    Decimal(BigDecimal),
}

impl Quantity {
    fn into_decimal(self) -> BigDecimal {
        match self {
            Quantity::Integer(value) => BigDecimal::from(value),
            Quantity::Decimal(value) => value,
        }
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Quantity::Integer(value)
    }
}

impl From<BigDecimal> for Quantity {
    fn from(value: BigDecimal) -> Self {
        Quantity::Decimal(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Integer(value) => value.fmt(f),
            Quantity::Decimal(value) => value.normalized().fmt(f),
        }
    }
}

/// Postgres `interval` value.
///
/// Components are kept as given, `90 mins` is not carried into hours.
/// Unset components count as zero.
///
/// Equality follows the text form: years, months and days compare as given,
/// the clock compares by its total, so `90 mins` equals `01:30:00`.
#[derive(Debug, Clone, Default)]
pub struct PgInterval {
    years: Option<i64>,
    months: Option<i64>,
    days: Option<i64>,
    hours: Option<i64>,
    minutes: Option<i64>,
    seconds: Option<BigDecimal>,
}

impl PgInterval {
    /// Interval with no component set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse with a custom unit table.
    pub fn parse_with(text: &str, units: IntervalUnits) -> Result<Self, InvalidInterval> {
        IntervalParser::new(units).parse(text)
    }

    pub fn years(&self) -> Option<i64> {
        self.years
    }

    pub fn months(&self) -> Option<i64> {
        self.months
    }

    pub fn days(&self) -> Option<i64> {
        self.days
    }

    pub fn hours(&self) -> Option<i64> {
        self.hours
    }

    pub fn minutes(&self) -> Option<i64> {
        self.minutes
    }

    pub fn seconds(&self) -> Option<&BigDecimal> {
        self.seconds.as_ref()
    }

    /// Returns `true` if no component is set.
    pub fn is_empty(&self) -> bool {
        Component::ALL.into_iter().all(|c| self.quantity(c).is_none())
    }

    /// Returns the quantity of `component`, seconds are always [`Quantity::Decimal`].
    pub fn quantity(&self, component: Component) -> Option<Quantity> {
        match component {
            Component::Seconds => self.seconds.clone().map(Quantity::Decimal),
            _ => self.slot(component).map(Quantity::Integer),
        }
    }

    /// Set `component`, once.
    ///
    /// # Errors
    ///
    /// [`ConversionError::RedundantQuantity`] when `component` is already set,
    /// [`ConversionError::InvalidNumber`] for a fractional quantity of a
    /// component other than seconds.
    pub fn set(
        &mut self,
        component: Component,
        quantity: impl Into<Quantity>,
    ) -> Result<(), ConversionError> {
        let new = match component {
            Component::Seconds => Quantity::Decimal(quantity.into().into_decimal()),
            _ => quantity.into(),
        };

        if let Some(old) = self.quantity(component) {
            return Err(ConversionError::RedundantQuantity { old, new, component });
        }

        match (component, new) {
            (Component::Seconds, new) => self.seconds = Some(new.into_decimal()),
            (_, Quantity::Decimal(value)) => {
                return Err(ConversionError::InvalidNumber(value.normalized().to_string()));
            }
            (Component::Years, Quantity::Integer(value)) => self.years = Some(value),
            (Component::Months, Quantity::Integer(value)) => self.months = Some(value),
            (Component::Days, Quantity::Integer(value)) => self.days = Some(value),
            (Component::Hours, Quantity::Integer(value)) => self.hours = Some(value),
            (Component::Minutes, Quantity::Integer(value)) => self.minutes = Some(value),
        }
        Ok(())
    }

    /// Builder form of [`set`][PgInterval::set].
    pub fn with(
        mut self,
        component: Component,
        quantity: impl Into<Quantity>,
    ) -> Result<Self, ConversionError> {
        self.set(component, quantity)?;
        Ok(self)
    }

    fn calendar(&self) -> [i64; 3] {
        [self.years, self.months, self.days].map(|value| value.unwrap_or(0))
    }

    fn slot(&self, component: Component) -> Option<i64> {
        match component {
            Component::Years => self.years,
            Component::Months => self.months,
            Component::Days => self.days,
            Component::Hours => self.hours,
            Component::Minutes => self.minutes,
            Component::Seconds => None,
        }
    }
}

impl PartialEq for PgInterval {
    fn eq(&self, other: &Self) -> bool {
        self.calendar() == other.calendar() && self.clock_seconds() == other.clock_seconds()
    }
}

impl Eq for PgInterval {}

impl Hash for PgInterval {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.calendar().hash(state);
        self.clock_seconds().normalized().hash(state);
    }
}

impl FromStr for PgInterval {
    type Err = InvalidInterval;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, IntervalUnits::default())
    }
}
