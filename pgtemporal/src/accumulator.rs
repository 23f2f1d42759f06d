//! Digit accumulation for numeric fields.
use bigdecimal::BigDecimal;
use std::{fmt, str::FromStr};

use crate::{error::ConversionError, interval::Quantity, timestamp::Zone};

/// Collects the characters of one numeric field.
///
/// A field starts with an empty accumulator, every character of the field is
/// [`push`][NumberAccumulator::push]ed, and the field is converted once with
/// [`make`][NumberAccumulator::make].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct NumberAccumulator {
    digits: String,
}

impl NumberAccumulator {
    /// Creates an empty accumulator.
    pub const fn new() -> Self {
        Self { digits: String::new() }
    }

    /// Creates an accumulator holding one character.
    pub fn with(ch: char) -> Self {
        let mut me = Self::new();
        me.push(ch);
        me
    }

    /// Append a character.
    ///
    /// Caller only push digits, a leading sign, or a decimal point.
    pub fn push(&mut self, ch: char) {
        self.digits.push(ch);
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns `true` if a decimal point was pushed.
    pub fn has_point(&self) -> bool {
        self.digits.contains('.')
    }

    /// Returns `true` if the field starts with `-`.
    pub fn is_negative(&self) -> bool {
        self.digits.starts_with('-')
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Convert the accumulated text.
    pub fn make<T: FromDigits>(&self) -> Result<T, ConversionError> {
        T::from_digits(&self.digits)
    }
}

impl fmt::Debug for NumberAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.digits)
    }
}

/// A type that can be made from accumulated digits.
pub trait FromDigits: Sized {
    fn from_digits(digits: &str) -> Result<Self, ConversionError>;
}

macro_rules! from_digits {
    ($($ty:ty),*) => {
        $(
            impl FromDigits for $ty {
                fn from_digits(digits: &str) -> Result<Self, ConversionError> {
                    digits.parse().map_err(|_| ConversionError::InvalidNumber(digits.into()))
                }
            }
        )*
    };
}

from_digits!(i32, i64);

impl FromDigits for BigDecimal {
    fn from_digits(digits: &str) -> Result<Self, ConversionError> {
        let invalid = || ConversionError::InvalidNumber(digits.into());

        let sign = if digits.starts_with('-') { "-" } else { "" };
        let unsigned = digits.strip_prefix(['+', '-']).unwrap_or(digits);
        let (int, frac) = match unsigned.split_once('.') {
            // a point needs digits after it
            Some((_, "")) => return Err(invalid()),
            Some(parts) => parts,
            None => (unsigned, ""),
        };

        // `BigDecimal` also accepts exponents, which are not part of the grammar
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (int.is_empty() && frac.is_empty()) || !all_digits(int) || !all_digits(frac) {
            return Err(invalid());
        }

        let int = if int.is_empty() { "0" } else { int };
        let canonical = match frac.is_empty() {
            true => format!("{sign}{int}"),
            false => format!("{sign}{int}.{frac}"),
        };
        BigDecimal::from_str(&canonical).map_err(|_| invalid())
    }
}

impl FromDigits for Zone {
    fn from_digits(digits: &str) -> Result<Self, ConversionError> {
        let code = i64::from_digits(digits)?;
        let magnitude = code.unsigned_abs();

        let (hours, minutes) = match magnitude {
            // `±hh`
            0..=12 => (code, 0),
            // `±hhmm`
            100..=1200 if magnitude % 100 < 60 => (code / 100, code % 100),
            _ => return Err(ConversionError::InvalidTimeZoneOffset(code)),
        };

        // magnitudes checked above
        Zone::new(hours as i8, minutes as i8)
            .map_err(|_| ConversionError::InvalidTimeZoneOffset(code))
    }
}

impl FromDigits for Quantity {
    fn from_digits(digits: &str) -> Result<Self, ConversionError> {
        match digits.contains('.') {
            true => BigDecimal::from_digits(digits).map(Quantity::Decimal),
            false => i64::from_digits(digits).map(Quantity::Integer),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn acc(text: &str) -> NumberAccumulator {
        let mut acc = NumberAccumulator::new();
        text.chars().for_each(|c| acc.push(c));
        acc
    }

    #[test]
    fn integers() {
        assert_eq!(acc("2024").make::<i32>(), Ok(2024));
        assert_eq!(acc("-07").make::<i64>(), Ok(-7));
        assert_eq!(
            acc("").make::<i32>(),
            Err(ConversionError::InvalidNumber(String::new()))
        );
        assert_eq!(
            acc("99999999999").make::<i32>(),
            Err(ConversionError::InvalidNumber("99999999999".into()))
        );
    }

    #[test]
    fn decimals() {
        assert_eq!(acc("05.250").make::<BigDecimal>(), Ok(BigDecimal::from_str("5.25").unwrap()));
        assert_eq!(acc("7").make::<BigDecimal>(), Ok(BigDecimal::from(7)));
        assert_eq!(acc(".5").make::<BigDecimal>(), Ok(BigDecimal::from_str("0.5").unwrap()));
        assert!(acc(".").make::<BigDecimal>().is_err());
        assert_eq!(
            acc("1.").make::<BigDecimal>(),
            Err(ConversionError::InvalidNumber("1.".into()))
        );
        assert!(acc("1e5").make::<BigDecimal>().is_err());
        assert!(acc("").make::<BigDecimal>().is_err());
    }

    #[test]
    fn zones() {
        assert_eq!(acc("+05").make::<Zone>(), Ok(Zone::new(5, 0).unwrap()));
        assert_eq!(acc("-12").make::<Zone>(), Ok(Zone::new(-12, 0).unwrap()));
        assert_eq!(acc("+0530").make::<Zone>(), Ok(Zone::new(5, 30).unwrap()));
        assert_eq!(acc("-0930").make::<Zone>(), Ok(Zone::new(-9, -30).unwrap()));
        assert_eq!(acc("+00").make::<Zone>(), Ok(Zone::UTC));
        assert_eq!(
            acc("+1530").make::<Zone>(),
            Err(ConversionError::InvalidTimeZoneOffset(1530))
        );
        assert_eq!(
            acc("+9960").make::<Zone>(),
            Err(ConversionError::InvalidTimeZoneOffset(9960))
        );
        assert_eq!(
            acc("+13").make::<Zone>(),
            Err(ConversionError::InvalidTimeZoneOffset(13))
        );
        assert_eq!(
            acc("+0060").make::<Zone>(),
            Err(ConversionError::InvalidTimeZoneOffset(60))
        );
    }

    #[test]
    fn quantities() {
        assert_eq!(acc("-3").make::<Quantity>(), Ok(Quantity::Integer(-3)));
        assert_eq!(
            acc("1.5").make::<Quantity>(),
            Ok(Quantity::Decimal(BigDecimal::from_str("1.5").unwrap()))
        );
    }

    #[test]
    fn make_does_not_reset() {
        let acc = acc("42");
        assert_eq!(acc.make::<i32>(), Ok(42));
        assert_eq!(acc.make::<i32>(), Ok(42));
        assert!(!acc.is_empty());
    }
}
