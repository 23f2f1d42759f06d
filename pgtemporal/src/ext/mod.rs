use bigdecimal::BigDecimal;
use std::fmt;

/// Helper trait to [`Display`][fmt::Display] integers with leading zeros.
pub trait PadExt {
    /// Zero padded [`Display`][fmt::Display] of at least `width` digits.
    ///
    /// The sign, if any, is not counted as a digit.
    fn padded(self, width: usize) -> Padded;
}

/// Zero padded [`Display`][fmt::Display] implementation for integers.
pub struct Padded {
    value: i64,
    width: usize,
}

/// Helper trait for characters the temporal grammars care about.
pub trait CharExt {
    /// Returns `true` for `+` and `-`.
    fn is_sign(&self) -> bool;
}

/// Helper trait to split decimals for display.
pub trait DecimalExt {
    /// Integer digits and fraction digits of the magnitude.
    ///
    /// Trailing zeros are removed from the fraction, which is empty for integers.
    fn split_fraction(&self) -> (String, String);
}

macro_rules! padded {
    ($($ty:ty),*) => {
        $(
            impl PadExt for $ty {
                fn padded(self, width: usize) -> Padded {
                    Padded { value: self.into(), width }
                }
            }
        )*
    };
}

padded!(u8, i8, i32, i64);

impl fmt::Display for Padded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = itoa::Buffer::new();
        let digits = buf.format(self.value.unsigned_abs());
        if self.value < 0 {
            f.write_str("-")?;
        }
        for _ in digits.len()..self.width {
            f.write_str("0")?;
        }
        f.write_str(digits)
    }
}

impl fmt::Debug for Padded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

impl DecimalExt for BigDecimal {
    fn split_fraction(&self) -> (String, String) {
        let (mantissa, scale) = self.normalized().as_bigint_and_exponent();
        let mut digits = mantissa.magnitude().to_string();

        if scale <= 0 {
            digits.push_str(&"0".repeat(scale.unsigned_abs() as usize));
            return (digits, String::new());
        }

        let scale = scale as usize;
        if digits.len() <= scale {
            digits.insert_str(0, &"0".repeat(scale + 1 - digits.len()));
        }
        let fraction = digits.split_off(digits.len() - scale);
        (digits, fraction)
    }
}

impl CharExt for char {
    fn is_sign(&self) -> bool {
        matches!(self, '+' | '-')
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pads_to_width() {
        assert_eq!(7u8.padded(2).to_string(), "07");
        assert_eq!(44i32.padded(4).to_string(), "0044");
        assert_eq!(12345i32.padded(4).to_string(), "12345");
        assert_eq!((-5i8).padded(2).to_string(), "-05");
        assert_eq!(i64::MIN.padded(2).to_string(), i64::MIN.to_string());
    }

    #[test]
    fn splits_fraction() {
        use std::str::FromStr;
        let split = |s: &str| BigDecimal::from_str(s).unwrap().split_fraction();
        let owned = |a: &str, b: &str| (a.to_string(), b.to_string());

        assert_eq!(split("6.250000"), owned("6", "25"));
        assert_eq!(split("0.000001"), owned("0", "000001"));
        assert_eq!(split("50"), owned("50", ""));
        assert_eq!(split("0"), owned("0", ""));
        assert_eq!(split("-3.5"), owned("3", "5"));
        assert_eq!(split("12.0"), owned("12", ""));
    }

    #[test]
    fn signs() {
        assert!('+'.is_sign());
        assert!('-'.is_sign());
        assert!(!'0'.is_sign());
    }
}
