use bigdecimal::{BigDecimal, Signed, Zero};
use std::fmt;

use crate::ext::DecimalExt;

use super::PgInterval;

impl PgInterval {
    /// Hours, minutes and seconds as one signed amount of seconds.
    pub fn clock_seconds(&self) -> BigDecimal {
        let hours = BigDecimal::from(self.hours.unwrap_or(0)) * BigDecimal::from(3600);
        let minutes = BigDecimal::from(self.minutes.unwrap_or(0)) * BigDecimal::from(60);
        let seconds = self.seconds.clone().unwrap_or_else(BigDecimal::zero);
        hours + minutes + seconds
    }
}

impl fmt::Display for PgInterval {
    /// Postgres `IntervalStyle` `postgres` output.
    ///
    /// Zero parts are omitted and the clock is normalized, `90 mins` prints
    /// as `01:30:00`. A `+` marks a positive part that follows a negative one.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut is_zero = true;
        let mut is_before = false;

        for (value, unit) in [(self.years, "year"), (self.months, "mon"), (self.days, "day")] {
            let value = value.unwrap_or(0);
            if value == 0 {
                continue;
            }
            write!(
                f,
                "{}{}{value} {unit}{}",
                if is_zero { "" } else { " " },
                if is_before && value > 0 { "+" } else { "" },
                if value == 1 { "" } else { "s" },
            )?;
            is_before = value < 0;
            is_zero = false;
        }

        let total = self.clock_seconds();
        if !is_zero && total.is_zero() {
            return Ok(());
        }

        let sign = match total.is_negative() {
            true => "-",
            false if is_before => "+",
            false => "",
        };
        let magnitude = total.abs();
        let (whole, _) = magnitude.with_scale(0).into_bigint_and_exponent();
        let (_, fraction) = magnitude.split_fraction();

        let hours = &whole / 3600u32;
        let minutes = &whole % 3600u32 / 60u32;
        let seconds = &whole % 60u32;

        write!(
            f,
            "{}{sign}{:0>2}:{:0>2}:{:0>2}",
            if is_zero { "" } else { " " },
            hours.to_string(),
            minutes.to_string(),
            seconds.to_string(),
        )?;
        if !fraction.is_empty() {
            write!(f, ".{fraction}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::interval::Component;

    fn show(text: &str) -> String {
        text.parse::<PgInterval>().unwrap().to_string()
    }

    #[test]
    fn date_parts() {
        assert_eq!(show("1 year 2 mons 3 days"), "1 year 2 mons 3 days");
        assert_eq!(show("2 years 1 mon 1 day"), "2 years 1 mon 1 day");
        assert_eq!(show("-1 year"), "-1 years");
        assert_eq!(show("-1 year 2 days"), "-1 years +2 days");
        assert_eq!(show("0 years 3 days"), "3 days");
    }

    #[test]
    fn clock() {
        assert_eq!(show("3 days 04:05:06"), "3 days 04:05:06");
        assert_eq!(show("90 mins"), "01:30:00");
        assert_eq!(show("1.5 secs"), "00:00:01.5");
        assert_eq!(show("-1 day 2 hours"), "-1 days +02:00:00");
        assert_eq!(show("1 day -2 hours"), "1 day -02:00:00");
        assert_eq!(show("1 hour -30 mins"), "00:30:00");
        assert_eq!(show("-0.25 secs"), "-00:00:00.25");
        assert_eq!(show("100 hours"), "100:00:00");
    }

    #[test]
    fn zero() {
        assert_eq!(show("0 days"), "00:00:00");
        assert_eq!(PgInterval::new().to_string(), "00:00:00");
        assert_eq!(show("1 mon 0 secs"), "1 mon");
    }

    #[test]
    fn clock_seconds() {
        let iv = PgInterval::new()
            .with(Component::Hours, 1i64)
            .and_then(|iv| iv.with(Component::Minutes, -30i64))
            .unwrap();
        assert_eq!(iv.clock_seconds(), BigDecimal::from(1800));
    }
}
