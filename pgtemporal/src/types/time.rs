use bigdecimal::{BigDecimal, ToPrimitive};
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

use crate::{
    error::Unrepresentable,
    timestamp::{CivilDate, PgDate, PgTime, PgTimestamp, Zone},
};

const NANOS_PER_SECOND: u64 = 1_000_000_000;

// ===== Date =====

impl TryFrom<PgDate> for Date {
    type Error = Unrepresentable;

    fn try_from(date: PgDate) -> Result<Self, Self::Error> {
        let date = date.civil().ok_or(Unrepresentable)?;
        let year = i32::try_from(date.astronomical_year()).map_err(|_| Unrepresentable)?;
        let month = Month::try_from(date.month()).map_err(|_| Unrepresentable)?;
        Date::from_calendar_date(year, month, date.day()).map_err(|_| Unrepresentable)
    }
}

impl TryFrom<Date> for PgDate {
    type Error = Unrepresentable;

    fn try_from(date: Date) -> Result<Self, Self::Error> {
        CivilDate::from_astronomical(date.year().into(), date.month().into(), date.day())
            .map(PgDate::Date)
            .map_err(|_| Unrepresentable)
    }
}

// ===== Time =====

impl TryFrom<&PgTime> for Time {
    type Error = Unrepresentable;

    /// The offset, if any, is dropped, see [`UtcOffset`]'s conversion.
    fn try_from(time: &PgTime) -> Result<Self, Self::Error> {
        let nanos = time.second() * BigDecimal::from(NANOS_PER_SECOND);
        // sub nanosecond fractions would be lost
        if nanos.with_scale(0) != nanos {
            return Err(Unrepresentable);
        }
        let nanos = nanos.to_u64().ok_or(Unrepresentable)?;
        let second = (nanos / NANOS_PER_SECOND) as u8;
        let nanosecond = (nanos % NANOS_PER_SECOND) as u32;
        Time::from_hms_nano(time.hour(), time.minute(), second, nanosecond).map_err(|_| Unrepresentable)
    }
}

impl TryFrom<PgTime> for Time {
    type Error = Unrepresentable;

    fn try_from(time: PgTime) -> Result<Self, Self::Error> {
        Time::try_from(&time)
    }
}

impl From<Time> for PgTime {
    fn from(time: Time) -> Self {
        let nanos = u64::from(time.second()) * NANOS_PER_SECOND + u64::from(time.nanosecond());
        let second = BigDecimal::new(nanos.into(), 9).normalized();
        // every field of `Time` is within the `PgTime` ranges
        PgTime::new(time.hour(), time.minute(), second).unwrap_or_default()
    }
}

// ===== Offset =====

impl TryFrom<Zone> for UtcOffset {
    type Error = Unrepresentable;

    fn try_from(zone: Zone) -> Result<Self, Self::Error> {
        UtcOffset::from_hms(zone.hours(), zone.minutes(), 0).map_err(|_| Unrepresentable)
    }
}

impl TryFrom<UtcOffset> for Zone {
    type Error = Unrepresentable;

    fn try_from(offset: UtcOffset) -> Result<Self, Self::Error> {
        if offset.seconds_past_minute() != 0 {
            return Err(Unrepresentable);
        }
        Zone::new(offset.whole_hours(), offset.minutes_past_hour()).map_err(|_| Unrepresentable)
    }
}

// ===== Timestamp =====

impl TryFrom<PgTimestamp> for PrimitiveDateTime {
    type Error = Unrepresentable;

    /// Fails for a timestamp with offset, use [`OffsetDateTime`] for those.
    fn try_from(ts: PgTimestamp) -> Result<Self, Self::Error> {
        let (date, time) = ts.into_parts();
        let time = match time {
            Some(time) if time.time_zone().is_some() => return Err(Unrepresentable),
            Some(time) => Time::try_from(&time)?,
            None => Time::MIDNIGHT,
        };
        Ok(PrimitiveDateTime::new(Date::try_from(date)?, time))
    }
}

impl TryFrom<PrimitiveDateTime> for PgTimestamp {
    type Error = Unrepresentable;

    fn try_from(dt: PrimitiveDateTime) -> Result<Self, Self::Error> {
        Ok(PgTimestamp::new(PgDate::try_from(dt.date())?, PgTime::from(dt.time())))
    }
}

impl TryFrom<PgTimestamp> for OffsetDateTime {
    type Error = Unrepresentable;

    /// A timestamp without offset is taken as UTC.
    fn try_from(ts: PgTimestamp) -> Result<Self, Self::Error> {
        let (date, time) = ts.into_parts();
        let (time, zone) = match time {
            Some(time) => (Time::try_from(&time)?, time.time_zone().unwrap_or(Zone::UTC)),
            None => (Time::MIDNIGHT, Zone::UTC),
        };
        let offset = UtcOffset::try_from(zone)?;
        Ok(PrimitiveDateTime::new(Date::try_from(date)?, time).assume_offset(offset))
    }
}

impl TryFrom<OffsetDateTime> for PgTimestamp {
    type Error = Unrepresentable;

    fn try_from(dt: OffsetDateTime) -> Result<Self, Self::Error> {
        let time = PgTime::from(dt.time()).with_time_zone(Zone::try_from(dt.offset())?);
        Ok(PgTimestamp::new(PgDate::try_from(dt.date())?, time))
    }
}
