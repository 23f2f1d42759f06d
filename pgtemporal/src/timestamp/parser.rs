use crate::{
    accumulator::NumberAccumulator,
    error::{ConversionError, InvalidDate, ParseError},
    ext::CharExt,
    parser::{ParsingState, StringParser},
};

use super::{CivilDate, DateComponents, Era, PgDate, PgTime, PgTimestamp, PgTimestampFormatter};

/// Numeric fields of the timestamp grammar, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    TimeZone,
    /// Offset minutes after `±hh:`, accumulated with the hours.
    TimeZoneMinute,
}

/// Fields committed so far.
///
/// Date fields are checked one by one as they are committed, and as a whole
/// once the era is known.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialTimestamp {
    pub date: DateComponents,
    pub time: Option<PgTime>,
}

impl PartialTimestamp {
    fn time_mut(&mut self) -> &mut PgTime {
        self.time.get_or_insert_with(PgTime::midnight)
    }
}

/// Position in the timestamp grammar, with the timestamp built so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampState {
    /// Next character should start `field`.
    ExpectingField(NumericField, PartialTimestamp),
    /// Inside `field`.
    ParsingField(NumericField, NumberAccumulator, PartialTimestamp),
    /// After the space that may start ` BC`.
    ExpectingEraB(PartialTimestamp),
    ExpectingEraC(PartialTimestamp),
    /// ` BC` consumed, nothing may follow.
    ParsedBc(PartialTimestamp),
}

impl ParsingState for TimestampState {
    const SUBJECT: &'static str = "date";
}

/// Length of `±hh`, the only offset form a `:` may follow.
const OFFSET_HOURS: usize = 3;
/// Length of `±hhmm`.
const OFFSET_WITH_MINUTES: usize = 5;

pub(crate) struct TimestampParser {
    formatter: PgTimestampFormatter,
}

impl TimestampParser {
    pub(crate) fn new(formatter: PgTimestampFormatter) -> Self {
        Self { formatter }
    }
}

impl StringParser for TimestampParser {
    type State = TimestampState;
    type Output = PgTimestamp;
    type Error = InvalidDate;

    fn initial_state(&self) -> TimestampState {
        match self.formatter.include_date() {
            true => TimestampState::ExpectingField(NumericField::Year, PartialTimestamp::default()),
            false => TimestampState::ExpectingField(NumericField::Hour, PartialTimestamp::default()),
        }
    }

    fn continue_parsing(&self, ch: char, state: &TimestampState) -> Result<TimestampState, ConversionError> {
        use NumericField::*;
        use TimestampState::*;

        let include_date = self.formatter.include_date();
        let include_time = self.formatter.include_time();

        let next = match (state, ch) {
            (ExpectingField(field, ts), '0'..='9') => {
                ParsingField(*field, NumberAccumulator::with(ch), ts.clone())
            }
            (ParsingField(field, acc, ts), '0'..='9')
                if *field != TimeZoneMinute || acc.as_str().len() < OFFSET_WITH_MINUTES =>
            {
                let mut acc = acc.clone();
                acc.push(ch);
                ParsingField(*field, acc, ts.clone())
            }

            (ParsingField(Year, acc, ts), '-') => ExpectingField(Month, commit(Year, acc, ts)?),
            (ParsingField(Month, acc, ts), '-') => ExpectingField(Day, commit(Month, acc, ts)?),
            (ParsingField(Day, acc, ts), ' ') => {
                let ts = commit(Day, acc, ts)?;
                match include_time {
                    true => ExpectingField(Hour, ts),
                    false => ExpectingEraB(ts),
                }
            }

            // date only, no time of day
            (ExpectingField(Hour, ts), 'B') if include_date => ExpectingEraC(ts.clone()),

            (ParsingField(Hour, acc, ts), ':') => ExpectingField(Minute, commit(Hour, acc, ts)?),
            (ParsingField(Minute, acc, ts), ':') => ExpectingField(Second, commit(Minute, acc, ts)?),

            (ParsingField(Second, acc, ts), '.') if !acc.has_point() => {
                let mut acc = acc.clone();
                acc.push(ch);
                ParsingField(Second, acc, ts.clone())
            }
            (ParsingField(Second, acc, ts), _) if ch.is_sign() => {
                ParsingField(TimeZone, NumberAccumulator::with(ch), commit(Second, acc, ts)?)
            }
            (ParsingField(Second, acc, ts), ' ') if include_date => {
                ExpectingEraB(commit(Second, acc, ts)?)
            }

            // `±hh:mm` offset spelling
            (ParsingField(TimeZone, acc, ts), ':') if acc.as_str().len() == OFFSET_HOURS => {
                ParsingField(TimeZoneMinute, acc.clone(), ts.clone())
            }
            (ParsingField(TimeZone, acc, ts), ' ') if include_date => {
                ExpectingEraB(commit(TimeZone, acc, ts)?)
            }
            (ParsingField(TimeZoneMinute, acc, ts), ' ')
                if include_date && acc.as_str().len() == OFFSET_WITH_MINUTES =>
            {
                ExpectingEraB(commit(TimeZoneMinute, acc, ts)?)
            }

            (ExpectingEraB(ts), 'B') => ExpectingEraC(ts.clone()),
            (ExpectingEraC(ts), 'C') => {
                let mut ts = ts.clone();
                ts.date.era = Era::Bc;
                CivilDate::from_components(ts.date)?;
                ParsedBc(ts)
            }

            _ => return Err(ConversionError::UnexpectedCharacter(ch)),
        };

        Ok(next)
    }

    fn finish_parsing(&self, state: &TimestampState) -> Result<PgTimestamp, ConversionError> {
        use NumericField::*;
        use TimestampState::*;

        let ts = match state {
            ParsingField(Day, acc, ts) => commit(Day, acc, ts)?,
            ParsingField(Second, acc, ts) => commit(Second, acc, ts)?,
            ParsingField(TimeZone, acc, ts) => commit(TimeZone, acc, ts)?,
            ParsingField(TimeZoneMinute, acc, ts) if acc.as_str().len() == OFFSET_WITH_MINUTES => {
                commit(TimeZoneMinute, acc, ts)?
            }
            ParsedBc(ts) => ts.clone(),
            _ => return Err(ConversionError::EarlyTermination),
        };

        let date = match self.formatter.include_date() {
            true => PgDate::Date(CivilDate::from_components(ts.date)?),
            false => PgDate::default(),
        };
        Ok(PgTimestamp::new(date, ts.time))
    }

    fn wrap_error(
        &self,
        error: ConversionError,
        at: usize,
        text: &str,
        state: TimestampState,
    ) -> InvalidDate {
        ParseError::new(error, at, text, state)
    }
}

/// Store a finished field, range checked, into a copy of `ts`.
fn commit(
    field: NumericField,
    acc: &NumberAccumulator,
    ts: &PartialTimestamp,
) -> Result<PartialTimestamp, ConversionError> {
    let mut ts = ts.clone();
    match field {
        NumericField::Year => {
            ts.date = DateComponents { year: acc.make()?, ..ts.date }.check_partial()?;
        }
        NumericField::Month => {
            ts.date = DateComponents { month: small("month", acc)?, ..ts.date }.check_partial()?;
        }
        NumericField::Day => {
            ts.date = DateComponents { day: small("day", acc)?, ..ts.date }.check_partial()?;
        }
        NumericField::Hour => ts.time_mut().set_hour(small("hour", acc)?)?,
        NumericField::Minute => ts.time_mut().set_minute(small("minute", acc)?)?,
        NumericField::Second => ts.time_mut().set_second(acc.make()?)?,
        NumericField::TimeZone | NumericField::TimeZoneMinute => {
            ts.time_mut().set_time_zone(acc.make()?)
        }
    }
    Ok(ts)
}

/// Field value that should fit a `u8` before its own range check.
fn small(field: &'static str, acc: &NumberAccumulator) -> Result<u8, ConversionError> {
    let value: i64 = acc.make()?;
    u8::try_from(value).map_err(|_| ConversionError::OutOfRange { field, value: value.to_string() })
}
