use bigdecimal::{BigDecimal, Zero};

use crate::{
    accumulator::NumberAccumulator,
    error::{ConversionError, InvalidInterval, ParseError},
    ext::CharExt,
    parser::{ParsingState, StringParser},
};

use super::{Component, IntervalUnits, PgInterval, Quantity};

/// Fields of the `H:MM:SS` clock after the hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClockField {
    Minutes,
    Seconds,
}

/// Position in the interval grammar, with the interval built so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntervalState {
    /// Between tokens.
    ExpectingQuantity(PgInterval),
    /// Inside a quantity, or the hours of a clock.
    ParsingQuantity(NumberAccumulator, PgInterval),
    /// Quantity finished by whitespace, waiting for its unit.
    ExpectingUnit(NumberAccumulator, PgInterval),
    /// Inside the unit keyword of a pending quantity.
    ParsingUnit(NumberAccumulator, String, PgInterval),
    /// Inside a clock field, `bool` is the clock sign.
    ParsingClock(ClockField, bool, NumberAccumulator, PgInterval),
}

impl ParsingState for IntervalState {
    const SUBJECT: &'static str = "interval";
}

/// Parser of postgres `interval` input with a configurable unit table.
///
/// # Examples
///
/// ```
/// use pgtemporal::interval::{Component, IntervalParser, IntervalUnits};
///
/// const SHORT: IntervalUnits = IntervalUnits::new(&[("h", Component::Hours)]);
///
/// let iv = IntervalParser::new(SHORT).parse("-2 h").unwrap();
/// assert_eq!(iv.hours(), Some(-2));
/// assert!(IntervalParser::new(SHORT).parse("2 hours").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalParser {
    units: IntervalUnits,
}

impl IntervalParser {
    pub const fn new(units: IntervalUnits) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &IntervalUnits {
        &self.units
    }

    /// Parse `text` into an interval.
    pub fn parse(&self, text: &str) -> Result<PgInterval, InvalidInterval> {
        StringParser::parse(self, text)
    }

    /// Store a quantity under the component its unit names.
    fn commit_unit(
        &self,
        acc: &NumberAccumulator,
        word: &str,
        iv: &PgInterval,
    ) -> Result<PgInterval, ConversionError> {
        let component = self
            .units
            .lookup(word)
            .ok_or_else(|| ConversionError::UnknownUnit(word.into()))?;
        let mut iv = iv.clone();
        iv.set(component, acc.make::<Quantity>()?)?;
        Ok(iv)
    }
}

impl StringParser for IntervalParser {
    type State = IntervalState;
    type Output = PgInterval;
    type Error = InvalidInterval;

    fn initial_state(&self) -> IntervalState {
        IntervalState::ExpectingQuantity(PgInterval::new())
    }

    fn continue_parsing(&self, ch: char, state: &IntervalState) -> Result<IntervalState, ConversionError> {
        use ClockField::*;
        use IntervalState::*;

        let next = match (state, ch) {
            (ExpectingQuantity(_) | ExpectingUnit(..), _) if ch.is_ascii_whitespace() => state.clone(),
            (ExpectingQuantity(iv), _) if ch.is_ascii_digit() || ch.is_sign() || ch == '.' => {
                ParsingQuantity(NumberAccumulator::with(ch), iv.clone())
            }

            (ParsingQuantity(acc, iv), _) if ch.is_ascii_digit() || (ch == '.' && !acc.has_point()) => {
                let mut acc = acc.clone();
                acc.push(ch);
                ParsingQuantity(acc, iv.clone())
            }
            (ParsingQuantity(acc, iv), _) if ch.is_ascii_whitespace() => ExpectingUnit(acc.clone(), iv.clone()),
            (ParsingQuantity(acc, iv), ':') => {
                let mut iv = iv.clone();
                iv.set(Component::Hours, acc.make::<i64>()?)?;
                ParsingClock(Minutes, acc.is_negative(), NumberAccumulator::new(), iv)
            }
            (ParsingQuantity(acc, iv) | ExpectingUnit(acc, iv), _) if ch.is_ascii_alphabetic() => {
                ParsingUnit(acc.clone(), ch.to_string(), iv.clone())
            }

            (ParsingUnit(acc, word, iv), _) if ch.is_ascii_alphabetic() => {
                let mut word = word.clone();
                word.push(ch);
                ParsingUnit(acc.clone(), word, iv.clone())
            }
            (ParsingUnit(acc, word, iv), _) if ch.is_ascii_whitespace() => {
                ExpectingQuantity(self.commit_unit(acc, word, iv)?)
            }

            (ParsingClock(field, negative, acc, iv), _)
                if ch.is_ascii_digit() || (*field == Seconds && ch == '.' && !acc.has_point()) =>
            {
                let mut acc = acc.clone();
                acc.push(ch);
                ParsingClock(*field, *negative, acc, iv.clone())
            }
            (ParsingClock(Minutes, negative, acc, iv), ':') => {
                let iv = commit_clock(Minutes, *negative, acc, iv)?;
                ParsingClock(Seconds, *negative, NumberAccumulator::new(), iv)
            }
            (ParsingClock(field, negative, acc, iv), _) if ch.is_ascii_whitespace() => {
                ExpectingQuantity(commit_clock(*field, *negative, acc, iv)?)
            }

            _ => return Err(ConversionError::UnexpectedCharacter(ch)),
        };

        Ok(next)
    }

    fn finish_parsing(&self, state: &IntervalState) -> Result<PgInterval, ConversionError> {
        use IntervalState::*;

        match state {
            ExpectingQuantity(iv) if iv.is_empty() => Err(ConversionError::EarlyTermination),
            ExpectingQuantity(iv) => Ok(iv.clone()),
            ParsingQuantity(acc, _) | ExpectingUnit(acc, _) => {
                Err(ConversionError::UnitlessQuantity(acc.make()?))
            }
            ParsingUnit(acc, word, iv) => self.commit_unit(acc, word, iv),
            ParsingClock(field, negative, acc, iv) => commit_clock(*field, *negative, acc, iv),
        }
    }

    fn wrap_error(
        &self,
        error: ConversionError,
        at: usize,
        text: &str,
        state: IntervalState,
    ) -> InvalidInterval {
        ParseError::new(error, at, text, state)
    }
}

/// Store a clock field, range checked, with the clock sign applied.
fn commit_clock(
    field: ClockField,
    negative: bool,
    acc: &NumberAccumulator,
    iv: &PgInterval,
) -> Result<PgInterval, ConversionError> {
    let mut iv = iv.clone();
    match field {
        ClockField::Minutes => {
            let minutes: i64 = acc.make()?;
            if minutes > 59 {
                return Err(ConversionError::OutOfRange { field: "minute", value: minutes.to_string() });
            }
            iv.set(Component::Minutes, if negative { -minutes } else { minutes })?;
        }
        ClockField::Seconds => {
            let seconds: BigDecimal = acc.make()?;
            if seconds >= BigDecimal::from(60) {
                return Err(ConversionError::OutOfRange { field: "second", value: seconds.to_string() });
            }
            let seconds = match negative && !seconds.is_zero() {
                true => -seconds,
                false => seconds,
            };
            iv.set(Component::Seconds, seconds)?;
        }
    }
    Ok(iv)
}
