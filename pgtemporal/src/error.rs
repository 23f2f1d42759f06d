//! `pgtemporal` error types.
use std::{backtrace::Backtrace, fmt, str::Utf8Error};

use crate::{
    interval::{Component, IntervalState, Quantity},
    parser::ParsingState,
    timestamp::{DateComponents, TimestampState},
};

/// A specialized [`Result`] type for `pgtemporal` operation.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure while parsing a date, time or timestamp literal.
pub type InvalidDate = ParseError<TimestampState>;

/// Failure while parsing an interval literal.
pub type InvalidInterval = ParseError<IntervalState>;

/// All possible error from `pgtemporal` library.
pub struct Error {
    backtrace: Backtrace,
    kind: ErrorKind,
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

/// All possible error kind from `pgtemporal` library.
pub enum ErrorKind {
    /// Postgres returned a non utf8 text value.
    Utf8(Utf8Error),
    /// Date, time or timestamp text failed to parse.
    Date(InvalidDate),
    /// Interval text failed to parse.
    Interval(InvalidInterval),
    /// Value cannot be represented in the target type.
    Unrepresentable(Unrepresentable),
}

macro_rules! from {
    (<$ty:ty>$pat:pat => $body:expr) => {
        impl From<$ty> for Error {
            fn from($pat: $ty) -> Self {
                let backtrace = std::backtrace::Backtrace::capture();
                Self { backtrace, kind: $body }
            }
        }
    };
}

from!(<ErrorKind>e => e);
from!(<Utf8Error>e => ErrorKind::Utf8(e));
from!(<InvalidDate>e => ErrorKind::Date(e));
from!(<InvalidInterval>e => ErrorKind::Interval(e));
from!(<Unrepresentable>e => ErrorKind::Unrepresentable(e));

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Utf8(e) => Some(e),
            ErrorKind::Date(e) => Some(e),
            ErrorKind::Interval(e) => Some(e),
            ErrorKind::Unrepresentable(e) => Some(e),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)?;

        if let std::backtrace::BacktraceStatus::Captured = self.backtrace.status() {
            let mut backtrace = self.backtrace.to_string();
            write!(f, "\n\n")?;
            writeln!(f, "Stack backtrace:")?;
            backtrace.truncate(backtrace.trim_end().len());
            write!(f, "{}", backtrace)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utf8(e) => e.fmt(f),
            Self::Date(e) => e.fmt(f),
            Self::Interval(e) => e.fmt(f),
            Self::Unrepresentable(e) => e.fmt(f),
        }
    }
}

impl fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

crate::common::unit_error! {
    /// A sentinel, or a value outside the range of the conversion target.
    pub struct Unrepresentable("value is not representable in the target type");
}

// ===== Conversion =====

/// The underlying reason a literal was rejected.
#[derive(Clone, PartialEq)]
pub enum ConversionError {
    /// Accumulated text is not a number.
    InvalidNumber(String),
    /// Offset code is neither `±hh` (0 to 12) nor `±hhmm` (100 to 1200, minutes below 60).
    InvalidTimeZoneOffset(i64),
    /// Character is not valid in the current parse state.
    UnexpectedCharacter(char),
    /// Input ended in a non accepting state.
    EarlyTermination,
    /// Year, month and day do not name a calendar day.
    NonexistentDate(DateComponents),
    /// Time of day or offset field outside of its range.
    OutOfRange {
        field: &'static str,
        value: String,
    },
    /// Interval component specified twice.
    RedundantQuantity {
        old: Quantity,
        new: Quantity,
        component: Component,
    },
    /// Interval quantity without unit keyword.
    UnitlessQuantity(Quantity),
    /// Word is not in the interval unit table.
    UnknownUnit(String),
}

impl std::error::Error for ConversionError { }

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber(text) => write!(f, "invalid number {text:?}"),
            Self::InvalidTimeZoneOffset(code) => write!(f, "invalid time zone offset {code}"),
            Self::UnexpectedCharacter(ch) => write!(f, "unexpected character {ch:?}"),
            Self::EarlyTermination => f.write_str("unexpected end of input"),
            Self::NonexistentDate(date) => write!(f, "nonexistent date {date}"),
            Self::OutOfRange { field, value } => write!(f, "{field} out of range: {value}"),
            Self::RedundantQuantity { old, new, component } => {
                write!(f, "{component} specified twice, first {old} then {new}")
            }
            Self::UnitlessQuantity(q) => write!(f, "quantity {q} has no unit"),
            Self::UnknownUnit(word) => write!(f, "unknown interval unit {word:?}"),
        }
    }
}

impl fmt::Debug for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

// ===== Parse =====

/// A [`ConversionError`] with the position, source text and parse state it occurred in.
#[derive(Clone)]
pub struct ParseError<S> {
    underlying: ConversionError,
    position: usize,
    source: String,
    state: S,
}

impl<S> ParseError<S> {
    pub(crate) fn new(underlying: ConversionError, position: usize, source: &str, state: S) -> Self {
        Self { underlying, position, source: source.into(), state }
    }

    /// Returns the error that stopped the parse.
    pub fn underlying(&self) -> &ConversionError {
        &self.underlying
    }

    /// Returns the byte offset of the offending character, or the text length at end of input.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the full text being parsed.
    pub fn source_text(&self) -> &str {
        &self.source
    }

    /// Returns the state the parser was in before the failing step.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Returns the offending character, [`None`] at end of input.
    pub fn character(&self) -> Option<char> {
        self.source.get(self.position..)?.chars().next()
    }
}

impl<S: ParsingState> std::error::Error for ParseError<S> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.underlying)
    }
}

impl<S: ParsingState> fmt::Display for ParseError<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid {} {:?}: {} at position {}",
            S::SUBJECT, self.source, self.underlying, self.position,
        )?;
        if f.alternate() {
            write!(f, " while {:?}", self.state)?;
        }
        Ok(())
    }
}

impl<S: ParsingState> fmt::Debug for ParseError<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self:#}\"")
    }
}
