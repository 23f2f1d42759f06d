//! Type integration with external types
//!
//! Available for:
//!
//! - [`serde`]'s [`Deserialize`][sd] and [`Serialize`][ss] as canonical text, requires `serde` feature
//! - [`time`][::time]'s [`Date`][td], [`Time`][tt], [`UtcOffset`][to], [`PrimitiveDateTime`][tp]
//!   and [`OffsetDateTime`][tz] via [`TryFrom`], requires `time` feature
//!
//! [sd]: serde::Deserialize
//! [ss]: serde::Serialize
//! [td]: ::time::Date
//! [tt]: ::time::Time
//! [to]: ::time::UtcOffset
//! [tp]: ::time::PrimitiveDateTime
//! [tz]: ::time::OffsetDateTime

#[cfg(feature = "serde")]
mod serde;

#[cfg(feature = "time")]
mod time;
