use crate::{
    interval::PgInterval,
    timestamp::{PgDate, PgTime, PgTimestamp},
};

/// Postgres object identifier.
///
/// The oid type is implemented as an unsigned four-byte integer.
///
/// <https://www.postgresql.org/docs/current/datatype-oid.html>
pub type Oid = u32;

/// A type that have corresponding postgres oid.
pub trait PgType {
    const OID: Oid;
}

/// `timetz`, time of day with time zone.
///
/// [`PgTime`] is encoded with this oid when it carries an offset.
pub const TIMETZ: Oid = 1266;

/// `timestamptz`, date and time with time zone.
pub const TIMESTAMPTZ: Oid = 1184;

macro_rules! oid {
    ($ty:ty, $oid:literal $(, $doc:literal)? ) => {
        impl PgType for $ty {
            $(#[doc = $doc])?
            const OID: Oid = $oid;
        }
    };
}

oid!(PgDate, 1082, "`date` calendar date (year, month, day)");
oid!(PgTime, 1083, "`time` time of day");
oid!(PgTimestamp, 1114, "`timestamp` date and time");
oid!(PgInterval, 1186, "`interval` time interval");
