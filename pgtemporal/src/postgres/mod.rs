//! Postgres type identity.
mod pg_type;

pub use pg_type::{Oid, PgType, TIMESTAMPTZ, TIMETZ};
