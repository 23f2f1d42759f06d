use tracing::trace_span;
use tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use pgtemporal::Result;

mod timestamp;
mod interval;
mod cell;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::Registry::default()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    trace_span!("timestamp").in_scope(timestamp::main)?;
    trace_span!("interval").in_scope(interval::main)?;
    trace_span!("cell").in_scope(cell::main)?;

    Ok(())
}
