//! Log sink installation.
//!
//! The library only emits `tracing` events; the binary decides where they
//! go. Call [`init`] once, before the server starts.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::parse_filter;
use crate::error::Error;

/// Installs a global fmt subscriber filtered by `directives`
/// (`RUST_LOG` syntax, e.g. `info` or `ptax=debug,hyper=warn`).
///
/// Fails if the directives do not parse or a global subscriber is already set.
pub fn init(directives: &str) -> Result<(), Error> {
    let filter = parse_filter(directives)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()?;
    Ok(())
}
