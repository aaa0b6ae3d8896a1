//! `ptax` binary.
//!
//! ```text
//! PTAX_ADDR=127.0.0.1:8080 RUST_LOG=ptax=debug ptax
//! ```

use ptax::{Config, Server, app, logging};

#[tokio::main]
async fn main() -> Result<(), ptax::Error> {
    let config = Config::from_env()?;
    logging::init(&config.log_filter)?;

    Server::bind(config.addr).serve(app()).await
}
