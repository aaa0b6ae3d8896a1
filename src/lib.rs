//! # ptax
//!
//! Annual property tax estimates over HTTP.
//!
//! One endpoint, `GET /ptax`, takes a property `value` and an optional
//! free-text `address`. A two-letter state code found in the address picks a
//! flat-rate calculator (California, Colorado, Washington DC); anything else
//! gets the national average.
//!
//! ```text
//! $ curl 'localhost:8080/ptax?value=300000&address=Denver,+CO'
//! {"property_tax_amount":"1710.00","property_tax_effective_rate":0.0057,
//!  "information":"Based on the Colorado statewide average property tax rate"}
//! ```
//!
//! The HTTP layer is a small hyper server: a `matchit` router, async
//! handlers, and graceful shutdown on SIGTERM / Ctrl-C. TLS, rate limiting
//! and body limits belong to the reverse proxy in front of it.
//!
//! ## Embedding
//!
//! ```rust,no_run
//! use ptax::{Config, Server, app};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ptax::Error> {
//!     let config = Config::default();
//!     Server::bind(config.addr).serve(app()).await
//! }
//! ```

mod endpoint;
mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod config;
pub mod estimate;
pub mod health;
pub mod logging;

pub use config::Config;
pub use endpoint::{app, ptax};
pub use error::{Error, InputError};
pub use handler::Handler;
pub use method::Method;
pub use request::Request;
pub use response::{IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use status::Status;
