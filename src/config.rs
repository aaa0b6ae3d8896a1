//! Process configuration.
//!
//! Read once at startup from the environment. Every variable is optional;
//! the defaults reproduce a bare `ptax` listening on port 8080 and logging at
//! `info`.
//!
//! | Variable    | Default        |
//! |-------------|----------------|
//! | `PTAX_ADDR` | `0.0.0.0:8080` |
//! | `RUST_LOG`  | `info`         |

use std::net::SocketAddr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

pub const ADDR_VAR: &str = "PTAX_ADDR";
pub const LOG_VAR: &str = "RUST_LOG";

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime settings for the `ptax` binary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Socket address the server binds.
    pub addr: SocketAddr,
    /// [`EnvFilter`] directives, already validated.
    pub log_filter: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a socket address")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} is not a valid log filter: {source}")]
    InvalidLogFilter {
        var: &'static str,
        #[source]
        source: ParseError,
    },
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value. Unset variables fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_owned());
        let addr: SocketAddr = raw_addr.parse().map_err(|_| ConfigError::InvalidAddr {
            var: ADDR_VAR,
            value: raw_addr.clone(),
        })?;

        let log_filter = lookup(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());
        parse_filter(&log_filter)?;

        Ok(Self { addr, log_filter })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

pub(crate) fn parse_filter(directives: &str) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(directives).map_err(|source| ConfigError::InvalidLogFilter {
        var: LOG_VAR,
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_listen_on_8080() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("PTAX_ADDR", "127.0.0.1:9000"),
            ("RUST_LOG", "ptax=debug,hyper=warn"),
        ]))
        .unwrap();
        assert_eq!(config.addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_filter, "ptax=debug,hyper=warn");
    }

    #[test]
    fn bad_address_is_reported_with_its_value() {
        let err = Config::from_lookup(lookup(&[("PTAX_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr { ref value, .. } if value == "localhost"));
        assert_eq!(err.to_string(), r#"PTAX_ADDR="localhost" is not a socket address"#);
    }

    #[test]
    fn bad_log_filter_is_rejected() {
        let err = Config::from_lookup(lookup(&[("RUST_LOG", "ptax=notalevel")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogFilter { .. }));
    }
}
