//! Error types.
//!
//! Two families, kept apart on purpose:
//!
//! - [`InputError`] is a client mistake. It never escapes a handler; the
//!   endpoint turns it into a `400` with `{"error": "<Display text>"}`.
//! - [`Error`] is an infrastructure failure (binding a port, bad
//!   configuration, installing the log sink). Only `main` sees these.

use thiserror::Error;

use crate::config::ConfigError;

/// The error type returned by the service's fallible startup and I/O paths.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

/// Rejected `/ptax` query input.
///
/// The `Display` text of each variant is the exact message sent to the
/// client, so changing one is a wire-format change.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum InputError {
    /// `value` absent or empty.
    #[error("No value provided")]
    MissingValue,

    /// `value` is not a decimal number.
    #[error("Bad value provided")]
    InvalidValue,

    /// `value` outside `[1e3, 1e12]`, or not finite.
    #[error("Value out of range")]
    ValueOutOfRange,

    /// A non-empty `address` with no two-letter uppercase run in it.
    #[error("Please include two-character state (e.g., CA) in address.")]
    MalformedAddress,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_messages_are_the_wire_messages() {
        assert_eq!(InputError::MissingValue.to_string(), "No value provided");
        assert_eq!(InputError::InvalidValue.to_string(), "Bad value provided");
        assert_eq!(InputError::ValueOutOfRange.to_string(), "Value out of range");
        assert_eq!(
            InputError::MalformedAddress.to_string(),
            "Please include two-character state (e.g., CA) in address."
        );
    }

    #[test]
    fn io_errors_convert_and_keep_their_source() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let err = Error::from(io);
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "io: port taken");
        assert!(std::error::Error::source(&err).is_some());
    }
}
