//! State code extraction from a free-text address.
//!
//! A first-match scan for two consecutive uppercase ASCII letters, anywhere
//! in the string. It does not look at word boundaries, so `"123 MAIN ST, CO"`
//! yields `"MA"`. Callers that need better should send just the state.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::InputError;

static STATE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[A-Z]{2}").expect("state code pattern is valid"));

/// Returns the state code found in `address`.
///
/// An absent or empty address has no state code and is not an error. A
/// non-empty address without one is [`InputError::MalformedAddress`].
pub fn state_code(address: Option<&str>) -> Result<Option<&str>, InputError> {
    match address.filter(|a| !a.is_empty()) {
        None => Ok(None),
        Some(address) => STATE_CODE
            .find(address)
            .map(|m| Some(m.as_str()))
            .ok_or(InputError::MalformedAddress),
    }
}
