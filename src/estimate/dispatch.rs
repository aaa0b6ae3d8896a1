//! Calculator selection.

use tracing::warn;

use super::calculator::{CalculationResult, Calculator};
use crate::error::InputError;

/// Picks the calculator for a request.
///
/// - no address: national average
/// - address without a state code: [`InputError::MalformedAddress`]
/// - state code with no registered calculator: national average, logged at
///   `WARN` because the front end should only send served markets
/// - registered state code: that state's calculator
pub fn select(address: Option<&str>, state: Option<&str>) -> Result<Calculator, InputError> {
    match (address.filter(|a| !a.is_empty()), state) {
        (None, _) => Ok(Calculator::National),
        (Some(_), None) => Err(InputError::MalformedAddress),
        (Some(_), Some(code)) => Ok(Calculator::for_state(code).unwrap_or_else(|| {
            warn!(state = code, "state outside served markets, using national average");
            Calculator::National
        })),
    }
}

/// Selects a calculator and runs it on `value`.
pub fn dispatch(
    address: Option<&str>,
    state: Option<&str>,
    value: f64,
) -> Result<CalculationResult, InputError> {
    Ok(select(address, state)?.compute(address, value))
}
