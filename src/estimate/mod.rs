//! Property tax estimation.
//!
//! The pipeline behind `GET /ptax`, in order:
//!
//! 1. [`parse_value`]: validate the property value
//! 2. [`state_code`]: pull a state code out of the address
//! 3. [`dispatch`]: pick one [`Calculator`] and run it
//!
//! Everything here is pure; the same input always gives the same result.

mod address;
mod calculator;
mod dispatch;
mod value;

pub use address::state_code;
pub use calculator::{CalculationResult, Calculator, EffectiveRate};
pub use dispatch::{dispatch, select};
pub use value::{MAX_VALUE, MIN_VALUE, parse_value};

use crate::error::InputError;

/// Estimates annual property tax from the raw `address` and `value` query
/// parameters. The value is validated before the address.
pub fn estimate(address: Option<&str>, value: Option<&str>) -> Result<CalculationResult, InputError> {
    let value = parse_value(value)?;
    let state = state_code(address)?;
    dispatch(address, state, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_errors_win_over_address_errors() {
        assert_eq!(estimate(Some("123 Main St"), None), Err(InputError::MissingValue));
        assert_eq!(estimate(Some("123 Main St"), Some("5")), Err(InputError::ValueOutOfRange));
        assert_eq!(
            estimate(Some("123 Main St"), Some("5000")),
            Err(InputError::MalformedAddress)
        );
    }

    #[test]
    fn state_only_address() {
        let result = estimate(Some("CO"), Some("300000")).unwrap();
        assert_eq!(result.property_tax_amount, "1710.00");
    }
}
