//! `value` parameter validation.

use std::borrow::Cow;

use crate::error::InputError;

/// Smallest property value accepted, inclusive.
pub const MIN_VALUE: f64 = 1e3;
/// Largest property value accepted, inclusive.
pub const MAX_VALUE: f64 = 1e12;

/// Parses the raw `value` query parameter into a property value.
///
/// Surrounding whitespace is ignored, and single underscores between digits
/// are accepted as separators (`1_000_000`). The result is always finite and
/// within [`MIN_VALUE`]`..=`[`MAX_VALUE`].
pub fn parse_value(raw: Option<&str>) -> Result<f64, InputError> {
    let raw = raw.filter(|v| !v.is_empty()).ok_or(InputError::MissingValue)?;
    let digits = strip_digit_separators(raw.trim()).ok_or(InputError::InvalidValue)?;
    let value: f64 = digits.parse().map_err(|_| InputError::InvalidValue)?;

    // NaN fails `contains`, so it lands here too.
    if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
        return Err(InputError::ValueOutOfRange);
    }
    Ok(value)
}

/// Removes `_` separators. `None` if any `_` is not flanked by ASCII digits.
fn strip_digit_separators(raw: &str) -> Option<Cow<'_, str>> {
    if !raw.contains('_') {
        return Some(Cow::Borrowed(raw));
    }
    let bytes = raw.as_bytes();
    let digit_at = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);
    let separated = bytes
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == b'_')
        .all(|(i, _)| i > 0 && digit_at(i - 1) && digit_at(i + 1));
    separated.then(|| Cow::Owned(raw.replace('_', "")))
}
