//! Standalone conversion and comparison helpers for callers working with
//! bare numbers instead of [`Quantity`] values.

use gauge_unit::Unit;

use crate::{Quantity, QuantityError};

/// Tolerance for [`almost_equal`] comparisons.
const TOLERANCE: f64 = 1e-6;

/// Converts `value` from one unit to another, rounding the result to the
/// domain's tolerance grid.
///
/// Converting a unit to itself returns `value` unchanged (after
/// validation) with no rounding applied.
///
/// ```
/// use gauge_quantity::convert;
/// use gauge_unit::LengthUnit;
///
/// let feet = convert(12.0, LengthUnit::Inches, LengthUnit::Feet).expect("finite value");
///
/// assert!((feet - 1.0).abs() < 1e-6);
/// ```
///
/// # Errors
///
/// Returns [`QuantityError::MissingUnit`] if `from` is absent,
/// [`QuantityError::MissingTargetUnit`] if `to` is absent, and
/// [`QuantityError::NonFiniteValue`] if `value` is NaN or infinite.
pub fn convert<U: Unit>(
    value: f64,
    from: impl Into<Option<U>>,
    to: impl Into<Option<U>>,
) -> Result<f64, QuantityError> {
    let Some(from) = from.into() else {
        return Err(QuantityError::MissingUnit);
    };
    let Some(to) = to.into() else {
        return Err(QuantityError::MissingTargetUnit);
    };

    let source = Quantity::new(value, from)?;
    if from == to {
        return Ok(value);
    }

    let converted = source.convert_to(to)?;

    Ok(round_to_grid(converted.value(), U::EPSILON))
}

/// Whether two floating-point numbers differ by less than the tolerance.
///
/// Non-finite inputs are never almost equal.
#[must_use]
pub fn almost_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

/// Rounds `value` to the grid spanned by `epsilon` (six decimal places
/// for the standard 1e-6 epsilon).
fn round_to_grid(value: f64, epsilon: f64) -> f64 {
    (value / epsilon).round() * epsilon
}
