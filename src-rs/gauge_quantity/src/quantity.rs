use std::{
    fmt,
    hash::{Hash, Hasher},
};

use gauge_unit::{LengthUnit, Unit, WeightUnit};

use crate::QuantityError;

/// A length measurement.
pub type Length = Quantity<LengthUnit>;

/// A weight measurement.
pub type Weight = Quantity<WeightUnit>;

/// An immutable numeric value tagged with a unit of measure.
///
/// All arithmetic normalizes through the unit set's base unit, so values
/// stored in different units compare and combine directly:
///
/// ```
/// use gauge_quantity::Length;
/// use gauge_unit::LengthUnit;
///
/// let feet = Length::new(1.0, LengthUnit::Foot).expect("finite value");
/// let inches = Length::new(12.0, LengthUnit::Inches).expect("finite value");
///
/// assert_eq!(feet, inches);
/// ```
///
/// Equality is tolerant: two quantities are equal when their base-unit
/// values differ by less than the domain epsilon, regardless of stored
/// unit. The relation is reflexive and symmetric but only approximately
/// transitive (epsilon chains spanning many hops can break it), so no
/// [`Eq`] impl is provided.
///
/// Arguments that the underlying model treats as optional (the unit at
/// construction, the second operand and target unit of an addition) are
/// taken as `impl Into<Option<_>>`: plain call sites pass the value
/// directly, while boundary code assembling input from free text can pass
/// `None` and get the matching [`QuantityError`] kind back.
#[derive(Debug, Clone, Copy)]
pub struct Quantity<U: Unit> {
    value: f64,
    unit: U,
}

impl<U: Unit> Quantity<U> {
    /// Creates a quantity from a value and a unit.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::MissingUnit`] if `unit` is absent, and
    /// [`QuantityError::NonFiniteValue`] if `value` is NaN or infinite.
    pub fn new(value: f64, unit: impl Into<Option<U>>) -> Result<Self, QuantityError> {
        let Some(unit) = unit.into() else {
            return Err(QuantityError::MissingUnit);
        };

        Self::finite(value, unit)
    }

    /// Wraps `value` after checking that it is finite.
    fn finite(value: f64, unit: U) -> Result<Self, QuantityError> {
        if value.is_finite() {
            Ok(Self { value, unit })
        } else {
            Err(QuantityError::NonFiniteValue { value })
        }
    }

    /// The numeric value, expressed in [`Self::unit`].
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The unit the value is expressed in.
    #[must_use]
    pub const fn unit(&self) -> U {
        self.unit
    }

    /// The value normalized to the unit set's base unit.
    #[must_use]
    pub fn to_base(&self) -> f64 {
        self.unit.to_base(self.value)
    }

    /// Converts this quantity to `target`, returning a new quantity.
    ///
    /// Converting to the unit the value is already expressed in returns
    /// the quantity unchanged. A round trip through another unit
    /// reproduces the original value within the domain epsilon.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::MissingTargetUnit`] if `target` is absent,
    /// and [`QuantityError::NonFiniteValue`] if the converted value
    /// overflows the finite range.
    pub fn convert_to(&self, target: impl Into<Option<U>>) -> Result<Self, QuantityError> {
        let Some(target) = target.into() else {
            return Err(QuantityError::MissingTargetUnit);
        };

        if self.unit == target {
            return Ok(*self);
        }

        Self::finite(target.from_base(self.to_base()), target)
    }

    /// Tolerant equality that treats an absent operand as "not equal"
    /// rather than as an error.
    #[must_use]
    pub fn same_as(&self, other: impl Into<Option<Self>>) -> bool {
        other
            .into()
            .is_some_and(|other| (self.to_base() - other.to_base()).abs() < U::EPSILON)
    }

    /// Adds `other` to this quantity, expressing the sum in **this**
    /// quantity's unit (the left-operand-unit rule).
    ///
    /// The two orderings of an addition therefore produce results stored
    /// in different units, but the results denote the same measure and
    /// are equal under tolerant equality.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::MissingOperand`] if `other` is absent,
    /// and [`QuantityError::NonFiniteValue`] if the sum overflows the
    /// finite range.
    #[expect(
        clippy::should_implement_trait,
        reason = "addition is fallible and unit-aware, so the std operator trait does not fit"
    )]
    pub fn add(&self, other: impl Into<Option<Self>>) -> Result<Self, QuantityError> {
        self.add_into(other, self.unit)
    }

    /// Adds `other` to this quantity, expressing the sum in the
    /// caller-supplied `target` unit regardless of either operand's unit.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::MissingOperand`] if `other` is absent,
    /// [`QuantityError::MissingTargetUnit`] if `target` is absent, and
    /// [`QuantityError::NonFiniteValue`] if the sum overflows the finite
    /// range.
    pub fn add_into(
        &self,
        other: impl Into<Option<Self>>,
        target: impl Into<Option<U>>,
    ) -> Result<Self, QuantityError> {
        let Some(other) = other.into() else {
            return Err(QuantityError::MissingOperand);
        };
        let Some(target) = target.into() else {
            return Err(QuantityError::MissingTargetUnit);
        };

        let sum = self.to_base() + other.to_base();

        Self::finite(target.from_base(sum), target)
    }
}

impl<U: Unit> PartialEq for Quantity<U> {
    /// Tolerant equality: base-normalized values within the domain
    /// epsilon are equal regardless of stored unit.
    fn eq(&self, other: &Self) -> bool {
        (self.to_base() - other.to_base()).abs() < U::EPSILON
    }
}

impl<U: Unit> Hash for Quantity<U> {
    /// Hashes the base value rounded to the epsilon grid, so quantities
    /// that are equal under the tolerance relation hash identically.
    fn hash<H: Hasher>(&self, state: &mut H) {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "the saturating cast only coarsens hashing beyond the epsilon grid's range"
        )]
        let grid = (self.to_base() / U::EPSILON).round() as i64;

        grid.hash(state);
    }
}

impl<U: Unit> fmt::Display for Quantity<U> {
    /// Renders as `"<value> <unit-name>"`, e.g. `12 inches`. A display
    /// form, not a round-trippable serialization.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
