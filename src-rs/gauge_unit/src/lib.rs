//! Unit definitions for the Gauge measurement library.
//!
//! Each measurement domain is a closed enumeration of units implementing
//! [`Unit`]: every variant carries a multiplicative factor to the domain's
//! base unit, and all cross-unit arithmetic normalizes through that base.
//! The layer is pure and stateless; validating the numbers fed into it is
//! the caller's concern.

mod error;
mod length;
mod weight;

use std::fmt;

pub use error::ParseUnitError;
pub use length::LengthUnit;
pub use weight::WeightUnit;

/// A closed set of units sharing a common base unit.
///
/// Implementations provide the variant set and the per-variant factor;
/// the base-unit conversion helpers are derived from the factor. Exactly
/// one canonical variant per domain is the base (factor 1.0), and factors
/// are never zero or negative.
pub trait Unit: Copy + PartialEq + fmt::Debug + fmt::Display + 'static {
    /// The canonical base variant that all values normalize to.
    const BASE: Self;

    /// Every variant of the unit set, alias spellings included.
    const ALL: &'static [Self];

    /// Comparison tolerance for values of this domain, in base units.
    const EPSILON: f64;

    /// The multiplicative factor to the base unit: 1 of this unit is
    /// `factor()` base units.
    #[must_use]
    fn factor(self) -> f64;

    /// Collapses alias spellings (e.g. plural variants) to a single
    /// representative variant per physical unit.
    ///
    /// This is for display and deduplication only. Arithmetic operates
    /// through [`Unit::factor`] and treats every spelling alike.
    #[must_use]
    fn canonical(self) -> Self;

    /// The lowercase display name of this variant.
    #[must_use]
    fn name(self) -> &'static str;

    /// Converts a value of this unit to the base unit.
    #[must_use]
    fn to_base(self, value: f64) -> f64 {
        value * self.factor()
    }

    /// Converts a base-unit value to this unit.
    #[must_use]
    fn from_base(self, base: f64) -> f64 {
        base / self.factor()
    }

    /// Whether this variant, or one of its aliases, is the base unit.
    #[must_use]
    fn is_base(self) -> bool {
        self.canonical() == Self::BASE
    }
}
