//! Length units, normalized to inches.

use std::{fmt, str::FromStr};

use crate::{ParseUnitError, Unit};

/// Length units with the inch as the base unit.
///
/// Singular and plural spellings are distinct variants with identical
/// factors; [`Unit::canonical`] collapses a plural to its singular
/// representative. Arithmetic never depends on the spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// The base unit.
    Inch,
    /// Alias spelling of [`Self::Inch`].
    Inches,
    /// 1 ft = 12 in.
    Foot,
    /// Alias spelling of [`Self::Foot`].
    Feet,
    /// 1 yd = 36 in.
    Yard,
    /// Alias spelling of [`Self::Yard`].
    Yards,
    /// 1 cm = 1/2.54 in.
    Centimeter,
    /// Alias spelling of [`Self::Centimeter`].
    Centimeters,
}

impl Unit for LengthUnit {
    const BASE: Self = Self::Inch;

    const ALL: &'static [Self] = &[
        Self::Inch,
        Self::Inches,
        Self::Foot,
        Self::Feet,
        Self::Yard,
        Self::Yards,
        Self::Centimeter,
        Self::Centimeters,
    ];

    const EPSILON: f64 = 1e-6;

    fn factor(self) -> f64 {
        match self {
            Self::Inch | Self::Inches => 1.0,
            Self::Foot | Self::Feet => 12.0,
            Self::Yard | Self::Yards => 36.0,
            Self::Centimeter | Self::Centimeters => 0.393_700_787_4,
        }
    }

    fn canonical(self) -> Self {
        match self {
            Self::Inch | Self::Inches => Self::Inch,
            Self::Foot | Self::Feet => Self::Foot,
            Self::Yard | Self::Yards => Self::Yard,
            Self::Centimeter | Self::Centimeters => Self::Centimeter,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Inch => "inch",
            Self::Inches => "inches",
            Self::Foot => "foot",
            Self::Feet => "feet",
            Self::Yard => "yard",
            Self::Yards => "yards",
            Self::Centimeter => "centimeter",
            Self::Centimeters => "centimeters",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lenient name lookup: trims whitespace, ignores case, and accepts
/// singular, plural, and British spellings plus common abbreviations.
/// Resolves to the canonical variant for each physical unit.
impl FromStr for LengthUnit {
    type Err = ParseUnitError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim().to_lowercase().as_str() {
            "inch" | "inches" | "in" => Ok(Self::Inch),
            "foot" | "feet" | "ft" => Ok(Self::Foot),
            "yard" | "yards" | "yd" => Ok(Self::Yard),
            "centimeter" | "centimeters" | "centimetre" | "centimetres" | "cm" | "cms" => {
                Ok(Self::Centimeter)
            }
            _ => Err(ParseUnitError::new(text, "length")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod factor_tests {
        use super::*;

        fn approx(expected: f64, actual: f64) {
            assert!(
                (expected - actual).abs() < 1e-9,
                "expected {expected}, got {actual}"
            );
        }

        #[test]
        fn test_inch_is_base() {
            approx(1.0, LengthUnit::Inch.factor());
            approx(1.0, LengthUnit::Inches.factor());
            assert!(LengthUnit::Inch.is_base());
            assert!(LengthUnit::Inches.is_base());
            assert_eq!(LengthUnit::BASE, LengthUnit::Inch);
        }

        #[test]
        fn test_foot_factor_is_twelve() {
            approx(12.0, LengthUnit::Foot.factor());
            approx(12.0, LengthUnit::Feet.factor());
            assert!(!LengthUnit::Foot.is_base());
        }

        #[test]
        fn test_yard_factor_is_thirty_six() {
            approx(36.0, LengthUnit::Yard.factor());
            approx(36.0, LengthUnit::Yards.factor());
        }

        #[test]
        fn test_centimeter_factor_is_inverse_of_two_point_five_four() {
            approx(0.393_700_787_4, LengthUnit::Centimeter.factor());
            approx(0.393_700_787_4, LengthUnit::Centimeters.factor());
        }

        #[test]
        fn test_to_base_converts_to_inches() {
            approx(12.0, LengthUnit::Feet.to_base(1.0));
            approx(24.0, LengthUnit::Foot.to_base(2.0));
            approx(36.0, LengthUnit::Yards.to_base(1.0));
            approx(12.0, LengthUnit::Inches.to_base(12.0));
        }

        #[test]
        fn test_thirty_point_four_eight_centimeters_is_about_twelve_inches() {
            assert!((LengthUnit::Centimeters.to_base(30.48) - 12.0).abs() < 1e-6);
        }

        #[test]
        fn test_from_base_converts_from_inches() {
            approx(1.0, LengthUnit::Feet.from_base(12.0));
            approx(2.5, LengthUnit::Foot.from_base(30.0));
            approx(1.0, LengthUnit::Yard.from_base(36.0));
        }

        #[test]
        fn test_base_round_trip_over_all_variants() {
            for unit in LengthUnit::ALL {
                let back = unit.from_base(unit.to_base(7.25));
                assert!((back - 7.25).abs() < 1e-9, "round trip failed for {unit}");
            }
        }
    }

    mod canonical_tests {
        use super::*;

        #[test]
        fn test_plural_collapses_to_singular() {
            assert_eq!(LengthUnit::Inches.canonical(), LengthUnit::Inch);
            assert_eq!(LengthUnit::Feet.canonical(), LengthUnit::Foot);
            assert_eq!(LengthUnit::Yards.canonical(), LengthUnit::Yard);
            assert_eq!(LengthUnit::Centimeters.canonical(), LengthUnit::Centimeter);
        }

        #[test]
        fn test_canonical_is_idempotent() {
            for unit in LengthUnit::ALL {
                assert_eq!(unit.canonical(), unit.canonical().canonical());
            }
        }

        #[test]
        fn test_aliases_share_their_canonical_factor() {
            for unit in LengthUnit::ALL {
                assert!((unit.factor() - unit.canonical().factor()).abs() < f64::EPSILON);
            }
        }
    }

    mod parse_tests {
        use super::*;

        #[test]
        fn test_accepts_singular_plural_and_abbreviations() {
            assert_eq!("inch".parse(), Ok(LengthUnit::Inch));
            assert_eq!("inches".parse(), Ok(LengthUnit::Inch));
            assert_eq!("in".parse(), Ok(LengthUnit::Inch));
            assert_eq!("foot".parse(), Ok(LengthUnit::Foot));
            assert_eq!("feet".parse(), Ok(LengthUnit::Foot));
            assert_eq!("ft".parse(), Ok(LengthUnit::Foot));
            assert_eq!("yard".parse(), Ok(LengthUnit::Yard));
            assert_eq!("yd".parse(), Ok(LengthUnit::Yard));
            assert_eq!("cm".parse(), Ok(LengthUnit::Centimeter));
            assert_eq!("cms".parse(), Ok(LengthUnit::Centimeter));
        }

        #[test]
        fn test_accepts_british_spellings() {
            assert_eq!("centimetre".parse(), Ok(LengthUnit::Centimeter));
            assert_eq!("centimetres".parse(), Ok(LengthUnit::Centimeter));
        }

        #[test]
        fn test_trims_whitespace_and_ignores_case() {
            assert_eq!("  Feet ".parse(), Ok(LengthUnit::Foot));
            assert_eq!("INCHES".parse(), Ok(LengthUnit::Inch));
            assert_eq!("Yard".parse(), Ok(LengthUnit::Yard));
        }

        #[test]
        fn test_rejects_unknown_text() {
            let error = "furlong"
                .parse::<LengthUnit>()
                .expect_err("should reject unknown unit text");

            assert_eq!(error.text(), "furlong");
            assert_eq!(error.to_string(), "unknown length unit: \"furlong\"");
        }

        #[test]
        fn test_rejects_empty_text() {
            assert!("".parse::<LengthUnit>().is_err());
            assert!("   ".parse::<LengthUnit>().is_err());
        }
    }

    mod display_tests {
        use super::*;

        #[test]
        fn test_renders_lowercase_name() {
            assert_eq!(LengthUnit::Foot.to_string(), "foot");
            assert_eq!(LengthUnit::Inches.to_string(), "inches");
            assert_eq!(LengthUnit::Centimeter.to_string(), "centimeter");
        }
    }
}
