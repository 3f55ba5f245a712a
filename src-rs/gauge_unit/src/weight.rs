//! Weight units, normalized to kilograms.

use std::{fmt, str::FromStr};

use crate::{ParseUnitError, Unit};

/// Weight units with the kilogram as the base unit.
///
/// This set has no alias spellings, so [`Unit::canonical`] is the
/// identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightUnit {
    /// The base unit.
    Kilogram,
    /// 1 g = 0.001 kg.
    Gram,
    /// 1 lb = 0.45359237 kg.
    Pound,
}

impl Unit for WeightUnit {
    const BASE: Self = Self::Kilogram;

    const ALL: &'static [Self] = &[Self::Kilogram, Self::Gram, Self::Pound];

    const EPSILON: f64 = 1e-6;

    fn factor(self) -> f64 {
        match self {
            Self::Kilogram => 1.0,
            Self::Gram => 0.001,
            Self::Pound => 0.453_592_37,
        }
    }

    fn canonical(self) -> Self {
        self
    }

    fn name(self) -> &'static str {
        match self {
            Self::Kilogram => "kilogram",
            Self::Gram => "gram",
            Self::Pound => "pound",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lenient name lookup: trims whitespace, ignores case, and accepts
/// singular and plural spellings plus common abbreviations.
impl FromStr for WeightUnit {
    type Err = ParseUnitError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim().to_lowercase().as_str() {
            "kilogram" | "kilograms" | "kg" | "kgs" => Ok(Self::Kilogram),
            "gram" | "grams" | "g" => Ok(Self::Gram),
            "pound" | "pounds" | "lb" | "lbs" => Ok(Self::Pound),
            _ => Err(ParseUnitError::new(text, "weight")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod factor_tests {
        use super::*;

        #[test]
        fn test_kilogram_is_base() {
            assert!((WeightUnit::Kilogram.factor() - 1.0).abs() < f64::EPSILON);
            assert!(WeightUnit::Kilogram.is_base());
            assert_eq!(WeightUnit::BASE, WeightUnit::Kilogram);
        }

        #[test]
        fn test_gram_factor() {
            assert!((WeightUnit::Gram.factor() - 0.001).abs() < 1e-12);
            assert!(!WeightUnit::Gram.is_base());
        }

        #[test]
        fn test_pound_factor() {
            assert!((WeightUnit::Pound.factor() - 0.453_592_37).abs() < 1e-12);
        }

        #[test]
        fn test_to_base_converts_to_kilograms() {
            assert!((WeightUnit::Gram.to_base(1000.0) - 1.0).abs() < 1e-9);
            assert!((WeightUnit::Pound.to_base(1.0) - 0.453_592_37).abs() < 1e-9);
        }

        #[test]
        fn test_base_round_trip_over_all_variants() {
            for unit in WeightUnit::ALL {
                let back = unit.from_base(unit.to_base(3.75));
                assert!((back - 3.75).abs() < 1e-9, "round trip failed for {unit}");
            }
        }
    }

    mod canonical_tests {
        use super::*;

        #[test]
        fn test_canonical_is_identity() {
            for unit in WeightUnit::ALL {
                assert_eq!(unit.canonical(), *unit);
            }
        }
    }

    mod parse_tests {
        use super::*;

        #[test]
        fn test_accepts_names_and_abbreviations() {
            assert_eq!("kilogram".parse(), Ok(WeightUnit::Kilogram));
            assert_eq!("kilograms".parse(), Ok(WeightUnit::Kilogram));
            assert_eq!("kg".parse(), Ok(WeightUnit::Kilogram));
            assert_eq!("gram".parse(), Ok(WeightUnit::Gram));
            assert_eq!("g".parse(), Ok(WeightUnit::Gram));
            assert_eq!("pound".parse(), Ok(WeightUnit::Pound));
            assert_eq!("lb".parse(), Ok(WeightUnit::Pound));
            assert_eq!("lbs".parse(), Ok(WeightUnit::Pound));
        }

        #[test]
        fn test_trims_whitespace_and_ignores_case() {
            assert_eq!(" KG ".parse(), Ok(WeightUnit::Kilogram));
            assert_eq!("Pounds".parse(), Ok(WeightUnit::Pound));
        }

        #[test]
        fn test_rejects_unknown_text() {
            let error = "stone"
                .parse::<WeightUnit>()
                .expect_err("should reject unknown unit text");

            assert_eq!(error.text(), "stone");
            assert_eq!(error.to_string(), "unknown weight unit: \"stone\"");
        }
    }

    mod display_tests {
        use super::*;

        #[test]
        fn test_renders_lowercase_name() {
            assert_eq!(WeightUnit::Kilogram.to_string(), "kilogram");
            assert_eq!(WeightUnit::Pound.to_string(), "pound");
        }
    }
}
