//! Conversion legality checks

use crate::error::ConvertError;
use crate::Unit;

/// Placeholder printed for a unit phrase that matched nothing
const UNKNOWN: &str = "???";

/// Check that a conversion is legal and hand back the resolved unit pair.
///
/// Checks run in order: both units must resolve, categories must match, and
/// the value must be strictly positive unless the input unit allows
/// otherwise. Only the input unit's sign policy is consulted.
pub fn validate<'a>(
    value: f64,
    input: Option<&'a Unit>,
    output: Option<&'a Unit>,
) -> Result<(&'a Unit, &'a Unit), ConvertError> {
    let (input, output) = match (input, output) {
        (Some(input), Some(output)) => (input, output),
        _ => {
            return Err(ConvertError::UnresolvedUnit {
                from: plural_or_unknown(input),
                to: plural_or_unknown(output),
            });
        }
    };

    if !input.is_compatible(output) {
        return Err(ConvertError::CategoryMismatch {
            from: input.plural().to_string(),
            to: output.plural().to_string(),
        });
    }

    // Zero counts as a violation: quantities must be strictly positive
    if value <= 0.0 && !input.allows_negative {
        return Err(ConvertError::NegativeValue { category: input.category });
    }

    Ok((input, output))
}

fn plural_or_unknown(unit: Option<&Unit>) -> String {
    match unit {
        Some(unit) => unit.plural().to_string(),
        None => UNKNOWN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CATALOG;

    fn unit(name: &str) -> &'static Unit {
        CATALOG.resolve(name).unwrap()
    }

    #[test]
    fn test_allows_same_category_positive_value() {
        let (input, output) = validate(5.0, Some(unit("g")), Some(unit("kg"))).unwrap();
        assert_eq!(input.singular(), "gram");
        assert_eq!(output.singular(), "kilogram");
    }

    #[test]
    fn test_denies_unresolved_input() {
        let err = validate(5.0, None, Some(unit("kg"))).unwrap_err();
        assert_eq!(err.to_string(), "Conversion from ??? to kilograms is impossible");
    }

    #[test]
    fn test_denies_unresolved_output() {
        let err = validate(5.0, Some(unit("g")), None).unwrap_err();
        assert_eq!(err.to_string(), "Conversion from grams to ??? is impossible");
    }

    #[test]
    fn test_denies_both_unresolved() {
        let err = validate(5.0, None, None).unwrap_err();
        assert_eq!(err.to_string(), "Conversion from ??? to ??? is impossible");
    }

    #[test]
    fn test_denies_category_mismatch() {
        let err = validate(10.0, Some(unit("g")), Some(unit("m"))).unwrap_err();
        assert_eq!(err.to_string(), "Conversion from grams to meters is impossible");
    }

    #[test]
    fn test_denies_negative_weight() {
        let err = validate(-5.0, Some(unit("g")), Some(unit("kg"))).unwrap_err();
        assert_eq!(err.to_string(), "Weight shouldn't be negative");
    }

    #[test]
    fn test_denies_zero_length() {
        let err = validate(0.0, Some(unit("m")), Some(unit("ft"))).unwrap_err();
        assert_eq!(err.to_string(), "Length shouldn't be negative");
    }

    #[test]
    fn test_allows_negative_temperature() {
        assert!(validate(-40.0, Some(unit("c")), Some(unit("f"))).is_ok());
        assert!(validate(0.0, Some(unit("k")), Some(unit("c"))).is_ok());
    }

    #[test]
    fn test_unresolved_wins_over_sign_check() {
        let err = validate(-5.0, Some(unit("g")), None).unwrap_err();
        assert_eq!(err.to_string(), "Conversion from grams to ??? is impossible");
    }
}
