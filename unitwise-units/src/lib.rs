//! Unitwise - interactive unit conversion
//!
//! Parses requests like "10 meters to feet", validates them against a fixed
//! catalog, and converts between units of the same category.
//!
//! Categories:
//! - Weight (g, kg, mg, lb, oz) - base unit gram
//! - Length (m, km, cm, mm, mi, yd, ft, in) - base unit meter
//! - Temperature (C, F, K) - pivot unit Celsius
//!
//! The catalog is immutable process-wide state; everything else is pure
//! functions over it.

mod unit;
mod catalog;
mod parse;
mod error;
mod validate;
mod convert;

pub use unit::{Category, Unit};
pub use catalog::{UnitCatalog, CATALOG};
pub use parse::{parse_request, ParsedRequest};
pub use error::ConvertError;
pub use validate::validate;
pub use convert::{convert, fmt_value, render_conversion};

/// Process one input line end to end: parse, resolve, validate, convert.
///
/// Returns the printable result line, or an error whose `Display` text is
/// the message to show the user.
pub fn convert_line(line: &str) -> Result<String, ConvertError> {
    let request = parse_request(line)?;
    let input = CATALOG.resolve(&request.input_unit);
    let output = CATALOG.resolve(&request.output_unit);
    let (input, output) = validate(request.value, input, output)?;
    let result = convert(request.value, input, output);
    Ok(render_conversion(request.value, input, result, output))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_request() {
        let message = convert_line("1 kg to g").unwrap();
        assert_eq!(message, "1.0 kilogram is 1000.0 grams");
    }

    #[test]
    fn test_temperature_request_with_degree_phrase() {
        let message = convert_line("5 degree Celsius to fahrenheit").unwrap();
        assert_eq!(message, "5.0 degrees Celsius is 41.0 degrees Fahrenheit");
    }

    #[test]
    fn test_temperature_request_zero_celsius() {
        let message = convert_line("0 celsius to fahrenheit").unwrap();
        assert_eq!(message, "0.0 degrees Celsius is 32.0 degrees Fahrenheit");
    }

    #[test]
    fn test_mixed_case_unit_names() {
        let message = convert_line("1 KG to Grams").unwrap();
        assert_eq!(message, "1.0 kilogram is 1000.0 grams");
    }

    #[test]
    fn test_parse_failure() {
        let err = convert_line("abc meters to feet").unwrap_err();
        assert_eq!(err, ConvertError::Parse);
        assert_eq!(err.to_string(), "Parse error");
    }

    #[test]
    fn test_unknown_unit() {
        let err = convert_line("10 grams to bananas").unwrap_err();
        assert_eq!(err.to_string(), "Conversion from grams to ??? is impossible");
    }

    #[test]
    fn test_category_mismatch() {
        let err = convert_line("10 gram to meter").unwrap_err();
        assert_eq!(err.to_string(), "Conversion from grams to meters is impossible");
    }

    #[test]
    fn test_negative_weight_denied() {
        let err = convert_line("-5 gram to kilogram").unwrap_err();
        assert_eq!(err.to_string(), "Weight shouldn't be negative");
    }

    #[test]
    fn test_negative_temperature_allowed() {
        let message = convert_line("-40 celsius to fahrenheit").unwrap();
        assert_eq!(message, "-40.0 degrees Celsius is -40.0 degrees Fahrenheit");
    }
}
