//! Category-specific conversion arithmetic and result rendering

use crate::{Category, Unit};

/// Convert a value between two units of the same category.
///
/// Weight and length are pure scaling through the category base unit.
/// Temperature pivots through Celsius: strip the input unit's offset and
/// scale in, then scale out and apply the output unit's offset.
pub fn convert(value: f64, input: &Unit, output: &Unit) -> f64 {
    match input.category {
        Category::Weight | Category::Length => value * (input.scale / output.scale),
        Category::Temperature => {
            let celsius = (value - input.offset) * input.scale;
            celsius / output.scale + output.offset
        }
    }
}

/// Render the result line: `{value} {unit word} is {result} {unit word}`.
///
/// Each unit word is singular when its value is exactly 1.0, plural otherwise.
pub fn render_conversion(value: f64, input: &Unit, result: f64, output: &Unit) -> String {
    format!(
        "{} {} is {} {}",
        fmt_value(value),
        input.word_for(value),
        fmt_value(result),
        output.word_for(result),
    )
}

/// Format a value keeping one fractional digit for whole numbers ("1.0",
/// "32.0"), the default shortest representation otherwise.
pub fn fmt_value(value: f64) -> String {
    if value.is_finite() && value == value.trunc() && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
