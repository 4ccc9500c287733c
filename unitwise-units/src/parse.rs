//! Request parsing - lines like "10 meters to feet"

use serde::{Serialize, Deserialize};
use crate::error::ConvertError;

/// A successfully parsed conversion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedRequest {
    /// The numeric value to convert
    pub value: f64,
    /// Lowercased input unit phrase, two-word phrases joined with one space
    pub input_unit: String,
    /// Lowercased output unit phrase
    pub output_unit: String,
}

/// Parse one input line into a conversion request.
///
/// Accepted shapes, classified by token count after splitting on single spaces:
/// - 4 tokens: `<value> <unit> to <unit>`
/// - 5 tokens: one side is a two-word phrase; the side is picked by whether
///   token 1 is "degree"/"degrees"
/// - 6 tokens: both sides are two-word phrases
///
/// The first token must be a finite number. The connective ("to") is consumed
/// by position and never checked.
pub fn parse_request(line: &str) -> Result<ParsedRequest, ConvertError> {
    let tokens: Vec<&str> = line.split(' ').collect();
    if !(4..=6).contains(&tokens.len()) {
        return Err(ConvertError::Parse);
    }

    let value: f64 = tokens[0].parse().map_err(|_| ConvertError::Parse)?;
    if !value.is_finite() {
        return Err(ConvertError::Parse);
    }

    let (input_unit, output_unit) = match tokens.len() {
        4 => (tokens[1].to_lowercase(), tokens[3].to_lowercase()),
        6 => (
            two_word_phrase(tokens[1], tokens[2]),
            two_word_phrase(tokens[4], tokens[5]),
        ),
        _ => {
            // 5 tokens: disambiguate by shape only, not by catalog lookup
            let first = tokens[1].to_lowercase();
            if first == "degree" || first == "degrees" {
                (two_word_phrase(tokens[1], tokens[2]), tokens[4].to_lowercase())
            } else {
                (first, two_word_phrase(tokens[3], tokens[4]))
            }
        }
    };

    Ok(ParsedRequest { value, input_unit, output_unit })
}

fn two_word_phrase(first: &str, second: &str) -> String {
    format!("{} {}", first.to_lowercase(), second.to_lowercase())
}
