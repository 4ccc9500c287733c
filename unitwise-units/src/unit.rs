//! Unit representation with conversion factors

use std::fmt;
use serde::{Serialize, Deserialize};

/// Measurement category. Units are mutually convertible only within one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Weight,
    Length,
    Temperature,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Category::Weight => "Weight",
            Category::Length => "Length",
            Category::Temperature => "Temperature",
        };
        write!(f, "{}", word)
    }
}

/// A unit of measurement with its recognized spellings and conversion factors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Recognized spellings: abbreviation, singular, plural, then any extras
    pub spellings: Vec<String>,
    /// The measurement category this unit belongs to
    pub category: Category,
    /// Whether values in this unit may be zero or negative
    pub allows_negative: bool,
    /// Factor to the category base unit (gram, meter, Celsius)
    pub scale: f64,
    /// Offset for non-proportional units like temperature (Fahrenheit, Kelvin)
    pub offset: f64,
}

impl Unit {
    /// Create a unit with proportional conversion (no offset)
    pub fn new(spellings: &[&str], category: Category, allows_negative: bool, scale: f64) -> Self {
        Unit::with_offset(spellings, category, allows_negative, scale, 0.0)
    }

    /// Create a unit with an offset (temperature units)
    pub fn with_offset(
        spellings: &[&str],
        category: Category,
        allows_negative: bool,
        scale: f64,
        offset: f64,
    ) -> Self {
        Unit {
            spellings: spellings.iter().map(|s| s.to_string()).collect(),
            category,
            allows_negative,
            scale,
            offset,
        }
    }

    /// The short symbol (e.g. "kg")
    pub fn abbreviation(&self) -> &str {
        &self.spellings[0]
    }

    /// Singular word (e.g. "kilogram")
    pub fn singular(&self) -> &str {
        &self.spellings[1]
    }

    /// Canonical plural word (e.g. "kilograms")
    pub fn plural(&self) -> &str {
        &self.spellings[2]
    }

    /// Singular for a value of exactly 1.0, plural otherwise
    pub fn word_for(&self, value: f64) -> &str {
        if value == 1.0 {
            self.singular()
        } else {
            self.plural()
        }
    }

    /// Case-insensitive exact match against every recognized spelling
    pub fn matches(&self, name: &str) -> bool {
        self.spellings.iter().any(|s| s.eq_ignore_ascii_case(name))
    }

    /// Check if two units belong to the same category (can be converted)
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.category == other.category
    }

    /// Check if this unit has an offset (non-proportional conversion)
    pub fn has_offset(&self) -> bool {
        self.offset != 0.0
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}
