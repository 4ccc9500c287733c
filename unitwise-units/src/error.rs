//! Conversion errors
//!
//! Every failure in the pipeline is a printable value. The REPL shows the
//! `Display` text and keeps going; nothing here aborts the process.

use thiserror::Error;
use crate::Category;

/// Everything that can go wrong between reading a line and printing a result
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// Input line does not match any accepted shape
    #[error("Parse error")]
    Parse,

    /// One or both unit phrases matched no catalog spelling.
    /// The unresolved side carries "???".
    #[error("Conversion from {from} to {to} is impossible")]
    UnresolvedUnit { from: String, to: String },

    /// Both units resolved, but to different categories
    #[error("Conversion from {from} to {to} is impossible")]
    CategoryMismatch { from: String, to: String },

    /// Non-positive value for a category that disallows it
    #[error("{category} shouldn't be negative")]
    NegativeValue { category: Category },
}
