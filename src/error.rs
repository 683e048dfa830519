//! Error types for stat resolution and formula evaluation.
//!
//! Stat aggregation has no fatal error class: hand evaluation always yields
//! a classification and aggregation always yields complete derived stats.
//! The only stat-side failures are table lookups for selection names that
//! the supplied attribute snapshot does not contain. Formula evaluation has
//! its own two-variant taxonomy, surfaced to the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during stat resolution.
///
/// All variants mean the same thing: the caller selected a name that the
/// current [`AttributeTable`](crate::AttributeTable) snapshot does not know.
/// Malformed equipment slots are *not* an error anywhere in this crate;
/// they are silently excluded from hand evaluation.
///
/// # Examples
///
/// ```rust
/// use grimhand::StatError;
///
/// let err = StatError::UnknownRace("Lizardfolk".into());
/// println!("{}", err); // "unknown race: Lizardfolk"
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatError {
    /// The character's race has no entry in the attribute table.
    #[error("unknown race: {0}")]
    UnknownRace(String),

    /// The character's class has no entry in the attribute table.
    #[error("unknown class: {0}")]
    UnknownClass(String),

    /// The character's affinity has no entry in the attribute table.
    #[error("unknown affinity: {0}")]
    UnknownAffinity(String),
}

/// Errors that can occur during formula evaluation.
///
/// The two variants are deliberately distinct so the display layer can
/// tell "you typed something invalid" apart from "your formula divided by
/// zero".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormulaError {
    /// The input does not parse as a restricted arithmetic expression over
    /// the whitelisted variables.
    ///
    /// Raised for unknown identifiers, assignments, and any construct
    /// beyond numeric literals, variables, `+ - * / ( )`.
    #[error("syntax error at offset {position}: {message}")]
    Syntax {
        /// Byte offset into the formula text where parsing failed.
        position: usize,
        /// What the parser expected or rejected.
        message: String,
    },

    /// The expression parsed successfully but evaluated to a non-finite
    /// value (e.g. division by zero).
    #[error("formula did not produce a finite value")]
    Result,
}

impl FormulaError {
    /// Classify this error for external consumers.
    pub fn kind(&self) -> FormulaErrorKind {
        match self {
            FormulaError::Syntax { .. } => FormulaErrorKind::Syntax,
            FormulaError::Result => FormulaErrorKind::Result,
        }
    }
}

/// The coarse error classification exposed to display layers.
///
/// Serializes as `"syntax"` / `"result"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormulaErrorKind {
    /// Input failed to parse.
    Syntax,
    /// Input parsed but produced a non-finite value.
    Result,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_error_display() {
        let err = StatError::UnknownRace("Lizardfolk".into());
        assert!(err.to_string().contains("Lizardfolk"));
        assert!(err.to_string().contains("race"));
    }

    #[test]
    fn test_formula_error_kinds() {
        let syntax = FormulaError::Syntax {
            position: 3,
            message: "unexpected character `=`".into(),
        };
        assert_eq!(syntax.kind(), FormulaErrorKind::Syntax);
        assert_eq!(FormulaError::Result.kind(), FormulaErrorKind::Result);
    }

    #[test]
    fn test_formula_error_kind_serialization() {
        let json = serde_json::to_string(&FormulaErrorKind::Syntax).unwrap();
        assert_eq!(json, "\"syntax\"");
        let json = serde_json::to_string(&FormulaErrorKind::Result).unwrap();
        assert_eq!(json, "\"result\"");
    }
}
