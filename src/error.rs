//! Error types for rule-set construction.

use thiserror::Error;

/// Errors raised while assembling a [`RuleSet`](crate::rules::RuleSet).
///
/// Selection and tagging never fail for a well-formed rule set; these
/// errors only describe configuration defects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurateError {
    /// Two rules were registered under the same name.
    #[error("duplicate rule name: {0:?}")]
    DuplicateRule(String),

    /// A bound predicate was built with parameters it cannot honor.
    #[error("invalid bound {bound} on rule {rule:?}: {reason}")]
    InvalidBound {
        rule: String,
        bound: String,
        reason: String,
    },
}

/// Result alias for fallible rule-set operations.
pub type Result<T> = std::result::Result<T, CurateError>;
