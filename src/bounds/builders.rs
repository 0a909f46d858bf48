//! Built-in bound predicates.

use super::types::BoundPredicate;
use crate::error::{CurateError, Result};
use crate::rules::Value;
use std::collections::HashMap;
use std::fmt;

/// The built-in aggregate bounds.
///
/// Percentages are applied to the length of the sequence being checked,
/// rounded up, so the effective threshold grows as the selection grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// At most `n` truthy values.
    MaxCount(usize),

    /// At least `n` truthy values. Sequences shorter than `n` must be
    /// entirely truthy instead.
    MinCount(usize),

    /// At most `ceil(p * len)` truthy values.
    MaxPercentage(f64),

    /// At least `ceil(p * len)` truthy values, with the same short-sequence
    /// fallback as [`Bound::MinCount`].
    MinPercentage(f64),

    /// No single value repeated more than `n` times.
    MaxDuplication(usize),
}

/// Ensure `n` or fewer values are truthy.
pub fn max_count(n: usize) -> Bound {
    Bound::MaxCount(n)
}

/// Ensure `n` or more values are truthy, or every value when there are
/// fewer than `n`.
///
/// The fallback lets a selection bootstrap from zero items: a rule needing
/// three matches accepts one matching item, then two, then three.
pub fn min_count(n: usize) -> Bound {
    Bound::MinCount(n)
}

/// Ensure at most `percentage` (0 to 1) of the values are truthy.
///
/// Rounds up: with `.25` over 10 values, 3 may be truthy; a single value
/// may always be truthy unless `percentage` is 0.
pub fn max_percentage(percentage: f64) -> Bound {
    Bound::MaxPercentage(percentage)
}

/// Ensure at least `percentage` (0 to 1) of the values are truthy.
///
/// Rounds up, so any non-zero percentage requires at least one match.
pub fn min_percentage(percentage: f64) -> Bound {
    Bound::MinPercentage(percentage)
}

/// Ensure no value appears more than `n` times.
pub fn max_duplication(n: usize) -> Bound {
    Bound::MaxDuplication(n)
}

fn truthy_count(values: &[Value]) -> usize {
    values.iter().filter(|v| v.is_truthy()).count()
}

fn percentage_threshold(percentage: f64, len: usize) -> usize {
    // Saturating float-to-int cast; negative or NaN products land on 0.
    (percentage * len as f64).ceil() as usize
}

fn within_max_count(n: usize, values: &[Value]) -> bool {
    truthy_count(values) <= n
}

fn within_min_count(n: usize, values: &[Value]) -> bool {
    let truthy = truthy_count(values);
    if values.len() < n {
        truthy == values.len()
    } else {
        truthy >= n
    }
}

fn within_max_duplication(n: usize, values: &[Value]) -> bool {
    let mut groups: HashMap<&Value, usize> = HashMap::new();
    for value in values {
        let seen = groups.entry(value).or_insert(0);
        *seen += 1;
        if *seen > n {
            return false;
        }
    }
    true
}

impl BoundPredicate for Bound {
    fn is_within(&self, values: &[Value]) -> bool {
        match *self {
            Bound::MaxCount(n) => within_max_count(n, values),
            Bound::MinCount(n) => within_min_count(n, values),
            Bound::MaxPercentage(p) => {
                within_max_count(percentage_threshold(p, values.len()), values)
            }
            Bound::MinPercentage(p) => {
                within_min_count(percentage_threshold(p, values.len()), values)
            }
            Bound::MaxDuplication(n) => within_max_duplication(n, values),
        }
    }

    fn describe(&self) -> String {
        self.to_string()
    }

    fn validate(&self, rule: &str) -> Result<()> {
        match *self {
            Bound::MaxPercentage(p) | Bound::MinPercentage(p) => {
                if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                    return Err(CurateError::InvalidBound {
                        rule: rule.to_string(),
                        bound: self.to_string(),
                        reason: "percentage must be in [0, 1]".to_string(),
                    });
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::MaxCount(n) => write!(f, "max_count({n})"),
            Bound::MinCount(n) => write!(f, "min_count({n})"),
            Bound::MaxPercentage(p) => write!(f, "max_percentage({p})"),
            Bound::MinPercentage(p) => write!(f, "min_percentage({p})"),
            Bound::MaxDuplication(n) => write!(f, "max_duplication({n})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bools(values: &[bool]) -> Vec<Value> {
        values.iter().map(|&b| Value::from(b)).collect()
    }

    fn words(values: &[&str]) -> Vec<Value> {
        values.iter().map(|&s| Value::from(s)).collect()
    }

    #[test]
    fn test_max_percentage() {
        let max_half = max_percentage(0.5);
        assert!(max_half.is_within(&bools(&[true, false])));
        // ceil(0.5 * 3) = 2
        assert!(max_half.is_within(&bools(&[true, true, false])));
        assert!(!max_half.is_within(&bools(&[true, true, true, false])));
        // ceil(0.5 * 1) = 1
        assert!(max_half.is_within(&bools(&[true])));

        let max_zero = max_percentage(0.0);
        assert!(max_zero.is_within(&bools(&[false])));
        assert!(!max_zero.is_within(&bools(&[true])));
    }

    #[test]
    fn test_max_percentage_rounds_up() {
        // 0.6 * 8 = 4.8, so 5 may be truthy
        let bound = max_percentage(0.6);
        let five = bools(&[true, true, true, true, true, false, false, false]);
        let six = bools(&[true, true, true, true, true, true, false, false]);
        assert!(bound.is_within(&five));
        assert!(!bound.is_within(&six));
    }

    #[test]
    fn test_max_count() {
        let max2 = max_count(2);
        assert!(max2.is_within(&bools(&[true, true, false])));
        assert!(!max2.is_within(&bools(&[true, true, true, false])));

        let max0 = max_count(0);
        assert!(max0.is_within(&bools(&[false])));
        assert!(!max0.is_within(&bools(&[true])));
    }

    #[test]
    fn test_max_duplication() {
        let max_dup2 = max_duplication(2);
        assert!(max_dup2.is_within(&words(&["cat", "cat", "dog", "turtle"])));
        assert!(!max_dup2.is_within(&words(&["cat", "dog", "cat", "cat"])));
    }

    #[test]
    fn test_max_duplication_groups_falsy_values_too() {
        let bound = max_duplication(1);
        assert!(!bound.is_within(&bools(&[false, false])));
        assert!(!bound.is_within(&[Value::Null, Value::Null]));
        assert!(bound.is_within(&[Value::Null, Value::from(false)]));
    }

    #[test]
    fn test_min_count() {
        let min2 = min_count(2);
        assert!(min2.is_within(&bools(&[true, true, false])));
        assert!(!min2.is_within(&bools(&[true, false, false])));
        // fewer than 2 values: all must match
        assert!(min2.is_within(&bools(&[true])));
        assert!(!min2.is_within(&bools(&[false])));
    }

    #[test]
    fn test_min_percentage() {
        let min30 = min_percentage(0.3);
        assert!(min30.is_within(&bools(&[true, false, false])));
        assert!(!min30.is_within(&bools(&[false, false, false, false])));
        // ceil(0.3 * 2) = 1
        assert!(min30.is_within(&bools(&[true, false])));
    }

    #[test]
    fn test_empty_sequence_satisfies_everything() {
        let all = [
            max_count(0),
            min_count(3),
            max_percentage(0.0),
            min_percentage(1.0),
            max_duplication(0),
        ];
        for bound in all {
            assert!(bound.is_within(&[]), "{bound} rejected empty input");
        }
    }

    #[test]
    fn test_validate_percentages() {
        assert!(max_percentage(0.1).validate("r").is_ok());
        assert!(min_percentage(1.0).validate("r").is_ok());
        assert!(max_percentage(1.5).validate("r").is_err());
        assert!(min_percentage(-0.1).validate("r").is_err());
        assert!(min_percentage(f64::NAN).validate("r").is_err());
        assert!(max_count(0).validate("r").is_ok());
    }

    #[test]
    fn test_describe() {
        assert_eq!(max_percentage(0.1).describe(), "max_percentage(0.1)");
        assert_eq!(max_duplication(2).describe(), "max_duplication(2)");
    }
}
