use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One error bound: a scalar, or a stack of values drawn as nested bars.
///
/// In a stack, index 0 is the innermost bar and the last index the outermost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorValue {
    Single(f64),
    Stacked(SmallVec<[f64; 2]>),
}

impl ErrorValue {
    #[must_use]
    pub fn stacked(values: impl IntoIterator<Item = f64>) -> Self {
        Self::Stacked(values.into_iter().collect())
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Stacked(values) => values.as_slice(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    #[must_use]
    pub fn is_stacked(&self) -> bool {
        matches!(self, Self::Stacked(_))
    }

    /// Applies `f` to every value, keeping the scalar/stacked shape.
    #[must_use]
    pub fn map(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        match self {
            Self::Single(value) => Self::Single(f(*value)),
            Self::Stacked(values) => Self::Stacked(values.iter().map(|v| f(*v)).collect()),
        }
    }

    /// Same shape with stacked values in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        match self {
            Self::Single(value) => Self::Single(*value),
            Self::Stacked(values) => Self::Stacked(values.iter().rev().copied().collect()),
        }
    }

    /// Smallest value; `NaN` if any value is `NaN`, `+inf` for an empty stack.
    #[must_use]
    pub fn min_value(&self) -> f64 {
        self.values().iter().fold(f64::INFINITY, |acc, v| {
            if acc.is_nan() || v.is_nan() {
                f64::NAN
            } else {
                acc.min(*v)
            }
        })
    }

    /// Largest value; `NaN` if any value is `NaN`, `-inf` for an empty stack.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.values().iter().fold(f64::NEG_INFINITY, |acc, v| {
            if acc.is_nan() || v.is_nan() {
                f64::NAN
            } else {
                acc.max(*v)
            }
        })
    }
}

impl From<f64> for ErrorValue {
    fn from(value: f64) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<f64>> for ErrorValue {
    fn from(values: Vec<f64>) -> Self {
        Self::Stacked(SmallVec::from_vec(values))
    }
}

/// Comma-joined, the way labels list stacked bounds (`5,7`).
impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(&format_number(*value))?;
        }
        Ok(())
    }
}

/// Shortest round-trip number text with `NaN`/`Infinity` spelled out.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_owned()
        } else {
            "-Infinity".to_owned()
        }
    } else if value == 0.0 {
        "0".to_owned()
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorValue, format_number};

    #[test]
    fn display_joins_stacked_values() {
        assert_eq!(ErrorValue::Single(7.0).to_string(), "7");
        assert_eq!(ErrorValue::stacked([5.0, 7.5]).to_string(), "5,7.5");
    }

    #[test]
    fn extrema_follow_stack_contents() {
        let stack = ErrorValue::stacked([7.0, 5.0]);
        assert_eq!(stack.min_value(), 5.0);
        assert_eq!(stack.max_value(), 7.0);
        assert!(ErrorValue::stacked([1.0, f64::NAN]).min_value().is_nan());
    }

    #[test]
    fn deserializes_scalars_and_arrays() {
        let single: ErrorValue = serde_json::from_str("3.5").expect("scalar");
        let stacked: ErrorValue = serde_json::from_str("[1, 2]").expect("array");
        assert_eq!(single, ErrorValue::Single(3.5));
        assert_eq!(stacked, ErrorValue::stacked([1.0, 2.0]));
    }

    #[test]
    fn number_format_spells_out_specials() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(12.25), "12.25");
    }
}
