use serde::{Deserialize, Serialize};

use crate::core::datum::ErrorDatum;
use crate::core::error_value::ErrorValue;
use crate::core::types::Axis;

/// Bounds carried through parsing for one axis, plus their extrema.
///
/// `min_min` is the smallest lower bound and `max_max` the largest upper
/// bound; both fall back to the central value when the bound is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedBounds {
    pub min: Option<ErrorValue>,
    pub max: Option<ErrorValue>,
    pub min_min: f64,
    pub max_max: f64,
}

impl ParsedBounds {
    #[must_use]
    pub fn central(value: f64) -> Self {
        Self {
            min: None,
            max: None,
            min_min: value,
            max_max: value,
        }
    }
}

impl PartialEq for ParsedBounds {
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min
            && self.max == other.max
            && same_number(self.min_min, other.min_min)
            && same_number(self.max_max, other.max_max)
    }
}

fn same_number(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Which per-record number a value-range query reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSource {
    Value,
    MinOfMin,
    MaxOfMax,
}

/// One record after parsing. Axes the record does not carry hold `NaN`, and
/// equality treats two `NaN`s on the same axis as the same absent value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedDatum {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub x_bounds: ParsedBounds,
    pub y_bounds: ParsedBounds,
    pub r_bounds: ParsedBounds,
}

impl PartialEq for ParsedDatum {
    fn eq(&self, other: &Self) -> bool {
        same_number(self.x, other.x)
            && same_number(self.y, other.y)
            && same_number(self.r, other.r)
            && self.x_bounds == other.x_bounds
            && self.y_bounds == other.y_bounds
            && self.r_bounds == other.r_bounds
    }
}

impl ParsedDatum {
    /// Parsed record with central values only. Absent values become `NaN`.
    #[must_use]
    pub fn from_values(x: f64, y: f64, r: f64) -> Self {
        Self {
            x,
            y,
            r,
            x_bounds: ParsedBounds::central(x),
            y_bounds: ParsedBounds::central(y),
            r_bounds: ParsedBounds::central(r),
        }
    }

    #[must_use]
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::R => self.r,
        }
    }

    pub fn set(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::R => self.r = value,
        }
        let bounds = self.bounds_mut(axis);
        if bounds.min.is_none() && bounds.max.is_none() {
            *bounds = ParsedBounds::central(value);
        }
    }

    #[must_use]
    pub fn bounds(&self, axis: Axis) -> &ParsedBounds {
        match axis {
            Axis::X => &self.x_bounds,
            Axis::Y => &self.y_bounds,
            Axis::R => &self.r_bounds,
        }
    }

    fn bounds_mut(&mut self, axis: Axis) -> &mut ParsedBounds {
        match axis {
            Axis::X => &mut self.x_bounds,
            Axis::Y => &mut self.y_bounds,
            Axis::R => &mut self.r_bounds,
        }
    }

    #[must_use]
    pub fn read(&self, axis: Axis, source: RangeSource) -> f64 {
        match source {
            RangeSource::Value => self.get(axis),
            RangeSource::MinOfMin => self.bounds(axis).min_min,
            RangeSource::MaxOfMax => self.bounds(axis).max_max,
        }
    }

    /// Copies `axis` bounds from the raw record and recomputes the extrema.
    pub fn attach_bounds(&mut self, axis: Axis, datum: &ErrorDatum) {
        let value = self.get(axis);
        let min = datum.min_bound(axis).cloned();
        let max = datum.max_bound(axis).cloned();
        let min_min = compute_extrema(value, min.as_ref(), ErrorValue::min_value);
        let max_max = compute_extrema(value, max.as_ref(), ErrorValue::max_value);
        *self.bounds_mut(axis) = ParsedBounds {
            min,
            max,
            min_min,
            max_max,
        };
    }
}

/// Extremum of a bound, or the central value when there is none.
#[must_use]
pub fn compute_extrema(
    value: f64,
    bound: Option<&ErrorValue>,
    op: impl Fn(&ErrorValue) -> f64,
) -> f64 {
    bound.map_or(value, op)
}

/// Carries `axis` bounds of `data[start..]` into already-parsed records.
pub fn parse_error_number_data(
    parsed: &mut [ParsedDatum],
    axis: Axis,
    data: &[ErrorDatum],
    start: usize,
) {
    for (offset, record) in parsed.iter_mut().enumerate() {
        if let Some(datum) = data.get(start + offset) {
            record.attach_bounds(axis, datum);
        }
    }
}

/// Smallest and largest finite value read from `source` over all records.
#[must_use]
pub fn value_extent(parsed: &[ParsedDatum], axis: Axis, source: RangeSource) -> Option<(f64, f64)> {
    parsed
        .iter()
        .map(|record| record.read(axis, source))
        .filter(|value| value.is_finite())
        .fold(None, |acc, value| match acc {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
}

/// Axis range covering every error bound: min over `min_min`, max over `max_max`.
#[must_use]
pub fn error_bar_extent(parsed: &[ParsedDatum], axis: Axis) -> Option<(f64, f64)> {
    let lower = value_extent(parsed, axis, RangeSource::MinOfMin).map(|(min, _)| min);
    let upper = value_extent(parsed, axis, RangeSource::MaxOfMax).map(|(_, max)| max);
    match (lower, upper) {
        (Some(min), Some(max)) => Some((min, max)),
        (Some(min), None) => Some((min, min)),
        (None, Some(max)) => Some((max, max)),
        (None, None) => None,
    }
}

/// Merges extents of several datasets.
#[must_use]
pub fn merge_extents(extents: impl IntoIterator<Item = Option<(f64, f64)>>) -> Option<(f64, f64)> {
    extents
        .into_iter()
        .flatten()
        .fold(None, |acc, (min, max)| match acc {
            None => Some((min, max)),
            Some((lo, hi)) => Some((lo.min(min), hi.max(max))),
        })
}
