use serde::{Deserialize, Serialize};

use crate::core::error_value::ErrorValue;
use crate::core::types::Axis;

/// One data record: central values plus optional per-axis error bounds.
///
/// Bar and line series read the value-axis key (`y`, or `x` for horizontal
/// bars), scatter series read `x` and `y`, polar-area series read `r`.
/// A bare JSON number deserializes as a record carrying only `y`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "DatumRepr")]
pub struct ErrorDatum {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_min: Option<ErrorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_max: Option<ErrorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_min: Option<ErrorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_max: Option<ErrorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_min: Option<ErrorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_max: Option<ErrorValue>,
}

impl ErrorDatum {
    #[must_use]
    pub fn value(y: f64) -> Self {
        Self {
            y: Some(y),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn radial(r: f64) -> Self {
        Self {
            r: Some(r),
            ..Self::default()
        }
    }

    /// Record whose central value sits on `axis`.
    #[must_use]
    pub fn on_axis(axis: Axis, value: f64) -> Self {
        let mut datum = Self::default();
        datum.set_value(axis, value);
        datum
    }

    #[must_use]
    pub fn with_bounds(
        mut self,
        axis: Axis,
        min: impl Into<ErrorValue>,
        max: impl Into<ErrorValue>,
    ) -> Self {
        let (min_slot, max_slot) = self.bounds_mut(axis);
        *min_slot = Some(min.into());
        *max_slot = Some(max.into());
        self
    }

    #[must_use]
    pub fn with_min(mut self, axis: Axis, min: impl Into<ErrorValue>) -> Self {
        *self.bounds_mut(axis).0 = Some(min.into());
        self
    }

    #[must_use]
    pub fn with_max(mut self, axis: Axis, max: impl Into<ErrorValue>) -> Self {
        *self.bounds_mut(axis).1 = Some(max.into());
        self
    }

    #[must_use]
    pub fn get(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::R => self.r,
        }
    }

    pub fn set_value(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::X => self.x = Some(value),
            Axis::Y => self.y = Some(value),
            Axis::R => self.r = Some(value),
        }
    }

    #[must_use]
    pub fn min_bound(&self, axis: Axis) -> Option<&ErrorValue> {
        match axis {
            Axis::X => self.x_min.as_ref(),
            Axis::Y => self.y_min.as_ref(),
            Axis::R => self.r_min.as_ref(),
        }
    }

    #[must_use]
    pub fn max_bound(&self, axis: Axis) -> Option<&ErrorValue> {
        match axis {
            Axis::X => self.x_max.as_ref(),
            Axis::Y => self.y_max.as_ref(),
            Axis::R => self.r_max.as_ref(),
        }
    }

    /// `true` when at least one bound is declared for `axis`.
    #[must_use]
    pub fn has_bounds(&self, axis: Axis) -> bool {
        self.min_bound(axis).is_some() || self.max_bound(axis).is_some()
    }

    fn bounds_mut(&mut self, axis: Axis) -> (&mut Option<ErrorValue>, &mut Option<ErrorValue>) {
        match axis {
            Axis::X => (&mut self.x_min, &mut self.x_max),
            Axis::Y => (&mut self.y_min, &mut self.y_max),
            Axis::R => (&mut self.r_min, &mut self.r_max),
        }
    }
}

impl From<f64> for ErrorDatum {
    fn from(value: f64) -> Self {
        Self::value(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DatumRepr {
    Number(f64),
    Null(()),
    Record(DatumRecord),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DatumRecord {
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
    #[serde(default)]
    r: Option<f64>,
    #[serde(default)]
    x_min: Option<ErrorValue>,
    #[serde(default)]
    x_max: Option<ErrorValue>,
    #[serde(default)]
    y_min: Option<ErrorValue>,
    #[serde(default)]
    y_max: Option<ErrorValue>,
    #[serde(default)]
    r_min: Option<ErrorValue>,
    #[serde(default)]
    r_max: Option<ErrorValue>,
}

impl From<DatumRepr> for ErrorDatum {
    fn from(repr: DatumRepr) -> Self {
        match repr {
            DatumRepr::Number(value) => Self::value(value),
            DatumRepr::Null(()) => Self::default(),
            DatumRepr::Record(record) => Self {
                x: record.x,
                y: record.y,
                r: record.r,
                x_min: record.x_min,
                x_max: record.x_max,
                y_min: record.y_min,
                y_max: record.y_max,
                r_min: record.r_min,
                r_max: record.r_max,
            },
        }
    }
}
