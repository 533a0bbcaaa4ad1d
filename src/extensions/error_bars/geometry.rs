use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Axis, CartesianScale, ErrorValue, ParsedDatum, RadialLinearScale};

/// Lower and upper bound of one axis, already in pixel space.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: Option<ErrorValue>,
    pub max: Option<ErrorValue>,
}

impl AxisBounds {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Pixel-space error bounds of one element, keyed like the data record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorBarPixels {
    pub x: AxisBounds,
    pub y: AxisBounds,
    pub r: AxisBounds,
}

impl ErrorBarPixels {
    #[must_use]
    pub fn axis(&self, axis: Axis) -> &AxisBounds {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::R => &self.r,
        }
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut AxisBounds {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::R => &mut self.r,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() && self.y.is_empty() && self.r.is_empty()
    }
}

/// Maps the parsed bounds of the scale's axis into pixels.
///
/// In reset mode every bound collapses onto the scale's base pixel, which is
/// where enter animations start from.
pub fn calculate_scale(
    pixels: &mut ErrorBarPixels,
    parsed: &ParsedDatum,
    scale: &dyn CartesianScale,
    reset: bool,
) {
    let axis = scale.axis();
    let base = scale.base_pixel();
    let to_pixel = |value: f64| {
        if reset {
            base
        } else {
            scale.pixel_for_value(value)
        }
    };
    let bounds = parsed.bounds(axis);
    let target = pixels.axis_mut(axis);
    target.min = bounds.min.as_ref().map(|value| value.map(to_pixel));
    target.max = bounds.max.as_ref().map(|value| value.map(to_pixel));
}

/// Maps the parsed `r` bounds to distances from the radial scale's center.
///
/// In reset mode the radius is `0` when the scale animates in, and the true
/// distance otherwise.
pub fn calculate_polar_scale(
    pixels: &mut ErrorBarPixels,
    parsed: &ParsedDatum,
    scale: &RadialLinearScale,
    reset: bool,
    animate_scale: bool,
) {
    let to_radius = |value: f64| {
        let radius = scale.distance_from_center_for_value(value);
        if reset && animate_scale { 0.0 } else { radius }
    };
    let bounds = parsed.bounds(Axis::R);
    pixels.r.min = bounds.min.as_ref().map(|value| value.map(to_radius));
    pixels.r.max = bounds.max.as_ref().map(|value| value.map(to_radius));
}

/// Pairs lower and upper bounds into stacked bars.
///
/// Equal-length inputs pair index by index. Otherwise the shorter side is
/// repeated cyclically up to the longer length.
#[must_use]
pub fn resolve_multi(min: &[f64], max: &[f64]) -> SmallVec<[(f64, f64); 2]> {
    if min.is_empty() || max.is_empty() {
        return SmallVec::new();
    }
    let count = min.len().max(max.len());
    (0..count)
        .map(|i| (min[i % min.len()], max[i % max.len()]))
        .collect()
}

/// Stacked (min, max) pairs for one axis, with missing sides at `center`.
#[must_use]
pub fn stacked_pairs(bounds: &AxisBounds, center: f64) -> SmallVec<[(f64, f64); 2]> {
    let center = [center];
    let min = bounds.min.as_ref().map_or(&center[..], ErrorValue::values);
    let max = bounds.max.as_ref().map_or(&center[..], ErrorValue::values);
    resolve_multi(min, max)
}
