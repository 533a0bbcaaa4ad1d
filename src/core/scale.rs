use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::ticks::{
    AXIS_MAX_TICKS, AXIS_MIN_TICKS, AXIS_TICK_SPACING_PX, axis_tick_target_count, nice_ticks,
};
use crate::core::types::{Axis, PixelRange};
use crate::error::{ChartError, ChartResult};

/// Value-to-pixel contract shared by Cartesian scales.
///
/// Non-finite values map to `NaN` instead of failing so malformed records
/// flow through layout and are skipped at draw time.
pub trait CartesianScale {
    fn axis(&self) -> Axis;
    fn pixel_for_value(&self, value: f64) -> f64;
    fn base_pixel(&self) -> f64;
}

/// Fitting options for linear and radial scales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LinearScaleOptions {
    #[serde(default)]
    pub begin_at_zero: bool,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl LinearScaleOptions {
    #[must_use]
    pub fn begin_at_zero(mut self, begin_at_zero: bool) -> Self {
        self.begin_at_zero = begin_at_zero;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    axis: Axis,
    domain_start: f64,
    domain_end: f64,
    pixels: PixelRange,
    ticks: Vec<f64>,
}

impl LinearScale {
    pub fn new(
        axis: Axis,
        domain_start: f64,
        domain_end: f64,
        pixels: PixelRange,
    ) -> ChartResult<Self> {
        if !(domain_end - domain_start).is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !pixels.start.is_finite() || !pixels.end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale pixel range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            axis,
            domain_start,
            domain_end,
            pixels,
            ticks: vec![domain_start, domain_end],
        })
    }

    /// Fits a scale to a data extent and widens the domain to nice tick bounds.
    pub fn fit(
        axis: Axis,
        extent: Option<(f64, f64)>,
        options: LinearScaleOptions,
        pixels: PixelRange,
    ) -> ChartResult<Self> {
        let (min, max) = resolve_tick_range(extent, options);
        let max_ticks = axis_tick_target_count(
            pixels.span(),
            AXIS_TICK_SPACING_PX,
            AXIS_MIN_TICKS,
            AXIS_MAX_TICKS,
        );
        let ticks = nice_ticks(min, max, max_ticks);
        let (nice_min, nice_max) = match (ticks.first(), ticks.last()) {
            (Some(first), Some(last)) => {
                let start = options.min.unwrap_or(*first);
                let end = options.max.unwrap_or(*last);
                // Equal explicit bounds keep the widened tick range.
                if start == end { (*first, *last) } else { (start, end) }
            }
            _ => (min, max),
        };
        debug!(
            axis = axis.key(),
            min = nice_min,
            max = nice_max,
            tick_count = ticks.len(),
            "fit linear scale"
        );

        let mut scale = Self::new(axis, nice_min, nice_max, pixels)?;
        scale.ticks = ticks
            .into_iter()
            .filter(|tick| *tick >= nice_min && *tick <= nice_max)
            .collect();
        Ok(scale)
    }

    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn pixels(&self) -> PixelRange {
        self.pixels
    }

    #[must_use]
    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    /// Value the base pixel corresponds to: the domain edge closest to zero.
    #[must_use]
    pub fn base_value(&self) -> f64 {
        let (min, max) = self.domain();
        if min < 0.0 && max < 0.0 {
            max
        } else if min > 0.0 && max > 0.0 {
            min
        } else {
            0.0
        }
    }

    pub fn pixel_to_value(&self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        let length = self.pixels.length();
        if length == 0.0 {
            return Err(ChartError::InvalidData(
                "scale pixel range must be non-empty".to_owned(),
            ));
        }
        let normalized = (pixel - self.pixels.start) / length;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

impl CartesianScale for LinearScale {
    fn axis(&self) -> Axis {
        self.axis
    }

    fn pixel_for_value(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return f64::NAN;
        }
        let span = self.domain_end - self.domain_start;
        self.pixels.lerp((value - self.domain_start) / span)
    }

    fn base_pixel(&self) -> f64 {
        self.pixel_for_value(self.base_value())
    }
}

/// Applies empty-extent, zero-anchoring and flat-range rules before ticks are built.
#[must_use]
pub fn resolve_tick_range(extent: Option<(f64, f64)>, options: LinearScaleOptions) -> (f64, f64) {
    let (mut min, mut max) = match extent {
        Some((min, max)) if min.is_finite() && max.is_finite() => (min.min(max), min.max(max)),
        _ => (0.0, 1.0),
    };

    if options.begin_at_zero {
        if min < 0.0 && max < 0.0 {
            max = 0.0;
        } else if min > 0.0 && max > 0.0 {
            min = 0.0;
        }
    }

    if let Some(explicit) = options.min {
        min = explicit;
    }
    if let Some(explicit) = options.max {
        max = explicit;
    }

    if min == max {
        let offset = if max.abs() >= 9_007_199_254_740_991.0 {
            (max * 0.05).abs()
        } else {
            1.0
        };
        max += offset;
        if !options.begin_at_zero {
            min -= offset;
        }
    }

    (min, max)
}

#[cfg(test)]
mod tests {
    use super::{LinearScale, LinearScaleOptions, resolve_tick_range};
    use crate::core::types::{Axis, PixelRange};

    #[test]
    fn flat_range_is_widened() {
        assert_eq!(
            resolve_tick_range(Some((3.0, 3.0)), LinearScaleOptions::default()),
            (2.0, 4.0)
        );
        assert_eq!(
            resolve_tick_range(Some((3.0, 3.0)), LinearScaleOptions::default().begin_at_zero(true)),
            (0.0, 3.0)
        );
    }

    #[test]
    fn empty_extent_falls_back_to_unit_range() {
        assert_eq!(
            resolve_tick_range(None, LinearScaleOptions::default()),
            (0.0, 1.0)
        );
    }

    #[test]
    fn begin_at_zero_anchors_same_signed_ranges() {
        let options = LinearScaleOptions::default().begin_at_zero(true);
        assert_eq!(resolve_tick_range(Some((5.0, 9.0)), options), (0.0, 9.0));
        assert_eq!(resolve_tick_range(Some((-9.0, -5.0)), options), (-9.0, 0.0));
        assert_eq!(resolve_tick_range(Some((-2.0, 5.0)), options), (-2.0, 5.0));
    }

    #[test]
    fn equal_explicit_bounds_fit_a_widened_domain() {
        let options = LinearScaleOptions {
            min: Some(5.0),
            max: Some(5.0),
            ..LinearScaleOptions::default()
        };
        let scale = LinearScale::fit(Axis::Y, Some((1.0, 9.0)), options, PixelRange::new(400.0, 0.0))
            .expect("degenerate explicit bounds are widened");
        assert_eq!(scale.domain(), (4.0, 6.0));
        assert!(!scale.ticks().is_empty());
    }

    #[test]
    fn overflowing_domains_are_rejected() {
        assert!(LinearScale::new(Axis::Y, -1e308, 1e308, PixelRange::new(400.0, 0.0)).is_err());
        assert!(LinearScale::new(Axis::Y, 3.0, 3.0, PixelRange::new(400.0, 0.0)).is_err());
    }
}
