use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::scale::{LinearScaleOptions, resolve_tick_range};
use crate::core::ticks::{AXIS_MAX_TICKS, AXIS_MIN_TICKS, AXIS_TICK_SPACING_PX};
use crate::core::ticks::{axis_tick_target_count, nice_ticks};
use crate::core::types::{Axis, ChartArea};
use crate::error::{ChartError, ChartResult};

/// Radial value axis used by polar-area charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialLinearScale {
    x_center: f64,
    y_center: f64,
    drawing_area: f64,
    min: f64,
    max: f64,
    ticks: Vec<f64>,
}

impl RadialLinearScale {
    pub fn new(
        x_center: f64,
        y_center: f64,
        drawing_area: f64,
        min: f64,
        max: f64,
    ) -> ChartResult<Self> {
        if !x_center.is_finite() || !y_center.is_finite() {
            return Err(ChartError::InvalidData(
                "radial scale center must be finite".to_owned(),
            ));
        }
        if !drawing_area.is_finite() || drawing_area < 0.0 {
            return Err(ChartError::InvalidData(
                "radial drawing area must be finite and >= 0".to_owned(),
            ));
        }
        if !(max - min).is_finite() || min == max {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        Ok(Self {
            x_center,
            y_center,
            drawing_area,
            min,
            max,
            ticks: vec![min, max],
        })
    }

    /// Fits the radial domain inside `area`, leaving `padding` pixels free.
    ///
    /// Areas smaller than the padding collapse to a zero radius.
    pub fn fit(
        area: ChartArea,
        padding: f64,
        extent: Option<(f64, f64)>,
        options: LinearScaleOptions,
    ) -> ChartResult<Self> {
        let (x_center, y_center) = area.center();
        let drawing_area = (area.width().min(area.height()) * 0.5 - padding.max(0.0)).max(0.0);
        let (min, max) = resolve_tick_range(extent, options);
        let max_ticks = axis_tick_target_count(
            drawing_area,
            AXIS_TICK_SPACING_PX,
            AXIS_MIN_TICKS,
            AXIS_MAX_TICKS,
        );
        let ticks = nice_ticks(min, max, max_ticks);
        let first = ticks.first().copied().unwrap_or(min);
        let last = ticks.last().copied().unwrap_or(max);
        let (nice_min, nice_max) = match (options.min, options.max) {
            (Some(start), Some(end)) if start == end => (first, last),
            (start, end) => (start.unwrap_or(first), end.unwrap_or(last)),
        };
        debug!(
            axis = Axis::R.key(),
            min = nice_min,
            max = nice_max,
            drawing_area,
            "fit radial scale"
        );

        let mut scale = Self::new(x_center, y_center, drawing_area, nice_min, nice_max)?;
        scale.ticks = ticks
            .into_iter()
            .filter(|tick| *tick >= nice_min && *tick <= nice_max)
            .collect();
        Ok(scale)
    }

    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.x_center, self.y_center)
    }

    #[must_use]
    pub fn drawing_area(&self) -> f64 {
        self.drawing_area
    }

    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    /// Pixel distance from the center for a value; `NaN` for non-finite input.
    #[must_use]
    pub fn distance_from_center_for_value(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return f64::NAN;
        }
        (value - self.min) * self.drawing_area / (self.max - self.min)
    }
}

#[cfg(test)]
mod tests {
    use super::RadialLinearScale;
    use crate::core::scale::LinearScaleOptions;
    use crate::core::types::ChartArea;

    #[test]
    fn distance_is_linear_in_value() {
        let scale = RadialLinearScale::new(100.0, 100.0, 80.0, 0.0, 10.0).expect("scale");
        assert_eq!(scale.distance_from_center_for_value(0.0), 0.0);
        assert_eq!(scale.distance_from_center_for_value(5.0), 40.0);
        assert_eq!(scale.distance_from_center_for_value(10.0), 80.0);
    }

    #[test]
    fn fit_centers_and_begins_at_zero() {
        let area = ChartArea::new(0.0, 0.0, 400.0, 300.0).expect("area");
        let scale = RadialLinearScale::fit(
            area,
            10.0,
            Some((4.0, 18.0)),
            LinearScaleOptions::default().begin_at_zero(true),
        )
        .expect("fit");
        assert_eq!(scale.center(), (200.0, 150.0));
        assert_eq!(scale.drawing_area(), 140.0);
        assert_eq!(scale.domain().0, 0.0);
        assert!(scale.domain().1 >= 18.0);
    }

    #[test]
    fn tiny_areas_collapse_to_a_zero_radius() {
        let area = ChartArea::new(0.0, 0.0, 24.0, 24.0).expect("area");
        let scale = RadialLinearScale::fit(area, 18.0, Some((1.0, 5.0)), LinearScaleOptions::default())
            .expect("degenerate radius is tolerated");
        assert_eq!(scale.drawing_area(), 0.0);
        assert_eq!(scale.distance_from_center_for_value(5.0), 0.0);
    }
}
