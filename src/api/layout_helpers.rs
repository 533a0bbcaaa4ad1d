use crate::core::scale::resolve_tick_range;
use crate::core::ticks::{AXIS_MAX_TICKS, format_tick, nice_ticks};
use crate::core::{Axis, ChartArea, LinearScaleOptions, PixelRange, Viewport};
use crate::error::ChartResult;

use super::chart_config::{AxisOptions, ChartOptions};

pub(super) const CHART_PADDING_TOP_PX: f64 = 12.0;
pub(super) const CHART_PADDING_RIGHT_PX: f64 = 16.0;
pub(super) const CHART_PADDING_MIN_PX: f64 = 8.0;
pub(super) const TICK_LABEL_PADDING_PX: f64 = 10.0;
pub(super) const TITLE_PADDING_PX: f64 = 8.0;
/// Gap kept between the radial drawing area and the chart area edge.
pub(super) const RADIAL_PADDING_PX: f64 = 10.0;

pub(super) fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    // Deterministic and backend-independent.
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

/// Plot rectangle of a Cartesian chart.
///
/// The left inset fits the widest y tick label plus the optional y title;
/// the bottom inset fits one row of x tick labels plus the optional x title.
pub(super) fn cartesian_chart_area(
    viewport: Viewport,
    options: &ChartOptions,
    y_tick_labels: &[String],
) -> ChartResult<ChartArea> {
    let y = &options.scales.y;
    let x = &options.scales.x;

    let mut left = 0.0;
    if y.display {
        if y.ticks.display {
            left += y_tick_labels
                .iter()
                .map(|label| estimate_label_text_width_px(label, y.ticks.font_size_px))
                .fold(0.0, f64::max)
                + TICK_LABEL_PADDING_PX;
        }
        left += title_extent(y);
    }

    let mut bottom = 0.0;
    if x.display {
        if x.ticks.display {
            bottom += x.ticks.font_size_px + TICK_LABEL_PADDING_PX;
        }
        bottom += title_extent(x);
    }

    ChartArea::inset(
        viewport,
        left.max(CHART_PADDING_MIN_PX),
        CHART_PADDING_TOP_PX,
        CHART_PADDING_RIGHT_PX,
        bottom.max(CHART_PADDING_MIN_PX),
    )
}

/// Plot rectangle of a radial chart: the viewport minus a small margin.
pub(super) fn radial_chart_area(viewport: Viewport) -> ChartResult<ChartArea> {
    ChartArea::inset(
        viewport,
        CHART_PADDING_MIN_PX,
        CHART_PADDING_MIN_PX,
        CHART_PADDING_MIN_PX,
        CHART_PADDING_MIN_PX,
    )
    .or_else(|_| ChartArea::inset(viewport, 0.0, 0.0, 0.0, 0.0))
}

fn title_extent(axis: &AxisOptions) -> f64 {
    if axis.title.display && !axis.title.text.is_empty() {
        axis.title.font_size_px + TITLE_PADDING_PX
    } else {
        0.0
    }
}

/// Category pixels: x runs left to right, y top to bottom.
pub(super) fn category_pixel_range(area: ChartArea, axis: Axis) -> PixelRange {
    match axis {
        Axis::X => PixelRange::new(area.left, area.right),
        Axis::Y | Axis::R => PixelRange::new(area.top, area.bottom),
    }
}

/// Category tick texts as a category axis would print them.
pub(super) fn truncated_labels(labels: &[String], max_chars: Option<usize>) -> Vec<String> {
    labels
        .iter()
        .map(|label| match max_chars {
            Some(limit) => label.chars().take(limit).collect(),
            None => label.clone(),
        })
        .collect()
}

/// Tick labels a linear axis is likely to show, used to size the chart area
/// before the scale itself is fitted.
pub(super) fn linear_tick_label_preview(
    extent: Option<(f64, f64)>,
    options: LinearScaleOptions,
) -> Vec<String> {
    let (min, max) = resolve_tick_range(extent, options);
    let ticks = nice_ticks(min, max, AXIS_MAX_TICKS);
    let spacing = match ticks.as_slice() {
        [first, second, ..] => second - first,
        _ => 1.0,
    };
    ticks
        .iter()
        .map(|tick| format_tick(*tick, spacing))
        .collect()
}
