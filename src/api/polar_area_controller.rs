use std::f64::consts::{FRAC_PI_2, TAU};

use tracing::{debug, trace};

use crate::core::{Axis, ParsedDatum, RadialLinearScale, Viewport, error_bar_extent, merge_extents};
use crate::error::ChartResult;
use crate::extensions::error_bars::{
    ErrorBarPixels, base_label, calculate_polar_scale, polar_tooltip_label,
};

use super::chart_config::ChartConfig;
use super::controller::{
    ChartController, ChartLayout, ChartScales, DatasetColors, DatasetLayout, ScaleKind,
    UpdateMode, dataset_at, dataset_error_bar_style, datum_at,
};
use super::elements::{ArcShape, ChartElement, ElementKind, ElementShape};
use super::layout_helpers::{RADIAL_PADDING_PX, radial_chart_area};
use super::series_projection::{parse_radial_records, radial_value};

/// Angle the first arc starts at: twelve o'clock.
pub const POLAR_START_ANGLE: f64 = -FRAC_PI_2;

/// `polarAreaWithErrorBars`: equal-angle arcs whose radius encodes `r`, with
/// radial error bars along each arc's mid angle.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolarAreaWithErrorBarsController;

impl PolarAreaWithErrorBarsController {
    pub const ID: &'static str = "polarAreaWithErrorBars";
}

/// Angle of every visible arc. `NaN` records are not visible.
fn arc_angle(records: &[ParsedDatum]) -> f64 {
    let visible = records.iter().filter(|record| !record.r.is_nan()).count();
    if visible == 0 {
        0.0
    } else {
        TAU / visible as f64
    }
}

impl ChartController for PolarAreaWithErrorBarsController {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn element_kind(&self) -> ElementKind {
        ElementKind::ArcWithErrorBar
    }

    fn scale_kinds(&self) -> &'static [ScaleKind] {
        &[ScaleKind::RadialLinear]
    }

    fn update(
        &self,
        config: &ChartConfig,
        viewport: Viewport,
        mode: UpdateMode,
    ) -> ChartResult<ChartLayout> {
        let viewport = viewport.ensure_valid()?;
        let options = &config.options;

        let parsed: Vec<(usize, Vec<ParsedDatum>)> = config
            .visible_datasets()
            .map(|(dataset_index, dataset)| (dataset_index, parse_radial_records(dataset)))
            .collect();
        let extent = merge_extents(
            parsed
                .iter()
                .map(|(_, records)| error_bar_extent(records, Axis::R)),
        );
        let area = radial_chart_area(viewport)?;
        let scale = RadialLinearScale::fit(
            area,
            RADIAL_PADDING_PX,
            extent,
            options.scales.r.linear_options(true),
        )?;
        let (x_center, y_center) = scale.center();

        let reset = mode.is_reset();
        let animation = options.animation;
        let arc_options = options.elements.arc;

        let mut datasets = Vec::with_capacity(parsed.len());
        for (dataset_index, records) in parsed {
            let dataset = dataset_at(config, dataset_index)?;
            let colors = DatasetColors::of(dataset);
            let style = dataset_error_bar_style(config, dataset);
            let angle = arc_angle(&records);

            let mut cursor = POLAR_START_ANGLE;
            let mut elements = Vec::with_capacity(records.len());
            for (index, record) in records.iter().enumerate() {
                let sweep = if record.r.is_nan() { 0.0 } else { angle };
                let mut start_angle = cursor;
                let mut end_angle = cursor + sweep;
                cursor = end_angle;

                let mut outer_radius = scale.distance_from_center_for_value(record.r);
                if reset {
                    if animation.animate_scale {
                        outer_radius = 0.0;
                    }
                    if animation.animate_rotate {
                        start_angle = POLAR_START_ANGLE;
                        end_angle = POLAR_START_ANGLE;
                    }
                }

                let mut error_bars = ErrorBarPixels::default();
                calculate_polar_scale(
                    &mut error_bars,
                    record,
                    &scale,
                    reset,
                    animation.animate_scale,
                );
                elements.push(ChartElement {
                    dataset_index,
                    index,
                    shape: ElementShape::Arc(ArcShape {
                        x: x_center,
                        y: y_center,
                        inner_radius: 0.0,
                        outer_radius,
                        start_angle,
                        end_angle,
                        fill_color: colors.background,
                        border_color: dataset.border_color.unwrap_or(arc_options.border_color),
                        border_width: colors.border_width.unwrap_or(arc_options.border_width),
                    }),
                    error_bars,
                    style: style.clone(),
                });
            }
            trace!(dataset_index, element_count = elements.len(), angle, "update polar dataset");
            datasets.push(DatasetLayout {
                dataset_index,
                parsed: records,
                elements,
                line: None,
            });
        }
        debug!(dataset_count = datasets.len(), reset, "update polar area chart");

        Ok(ChartLayout {
            viewport,
            scales: ChartScales::Radial(scale),
            datasets,
        })
    }

    fn tooltip_label(
        &self,
        config: &ChartConfig,
        dataset_index: usize,
        index: usize,
    ) -> ChartResult<String> {
        let datum = datum_at(config, dataset_index, index)?;
        let labels = config.category_labels();
        let base = base_label(labels.get(index).map(String::as_str), radial_value(datum));
        Ok(polar_tooltip_label(&base, datum))
    }
}
