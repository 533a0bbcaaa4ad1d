use tracing::{debug, trace};

use crate::core::{
    Axis, CartesianScale, CategoryScale, LinearScale, ParsedDatum, Viewport, error_bar_extent,
    merge_extents,
};
use crate::error::ChartResult;
use crate::extensions::error_bars::{
    ErrorBarPixels, base_label, bar_tooltip_label, calculate_scale,
};

use super::chart_config::ChartConfig;
use super::controller::{
    AxisScale, ChartController, ChartLayout, ChartScales, DatasetColors, DatasetLayout,
    LineSeriesStyle, ScaleKind, UpdateMode, dataset_at, dataset_error_bar_style, datum_at,
};
use super::elements::{ChartElement, ElementKind, ElementShape, PointShape};
use super::layout_helpers::{
    cartesian_chart_area, category_pixel_range, linear_tick_label_preview,
};
use super::series_projection::parse_category_records;

/// Line width of a dataset that sets none.
const DEFAULT_LINE_WIDTH: f64 = 3.0;

/// `lineWithErrorBars`: points on a category axis joined by line segments,
/// with vertical error bars.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineWithErrorBarsController;

impl LineWithErrorBarsController {
    pub const ID: &'static str = "lineWithErrorBars";
}

impl ChartController for LineWithErrorBarsController {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn element_kind(&self) -> ElementKind {
        ElementKind::PointWithErrorBar
    }

    fn scale_kinds(&self) -> &'static [ScaleKind] {
        &[ScaleKind::Category, ScaleKind::Linear]
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
            .map(|(dataset_index, dataset)| {
                (dataset_index, parse_category_records(dataset, Axis::Y))
            })
            .collect();
        let extent = merge_extents(
            parsed
                .iter()
                .map(|(_, records)| error_bar_extent(records, Axis::Y)),
        );
        let value_options = options.scales.y.linear_options(false);
        let area = cartesian_chart_area(
            viewport,
            options,
            &linear_tick_label_preview(extent, value_options),
        )?;

        let category = CategoryScale::new(
            Axis::X,
            config.category_labels(),
            category_pixel_range(area, Axis::X),
            false,
        )?
        .with_label_max_chars(options.scales.x.ticks.label_max_chars);
        let value_scale =
            LinearScale::fit(Axis::Y, extent, value_options, area.pixel_range(Axis::Y))?;

        let reset = mode.is_reset();
        let base = value_scale.base_pixel();
        let point = options.elements.point;

        let mut datasets = Vec::with_capacity(parsed.len());
        for (dataset_index, records) in parsed {
            let dataset = dataset_at(config, dataset_index)?;
            let colors = DatasetColors::of(dataset);
            let style = dataset_error_bar_style(config, dataset);
            let elements = records
                .iter()
                .enumerate()
                .map(|(index, record)| {
                    let y = if reset {
                        base
                    } else {
                        value_scale.pixel_for_value(record.y)
                    };
                    let mut error_bars = ErrorBarPixels::default();
                    calculate_scale(&mut error_bars, record, &value_scale, reset);
                    ChartElement {
                        dataset_index,
                        index,
                        shape: ElementShape::Point(PointShape {
                            x: category.pixel_for_index(index),
                            y,
                            radius: point.radius,
                            hover_radius: point.hover_radius,
                            hit_radius: point.hit_radius,
                            fill_color: colors.background,
                            border_color: colors.border,
                            border_width: point.border_width,
                        }),
                        error_bars,
                        style: style.clone(),
                    }
                })
                .collect::<Vec<_>>();

            let filled = dataset.fill.or(options.fill).unwrap_or(false);
            let line = LineSeriesStyle {
                border_color: colors.border,
                border_width: colors.border_width.unwrap_or(DEFAULT_LINE_WIDTH),
                fill_color: filled.then_some(colors.background),
                fill_base: base,
            };
            trace!(
                dataset_index,
                element_count = elements.len(),
                filled,
                "update line dataset"
            );
            datasets.push(DatasetLayout {
                dataset_index,
                parsed: records,
                elements,
                line: Some(line),
            });
        }
        debug!(dataset_count = datasets.len(), reset, "update line chart");

        Ok(ChartLayout {
            viewport,
            scales: ChartScales::Cartesian {
                x: AxisScale::Category(category),
                y: AxisScale::Linear(value_scale),
            },
            datasets,
        })
    }

    fn tooltip_label(
        &self,
        config: &ChartConfig,
        dataset_index: usize,
        index: usize,
    ) -> ChartResult<String> {
        let dataset = dataset_at(config, dataset_index)?;
        let datum = datum_at(config, dataset_index, index)?;
        let base = base_label(dataset.label.as_deref(), datum.y.unwrap_or(f64::NAN));
        Ok(bar_tooltip_label(&base, datum, false))
    }
}
