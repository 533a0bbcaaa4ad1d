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
    ScaleKind, UpdateMode, dataset_at, dataset_error_bar_style, datum_at,
};
use super::elements::{BarShape, ChartElement, ElementKind, ElementShape};
use super::layout_helpers::{
    cartesian_chart_area, category_pixel_range, linear_tick_label_preview, truncated_labels,
};
use super::series_projection::parse_category_records;

/// `barWithErrorBars`: category bars with error bars on the value axis.
///
/// `options.indexAxis = "y"` lays the bars out horizontally; the value axis
/// and the bound keys (`xMin`/`xMax`) switch with it.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarWithErrorBarsController;

impl BarWithErrorBarsController {
    pub const ID: &'static str = "barWithErrorBars";

    fn axes(config: &ChartConfig) -> (Axis, Axis, bool) {
        if config.options.index_axis == Axis::Y {
            (Axis::Y, Axis::X, true)
        } else {
            (Axis::X, Axis::Y, false)
        }
    }
}

impl ChartController for BarWithErrorBarsController {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn element_kind(&self) -> ElementKind {
        ElementKind::RectangleWithErrorBar
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
        let (index_axis, value_axis, horizontal) = Self::axes(config);
        let options = &config.options;

        let parsed: Vec<(usize, Vec<ParsedDatum>)> = config
            .visible_datasets()
            .map(|(dataset_index, dataset)| {
                (dataset_index, parse_category_records(dataset, value_axis))
            })
            .collect();
        let extent = merge_extents(
            parsed
                .iter()
                .map(|(_, records)| error_bar_extent(records, value_axis)),
        );
        let value_options = options.scales.axis(value_axis).linear_options(true);

        let index_options = options.scales.axis(index_axis);
        let labels = config.category_labels();
        let y_tick_labels = if horizontal {
            truncated_labels(&labels, index_options.ticks.label_max_chars)
        } else {
            linear_tick_label_preview(extent, value_options)
        };
        let area = cartesian_chart_area(viewport, options, &y_tick_labels)?;

        let category = CategoryScale::new(
            index_axis,
            labels,
            category_pixel_range(area, index_axis),
            true,
        )?
        .with_label_max_chars(index_options.ticks.label_max_chars);
        let value_scale =
            LinearScale::fit(value_axis, extent, value_options, area.pixel_range(value_axis))?;

        let reset = mode.is_reset();
        let bar_count = parsed.len().max(1) as f64;
        let group_size = category.band_width() * options.elements.bar.category_percentage;
        let slot_size = group_size / bar_count;
        let thickness = slot_size * options.elements.bar.bar_percentage;
        let base = value_scale.base_pixel();

        let mut datasets = Vec::with_capacity(parsed.len());
        for (slot, (dataset_index, records)) in parsed.into_iter().enumerate() {
            let dataset = dataset_at(config, dataset_index)?;
            let colors = DatasetColors::of(dataset);
            let style = dataset_error_bar_style(config, dataset);
            let elements = records
                .iter()
                .enumerate()
                .map(|(index, record)| {
                    let index_pixel = category.pixel_for_index(index) - group_size / 2.0
                        + slot_size * (slot as f64 + 0.5);
                    let value_pixel = if reset {
                        base
                    } else {
                        value_scale.pixel_for_value(record.get(value_axis))
                    };
                    let (x, y) = if horizontal {
                        (value_pixel, index_pixel)
                    } else {
                        (index_pixel, value_pixel)
                    };
                    let mut error_bars = ErrorBarPixels::default();
                    calculate_scale(&mut error_bars, record, &value_scale, reset);
                    ChartElement {
                        dataset_index,
                        index,
                        shape: ElementShape::Bar(BarShape {
                            x,
                            y,
                            base,
                            thickness,
                            horizontal,
                            fill_color: colors.background,
                            border_color: colors.border,
                            border_width: colors
                                .border_width
                                .unwrap_or(options.elements.bar.border_width),
                        }),
                        error_bars,
                        style: style.clone(),
                    }
                })
                .collect::<Vec<_>>();
            trace!(dataset_index, element_count = elements.len(), "update bar dataset");
            datasets.push(DatasetLayout {
                dataset_index,
                parsed: records,
                elements,
                line: None,
            });
        }
        debug!(
            horizontal,
            dataset_count = datasets.len(),
            reset,
            "update bar chart"
        );

        let (x, y) = if horizontal {
            (AxisScale::Linear(value_scale), AxisScale::Category(category))
        } else {
            (AxisScale::Category(category), AxisScale::Linear(value_scale))
        };
        Ok(ChartLayout {
            viewport,
            scales: ChartScales::Cartesian { x, y },
            datasets,
        })
    }

    fn tooltip_label(
        &self,
        config: &ChartConfig,
        dataset_index: usize,
        index: usize,
    ) -> ChartResult<String> {
        let (_, value_axis, horizontal) = Self::axes(config);
        let dataset = dataset_at(config, dataset_index)?;
        let datum = datum_at(config, dataset_index, index)?;
        let base = base_label(
            dataset.label.as_deref(),
            datum.get(value_axis).unwrap_or(f64::NAN),
        );
        Ok(bar_tooltip_label(&base, datum, horizontal))
    }
}
