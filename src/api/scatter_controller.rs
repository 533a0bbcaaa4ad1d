#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::core::{
    Axis, CartesianScale, LinearScale, ParsedDatum, Viewport, error_bar_extent, format_number,
    merge_extents,
};
use crate::error::ChartResult;
use crate::extensions::error_bars::{
    ErrorBarPixels, ErrorBarStyle, calculate_scale, scatter_tooltip_label,
};

use super::chart_config::{ChartConfig, PointOptions};
use super::controller::{
    AxisScale, ChartController, ChartLayout, ChartScales, DatasetColors, DatasetLayout,
    ScaleKind, UpdateMode, dataset_at, dataset_error_bar_style, datum_at,
};
use super::elements::{ChartElement, ElementKind, ElementShape, PointShape};
use super::layout_helpers::{cartesian_chart_area, linear_tick_label_preview};
use super::series_projection::parse_xy_records;

/// `scatterWithErrorBars`: free `x`/`y` points on two linear axes, with
/// error bars on both.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScatterWithErrorBarsController;

impl ScatterWithErrorBarsController {
    pub const ID: &'static str = "scatterWithErrorBars";
}

/// Shared per-dataset inputs of point projection.
struct PointProjection<'a> {
    dataset_index: usize,
    x_scale: &'a LinearScale,
    y_scale: &'a LinearScale,
    point: PointOptions,
    colors: DatasetColors,
    style: &'a ErrorBarStyle,
    reset: bool,
}

impl PointProjection<'_> {
    fn project(&self, index: usize, record: &ParsedDatum) -> ChartElement {
        let y = if self.reset {
            self.y_scale.base_pixel()
        } else {
            self.y_scale.pixel_for_value(record.y)
        };
        let mut error_bars = ErrorBarPixels::default();
        calculate_scale(&mut error_bars, record, self.x_scale, self.reset);
        calculate_scale(&mut error_bars, record, self.y_scale, self.reset);
        ChartElement {
            dataset_index: self.dataset_index,
            index,
            shape: ElementShape::Point(PointShape {
                x: self.x_scale.pixel_for_value(record.x),
                y,
                radius: self.point.radius,
                hover_radius: self.point.hover_radius,
                hit_radius: self.point.hit_radius,
                fill_color: self.colors.background,
                border_color: self.colors.border,
                border_width: self.point.border_width,
            }),
            error_bars,
            style: self.style.clone(),
        }
    }
}

fn project_points(projection: &PointProjection<'_>, records: &[ParsedDatum]) -> Vec<ChartElement> {
    // Large series may be projected in parallel; output order is unchanged.
    #[cfg(feature = "parallel-projection")]
    {
        records
            .par_iter()
            .enumerate()
            .map(|(index, record)| projection.project(index, record))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| projection.project(index, record))
            .collect()
    }
}

impl ChartController for ScatterWithErrorBarsController {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn element_kind(&self) -> ElementKind {
        ElementKind::PointWithErrorBar
    }

    fn scale_kinds(&self) -> &'static [ScaleKind] {
        &[ScaleKind::Linear]
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
            .map(|(dataset_index, dataset)| (dataset_index, parse_xy_records(dataset)))
            .collect();
        let x_extent = merge_extents(
            parsed
                .iter()
                .map(|(_, records)| error_bar_extent(records, Axis::X)),
        );
        let y_extent = merge_extents(
            parsed
                .iter()
                .map(|(_, records)| error_bar_extent(records, Axis::Y)),
        );
        let x_options = options.scales.x.linear_options(false);
        let y_options = options.scales.y.linear_options(false);
        let area = cartesian_chart_area(
            viewport,
            options,
            &linear_tick_label_preview(y_extent, y_options),
        )?;
        let x_scale = LinearScale::fit(Axis::X, x_extent, x_options, area.pixel_range(Axis::X))?;
        let y_scale = LinearScale::fit(Axis::Y, y_extent, y_options, area.pixel_range(Axis::Y))?;

        let reset = mode.is_reset();
        let mut datasets = Vec::with_capacity(parsed.len());
        for (dataset_index, records) in parsed {
            let dataset = dataset_at(config, dataset_index)?;
            let style = dataset_error_bar_style(config, dataset);
            let projection = PointProjection {
                dataset_index,
                x_scale: &x_scale,
                y_scale: &y_scale,
                point: options.elements.point,
                colors: DatasetColors::of(dataset),
                style: &style,
                reset,
            };
            let elements = project_points(&projection, &records);
            trace!(dataset_index, element_count = elements.len(), "update scatter dataset");
            datasets.push(DatasetLayout {
                dataset_index,
                parsed: records,
                elements,
                line: None,
            });
        }
        debug!(dataset_count = datasets.len(), reset, "update scatter chart");

        Ok(ChartLayout {
            viewport,
            scales: ChartScales::Cartesian {
                x: AxisScale::Linear(x_scale),
                y: AxisScale::Linear(y_scale),
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
        let datum = datum_at(config, dataset_index, index)?;
        let x_label = format_number(datum.x.unwrap_or(f64::NAN));
        let y_label = format_number(datum.y.unwrap_or(f64::NAN));
        Ok(scatter_tooltip_label(&x_label, &y_label, datum))
    }
}

#[cfg(test)]
mod tests {
    use super::ScatterWithErrorBarsController;
    use crate::api::chart_config::{ChartConfig, Dataset};
    use crate::api::controller::{ChartController, UpdateMode};
    use crate::core::{Axis, ErrorDatum, Viewport};

    fn config() -> ChartConfig {
        ChartConfig::new("scatterWithErrorBars").with_dataset(Dataset::new([
            ErrorDatum::xy(2.0, 5.0)
                .with_bounds(Axis::X, 1.0, 3.0)
                .with_bounds(Axis::Y, 4.0, 7.0),
            ErrorDatum::xy(8.0, 1.0),
        ]))
    }

    #[test]
    fn both_axes_get_pixel_bounds() {
        let layout = ScatterWithErrorBarsController
            .update(&config(), Viewport::new(400, 400), UpdateMode::Default)
            .expect("layout");
        let element = layout.element(0, 0).expect("element");
        let (x, y) = element.center();
        let x_min = element.error_bars.x.min.as_ref().expect("xMin").values()[0];
        let y_max = element.error_bars.y.max.as_ref().expect("yMax").values()[0];
        assert!(x_min < x);
        assert!(y_max < y);
    }

    #[test]
    fn reset_keeps_x_and_collapses_bounds() {
        let reset = ScatterWithErrorBarsController
            .update(&config(), Viewport::new(400, 400), UpdateMode::Reset)
            .expect("layout");
        let default = ScatterWithErrorBarsController
            .update(&config(), Viewport::new(400, 400), UpdateMode::Default)
            .expect("layout");
        let reset_element = reset.element(0, 0).expect("reset");
        assert_eq!(
            reset_element.center().0,
            default.element(0, 0).expect("default").center().0
        );
        let x_bounds = &reset_element.error_bars.x;
        assert_eq!(x_bounds.min, x_bounds.max);
    }

    #[test]
    fn tooltip_brackets_each_axis() {
        let config = config();
        assert_eq!(
            ScatterWithErrorBarsController
                .tooltip_label(&config, 0, 0)
                .expect("label"),
            "(2 [1 .. 3], 5 [4 .. 7])"
        );
        assert_eq!(
            ScatterWithErrorBarsController
                .tooltip_label(&config, 0, 1)
                .expect("label"),
            "(8, 1)"
        );
    }
}
