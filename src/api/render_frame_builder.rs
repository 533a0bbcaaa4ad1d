use tracing::trace;

use crate::error::ChartResult;
use crate::render::{CanvasLayerKind, LinePrimitive, PolygonPrimitive, RenderFrame, Renderer};

use super::{ChartEngine, ChartLayout, DatasetLayout, LineSeriesStyle};

impl<R: Renderer> ChartEngine<R> {
    /// Frame of the settled layout.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        self.build_render_frame_for(&self.layout)
    }

    /// Axes and grid first, then per dataset its area fill, connecting line,
    /// element shapes and error bars.
    pub fn build_render_frame_for(&self, layout: &ChartLayout) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(layout.viewport);
        self.build_axis_primitives(&mut frame, layout)?;

        let mut error_bar_segments = 0;
        for dataset in &layout.datasets {
            if let Some(line) = dataset.line {
                push_line_series(&mut frame, dataset, line);
            }
            for element in &dataset.elements {
                let hovered = self.hovered == Some(element.element_ref());
                error_bar_segments += element.draw(&mut frame, hovered);
            }
        }
        trace!(
            element_count = layout.element_count(),
            error_bar_segments,
            "build render frame"
        );
        frame.validate()?;
        Ok(frame)
    }
}

/// Runs of consecutive finite element anchors; a non-finite point breaks the line.
fn finite_runs(dataset: &DatasetLayout) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (x, y) in dataset.elements.iter().map(|element| element.center()) {
        if x.is_finite() && y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn push_line_series(frame: &mut RenderFrame, dataset: &DatasetLayout, line: LineSeriesStyle) {
    let runs = finite_runs(dataset);
    if let Some(fill_color) = line.fill_color {
        for run in runs.iter().filter(|run| run.len() >= 2) {
            let mut points = run.clone();
            if let (Some(&(first_x, _)), Some(&(last_x, _))) = (run.first(), run.last()) {
                points.push((last_x, line.fill_base));
                points.push((first_x, line.fill_base));
            }
            let polygon = PolygonPrimitive { points, fill_color };
            if polygon.validate().is_ok() {
                frame.push_polygon(CanvasLayerKind::Series, polygon);
            }
        }
    }
    for run in &runs {
        for pair in run.windows(2) {
            let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
            let segment = LinePrimitive::new(x1, y1, x2, y2, line.border_width, line.border_color);
            if segment.is_drawable() {
                frame.push_line(CanvasLayerKind::Series, segment);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::finite_runs;
    use crate::api::controller::DatasetLayout;
    use crate::api::elements::{ChartElement, ElementShape, PointShape};
    use crate::extensions::error_bars::{ErrorBarPixels, ErrorBarStyle};
    use crate::render::Color;

    fn point(index: usize, y: f64) -> ChartElement {
        ChartElement {
            dataset_index: 0,
            index,
            shape: ElementShape::Point(PointShape {
                x: index as f64 * 10.0,
                y,
                radius: 3.0,
                hover_radius: 4.0,
                hit_radius: 1.0,
                fill_color: Color::BLACK,
                border_color: Color::BLACK,
                border_width: 1.0,
            }),
            error_bars: ErrorBarPixels::default(),
            style: ErrorBarStyle::default(),
        }
    }

    #[test]
    fn nan_points_split_the_line() {
        let dataset = DatasetLayout {
            dataset_index: 0,
            parsed: Vec::new(),
            elements: vec![point(0, 1.0), point(1, 2.0), point(2, f64::NAN), point(3, 4.0)],
            line: None,
        };
        let runs = finite_runs(&dataset);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec![(0.0, 1.0), (10.0, 2.0)]);
        assert_eq!(runs[1], vec![(30.0, 4.0)]);
    }
}
