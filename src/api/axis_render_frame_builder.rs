use std::f64::consts::FRAC_PI_2;

use crate::core::ticks::format_tick;
use crate::core::{Axis, CartesianScale, ChartArea, RadialLinearScale};
use crate::error::ChartResult;
use crate::render::{
    CanvasLayerKind, CirclePrimitive, Color, LinePrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::chart_config::AxisOptions;
use super::layout_helpers::{TICK_LABEL_PADDING_PX, estimate_label_text_width_px};
use super::{AxisScale, ChartEngine, ChartLayout, ChartScales};

/// Minimum free space between two category tick labels.
const CATEGORY_LABEL_GAP_PX: f64 = 6.0;

/// One tick: pixel along the axis and its label.
struct AxisTick {
    pixel: f64,
    label: String,
}

impl<R: Renderer> ChartEngine<R> {
    /// Grid lines, axis lines, tick labels and titles for the layout's scales.
    pub(super) fn build_axis_primitives(
        &self,
        frame: &mut RenderFrame,
        layout: &ChartLayout,
    ) -> ChartResult<()> {
        let scales = &self.config.options.scales;
        match &layout.scales {
            ChartScales::Cartesian { x, y } => {
                let area = layout.scales.chart_area()?;
                push_cartesian_axis(frame, area, x, &scales.x);
                push_cartesian_axis(frame, area, y, &scales.y);
            }
            ChartScales::Radial(scale) => push_radial_axis(frame, scale, &scales.r),
        }
        Ok(())
    }
}

fn axis_ticks(scale: &AxisScale, options: &AxisOptions) -> Vec<AxisTick> {
    match scale {
        AxisScale::Linear(linear) => {
            let ticks = linear.ticks();
            let spacing = match ticks {
                [first, second, ..] => second - first,
                _ => 1.0,
            };
            ticks
                .iter()
                .map(|tick| AxisTick {
                    pixel: linear.pixel_for_value(*tick),
                    label: format_tick(*tick, spacing),
                })
                .collect()
        }
        AxisScale::Category(category) => {
            let labels: Vec<String> = (0..category.len())
                .filter_map(|index| category.tick_label(index))
                .collect();
            let step = category_skip_step(
                &labels,
                category.pixels().span(),
                category.axis(),
                options.ticks.font_size_px,
            );
            labels
                .into_iter()
                .enumerate()
                .step_by(step)
                .map(|(index, label)| AxisTick {
                    pixel: category.pixel_for_index(index),
                    label,
                })
                .collect()
        }
    }
}

/// Keeps every `n`-th category label so labels never overlap.
fn category_skip_step(labels: &[String], axis_length: f64, axis: Axis, font_size_px: f64) -> usize {
    if labels.is_empty() || axis_length <= 0.0 {
        return 1;
    }
    let label_extent = match axis {
        Axis::X => labels
            .iter()
            .map(|label| estimate_label_text_width_px(label, font_size_px))
            .fold(0.0, f64::max),
        Axis::Y | Axis::R => font_size_px,
    } + CATEGORY_LABEL_GAP_PX;
    let fitting = (axis_length / label_extent).floor().max(1.0) as usize;
    labels.len().div_ceil(fitting).max(1)
}

fn push_cartesian_axis(
    frame: &mut RenderFrame,
    area: ChartArea,
    scale: &AxisScale,
    options: &AxisOptions,
) {
    if !options.display {
        return;
    }
    let axis = scale.axis();
    let ticks = axis_ticks(scale, options);

    if options.grid.display {
        for tick in &ticks {
            let line = match axis {
                Axis::X => LinePrimitive::new(
                    tick.pixel,
                    area.top,
                    tick.pixel,
                    area.bottom,
                    options.grid.line_width,
                    options.grid.color,
                ),
                Axis::Y | Axis::R => LinePrimitive::new(
                    area.left,
                    tick.pixel,
                    area.right,
                    tick.pixel,
                    options.grid.line_width,
                    options.grid.color,
                ),
            };
            if line.is_drawable() {
                frame.push_line(CanvasLayerKind::Grid, line);
            }
        }
    }

    let border = match axis {
        Axis::X => LinePrimitive::new(
            area.left,
            area.bottom,
            area.right,
            area.bottom,
            options.grid.line_width,
            options.grid.color,
        ),
        Axis::Y | Axis::R => LinePrimitive::new(
            area.left,
            area.top,
            area.left,
            area.bottom,
            options.grid.line_width,
            options.grid.color,
        ),
    };
    frame.push_line(CanvasLayerKind::Axis, border);

    if options.ticks.display {
        let font = options.ticks.font_size_px;
        for tick in ticks.into_iter().filter(|tick| !tick.label.is_empty()) {
            let text = match axis {
                Axis::X => TextPrimitive::new(
                    tick.label,
                    tick.pixel,
                    area.bottom + font + TICK_LABEL_PADDING_PX / 2.0,
                    font,
                    options.ticks.color,
                    TextHAlign::Center,
                ),
                Axis::Y | Axis::R => TextPrimitive::new(
                    tick.label,
                    area.left - TICK_LABEL_PADDING_PX / 2.0,
                    tick.pixel + font / 3.0,
                    font,
                    options.ticks.color,
                    TextHAlign::Right,
                ),
            };
            if text.validate().is_ok() {
                frame.push_text(CanvasLayerKind::Axis, text);
            }
        }
    }

    if options.title.display && !options.title.text.is_empty() {
        let font = options.title.font_size_px;
        let text = match axis {
            Axis::X => TextPrimitive::new(
                options.title.text.clone(),
                (area.left + area.right) / 2.0,
                f64::from(frame.viewport.height) - font / 2.0,
                font,
                options.title.color,
                TextHAlign::Center,
            ),
            Axis::Y | Axis::R => TextPrimitive::new(
                options.title.text.clone(),
                font,
                (area.top + area.bottom) / 2.0,
                font,
                options.title.color,
                TextHAlign::Center,
            )
            .rotated(-FRAC_PI_2),
        };
        frame.push_text(CanvasLayerKind::Axis, text);
    }
}

/// Concentric rings per tick with the tick value above each ring.
fn push_radial_axis(frame: &mut RenderFrame, scale: &RadialLinearScale, options: &AxisOptions) {
    if !options.display {
        return;
    }
    let (cx, cy) = scale.center();
    let ticks = scale.ticks();
    let spacing = match ticks {
        [first, second, ..] => second - first,
        _ => 1.0,
    };
    for tick in ticks {
        let radius = scale.distance_from_center_for_value(*tick);
        if !radius.is_finite() || radius <= 0.0 {
            continue;
        }
        if options.grid.display {
            frame.push_circle(
                CanvasLayerKind::Grid,
                CirclePrimitive {
                    cx,
                    cy,
                    radius,
                    fill_color: Color::TRANSPARENT,
                    border_color: options.grid.color,
                    border_width: options.grid.line_width,
                },
            );
        }
        if options.ticks.display {
            frame.push_text(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    format_tick(*tick, spacing),
                    cx,
                    cy - radius + options.ticks.font_size_px / 2.0,
                    options.ticks.font_size_px,
                    options.ticks.color,
                    TextHAlign::Center,
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::category_skip_step;
    use crate::core::Axis;

    #[test]
    fn crowded_categories_are_skipped() {
        let labels: Vec<String> = (0..100).map(|i| format!("{i:07}")).collect();
        let step = category_skip_step(&labels, 400.0, Axis::X, 12.0);
        assert!(step > 1);
        let few: Vec<String> = vec!["a".to_owned(), "b".to_owned()];
        assert_eq!(category_skip_step(&few, 400.0, Axis::X, 12.0), 1);
    }
}
