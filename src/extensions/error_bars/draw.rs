use tracing::trace;

use crate::extensions::error_bars::geometry::{AxisBounds, ErrorBarPixels, stacked_pairs};
use crate::extensions::error_bars::style::{ErrorBarStyle, StackedBarStyle};
use crate::render::{CanvasLayerKind, Color, LinePrimitive, RenderFrame};

/// Element geometry the error-bar decorator reads.
///
/// `width`/`height` are only set for shapes with a thickness (bars); points
/// and arcs leave them empty so whiskers use the fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ErrorBarAnchor {
    pub x: f64,
    pub y: f64,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Arc geometry for radial error bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcAnchor {
    pub x: f64,
    pub y: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub outer_radius: f64,
}

/// Draws the x and y error bars of a Cartesian element. Returns the number of
/// segments pushed.
pub fn render_error_bar(
    frame: &mut RenderFrame,
    anchor: ErrorBarAnchor,
    pixels: &ErrorBarPixels,
    style: &ErrorBarStyle,
) -> usize {
    let mut drawn = 0;
    if !pixels.x.is_empty() {
        drawn += draw_error_bar_horizontal(frame, anchor, &pixels.x, style);
    }
    if !pixels.y.is_empty() {
        drawn += draw_error_bar_vertical(frame, anchor, &pixels.y, style);
    }
    drawn
}

/// Vertical bar at `anchor.x`, whiskers horizontal. A missing bound sits at
/// `anchor.y`.
pub fn draw_error_bar_vertical(
    frame: &mut RenderFrame,
    anchor: ErrorBarAnchor,
    bounds: &AxisBounds,
    style: &ErrorBarStyle,
) -> usize {
    let bars = stacked_pairs(bounds, anchor.y);
    let mut drawn = 0;
    for (i, (min, max)) in bars.iter().enumerate().rev() {
        let bar = style.stacked(anchor.width, i);
        let half = bar.half_size;
        let x = anchor.x;
        drawn += push_stacked_bar(
            frame,
            &bar,
            [x, *min, x, *max],
            [
                [x - half, *min, x + half, *min],
                [x - half, *max, x + half, *max],
            ],
        );
    }
    drawn
}

/// Horizontal bar at `anchor.y`, whiskers vertical. A missing bound sits at
/// `anchor.x`.
pub fn draw_error_bar_horizontal(
    frame: &mut RenderFrame,
    anchor: ErrorBarAnchor,
    bounds: &AxisBounds,
    style: &ErrorBarStyle,
) -> usize {
    let bars = stacked_pairs(bounds, anchor.x);
    let mut drawn = 0;
    for (i, (min, max)) in bars.iter().enumerate().rev() {
        let bar = style.stacked(anchor.height, i);
        let half = bar.half_size;
        let y = anchor.y;
        drawn += push_stacked_bar(
            frame,
            &bar,
            [*min, y, *max, y],
            [
                [*min, y - half, *min, y + half],
                [*max, y - half, *max, y + half],
            ],
        );
    }
    drawn
}

/// Radial bar along the arc's mid angle, whiskers along the tangent. Bounds
/// are distances from the arc center; a missing bound sits on the outer
/// radius.
pub fn draw_error_bar_arc(
    frame: &mut RenderFrame,
    anchor: ArcAnchor,
    bounds: &AxisBounds,
    style: &ErrorBarStyle,
) -> usize {
    if bounds.is_empty() {
        return 0;
    }
    let angle = (anchor.start_angle + anchor.end_angle) / 2.0;
    let (sin, cos) = angle.sin_cos();
    let (tx, ty) = (-sin, cos);

    let bars = stacked_pairs(bounds, anchor.outer_radius);
    let mut drawn = 0;
    for (i, (min, max)) in bars.iter().enumerate().rev() {
        let bar = style.stacked(None, i);
        let (ex, ey) = (tx * bar.half_size, ty * bar.half_size);
        let (min_x, min_y) = (anchor.x + min * cos, anchor.y + min * sin);
        let (max_x, max_y) = (anchor.x + max * cos, anchor.y + max * sin);
        drawn += push_stacked_bar(
            frame,
            &bar,
            [min_x, min_y, max_x, max_y],
            [
                [min_x + ex, min_y + ey, min_x - ex, min_y - ey],
                [max_x + ex, max_y + ey, max_x - ex, max_y - ey],
            ],
        );
    }
    drawn
}

/// Main segment first, then both whiskers.
fn push_stacked_bar(
    frame: &mut RenderFrame,
    bar: &StackedBarStyle,
    main: [f64; 4],
    whiskers: [[f64; 4]; 2],
) -> usize {
    let mut drawn = usize::from(push_segment(frame, main, bar.line_width, bar.color));
    for whisker in whiskers {
        drawn += usize::from(push_segment(
            frame,
            whisker,
            bar.whisker_line_width,
            bar.whisker_color,
        ));
    }
    drawn
}

fn push_segment(frame: &mut RenderFrame, [x1, y1, x2, y2]: [f64; 4], width: f64, color: Color) -> bool {
    let line = LinePrimitive::new(x1, y1, x2, y2, width, color);
    if !line.is_drawable() {
        trace!(x1, y1, x2, y2, width, "skip non-drawable error bar segment");
        return false;
    }
    frame.push_line(CanvasLayerKind::ErrorBars, line);
    true
}

#[cfg(test)]
mod tests {
    use super::{ArcAnchor, ErrorBarAnchor, draw_error_bar_arc, render_error_bar};
    use crate::core::{ErrorValue, Viewport};
    use crate::extensions::error_bars::{AxisBounds, ErrorBarPixels, ErrorBarStyle};
    use crate::render::{CanvasLayerKind, RenderFrame};

    fn frame() -> RenderFrame {
        RenderFrame::new(Viewport::new(400, 400))
    }

    #[test]
    fn vertical_bar_spans_bounds_with_two_whiskers() {
        let mut frame = frame();
        let pixels = ErrorBarPixels {
            y: AxisBounds {
                min: Some(ErrorValue::Single(120.0)),
                max: Some(ErrorValue::Single(80.0)),
            },
            ..ErrorBarPixels::default()
        };
        let anchor = ErrorBarAnchor {
            x: 50.0,
            y: 100.0,
            width: Some(40.0),
            height: None,
        };
        let drawn = render_error_bar(&mut frame, anchor, &pixels, &ErrorBarStyle::default());
        assert_eq!(drawn, 3);

        let lines = frame.lines(CanvasLayerKind::ErrorBars);
        assert_eq!((lines[0].x1, lines[0].y1, lines[0].x2, lines[0].y2), (50.0, 120.0, 50.0, 80.0));
        assert_eq!((lines[1].x1, lines[1].x2), (46.0, 54.0));
        assert_eq!(lines[2].y1, 80.0);
    }

    #[test]
    fn stacked_bars_draw_outermost_first() {
        let mut frame = frame();
        let pixels = ErrorBarPixels {
            y: AxisBounds {
                min: Some(ErrorValue::stacked([110.0, 130.0])),
                max: Some(ErrorValue::stacked([90.0, 70.0])),
            },
            ..ErrorBarPixels::default()
        };
        let anchor = ErrorBarAnchor {
            x: 10.0,
            y: 100.0,
            ..ErrorBarAnchor::default()
        };
        render_error_bar(&mut frame, anchor, &pixels, &ErrorBarStyle::default());

        let lines = frame.lines(CanvasLayerKind::ErrorBars);
        assert_eq!(lines.len(), 6);
        assert_eq!((lines[0].y1, lines[0].y2), (130.0, 70.0));
        assert_eq!(lines[0].stroke_width, 3.0);
        assert_eq!((lines[3].y1, lines[3].y2), (110.0, 90.0));
        assert_eq!(lines[3].stroke_width, 1.0);
    }

    #[test]
    fn arc_bar_follows_mid_angle() {
        let mut frame = frame();
        let bounds = AxisBounds {
            min: Some(ErrorValue::Single(40.0)),
            max: Some(ErrorValue::Single(60.0)),
        };
        let anchor = ArcAnchor {
            x: 200.0,
            y: 200.0,
            start_angle: 0.0,
            end_angle: 0.0,
            outer_radius: 50.0,
        };
        draw_error_bar_arc(&mut frame, anchor, &bounds, &ErrorBarStyle::default());

        let lines = frame.lines(CanvasLayerKind::ErrorBars);
        assert_eq!((lines[0].x1, lines[0].y1), (240.0, 200.0));
        assert_eq!((lines[0].x2, lines[0].y2), (260.0, 200.0));
        assert_eq!((lines[1].x1, lines[1].y1), (240.0, 210.0));
        assert_eq!((lines[1].x2, lines[1].y2), (240.0, 190.0));
    }

    #[test]
    fn non_finite_segments_are_skipped() {
        let mut frame = frame();
        let pixels = ErrorBarPixels {
            y: AxisBounds {
                min: Some(ErrorValue::Single(f64::NAN)),
                max: Some(ErrorValue::Single(80.0)),
            },
            ..ErrorBarPixels::default()
        };
        let anchor = ErrorBarAnchor {
            x: 10.0,
            y: 100.0,
            ..ErrorBarAnchor::default()
        };
        let drawn = render_error_bar(&mut frame, anchor, &pixels, &ErrorBarStyle::default());
        assert_eq!(drawn, 1);
        frame.validate().expect("frame stays valid");
    }
}
