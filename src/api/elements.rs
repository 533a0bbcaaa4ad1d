use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::extensions::error_bars::{
    ArcAnchor, ErrorBarAnchor, ErrorBarPixels, ErrorBarStyle, Interpolate, draw_error_bar_arc,
    render_error_bar,
};
use crate::render::{
    CanvasLayerKind, CirclePrimitive, Color, RectPrimitive, RenderFrame, WedgePrimitive,
};

/// Element kinds a controller lays out, by registry id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    RectangleWithErrorBar,
    PointWithErrorBar,
    ArcWithErrorBar,
}

impl ElementKind {
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::RectangleWithErrorBar => "rectangleWithErrorBar",
            Self::PointWithErrorBar => "pointWithErrorBar",
            Self::ArcWithErrorBar => "arcWithErrorBar",
        }
    }
}

/// Address of one element: dataset position and data index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementRef {
    pub dataset_index: usize,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarShape {
    /// Center on the index axis (vertical bars) or value edge (horizontal).
    pub x: f64,
    pub y: f64,
    /// Value-axis pixel the bar grows from.
    pub base: f64,
    /// Size across the index axis.
    pub thickness: f64,
    pub horizontal: bool,
    pub fill_color: Color,
    pub border_color: Color,
    pub border_width: f64,
}

impl BarShape {
    #[must_use]
    pub fn width(&self) -> f64 {
        if self.horizontal {
            (self.x - self.base).abs()
        } else {
            self.thickness
        }
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        if self.horizontal {
            self.thickness
        } else {
            (self.y - self.base).abs()
        }
    }

    /// `(left, top, right, bottom)` in pixels.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let half = self.thickness / 2.0;
        if self.horizontal {
            (
                self.x.min(self.base),
                self.y - half,
                self.x.max(self.base),
                self.y + half,
            )
        } else {
            (
                self.x - half,
                self.y.min(self.base),
                self.x + half,
                self.y.max(self.base),
            )
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointShape {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub hover_radius: f64,
    pub hit_radius: f64,
    pub fill_color: Color,
    pub border_color: Color,
    pub border_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcShape {
    pub x: f64,
    pub y: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub fill_color: Color,
    pub border_color: Color,
    pub border_width: f64,
}

impl ArcShape {
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let (dx, dy) = (x - self.x, y - self.y);
        let distance = dx.hypot(dy);
        if distance < self.inner_radius || distance > self.outer_radius {
            return false;
        }
        let span = self.end_angle - self.start_angle;
        if span >= TAU {
            return true;
        }
        let offset = (dy.atan2(dx) - self.start_angle).rem_euclid(TAU);
        offset <= span
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ElementShape {
    Bar(BarShape),
    Point(PointShape),
    Arc(ArcShape),
}

/// One laid-out data element: its base shape plus error-bar decoration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartElement {
    pub dataset_index: usize,
    pub index: usize,
    pub shape: ElementShape,
    pub error_bars: ErrorBarPixels,
    pub style: ErrorBarStyle,
}

impl ChartElement {
    #[must_use]
    pub fn element_ref(&self) -> ElementRef {
        ElementRef {
            dataset_index: self.dataset_index,
            index: self.index,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self.shape {
            ElementShape::Bar(_) => ElementKind::RectangleWithErrorBar,
            ElementShape::Point(_) => ElementKind::PointWithErrorBar,
            ElementShape::Arc(_) => ElementKind::ArcWithErrorBar,
        }
    }

    /// Anchor point: bar value edge, point center, or arc mid-radius.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        match self.shape {
            ElementShape::Bar(bar) => (bar.x, bar.y),
            ElementShape::Point(point) => (point.x, point.y),
            ElementShape::Arc(arc) => {
                let angle = (arc.start_angle + arc.end_angle) / 2.0;
                let radius = (arc.inner_radius + arc.outer_radius) / 2.0;
                (arc.x + radius * angle.cos(), arc.y + radius * angle.sin())
            }
        }
    }

    /// Hit test against the element's shape.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        match self.shape {
            ElementShape::Bar(bar) => {
                let (left, top, right, bottom) = bar.bounds();
                x >= left && x <= right && y >= top && y <= bottom
            }
            ElementShape::Point(point) => {
                (x - point.x).hypot(y - point.y) <= point.radius + point.hit_radius
            }
            ElementShape::Arc(arc) => arc.contains(x, y),
        }
    }

    /// Pixel distance from `(x, y)` to the element anchor.
    #[must_use]
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        let (cx, cy) = self.center();
        (x - cx).hypot(y - cy)
    }

    /// Paints the base shape into the series layer, then the error bars on
    /// top. Returns the number of error-bar segments drawn.
    pub fn draw(&self, frame: &mut RenderFrame, hovered: bool) -> usize {
        match self.shape {
            ElementShape::Bar(bar) => {
                let (left, top, right, bottom) = bar.bounds();
                let rect = RectPrimitive::new(left, top, right - left, bottom - top, bar.fill_color)
                    .with_border(bar.border_color, bar.border_width);
                push_shape(frame, rect.validate().is_ok(), self, |frame| {
                    frame.push_rect(CanvasLayerKind::Series, rect);
                });
                let anchor = ErrorBarAnchor {
                    x: bar.x,
                    y: bar.y,
                    width: Some(bar.width()),
                    height: Some(bar.height()),
                };
                render_error_bar(frame, anchor, &self.error_bars, &self.style)
            }
            ElementShape::Point(point) => {
                let radius = if hovered {
                    point.hover_radius
                } else {
                    point.radius
                };
                let circle = CirclePrimitive {
                    cx: point.x,
                    cy: point.y,
                    radius,
                    fill_color: point.fill_color,
                    border_color: point.border_color,
                    border_width: point.border_width,
                };
                push_shape(frame, circle.validate().is_ok() && radius >= 0.1, self, |frame| {
                    frame.push_circle(CanvasLayerKind::Series, circle);
                });
                let anchor = ErrorBarAnchor {
                    x: point.x,
                    y: point.y,
                    width: None,
                    height: None,
                };
                render_error_bar(frame, anchor, &self.error_bars, &self.style)
            }
            ElementShape::Arc(arc) => {
                let wedge = WedgePrimitive {
                    cx: arc.x,
                    cy: arc.y,
                    inner_radius: arc.inner_radius,
                    outer_radius: arc.outer_radius,
                    start_angle: arc.start_angle,
                    end_angle: arc.end_angle,
                    fill_color: arc.fill_color,
                    border_color: arc.border_color,
                    border_width: arc.border_width,
                };
                let visible = wedge.validate().is_ok() && arc.end_angle > arc.start_angle;
                push_shape(frame, visible, self, |frame| {
                    frame.push_wedge(CanvasLayerKind::Series, wedge);
                });
                let anchor = ArcAnchor {
                    x: arc.x,
                    y: arc.y,
                    start_angle: arc.start_angle,
                    end_angle: arc.end_angle,
                    outer_radius: arc.outer_radius,
                };
                draw_error_bar_arc(frame, anchor, &self.error_bars.r, &self.style)
            }
        }
    }
}

fn push_shape(
    frame: &mut RenderFrame,
    drawable: bool,
    element: &ChartElement,
    push: impl FnOnce(&mut RenderFrame),
) {
    if drawable {
        push(frame);
    } else {
        trace!(
            dataset_index = element.dataset_index,
            index = element.index,
            "skip non-drawable element shape"
        );
    }
}

impl Interpolate for BarShape {
    fn interpolate(&self, to: &Self, factor: f64) -> Self {
        Self {
            x: self.x.interpolate(&to.x, factor),
            y: self.y.interpolate(&to.y, factor),
            base: self.base.interpolate(&to.base, factor),
            thickness: self.thickness.interpolate(&to.thickness, factor),
            horizontal: to.horizontal,
            fill_color: self.fill_color.interpolate(&to.fill_color, factor),
            border_color: self.border_color.interpolate(&to.border_color, factor),
            border_width: self.border_width.interpolate(&to.border_width, factor),
        }
    }
}

impl Interpolate for PointShape {
    fn interpolate(&self, to: &Self, factor: f64) -> Self {
        Self {
            x: self.x.interpolate(&to.x, factor),
            y: self.y.interpolate(&to.y, factor),
            radius: self.radius.interpolate(&to.radius, factor),
            hover_radius: self.hover_radius.interpolate(&to.hover_radius, factor),
            hit_radius: to.hit_radius,
            fill_color: self.fill_color.interpolate(&to.fill_color, factor),
            border_color: self.border_color.interpolate(&to.border_color, factor),
            border_width: self.border_width.interpolate(&to.border_width, factor),
        }
    }
}

impl Interpolate for ArcShape {
    fn interpolate(&self, to: &Self, factor: f64) -> Self {
        Self {
            x: self.x.interpolate(&to.x, factor),
            y: self.y.interpolate(&to.y, factor),
            inner_radius: self.inner_radius.interpolate(&to.inner_radius, factor),
            outer_radius: self.outer_radius.interpolate(&to.outer_radius, factor),
            start_angle: self.start_angle.interpolate(&to.start_angle, factor),
            end_angle: self.end_angle.interpolate(&to.end_angle, factor),
            fill_color: self.fill_color.interpolate(&to.fill_color, factor),
            border_color: self.border_color.interpolate(&to.border_color, factor),
            border_width: self.border_width.interpolate(&to.border_width, factor),
        }
    }
}

impl Interpolate for ElementShape {
    fn interpolate(&self, to: &Self, factor: f64) -> Self {
        match (self, to) {
            (Self::Bar(from), Self::Bar(to)) => Self::Bar(from.interpolate(to, factor)),
            (Self::Point(from), Self::Point(to)) => Self::Point(from.interpolate(to, factor)),
            (Self::Arc(from), Self::Arc(to)) => Self::Arc(from.interpolate(to, factor)),
            _ => *to,
        }
    }
}

impl Interpolate for ChartElement {
    fn interpolate(&self, to: &Self, factor: f64) -> Self {
        Self {
            dataset_index: to.dataset_index,
            index: to.index,
            shape: self.shape.interpolate(&to.shape, factor),
            error_bars: self.error_bars.interpolate(&to.error_bars, factor),
            style: self.style.interpolate(&to.style, factor),
        }
    }
}
