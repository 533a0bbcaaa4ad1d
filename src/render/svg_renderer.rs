//! SVG document backend.
//!
//! Produces a standalone vector document per frame, painting layers in order.

use std::f64::consts::PI;
use std::fmt::Write as FmtWrite;
use std::path::Path;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, Color, LayerPrimitives, LinePrimitive, PolygonPrimitive, RectPrimitive,
    RenderFrame, Renderer, TextHAlign, TextPrimitive, WedgePrimitive,
};

#[derive(Debug, Clone)]
pub struct SvgRenderer {
    background: Option<Color>,
    document: String,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            background: Some(Color::WHITE),
            document: String::new(),
        }
    }

    /// Sets background color (`None` for transparent).
    #[must_use]
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    /// Document produced by the last `render` call.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn write_to_file(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        if self.document.is_empty() {
            return Err(ChartError::InvalidData(
                "nothing rendered yet".to_owned(),
            ));
        }
        std::fs::write(path, &self.document)?;
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let mut out = String::with_capacity(4096);
        let (width, height) = (frame.viewport.width, frame.viewport.height);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );
        if let Some(background) = self.background {
            let _ = writeln!(
                out,
                r#"  <rect x="0" y="0" width="{width}" height="{height}" fill="{}"/>"#,
                background.to_css()
            );
        }
        for layer in &frame.layers {
            write_layer(&mut out, layer);
        }
        out.push_str("</svg>\n");
        self.document = out;
        Ok(())
    }
}

fn write_layer(out: &mut String, layer: &LayerPrimitives) {
    if layer.is_empty() {
        return;
    }
    let _ = writeln!(out, r#"  <g data-layer="{:?}">"#, layer.kind);
    for polygon in &layer.polygons {
        write_polygon(out, polygon);
    }
    for rect in &layer.rects {
        write_rect(out, rect);
    }
    for wedge in &layer.wedges {
        write_wedge(out, wedge);
    }
    for line in &layer.lines {
        write_line(out, line);
    }
    for circle in &layer.circles {
        write_circle(out, circle);
    }
    for text in &layer.texts {
        write_text(out, text);
    }
    out.push_str("  </g>\n");
}

fn write_line(out: &mut String, line: &LinePrimitive) {
    let _ = writeln!(
        out,
        r#"    <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
        line.x1,
        line.y1,
        line.x2,
        line.y2,
        line.color.to_css(),
        line.stroke_width
    );
}

fn write_rect(out: &mut String, rect: &RectPrimitive) {
    let _ = write!(
        out,
        r#"    <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}""#,
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        rect.fill_color.to_css()
    );
    write_stroke(out, rect.border_color, rect.border_width);
    out.push_str("/>\n");
}

fn write_circle(out: &mut String, circle: &CirclePrimitive) {
    let _ = write!(
        out,
        r#"    <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}""#,
        circle.cx,
        circle.cy,
        circle.radius,
        circle.fill_color.to_css()
    );
    write_stroke(out, circle.border_color, circle.border_width);
    out.push_str("/>\n");
}

fn write_wedge(out: &mut String, wedge: &WedgePrimitive) {
    let span = wedge.end_angle - wedge.start_angle;
    if span.abs() < f64::EPSILON || wedge.outer_radius <= 0.0 {
        return;
    }
    if span.abs() >= 2.0 * PI - 1e-9 && wedge.inner_radius <= 0.0 {
        write_circle(
            out,
            &CirclePrimitive {
                cx: wedge.cx,
                cy: wedge.cy,
                radius: wedge.outer_radius,
                fill_color: wedge.fill_color,
                border_color: wedge.border_color,
                border_width: wedge.border_width,
            },
        );
        return;
    }

    let point = |radius: f64, angle: f64| {
        (
            wedge.cx + radius * angle.cos(),
            wedge.cy + radius * angle.sin(),
        )
    };
    let large_arc = u8::from(span.abs() > PI);
    let (ox1, oy1) = point(wedge.outer_radius, wedge.start_angle);
    let (ox2, oy2) = point(wedge.outer_radius, wedge.end_angle);
    let mut d = format!(
        "M {ox1:.2} {oy1:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {ox2:.2} {oy2:.2}",
        r = wedge.outer_radius
    );
    if wedge.inner_radius > 0.0 {
        let (ix2, iy2) = point(wedge.inner_radius, wedge.end_angle);
        let (ix1, iy1) = point(wedge.inner_radius, wedge.start_angle);
        let _ = write!(
            d,
            " L {ix2:.2} {iy2:.2} A {r:.2} {r:.2} 0 {large_arc} 0 {ix1:.2} {iy1:.2}",
            r = wedge.inner_radius
        );
    } else {
        let _ = write!(d, " L {:.2} {:.2}", wedge.cx, wedge.cy);
    }
    d.push_str(" Z");

    let _ = write!(
        out,
        r#"    <path d="{d}" fill="{}""#,
        wedge.fill_color.to_css()
    );
    write_stroke(out, wedge.border_color, wedge.border_width);
    out.push_str("/>\n");
}

fn write_polygon(out: &mut String, polygon: &PolygonPrimitive) {
    let points = polygon
        .points
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(
        out,
        r#"    <polygon points="{points}" fill="{}"/>"#,
        polygon.fill_color.to_css()
    );
}

fn write_text(out: &mut String, text: &TextPrimitive) {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let _ = write!(
        out,
        r#"    <text x="{:.2}" y="{:.2}" font-size="{}" font-family="sans-serif" fill="{}" text-anchor="{anchor}""#,
        text.x,
        text.y,
        text.font_size_px,
        text.color.to_css()
    );
    if text.rotation != 0.0 {
        let _ = write!(
            out,
            r#" transform="rotate({:.2} {:.2} {:.2})""#,
            text.rotation.to_degrees(),
            text.x,
            text.y
        );
    }
    let _ = writeln!(out, ">{}</text>", escape_xml(&text.text));
}

fn write_stroke(out: &mut String, color: Color, width: f64) {
    if width > 0.0 {
        let _ = write!(
            out,
            r#" stroke="{}" stroke-width="{width}""#,
            color.to_css()
        );
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
