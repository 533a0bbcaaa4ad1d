use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{
    CanvasLayerKind, CirclePrimitive, LinePrimitive, PolygonPrimitive, RectPrimitive,
    TextPrimitive, WedgePrimitive,
};

/// Primitives of one canvas layer.
///
/// Backends paint a layer as polygons, rects, wedges, lines, circles, texts,
/// in that order, so line-series points sit on top of their segments.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub polygons: Vec<PolygonPrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub wedges: Vec<WedgePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn new(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            polygons: Vec::new(),
            rects: Vec::new(),
            wedges: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
            && self.rects.is_empty()
            && self.wedges.is_empty()
            && self.lines.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }

    fn validate(&self) -> ChartResult<()> {
        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for wedge in &self.wedges {
            wedge.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: CanvasLayerKind::CANONICAL
                .into_iter()
                .map(LayerPrimitives::new)
                .collect(),
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    pub fn layer_mut(&mut self, kind: CanvasLayerKind) -> &mut LayerPrimitives {
        let position = match self.layers.iter().position(|layer| layer.kind == kind) {
            Some(position) => position,
            None => {
                self.layers.push(LayerPrimitives::new(kind));
                self.layers.len() - 1
            }
        };
        &mut self.layers[position]
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        self.layer_mut(kind).lines.push(line);
    }

    pub fn push_rect(&mut self, kind: CanvasLayerKind, rect: RectPrimitive) {
        self.layer_mut(kind).rects.push(rect);
    }

    pub fn push_circle(&mut self, kind: CanvasLayerKind, circle: CirclePrimitive) {
        self.layer_mut(kind).circles.push(circle);
    }

    pub fn push_wedge(&mut self, kind: CanvasLayerKind, wedge: WedgePrimitive) {
        self.layer_mut(kind).wedges.push(wedge);
    }

    pub fn push_polygon(&mut self, kind: CanvasLayerKind, polygon: PolygonPrimitive) {
        self.layer_mut(kind).polygons.push(polygon);
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) {
        self.layer_mut(kind).texts.push(text);
    }

    /// Lines of one layer, in paint order.
    #[must_use]
    pub fn lines(&self, kind: CanvasLayerKind) -> &[LinePrimitive] {
        self.layer(kind)
            .map(|layer| layer.lines.as_slice())
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.lines.len()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.texts.len()).sum()
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport.ensure_valid()?;
        for layer in &self.layers {
            layer.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::RenderFrame;
    use crate::core::Viewport;
    use crate::render::{CanvasLayerKind, Color, LinePrimitive};

    #[test]
    fn pushes_land_in_their_layer() {
        let mut frame = RenderFrame::new(Viewport::new(100, 50));
        assert!(frame.is_empty());
        frame.push_line(
            CanvasLayerKind::ErrorBars,
            LinePrimitive::new(0.0, 1.0, 0.0, 5.0, 1.0, Color::BLACK),
        );
        assert_eq!(frame.lines(CanvasLayerKind::ErrorBars).len(), 1);
        assert!(frame.lines(CanvasLayerKind::Series).is_empty());
        assert_eq!(frame.line_count(), 1);
        frame.validate().expect("valid frame");
    }

    #[test]
    fn invalid_line_fails_validation() {
        let mut frame = RenderFrame::new(Viewport::new(100, 50));
        frame.push_line(
            CanvasLayerKind::Grid,
            LinePrimitive::new(f64::NAN, 1.0, 0.0, 5.0, 1.0, Color::BLACK),
        );
        assert!(frame.validate().is_err());
    }
}
