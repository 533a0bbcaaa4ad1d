use ordered_float::OrderedFloat;

use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartEngine, ElementRef};

impl<R: Renderer> ChartEngine<R> {
    /// Nearest element whose shape contains `(x, y)`.
    #[must_use]
    pub fn element_at(&self, x: f64, y: f64) -> Option<ElementRef> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        self.layout
            .elements()
            .filter(|element| element.contains(x, y))
            .min_by_key(|element| OrderedFloat(element.distance_to(x, y)))
            .map(|element| element.element_ref())
    }

    /// Tooltip text of one element.
    pub fn tooltip_label(&self, element: ElementRef) -> ChartResult<String> {
        self.controller
            .tooltip_label(&self.config, element.dataset_index, element.index)
    }

    /// Tooltip text of the element under `(x, y)`, if any.
    pub fn tooltip_at(&self, x: f64, y: f64) -> ChartResult<Option<String>> {
        self.element_at(x, y)
            .map(|element| self.tooltip_label(element))
            .transpose()
    }

    /// Marks the element under `(x, y)` as hovered; returns it.
    pub fn hover_at(&mut self, x: f64, y: f64) -> Option<ElementRef> {
        self.hovered = self.element_at(x, y);
        self.hovered
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    #[must_use]
    pub fn hovered(&self) -> Option<ElementRef> {
        self.hovered
    }
}
