use tracing::trace;

use crate::error::ChartResult;
use crate::extensions::Interpolate;
use crate::render::{RenderFrame, Renderer};

use super::{ChartEngine, ChartLayout, UpdateMode};

impl<R: Renderer> ChartEngine<R> {
    /// Layout elements start their enter animation from.
    pub fn reset_layout(&self) -> ChartResult<ChartLayout> {
        self.controller
            .update(&self.config, self.viewport, UpdateMode::Reset)
    }

    /// Layout `elapsed_ms` into the enter animation: every element eased from
    /// its reset state toward the settled layout.
    pub fn animated_layout(&self, elapsed_ms: f64) -> ChartResult<ChartLayout> {
        let animation = self.config.options.animation;
        if animation.is_complete(elapsed_ms) {
            return Ok(self.layout.clone());
        }
        let factor = animation.progress(elapsed_ms.max(0.0));
        let from = self.reset_layout()?;

        let mut layout = self.layout.clone();
        for (dataset, start) in layout.datasets.iter_mut().zip(&from.datasets) {
            for (element, initial) in dataset.elements.iter_mut().zip(&start.elements) {
                *element = initial.interpolate(element, factor);
            }
            if let (Some(line), Some(initial)) = (dataset.line.as_mut(), start.line) {
                line.fill_base = initial.fill_base.interpolate(&line.fill_base, factor);
            }
        }
        trace!(elapsed_ms, factor, "interpolate enter animation");
        Ok(layout)
    }

    pub fn build_animated_render_frame(&self, elapsed_ms: f64) -> ChartResult<RenderFrame> {
        let layout = self.animated_layout(elapsed_ms)?;
        self.build_render_frame_for(&layout)
    }

    pub fn render_animated(&mut self, elapsed_ms: f64) -> ChartResult<()> {
        let frame = self.build_animated_render_frame(elapsed_ms)?;
        self.renderer.render(&frame)
    }
}
