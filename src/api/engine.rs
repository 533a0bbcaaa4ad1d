use std::sync::Arc;

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartConfig, ChartController, ChartLayout, ChartRegistry, ElementRef};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the chart description, the controller resolved for its
/// type, the current element layout and the renderer frames are handed to.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) registry: ChartRegistry,
    pub(super) controller: Arc<dyn ChartController>,
    pub(super) config: ChartConfig,
    pub(super) viewport: Viewport,
    pub(super) layout: ChartLayout,
    pub(super) hovered: Option<ElementRef>,
}

impl<R: Renderer> ChartEngine<R> {
    /// Builds the settled frame and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
