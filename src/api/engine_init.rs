use tracing::debug;

use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartEngine, ChartEngineConfig, ChartRegistry, UpdateMode};

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine whose chart type resolves through the default
    /// registry (every error-bar chart registered).
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        Self::with_registry(renderer, config, ChartRegistry::default())
    }

    /// Creates an engine resolving its chart type through `registry`.
    pub fn with_registry(
        renderer: R,
        config: ChartEngineConfig,
        registry: ChartRegistry,
    ) -> ChartResult<Self> {
        let viewport = config.viewport.ensure_valid()?;
        config.chart.validate()?;
        let controller = registry.resolve(&config.chart.chart_type)?;
        let layout = controller.update(&config.chart, viewport, UpdateMode::Default)?;
        debug!(
            chart_type = controller.id(),
            width = viewport.width,
            height = viewport.height,
            element_count = layout.element_count(),
            "init chart engine"
        );

        Ok(Self {
            renderer,
            registry,
            controller,
            config: config.chart,
            viewport,
            layout,
            hovered: None,
        })
    }
}
