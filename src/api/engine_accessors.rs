use tracing::debug;

use crate::core::{ErrorDatum, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartConfig, ChartEngine, ChartLayout, ChartRegistry, Dataset, UpdateMode};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    #[must_use]
    pub fn registry(&self) -> &ChartRegistry {
        &self.registry
    }

    #[must_use]
    pub fn chart_type(&self) -> &'static str {
        self.controller.id()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        let viewport = viewport.ensure_valid()?;
        self.layout = self
            .controller
            .update(&self.config, viewport, UpdateMode::Default)?;
        self.viewport = viewport;
        Ok(())
    }

    /// Replaces the whole chart description, resolving its type again.
    ///
    /// On error the engine keeps its previous config, type and layout.
    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        config.validate()?;
        let controller = self.registry.resolve(&config.chart_type)?;
        let layout = controller.update(&config, self.viewport, UpdateMode::Default)?;
        debug!(chart_type = controller.id(), "replace chart config");
        self.controller = controller;
        self.config = config;
        self.layout = layout;
        self.hovered = None;
        Ok(())
    }

    /// Replaces the records of one dataset.
    pub fn set_dataset_data(&mut self, dataset_index: usize, data: Vec<ErrorDatum>) -> ChartResult<()> {
        let mut config = self.config.clone();
        let dataset = config.data.datasets.get_mut(dataset_index).ok_or_else(|| {
            ChartError::InvalidData(format!("dataset index {dataset_index} is out of range"))
        })?;
        debug!(dataset_index, count = data.len(), "replace dataset data");
        dataset.data = data;
        self.commit(config)
    }

    pub fn push_dataset(&mut self, dataset: Dataset) -> ChartResult<()> {
        let mut config = self.config.clone();
        config.data.datasets.push(dataset);
        config.validate()?;
        self.commit(config)
    }

    /// Recomputes the settled layout from the current config and viewport.
    pub fn update(&mut self) -> ChartResult<()> {
        self.layout = self
            .controller
            .update(&self.config, self.viewport, UpdateMode::Default)?;
        Ok(())
    }

    fn commit(&mut self, config: ChartConfig) -> ChartResult<()> {
        self.layout = self
            .controller
            .update(&config, self.viewport, UpdateMode::Default)?;
        self.config = config;
        self.hovered = None;
        Ok(())
    }
}
