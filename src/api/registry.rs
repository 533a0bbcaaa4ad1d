use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

use super::{
    BarWithErrorBarsController, ChartController, LineWithErrorBarsController,
    PolarAreaWithErrorBarsController, ScatterWithErrorBarsController,
};

/// Known controllers, element kinds and scale kinds, keyed by id.
///
/// `ChartRegistry::default()` comes with every error-bar chart registered;
/// `ChartRegistry::empty()` starts bare so components can be added one by one.
#[derive(Debug, Clone)]
pub struct ChartRegistry {
    controllers: IndexMap<String, Arc<dyn ChartController>>,
    elements: IndexSet<String>,
    scales: IndexSet<String>,
}

impl Default for ChartRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register_error_bar_charts();
        registry
    }
}

impl ChartRegistry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            controllers: IndexMap::new(),
            elements: IndexSet::new(),
            scales: IndexSet::new(),
        }
    }

    /// Adds a controller only; its element and scales must be added separately.
    pub fn add_controller(&mut self, controller: Arc<dyn ChartController>) {
        self.controllers
            .insert(controller.id().to_owned(), controller);
    }

    pub fn add_element(&mut self, id: impl Into<String>) {
        self.elements.insert(id.into());
    }

    pub fn add_scale(&mut self, id: impl Into<String>) {
        self.scales.insert(id.into());
    }

    /// Adds a controller together with the element and scales it needs.
    pub fn register_chart(&mut self, controller: Arc<dyn ChartController>) {
        self.add_element(controller.element_kind().id());
        for scale in controller.scale_kinds() {
            self.add_scale(scale.id());
        }
        debug!(chart_type = controller.id(), "register chart controller");
        self.add_controller(controller);
    }

    /// Registers the bar, line, scatter and polar-area error-bar charts.
    pub fn register_error_bar_charts(&mut self) {
        self.register_chart(Arc::new(BarWithErrorBarsController));
        self.register_chart(Arc::new(LineWithErrorBarsController));
        self.register_chart(Arc::new(ScatterWithErrorBarsController));
        self.register_chart(Arc::new(PolarAreaWithErrorBarsController));
    }

    #[must_use]
    pub fn has_controller(&self, id: &str) -> bool {
        self.controllers.contains_key(id)
    }

    #[must_use]
    pub fn has_element(&self, id: &str) -> bool {
        self.elements.contains(id)
    }

    #[must_use]
    pub fn has_scale(&self, id: &str) -> bool {
        self.scales.contains(id)
    }

    /// Registered chart type ids, in registration order.
    pub fn chart_types(&self) -> impl Iterator<Item = &str> {
        self.controllers.keys().map(String::as_str)
    }

    /// Controller for `chart_type`, once its element and scales are present.
    pub fn resolve(&self, chart_type: &str) -> ChartResult<Arc<dyn ChartController>> {
        let controller = self
            .controllers
            .get(chart_type)
            .ok_or_else(|| ChartError::UnknownChartType(chart_type.to_owned()))?;

        let element = controller.element_kind().id();
        if !self.has_element(element) {
            return Err(ChartError::UnregisteredComponent {
                chart_type: chart_type.to_owned(),
                kind: "element",
                id: element.to_owned(),
            });
        }
        if let Some(scale) = controller
            .scale_kinds()
            .iter()
            .find(|scale| !self.has_scale(scale.id()))
        {
            return Err(ChartError::UnregisteredComponent {
                chart_type: chart_type.to_owned(),
                kind: "scale",
                id: scale.id().to_owned(),
            });
        }
        Ok(Arc::clone(controller))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::ChartRegistry;
    use crate::api::BarWithErrorBarsController;
    use crate::error::ChartError;

    #[test]
    fn default_registry_knows_every_error_bar_chart() {
        let registry = ChartRegistry::default();
        assert_eq!(
            registry.chart_types().collect::<Vec<_>>(),
            vec![
                "barWithErrorBars",
                "lineWithErrorBars",
                "scatterWithErrorBars",
                "polarAreaWithErrorBars"
            ]
        );
        for element in ["rectangleWithErrorBar", "pointWithErrorBar", "arcWithErrorBar"] {
            assert!(registry.has_element(element));
        }
        for scale in ["category", "linear", "radialLinear"] {
            assert!(registry.has_scale(scale));
        }
    }

    #[test]
    fn controller_without_its_element_does_not_resolve() {
        let mut registry = ChartRegistry::empty();
        registry.add_controller(Arc::new(BarWithErrorBarsController));
        assert!(matches!(
            registry.resolve("barWithErrorBars"),
            Err(ChartError::UnregisteredComponent { kind: "element", .. })
        ));

        registry.add_element("rectangleWithErrorBar");
        registry.add_scale("category");
        assert!(matches!(
            registry.resolve("barWithErrorBars"),
            Err(ChartError::UnregisteredComponent { kind: "scale", ref id, .. }) if id == "linear"
        ));

        registry.add_scale("linear");
        assert!(registry.resolve("barWithErrorBars").is_ok());
    }

    #[test]
    fn unknown_type_is_reported() {
        assert!(matches!(
            ChartRegistry::default().resolve("bubbleWithErrorBars"),
            Err(ChartError::UnknownChartType(_))
        ));
    }
}
