use std::sync::Arc;

use chart_errorbars::ChartError;
use chart_errorbars::api::{
    BarWithErrorBarsController, ChartConfig, ChartEngine, ChartEngineConfig, ChartRegistry,
    Dataset, PolarAreaWithErrorBarsController, ScatterWithErrorBarsController,
};
use chart_errorbars::core::{ErrorDatum, Viewport};
use chart_errorbars::render::NullRenderer;

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
        assert!(registry.has_element(element), "{element}");
    }
    for scale in ["category", "linear", "radialLinear"] {
        assert!(registry.has_scale(scale), "{scale}");
    }
}

#[test]
fn controllers_need_their_element_and_scales() {
    let mut registry = ChartRegistry::empty();
    registry.add_controller(Arc::new(PolarAreaWithErrorBarsController));
    let error = registry
        .resolve("polarAreaWithErrorBars")
        .expect_err("element missing");
    assert!(matches!(
        error,
        ChartError::UnregisteredComponent { kind: "element", .. }
    ));

    registry.add_element("arcWithErrorBar");
    let error = registry
        .resolve("polarAreaWithErrorBars")
        .expect_err("scale missing");
    assert!(matches!(
        error,
        ChartError::UnregisteredComponent { kind: "scale", ref id, .. } if id == "radialLinear"
    ));

    registry.add_scale("radialLinear");
    assert!(registry.resolve("polarAreaWithErrorBars").is_ok());
}

#[test]
fn plain_chart_types_are_unknown() {
    let registry = ChartRegistry::default();
    for chart_type in ["bar", "line", "scatter", "polarArea"] {
        assert!(matches!(
            registry.resolve(chart_type),
            Err(ChartError::UnknownChartType(_))
        ));
    }
}

#[test]
fn engines_resolve_through_a_custom_registry() {
    let mut registry = ChartRegistry::empty();
    registry.register_chart(Arc::new(ScatterWithErrorBarsController));

    let scatter = ChartConfig::new(ScatterWithErrorBarsController::ID)
        .with_dataset(Dataset::new([ErrorDatum::xy(1.0, 2.0)]));
    let engine = ChartEngine::with_registry(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(300, 300), scatter),
        registry.clone(),
    )
    .expect("scatter registered");
    assert!(engine.registry().has_controller("scatterWithErrorBars"));

    let bar = ChartConfig::new(BarWithErrorBarsController::ID)
        .with_dataset(Dataset::new([ErrorDatum::value(1.0)]));
    let error = ChartEngine::with_registry(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(300, 300), bar),
        registry,
    )
    .err()
    .expect("bar not registered");
    assert!(matches!(error, ChartError::UnknownChartType(_)));
}
