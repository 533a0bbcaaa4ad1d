use approx::assert_relative_eq;
use chart_errorbars::ChartError;
use chart_errorbars::api::{
    AxisScale, BarWithErrorBarsController, ChartConfig, ChartEngine, ChartEngineConfig,
    ChartScales, Dataset, ElementShape, LineWithErrorBarsController,
    PolarAreaWithErrorBarsController, ScatterWithErrorBarsController,
};
use chart_errorbars::core::{Axis, CartesianScale, ErrorDatum, Viewport};
use chart_errorbars::render::{CanvasLayerKind, NullRenderer, SvgRenderer};

fn bar_config() -> ChartConfig {
    ChartConfig::new(BarWithErrorBarsController::ID)
        .with_labels(["a", "b", "c"])
        .with_dataset(
            Dataset::new([
                ErrorDatum::value(4.0).with_bounds(Axis::Y, 3.0, 6.0),
                ErrorDatum::value(2.0),
                ErrorDatum::value(5.0).with_bounds(Axis::Y, 4.5, 5.5),
            ])
            .with_label("build time"),
        )
}

fn engine<R: chart_errorbars::render::Renderer>(
    renderer: R,
    chart: ChartConfig,
) -> ChartEngine<R> {
    ChartEngine::new(renderer, ChartEngineConfig::new(Viewport::new(600, 400), chart))
        .expect("engine init")
}

#[test]
fn frame_puts_bars_under_their_error_bars() {
    let engine = engine(NullRenderer::default(), bar_config());
    let frame = engine.build_render_frame().expect("frame");
    let series = frame.layer(CanvasLayerKind::Series).expect("series layer");
    assert_eq!(series.rects.len(), 3);
    assert_eq!(
        frame.lines(CanvasLayerKind::ErrorBars).len(),
        6,
        "one bar and two whiskers per bounded record"
    );
}

#[test]
fn null_renderer_counts_error_bar_segments() {
    let mut engine = engine(NullRenderer::default(), bar_config());
    engine.render().expect("render");
    let renderer = engine.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_error_bar_line_count, 6);
    assert!(renderer.last_text_count > 0, "axis ticks are labelled");
}

#[test]
fn svg_document_has_every_layer() {
    let mut engine = engine(SvgRenderer::new(), bar_config());
    engine.render().expect("render");
    let document = engine.renderer().document();
    assert!(document.starts_with("<svg"));
    assert!(document.contains(r#"data-layer="Series""#));
    assert!(document.contains(r#"data-layer="ErrorBars""#));
    assert!(document.trim_end().ends_with("</svg>"));
}

#[test]
fn svg_file_is_written_after_render() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("chart.svg");

    let unrendered = SvgRenderer::new();
    assert!(unrendered.write_to_file(&path).is_err());

    let mut engine = engine(SvgRenderer::new(), bar_config());
    engine.render().expect("render");
    engine.into_renderer().write_to_file(&path).expect("write");
    let written = std::fs::read_to_string(&path).expect("read back");
    assert!(written.contains("<rect"));
}

#[test]
fn tooltip_at_bar_center_reports_bounds() {
    let engine = engine(NullRenderer::default(), bar_config());
    let ElementShape::Bar(bar) = engine.layout().element(0, 0).expect("element").shape else {
        panic!("bar element");
    };
    let (x, y) = (bar.x, (bar.y + bar.base) / 2.0);
    assert_eq!(
        engine.tooltip_at(x, y).expect("tooltip").as_deref(),
        Some("build time: 4 (3 .. 6)")
    );
    assert_eq!(engine.tooltip_at(1.0, 1.0).expect("tooltip"), None);
    assert_eq!(engine.element_at(f64::NAN, y), None);
}

#[test]
fn hovered_points_grow_to_hover_radius() {
    let chart = ChartConfig::new(LineWithErrorBarsController::ID)
        .with_dataset(Dataset::new([ErrorDatum::value(1.0), ErrorDatum::value(2.0)]));
    let mut engine = engine(NullRenderer::default(), chart);
    let (x, y) = engine.layout().element(0, 1).expect("element").center();

    let hovered = engine.hover_at(x, y).expect("hit");
    assert_eq!((hovered.dataset_index, hovered.index), (0, 1));
    let frame = engine.build_render_frame().expect("frame");
    let circles = &frame.layer(CanvasLayerKind::Series).expect("series").circles;
    assert_eq!(circles[1].radius, 4.0);
    assert_eq!(circles[0].radius, 3.0);

    engine.clear_hover();
    assert_eq!(engine.hovered(), None);
}

#[test]
fn data_updates_relayout_the_chart() {
    let mut engine = engine(NullRenderer::default(), bar_config());
    engine
        .set_dataset_data(0, vec![ErrorDatum::value(1.0)])
        .expect("update");
    assert_eq!(engine.layout().element_count(), 1);

    engine
        .push_dataset(Dataset::new([ErrorDatum::value(3.0)]))
        .expect("push");
    assert_eq!(engine.layout().element_count(), 2);

    let error = engine
        .set_dataset_data(7, Vec::new())
        .expect_err("no dataset 7");
    assert!(matches!(error, ChartError::InvalidData(_)));
}

#[test]
fn switching_chart_type_resolves_a_new_controller() {
    let mut engine = engine(NullRenderer::default(), bar_config());
    let mut polar = bar_config();
    polar.chart_type = PolarAreaWithErrorBarsController::ID.to_owned();
    engine.set_config(polar).expect("polar");
    assert_eq!(engine.chart_type(), "polarAreaWithErrorBars");

    let mut unknown = bar_config();
    unknown.chart_type = "pie".to_owned();
    let error = engine.set_config(unknown).expect_err("unknown type");
    assert!(matches!(error, ChartError::UnknownChartType(ref id) if id == "pie"));
    assert_eq!(engine.chart_type(), "polarAreaWithErrorBars");
}

#[test]
fn invalid_viewports_are_rejected() {
    let error = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(0, 400), bar_config()),
    )
    .err()
    .expect("zero width");
    assert!(matches!(error, ChartError::InvalidViewport { .. }));
}

#[test]
fn bar_error_segment_spans_its_bound_pixels() {
    let chart = ChartConfig::new(BarWithErrorBarsController::ID)
        .with_labels(["run"])
        .with_dataset(Dataset::new([
            ErrorDatum::value(10.0).with_bounds(Axis::Y, 8.0, 12.0)
        ]));
    let engine = engine(NullRenderer::default(), chart);
    let ChartScales::Cartesian { y: AxisScale::Linear(scale), .. } = &engine.layout().scales else {
        panic!("linear value axis");
    };
    let (low, high) = (scale.pixel_for_value(8.0), scale.pixel_for_value(12.0));

    let frame = engine.build_render_frame().expect("frame");
    let main: Vec<_> = frame
        .lines(CanvasLayerKind::ErrorBars)
        .iter()
        .filter(|line| line.x1 == line.x2)
        .collect();
    assert_eq!(main.len(), 1, "whiskers are horizontal");
    assert_relative_eq!(main[0].y1, low, epsilon = 1e-9);
    assert_relative_eq!(main[0].y2, high, epsilon = 1e-9);
}

#[test]
fn overflowing_ranges_fail_instead_of_panicking() {
    let chart = ChartConfig::new(LineWithErrorBarsController::ID).with_dataset(Dataset::new([
        ErrorDatum::value(-1e308),
        ErrorDatum::value(1e308),
    ]));
    let error = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(600, 400), chart),
    )
    .err()
    .expect("span overflows f64");
    assert!(matches!(error, ChartError::InvalidData(_)));
}

#[test]
fn failed_updates_keep_the_previous_chart() {
    let mut engine = engine(NullRenderer::default(), bar_config());
    let before_config = engine.config().clone();
    let before_elements = engine.layout().element_count();

    let overflowing = ChartConfig::new(ScatterWithErrorBarsController::ID).with_dataset(
        Dataset::new([ErrorDatum::xy(0.0, -1e308), ErrorDatum::xy(1.0, 1e308)]),
    );
    assert!(engine.set_config(overflowing).is_err());
    assert_eq!(engine.chart_type(), "barWithErrorBars");
    assert_eq!(engine.config(), &before_config);
    assert_eq!(engine.layout().element_count(), before_elements);

    engine
        .push_dataset(Dataset::new([ErrorDatum::value(7.0)]))
        .expect("push");
    let pushed = engine.config().clone();
    let overflowing = Dataset::new([ErrorDatum::value(-1e308), ErrorDatum::value(1e308)]);
    assert!(engine.push_dataset(overflowing).is_err());
    assert_eq!(engine.config(), &pushed);
    assert_eq!(engine.config().data.datasets.len(), 2);

    assert!(engine.set_viewport(Viewport::new(0, 10)).is_err());
    assert_eq!(engine.viewport(), Viewport::new(600, 400));
}

#[test]
fn viewport_changes_relayout_into_the_renderer() {
    let mut engine = engine(NullRenderer::default(), bar_config());
    engine.set_viewport(Viewport::new(300, 200)).expect("resize");
    assert_eq!(engine.layout().viewport, Viewport::new(300, 200));

    engine.render().expect("render");
    engine.renderer_mut().frames_rendered = 0;
    engine.render().expect("render again");
    assert_eq!(engine.renderer().frames_rendered, 1);
}

