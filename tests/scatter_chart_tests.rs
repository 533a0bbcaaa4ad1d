use chart_errorbars::api::{
    AxisScale, ChartConfig, ChartController, ChartScales, Dataset, ElementShape,
    ScatterWithErrorBarsController, UpdateMode,
};
use chart_errorbars::ChartError;
use chart_errorbars::core::{Axis, CartesianScale, ErrorDatum, Viewport};

fn config() -> ChartConfig {
    ChartConfig::new(ScatterWithErrorBarsController::ID).with_dataset(
        Dataset::new([
            ErrorDatum::xy(1.0, 10.0)
                .with_bounds(Axis::X, 0.5, 2.0)
                .with_bounds(Axis::Y, 9.0, 12.0),
            ErrorDatum::xy(4.0, 20.0).with_max(Axis::Y, 25.0),
            ErrorDatum::xy(6.0, 15.0),
        ])
        .with_label("latency"),
    )
}

#[test]
fn both_axes_are_linear_and_cover_bounds() {
    let layout = ScatterWithErrorBarsController
        .update(&config(), Viewport::new(400, 400), UpdateMode::Default)
        .expect("layout");
    let ChartScales::Cartesian {
        x: AxisScale::Linear(x),
        y: AxisScale::Linear(y),
    } = &layout.scales
    else {
        panic!("scatter charts use linear axes");
    };
    assert!(x.domain().0 <= 0.5);
    assert!(x.domain().1 >= 6.0);
    assert!(y.domain().1 >= 25.0);
}

#[test]
fn one_sided_bounds_only_set_that_side() {
    let layout = ScatterWithErrorBarsController
        .update(&config(), Viewport::new(400, 400), UpdateMode::Default)
        .expect("layout");
    let element = layout.element(0, 1).expect("element");
    assert!(element.error_bars.y.min.is_none());
    assert!(element.error_bars.y.max.is_some());
    assert!(element.error_bars.x.is_empty());
}

#[test]
fn points_use_point_shapes_with_options() {
    let mut config = config();
    config.options.elements.point.radius = 5.0;
    let layout = ScatterWithErrorBarsController
        .update(&config, Viewport::new(400, 400), UpdateMode::Default)
        .expect("layout");
    let ElementShape::Point(point) = layout.element(0, 2).expect("element").shape else {
        panic!("point element");
    };
    assert_eq!(point.radius, 5.0);
}

#[test]
fn reset_moves_points_to_the_y_base() {
    let settled = ScatterWithErrorBarsController
        .update(&config(), Viewport::new(400, 400), UpdateMode::Default)
        .expect("layout");
    let reset = ScatterWithErrorBarsController
        .update(&config(), Viewport::new(400, 400), UpdateMode::Reset)
        .expect("layout");
    let ChartScales::Cartesian {
        y: AxisScale::Linear(y),
        ..
    } = &settled.scales
    else {
        panic!("linear y axis");
    };
    let base = y.base_pixel();
    for (from, to) in reset.elements().zip(settled.elements()) {
        assert_eq!(from.center().0, to.center().0);
        assert_eq!(from.center().1, base);
    }
}

#[test]
fn tooltip_formats_each_axis() {
    let config = config();
    assert_eq!(
        ScatterWithErrorBarsController
            .tooltip_label(&config, 0, 1)
            .expect("label"),
        "(4, 20 [20 .. 25])"
    );
}

#[test]
fn out_of_range_records_are_errors() {
    let error = ScatterWithErrorBarsController
        .tooltip_label(&config(), 0, 9)
        .expect_err("no such record");
    assert!(matches!(error, ChartError::InvalidData(_)));
}

#[test]
fn equal_explicit_axis_bounds_still_fit() {
    let mut chart = config();
    chart.options.scales.y.min = Some(5.0);
    chart.options.scales.y.max = Some(5.0);
    let layout = ScatterWithErrorBarsController
        .update(&chart, Viewport::new(400, 400), UpdateMode::Default)
        .expect("flat explicit range is widened");
    let ChartScales::Cartesian { y: AxisScale::Linear(y), .. } = &layout.scales else {
        panic!("linear y axis");
    };
    let (lo, hi) = y.domain();
    assert!(lo < 5.0 && hi > 5.0, "domain {lo}..{hi}");
    assert!(lo >= 3.0 && hi <= 7.0);
}

