use std::f64::consts::{FRAC_PI_2, TAU};

use approx::assert_relative_eq;
use chart_errorbars::api::{
    ChartConfig, ChartController, ChartEngine, ChartEngineConfig, ChartScales, Dataset,
    ElementShape, POLAR_START_ANGLE, PolarAreaWithErrorBarsController, UpdateMode,
};
use chart_errorbars::core::{Axis, ErrorDatum, Viewport};
use chart_errorbars::render::NullRenderer;

fn config() -> ChartConfig {
    ChartConfig::new(PolarAreaWithErrorBarsController::ID)
        .with_labels(["north", "east", "south", "west"])
        .with_dataset(Dataset::new([
            ErrorDatum::radial(4.0).with_bounds(Axis::R, 3.0, 5.0),
            ErrorDatum::radial(2.0),
            ErrorDatum::radial(f64::NAN),
            ErrorDatum::value(6.0),
        ]))
}

fn arcs(mode: UpdateMode, config: &ChartConfig) -> Vec<chart_errorbars::api::ArcShape> {
    PolarAreaWithErrorBarsController
        .update(config, Viewport::new(400, 400), mode)
        .expect("layout")
        .elements()
        .map(|element| match element.shape {
            ElementShape::Arc(arc) => arc,
            _ => panic!("arc element"),
        })
        .collect()
}

#[test]
fn visible_arcs_split_the_circle_from_twelve_o_clock() {
    let arcs = arcs(UpdateMode::Default, &config());
    assert_eq!(POLAR_START_ANGLE, -FRAC_PI_2);
    assert_relative_eq!(arcs[0].start_angle, POLAR_START_ANGLE);
    assert_relative_eq!(arcs[0].end_angle - arcs[0].start_angle, TAU / 3.0, epsilon = 1e-9);
    assert_relative_eq!(arcs[2].end_angle, arcs[2].start_angle);
    assert_relative_eq!(arcs[3].end_angle, POLAR_START_ANGLE + TAU, epsilon = 1e-9);
}

#[test]
fn radius_grows_with_value_and_bare_numbers_read_as_r() {
    let arcs = arcs(UpdateMode::Default, &config());
    assert!(arcs[0].outer_radius > arcs[1].outer_radius);
    assert!(arcs[3].outer_radius > arcs[0].outer_radius);
}

#[test]
fn radial_bounds_bracket_the_outer_radius() {
    let layout = PolarAreaWithErrorBarsController
        .update(&config(), Viewport::new(400, 400), UpdateMode::Default)
        .expect("layout");
    let element = layout.element(0, 0).expect("element");
    let ElementShape::Arc(arc) = element.shape else {
        panic!("arc element");
    };
    let min = element.error_bars.r.min.as_ref().expect("rMin").values()[0];
    let max = element.error_bars.r.max.as_ref().expect("rMax").values()[0];
    assert!(min < arc.outer_radius && arc.outer_radius < max);
    assert!(matches!(layout.scales, ChartScales::Radial(_)));
}

#[test]
fn reset_honors_animate_scale_and_rotate() {
    let arcs_reset = arcs(UpdateMode::Reset, &config());
    assert_eq!(arcs_reset[0].outer_radius, 0.0);
    assert_eq!(arcs_reset[0].start_angle, POLAR_START_ANGLE);
    assert_eq!(arcs_reset[0].end_angle, POLAR_START_ANGLE);

    let mut still = config();
    still.options.animation.animate_scale = false;
    still.options.animation.animate_rotate = false;
    let settled = arcs(UpdateMode::Default, &still);
    let reset = arcs(UpdateMode::Reset, &still);
    for (from, to) in reset.iter().zip(&settled) {
        if to.outer_radius.is_nan() {
            continue;
        }
        assert_eq!(from, to);
    }
}

#[test]
fn arc_borders_default_to_white() {
    let arcs = arcs(UpdateMode::Default, &config());
    assert_eq!(arcs[0].border_width, 2.0);
    assert_eq!(arcs[0].border_color, chart_errorbars::render::Color::WHITE);
}

#[test]
fn tooltip_uses_label_value_and_radial_bounds() {
    let config = config();
    assert_eq!(
        PolarAreaWithErrorBarsController
            .tooltip_label(&config, 0, 0)
            .expect("label"),
        "north: 4 [3 .. 5]"
    );
    assert_eq!(
        PolarAreaWithErrorBarsController
            .tooltip_label(&config, 0, 3)
            .expect("label"),
        "west: 6"
    );
}

#[test]
fn tiny_viewports_collapse_arcs_to_the_center() {
    for size in [30, 10] {
        let mut engine = ChartEngine::new(
            NullRenderer::default(),
            ChartEngineConfig::new(Viewport::new(size, size), config()),
        )
        .expect("small polar chart");
        let ChartScales::Radial(scale) = &engine.layout().scales else {
            panic!("radial scale");
        };
        assert_eq!(scale.drawing_area(), 0.0);
        for element in engine.layout().elements() {
            let ElementShape::Arc(arc) = element.shape else {
                panic!("arc element");
            };
            if !arc.outer_radius.is_nan() {
                assert_eq!(arc.outer_radius, 0.0);
            }
        }
        engine.render().expect("render");
    }
}

