mod animation;
mod axis_render_frame_builder;
mod bar_controller;
mod chart_config;
mod controller;
mod elements;
mod engine;
mod engine_accessors;
mod engine_animation;
mod engine_hit_test;
mod engine_init;
mod layout_helpers;
mod line_controller;
mod polar_area_controller;
mod registry;
mod render_frame_builder;
mod scatter_controller;
mod series_projection;

pub use animation::{AnimationOptions, Easing};
pub use bar_controller::BarWithErrorBarsController;
pub use chart_config::{
    ArcOptions, AxisOptions, AxisTitleOptions, BarOptions, ChartConfig, ChartData,
    ChartEngineConfig, ChartOptions, DEFAULT_BACKGROUND_COLOR, DEFAULT_BORDER_COLOR, Dataset,
    ElementsOptions, GridOptions, LegendOptions, PluginsOptions, PointOptions, ScalesOptions,
    TickOptions,
};
pub use controller::{
    AxisScale, ChartController, ChartLayout, ChartScales, DatasetLayout, LineSeriesStyle,
    ScaleKind, UpdateMode,
};
pub use elements::{
    ArcShape, BarShape, ChartElement, ElementKind, ElementRef, ElementShape, PointShape,
};
pub use engine::ChartEngine;
pub use line_controller::LineWithErrorBarsController;
pub use polar_area_controller::{POLAR_START_ANGLE, PolarAreaWithErrorBarsController};
pub use registry::ChartRegistry;
pub use scatter_controller::ScatterWithErrorBarsController;
