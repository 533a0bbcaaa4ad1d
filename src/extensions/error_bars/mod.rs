//! Error-bar decoration shared by every chart kind.
//!
//! Controllers map parsed bounds into pixel space with [`calculate_scale`] or
//! [`calculate_polar_scale`], elements paint them after their base shape with
//! [`render_error_bar`] or [`draw_error_bar_arc`], and the tooltip formatters
//! append the declared interval to the base label.

mod animation;
mod draw;
mod geometry;
mod style;
mod tooltip;

pub use animation::Interpolate;
pub use draw::{
    ArcAnchor, ErrorBarAnchor, draw_error_bar_arc, draw_error_bar_horizontal,
    draw_error_bar_vertical, render_error_bar,
};
pub use geometry::{
    AxisBounds, ErrorBarPixels, calculate_polar_scale, calculate_scale, resolve_multi,
    stacked_pairs,
};
pub use style::{ErrorBarStyle, ErrorBarStyleOverrides, StackedBarStyle, StyleOption};
pub use tooltip::{bar_tooltip_label, base_label, polar_tooltip_label, scatter_tooltip_label};
