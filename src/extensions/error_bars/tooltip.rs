//! Tooltip label callbacks.
//!
//! Each formatter takes the base label the chart would show without error
//! bars and appends the datum's bounds. Lower bounds of a stack are listed
//! outermost first so the text reads from the widest interval inward.

use crate::core::{Axis, ErrorDatum, ErrorValue, format_number};

/// `"{label}: {value}"`, or just the value for unlabelled datasets.
#[must_use]
pub fn base_label(label: Option<&str>, value: f64) -> String {
    match label {
        Some(label) if !label.is_empty() => format!("{label}: {}", format_number(value)),
        _ => format_number(value),
    }
}

/// Bar and line charts: `"{base} ({min} .. {max})"` on the value axis.
#[must_use]
pub fn bar_tooltip_label(base: &str, datum: &ErrorDatum, horizontal: bool) -> String {
    let axis = if horizontal { Axis::X } else { Axis::Y };
    match bounds_text(datum, axis) {
        Some(bounds) => format!("{base} ({bounds})"),
        None => base.to_owned(),
    }
}

/// Scatter charts: `"({x} [xMin .. xMax], {y} [yMin .. yMax])"`.
#[must_use]
pub fn scatter_tooltip_label(x_label: &str, y_label: &str, datum: &ErrorDatum) -> String {
    let sub_label = |base: &str, axis: Axis| match bounds_text(datum, axis) {
        Some(bounds) => format!("{base} [{bounds}]"),
        None => base.to_owned(),
    };
    format!("({}, {})", sub_label(x_label, Axis::X), sub_label(y_label, Axis::Y))
}

/// Polar-area charts: `"{label}: {r} [rMin .. rMax]"`.
#[must_use]
pub fn polar_tooltip_label(base: &str, datum: &ErrorDatum) -> String {
    match bounds_text(datum, Axis::R) {
        Some(bounds) => format!("{base} [{bounds}]"),
        None => base.to_owned(),
    }
}

/// `"{min} .. {max}"`, or `None` when the axis has no bounds. A missing side
/// prints the central value.
fn bounds_text(datum: &ErrorDatum, axis: Axis) -> Option<String> {
    if !datum.has_bounds(axis) {
        return None;
    }
    let central = || format_number(datum.get(axis).unwrap_or(f64::NAN));
    let min = datum
        .min_bound(axis)
        .map_or_else(central, |value| value.reversed().to_string());
    let max = datum
        .max_bound(axis)
        .map_or_else(central, ErrorValue::to_string);
    Some(format!("{min} .. {max}"))
}
