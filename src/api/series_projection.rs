use crate::core::{Axis, ErrorDatum, ParsedDatum, parse_error_number_data};

use super::chart_config::Dataset;

/// Parses records of an index-axis chart: the index axis reads the label
/// position, the value axis reads the record's value key and its bounds.
pub(super) fn parse_category_records(dataset: &Dataset, value_axis: Axis) -> Vec<ParsedDatum> {
    let mut parsed: Vec<ParsedDatum> = dataset
        .data
        .iter()
        .enumerate()
        .map(|(index, datum)| {
            let value = datum.get(value_axis).unwrap_or(f64::NAN);
            let position = index as f64;
            match value_axis {
                Axis::X => ParsedDatum::from_values(value, position, f64::NAN),
                Axis::Y | Axis::R => ParsedDatum::from_values(position, value, f64::NAN),
            }
        })
        .collect();
    parse_error_number_data(&mut parsed, value_axis, &dataset.data, 0);
    parsed
}

/// Parses `x`/`y` records carrying bounds on both axes.
pub(super) fn parse_xy_records(dataset: &Dataset) -> Vec<ParsedDatum> {
    let mut parsed: Vec<ParsedDatum> = dataset
        .data
        .iter()
        .map(|datum| {
            ParsedDatum::from_values(
                datum.x.unwrap_or(f64::NAN),
                datum.y.unwrap_or(f64::NAN),
                f64::NAN,
            )
        })
        .collect();
    parse_error_number_data(&mut parsed, Axis::X, &dataset.data, 0);
    parse_error_number_data(&mut parsed, Axis::Y, &dataset.data, 0);
    parsed
}

/// Parses radial records. A record without `r` falls back to `y`, so bare
/// numbers work as polar-area values.
pub(super) fn parse_radial_records(dataset: &Dataset) -> Vec<ParsedDatum> {
    let mut parsed: Vec<ParsedDatum> = dataset
        .data
        .iter()
        .enumerate()
        .map(|(index, datum)| {
            ParsedDatum::from_values(index as f64, f64::NAN, radial_value(datum))
        })
        .collect();
    parse_error_number_data(&mut parsed, Axis::R, &dataset.data, 0);
    parsed
}

pub(super) fn radial_value(datum: &ErrorDatum) -> f64 {
    datum.r.or(datum.y).unwrap_or(f64::NAN)
}
