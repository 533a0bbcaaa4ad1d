use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Axis, ErrorDatum};

/// Labels plus one record per non-empty input line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadedSeries {
    pub labels: Vec<String>,
    pub data: Vec<ErrorDatum>,
}

impl LoadedSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// `true` when at least one record carries error bounds.
    #[must_use]
    pub fn has_error_bars(&self) -> bool {
        self.data.iter().any(|datum| datum.has_bounds(Axis::Y))
    }
}

/// Lenient float parsing: leading whitespace is skipped and the longest
/// numeric prefix is read (`"12ms"` is `12`, `"-Infinity"` is `-inf`).
/// Text without a numeric prefix is `NaN`.
#[must_use]
pub fn parse_js_float(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if text[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count()
    };
    let integer_digits = digits_from(end);
    end += integer_digits;
    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = digits_from(end + 1);
        if integer_digits > 0 || fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }
    if integer_digits == 0 && fraction_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = digits_from(exponent_end);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

/// Scale factor from an optional argument; absent or empty means `1.0`.
#[must_use]
pub fn parse_scale(scale: Option<&str>) -> f64 {
    match scale {
        Some(text) if !text.is_empty() => parse_js_float(text),
        _ => 1.0,
    }
}

/// Half-up rounding to `decimals` places after nudging by `f64::EPSILON`,
/// so `1.005` rounds to `1.01`.
#[must_use]
pub fn round_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    js_round((value + f64::EPSILON) * factor) / factor
}

/// Rounds half toward positive infinity (`-2.5` is `-2`).
fn js_round(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Decimal places loaded values are rounded to.
pub const LOADER_DECIMALS: i32 = 2;

/// `<label> <value>` lines into plain values times `scale`.
#[must_use]
pub fn parse_series(text: &str, scale: f64) -> LoadedSeries {
    let mut series = LoadedSeries::default();
    for (line_number, fields) in records(text) {
        let value = field(&fields, 1, line_number) * scale;
        series.labels.push(fields[0].to_owned());
        series.data.push(ErrorDatum::value(value));
    }
    debug!(count = series.len(), scale, "parse series");
    series
}

/// `<label> <value> <plus> <minus>` lines into records with `yMin`/`yMax`.
///
/// Every number is multiplied by `scale`, then `y`, `yMax = y + plus` and
/// `yMin = y - minus` are rounded to two decimals.
#[must_use]
pub fn parse_series_with_error_bars(text: &str, scale: f64) -> LoadedSeries {
    let mut series = LoadedSeries::default();
    for (line_number, fields) in records(text) {
        let value = field(&fields, 1, line_number) * scale;
        let plus = field(&fields, 2, line_number) * scale;
        let minus = field(&fields, 3, line_number) * scale;
        series.labels.push(fields[0].to_owned());
        series.data.push(
            ErrorDatum::value(round_decimals(value, LOADER_DECIMALS)).with_bounds(
                Axis::Y,
                round_decimals(value - minus, LOADER_DECIMALS),
                round_decimals(value + plus, LOADER_DECIMALS),
            ),
        );
    }
    debug!(count = series.len(), scale, "parse series with error bars");
    series
}

/// Non-empty lines split on single spaces, with 1-based line numbers.
fn records(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.split('\n')
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| (index + 1, line.split(' ').collect()))
}

fn field(fields: &[&str], position: usize, line_number: usize) -> f64 {
    let value = fields.get(position).map_or(f64::NAN, |text| parse_js_float(text));
    if value.is_nan() {
        warn!(line_number, position, "non-numeric field parsed as NaN");
    }
    value
}

#[cfg(test)]
mod tests {
    use super::{js_round, parse_js_float, parse_scale, round_decimals};

    #[test]
    fn float_prefixes_parse_leniently() {
        assert_eq!(parse_js_float("  12.5ms"), 12.5);
        assert_eq!(parse_js_float("-3e2x"), -300.0);
        assert_eq!(parse_js_float("1e"), 1.0);
        assert_eq!(parse_js_float(".5"), 0.5);
        assert_eq!(parse_js_float("5."), 5.0);
        assert_eq!(parse_js_float("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_js_float("abc").is_nan());
        assert!(parse_js_float("").is_nan());
        assert!(parse_js_float("-.").is_nan());
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(js_round(2.5), 3.0);
        assert_eq!(js_round(-2.5), -2.0);
        assert_eq!(round_decimals(1.005, 2), 1.01);
        assert_eq!(round_decimals(12.3456, 2), 12.35);
        assert!(round_decimals(f64::NAN, 2).is_nan());
    }

    #[test]
    fn scale_defaults_to_one() {
        assert_eq!(parse_scale(None), 1.0);
        assert_eq!(parse_scale(Some("")), 1.0);
        assert_eq!(parse_scale(Some("0.001")), 0.001);
        assert_eq!(parse_scale(Some("0")), 0.0);
    }
}
