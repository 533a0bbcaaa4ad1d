pub const AXIS_TICK_SPACING_PX: f64 = 40.0;
pub const AXIS_MIN_TICKS: usize = 2;
pub const AXIS_MAX_TICKS: usize = 11;

/// Number of ticks that fit on an axis of the given pixel length.
#[must_use]
pub fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).ceil() as usize;
    raw.clamp(min_ticks, max_ticks)
}

/// Rounds a range to the next "nice" step: 1, 2, 5 or 10 times a power of ten.
#[must_use]
pub fn nice_num(range: f64) -> f64 {
    if !range.is_finite() || range <= 0.0 {
        return 1.0;
    }
    let rounded = range.round();
    let range = if (range - rounded).abs() <= range / 1000.0 {
        rounded
    } else {
        range
    };
    let magnitude = 10f64.powf(range.log10().floor());
    let fraction = range / magnitude;
    let nice_fraction = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice_fraction * magnitude
}

/// Evenly spaced tick values covering `[min, max]` with nice bounds.
///
/// The first and last tick are the widened domain a scale should adopt.
#[must_use]
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return vec![min, max];
    }
    let spaces = max_ticks.max(AXIS_MIN_TICKS) - 1;
    let span = max - min;
    if !span.is_finite() {
        return vec![min, max];
    }
    let spacing = nice_num(span / spaces as f64);
    let nice_min = (min / spacing).floor() * spacing;
    let nice_max = (max / spacing).ceil() * spacing;
    let steps = ((nice_max - nice_min) / spacing).round();
    // Nice bounds add at most one step on each side.
    if !steps.is_finite() || steps < 1.0 || steps > (spaces + 2) as f64 {
        return vec![min, max];
    }
    let count = steps as usize;

    let precision = decimal_places(spacing);
    (0..=count)
        .map(|i| round_to_places(nice_min + i as f64 * spacing, precision))
        .collect()
}

/// Formats a tick value without float noise (`0.30000000000000004` -> `0.3`).
#[must_use]
pub fn format_tick(value: f64, spacing: f64) -> String {
    let places = decimal_places(spacing);
    let rounded = round_to_places(value, places);
    if rounded == 0.0 {
        return "0".to_owned();
    }
    format!("{rounded}")
}

fn decimal_places(step: f64) -> i32 {
    if !step.is_finite() || step <= 0.0 || step >= 1.0 {
        return 0;
    }
    (-step.log10().floor()) as i32
}

fn round_to_places(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
