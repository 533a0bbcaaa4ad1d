//! Whitespace-separated metric files: one `<label> <value> [<plus> <minus>]`
//! record per line, read from disk or over HTTP and turned into chart data.

mod commit_chart;
mod parse;
mod source;

pub use commit_chart::{CommitChartParams, DEFAULT_SERIES_RGB, commit_history_chart};
pub use parse::{
    LOADER_DECIMALS, LoadedSeries, parse_js_float, parse_scale, parse_series,
    parse_series_with_error_bars, round_decimals,
};
pub use source::DataSource;

use crate::error::ChartResult;

/// Loads `<label> <value>` records, values multiplied by `scale`
/// (`None` or empty means `1.0`).
pub fn load_series(location: &str, scale: Option<&str>) -> ChartResult<LoadedSeries> {
    let text = DataSource::parse(location).read_to_string()?;
    Ok(parse_series(&text, parse_scale(scale)))
}

/// Loads `<label> <value> <plus> <minus>` records as values with bounds.
pub fn load_series_with_error_bars(
    location: &str,
    scale: Option<&str>,
) -> ChartResult<LoadedSeries> {
    let text = DataSource::parse(location).read_to_string()?;
    Ok(parse_series_with_error_bars(&text, parse_scale(scale)))
}
