use std::io::Write;

use chart_errorbars::ChartError;
use chart_errorbars::api::{ChartEngine, ChartEngineConfig, ElementRef};
use chart_errorbars::core::{Axis, ErrorDatum, Viewport};
use chart_errorbars::loader::{
    CommitChartParams, commit_history_chart, load_series,
    load_series_with_error_bars, parse_series, parse_series_with_error_bars,
};
use chart_errorbars::render::NullRenderer;
use tempfile::NamedTempFile;

fn data_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn plain_records_are_scaled() {
    let file = data_file("a1b2c3d 1500\ne4f5a6b 1750\n");
    let path = file.path().to_str().expect("utf-8 path");
    let series = load_series(path, Some("0.001")).expect("load");
    assert_eq!(series.labels, vec!["a1b2c3d", "e4f5a6b"]);
    assert_eq!(
        series.data,
        vec![ErrorDatum::value(1.5), ErrorDatum::value(1.75)]
    );
    assert!(!series.has_error_bars());
}

#[test]
fn plain_records_are_not_rounded() {
    let series = parse_series("c0 1.23456\n", 1.0);
    assert_eq!(series.data[0].y, Some(1.23456));
}

#[test]
fn error_records_become_rounded_bounds() {
    let file = data_file("c1 10 2 1\n\nc2 4.444 0.5 0.25\n");
    let path = file.path().to_str().expect("utf-8 path");
    let series = load_series_with_error_bars(path, None).expect("load");
    assert_eq!(series.len(), 2, "empty lines are skipped");
    assert_eq!(
        series.data[0],
        ErrorDatum::value(10.0).with_bounds(Axis::Y, 9.0, 12.0)
    );
    assert_eq!(
        series.data[1],
        ErrorDatum::value(4.44).with_bounds(Axis::Y, 4.19, 4.94)
    );
    assert!(series.has_error_bars());
}

#[test]
fn plus_and_minus_columns_widen_the_value() {
    let series = parse_series_with_error_bars("abc 10 2 3", 1.0);
    assert_eq!(series.labels, vec!["abc"]);
    assert_eq!(
        series.data,
        vec![ErrorDatum::value(10.0).with_bounds(Axis::Y, 7.0, 12.0)]
    );
}

#[test]
fn bounds_are_scaled_before_rounding() {
    let series = parse_series_with_error_bars("c1 1234 100 50\n", 0.001);
    assert_eq!(
        series.data[0],
        ErrorDatum::value(1.23).with_bounds(Axis::Y, 1.18, 1.33)
    );
}

#[test]
fn malformed_fields_read_as_nan() {
    let series = parse_series_with_error_bars("c1 fast 1 1\nc2 3\n", 1.0);
    assert!(series.data[0].y.expect("y").is_nan());
    let second = &series.data[1];
    assert_eq!(second.y, Some(3.0));
    assert!(second.max_bound(Axis::Y).expect("yMax").values()[0].is_nan());
}

#[test]
fn carriage_returns_stay_in_the_last_field() {
    let series = parse_series("c1 2.5\r\n", 1.0);
    assert_eq!(series.data[0].y, Some(2.5));
}

#[test]
fn file_urls_load_from_disk() {
    let file = data_file("c1 7\n");
    let location = format!("file://{}", file.path().display());
    let series = load_series(&location, None).expect("load");
    assert_eq!(series.data, vec![ErrorDatum::value(7.0)]);
}

#[test]
fn missing_files_surface_io_errors() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("runtime.txt");
    let error = load_series(missing.to_str().expect("utf-8 path"), None).expect_err("missing");
    assert!(matches!(error, ChartError::Io(_)));
}

#[cfg(not(feature = "remote-fetch"))]
#[test]
fn urls_need_the_remote_fetch_feature() {
    let error = chart_errorbars::loader::DataSource::parse("https://example.org/runtime.txt")
        .read_to_string()
        .expect_err("no http client");
    assert!(matches!(error, ChartError::UnsupportedSource(_)));
}

#[test]
fn loaded_series_drive_a_commit_chart() {
    let file = data_file("0123456789abcdef 12 1 2\nfedcba9876543210 14 2 1\n");
    let path = file.path().to_str().expect("utf-8 path");
    let series = load_series_with_error_bars(path, None).expect("load");
    let params = CommitChartParams {
        ylabel: "runtime (s)".to_owned(),
        color: Some([54, 162, 235]),
        ..CommitChartParams::default()
    };
    let chart = commit_history_chart(series.labels, series.data, &params);
    let engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(640, 360), chart),
    )
    .expect("engine");
    assert_eq!(engine.chart_type(), "lineWithErrorBars");
    assert_eq!(engine.layout().element_count(), 2);
    assert_eq!(
        engine
            .tooltip_label(ElementRef {
                dataset_index: 0,
                index: 1
            })
            .expect("label"),
        "runtime (s): 14 (13 .. 16)"
    );
}
