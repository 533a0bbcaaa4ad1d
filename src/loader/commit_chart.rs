use serde::{Deserialize, Serialize};

use crate::api::{ChartConfig, ChartOptions, Dataset, LineWithErrorBarsController};
use crate::core::ErrorDatum;
use crate::extensions::ErrorBarStyleOverrides;
use crate::extensions::error_bars::StyleOption;
use crate::render::Color;

/// Series color used when none is given.
pub const DEFAULT_SERIES_RGB: [u8; 3] = [255, 99, 132];

/// Presentation knobs of a commit-history chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommitChartParams {
    /// Chart type id; `lineWithErrorBars` when unset.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<String>,
    /// Dataset label and y-axis title. An empty label hides the title.
    pub ylabel: String,
    /// X-axis title; `"commit hash"` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xlabel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<[u8; 3]>,
}

/// One metric per commit: labels are commit hashes shown by their first
/// seven characters, points are filled under the line and error bars use the
/// series color.
#[must_use]
pub fn commit_history_chart(
    labels: Vec<String>,
    data: Vec<ErrorDatum>,
    params: &CommitChartParams,
) -> ChartConfig {
    let [red, green, blue] = params.color.unwrap_or(DEFAULT_SERIES_RGB);
    let solid = Color::from_rgb8(red, green, blue, 1.0);

    let mut dataset = Dataset::new(data)
        .with_label(params.ylabel.clone())
        .with_colors(Color::from_rgb8(red, green, blue, 0.2), solid);
    dataset.border_width = Some(1.0);

    let mut options = ChartOptions {
        fill: Some(true),
        error_bar_style: ErrorBarStyleOverrides {
            color: Some(solid.into()),
            whisker_color: Some(solid.into()),
            line_width: Some(StyleOption::Scalar(1.0)),
            whisker_line_width: Some(StyleOption::Scalar(1.0)),
            whisker_size: Some(StyleOption::Scalar(10.0)),
            whisker_ratio: None,
        },
        ..ChartOptions::default()
    };
    options.scales.y.title.display = !params.ylabel.is_empty();
    options.scales.y.title.text = params.ylabel.clone();
    options.scales.x.ticks.label_max_chars = Some(7);
    options.scales.x.title.display = true;
    options.scales.x.title.text = params
        .xlabel
        .clone()
        .unwrap_or_else(|| "commit hash".to_owned());
    options.plugins.legend.display = false;
    options.elements.point.radius = 3.0;
    options.elements.point.hover_radius = 5.0;
    options.elements.point.hit_radius = 20.0;

    let chart_type = params
        .chart_type
        .clone()
        .unwrap_or_else(|| LineWithErrorBarsController::ID.to_owned());
    ChartConfig::new(chart_type)
        .with_labels(labels)
        .with_dataset(dataset)
        .with_options(options)
}

#[cfg(test)]
mod tests {
    use super::{CommitChartParams, commit_history_chart};
    use crate::core::ErrorDatum;
    use crate::extensions::error_bars::StyleOption;
    use crate::render::Color;

    #[test]
    fn preset_matches_commit_page_defaults() {
        let params = CommitChartParams {
            ylabel: "runtime (s)".to_owned(),
            ..CommitChartParams::default()
        };
        let config = commit_history_chart(
            vec!["9f3c2ab41d".to_owned()],
            vec![ErrorDatum::value(1.5)],
            &params,
        );
        assert_eq!(config.chart_type, "lineWithErrorBars");
        let dataset = &config.data.datasets[0];
        assert_eq!(dataset.label.as_deref(), Some("runtime (s)"));
        assert_eq!(
            dataset.background_color,
            Some(Color::from_rgb8(255, 99, 132, 0.2))
        );
        assert_eq!(config.options.scales.x.title.text, "commit hash");
        assert!(config.options.scales.y.title.display);
        assert_eq!(config.options.scales.x.ticks.label_max_chars, Some(7));
        assert!(!config.options.plugins.legend.display);
        assert_eq!(
            config.options.error_bar_style.whisker_size,
            Some(StyleOption::Scalar(10.0))
        );
    }

    #[test]
    fn empty_ylabel_hides_the_title() {
        let config = commit_history_chart(Vec::new(), Vec::new(), &CommitChartParams::default());
        assert!(!config.options.scales.y.title.display);
    }
}
