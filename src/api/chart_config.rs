use serde::{Deserialize, Serialize};

use crate::api::animation::AnimationOptions;
use crate::core::{Axis, ErrorDatum, LinearScaleOptions, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{ErrorBarStyle, ErrorBarStyleOverrides};
use crate::render::Color;

/// Declarative chart description: chart type string, data and options.
///
/// Deserializes from the JSON shape chart pages hand to the charting
/// library, with camelCase keys and every option optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: String,
    #[serde(default)]
    pub data: ChartData,
    #[serde(default)]
    pub options: ChartOptions,
}

impl ChartConfig {
    #[must_use]
    pub fn new(chart_type: impl Into<String>) -> Self {
        Self {
            chart_type: chart_type.into(),
            data: ChartData::default(),
            options: ChartOptions::default(),
        }
    }

    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.data.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.data.datasets.push(dataset);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.chart_type.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "chart type must not be empty".to_owned(),
            ));
        }
        self.options.validate()?;

        let chart_style = &self.options.error_bar_style;
        ErrorBarStyle::resolve(chart_style, &ErrorBarStyleOverrides::default()).validate()?;
        for (index, dataset) in self.data.datasets.iter().enumerate() {
            if let Some(width) = dataset.border_width {
                if !width.is_finite() || width < 0.0 {
                    return Err(ChartError::InvalidData(format!(
                        "dataset {index}: border width must be finite and >= 0"
                    )));
                }
            }
            if dataset.error_bar_style.is_empty() {
                continue;
            }
            ErrorBarStyle::resolve(chart_style, &dataset.error_bar_style)
                .validate()
                .map_err(|err| match err {
                    ChartError::InvalidData(message) => {
                        ChartError::InvalidData(format!("dataset {index}: {message}"))
                    }
                    other => other,
                })?;
        }
        Ok(())
    }

    /// Category labels, padded with index labels up to the longest dataset.
    #[must_use]
    pub fn category_labels(&self) -> Vec<String> {
        let longest = self
            .data
            .datasets
            .iter()
            .map(|dataset| dataset.data.len())
            .max()
            .unwrap_or(0);
        let mut labels = self.data.labels.clone();
        for index in labels.len()..longest {
            labels.push(index.to_string());
        }
        labels
    }

    /// Datasets that take part in layout, with their original index.
    pub fn visible_datasets(&self) -> impl Iterator<Item = (usize, &Dataset)> {
        self.data
            .datasets
            .iter()
            .enumerate()
            .filter(|(_, dataset)| !dataset.hidden)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub data: Vec<ErrorDatum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(flatten)]
    pub error_bar_style: ErrorBarStyleOverrides,
}

impl Dataset {
    #[must_use]
    pub fn new(data: impl IntoIterator<Item = ErrorDatum>) -> Self {
        Self {
            data: data.into_iter().collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_colors(mut self, background: Color, border: Color) -> Self {
        self.background_color = Some(background);
        self.border_color = Some(border);
        self
    }
}

/// Default fill for elements that set no color.
pub const DEFAULT_BACKGROUND_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.1);
/// Default stroke for elements that set no color.
pub const DEFAULT_BORDER_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.1);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartOptions {
    /// `y` turns bar charts horizontal.
    pub index_axis: Axis,
    pub scales: ScalesOptions,
    pub elements: ElementsOptions,
    pub plugins: PluginsOptions,
    pub animation: AnimationOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(flatten)]
    pub error_bar_style: ErrorBarStyleOverrides,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            index_axis: Axis::X,
            scales: ScalesOptions::default(),
            elements: ElementsOptions::default(),
            plugins: PluginsOptions::default(),
            animation: AnimationOptions::default(),
            fill: None,
            error_bar_style: ErrorBarStyleOverrides::default(),
        }
    }
}

impl ChartOptions {
    pub fn validate(&self) -> ChartResult<()> {
        if self.index_axis == Axis::R {
            return Err(ChartError::InvalidData(
                "index axis must be `x` or `y`".to_owned(),
            ));
        }
        self.elements.point.validate()?;
        self.elements.bar.validate()?;
        self.animation.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalesOptions {
    pub x: AxisOptions,
    pub y: AxisOptions,
    pub r: AxisOptions,
}

impl Default for ScalesOptions {
    fn default() -> Self {
        Self {
            x: AxisOptions::default(),
            y: AxisOptions::default(),
            r: AxisOptions {
                begin_at_zero: Some(true),
                ..AxisOptions::default()
            },
        }
    }
}

impl ScalesOptions {
    #[must_use]
    pub fn axis(&self, axis: Axis) -> &AxisOptions {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::R => &self.r,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AxisOptions {
    pub display: bool,
    /// Unset means the chart type's default (bars and polar areas start at zero).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub title: AxisTitleOptions,
    pub ticks: TickOptions,
    pub grid: GridOptions,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            display: true,
            begin_at_zero: None,
            min: None,
            max: None,
            title: AxisTitleOptions::default(),
            ticks: TickOptions::default(),
            grid: GridOptions::default(),
        }
    }
}

impl AxisOptions {
    #[must_use]
    pub fn linear_options(&self, begin_at_zero_default: bool) -> LinearScaleOptions {
        LinearScaleOptions {
            begin_at_zero: self.begin_at_zero.unwrap_or(begin_at_zero_default),
            min: self.min,
            max: self.max,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AxisTitleOptions {
    pub display: bool,
    pub text: String,
    pub color: Color,
    pub font_size_px: f64,
}

impl Default for AxisTitleOptions {
    fn default() -> Self {
        Self {
            display: false,
            text: String::new(),
            color: Color::from_rgb8(0x66, 0x66, 0x66, 1.0),
            font_size_px: 12.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TickOptions {
    pub display: bool,
    /// Category tick labels show at most this many characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_max_chars: Option<usize>,
    pub color: Color,
    pub font_size_px: f64,
}

impl Default for TickOptions {
    fn default() -> Self {
        Self {
            display: true,
            label_max_chars: None,
            color: Color::from_rgb8(0x66, 0x66, 0x66, 1.0),
            font_size_px: 12.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridOptions {
    pub display: bool,
    pub color: Color,
    pub line_width: f64,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            display: true,
            color: Color::rgba(0.0, 0.0, 0.0, 0.1),
            line_width: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementsOptions {
    pub point: PointOptions,
    pub bar: BarOptions,
    pub arc: ArcOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PointOptions {
    pub radius: f64,
    pub hover_radius: f64,
    pub hit_radius: f64,
    pub border_width: f64,
}

impl Default for PointOptions {
    fn default() -> Self {
        Self {
            radius: 3.0,
            hover_radius: 4.0,
            hit_radius: 1.0,
            border_width: 1.0,
        }
    }
}

impl PointOptions {
    fn validate(self) -> ChartResult<()> {
        for (name, value) in [
            ("radius", self.radius),
            ("hoverRadius", self.hover_radius),
            ("hitRadius", self.hit_radius),
            ("borderWidth", self.border_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "point `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BarOptions {
    pub category_percentage: f64,
    pub bar_percentage: f64,
    pub border_width: f64,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self {
            category_percentage: 0.8,
            bar_percentage: 0.9,
            border_width: 0.0,
        }
    }
}

impl BarOptions {
    fn validate(self) -> ChartResult<()> {
        for (name, value) in [
            ("categoryPercentage", self.category_percentage),
            ("barPercentage", self.bar_percentage),
        ] {
            if !value.is_finite() || value <= 0.0 || value > 1.0 {
                return Err(ChartError::InvalidData(format!(
                    "bar `{name}` must be in (0, 1]"
                )));
            }
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(ChartError::InvalidData(
                "bar `borderWidth` must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArcOptions {
    pub border_width: f64,
    pub border_color: Color,
}

impl Default for ArcOptions {
    fn default() -> Self {
        Self {
            border_width: 2.0,
            border_color: Color::WHITE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginsOptions {
    pub legend: LegendOptions,
}

/// Kept for config compatibility; legends are not drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendOptions {
    pub display: bool,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self { display: true }
    }
}

/// Engine bootstrap: canvas size plus the chart description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    pub chart: ChartConfig,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport, chart: ChartConfig) -> Self {
        Self { viewport, chart }
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartConfig, Dataset};
    use crate::core::{Axis, ErrorDatum};

    #[test]
    fn parses_chart_page_json() {
        let config = ChartConfig::from_json_str(
            r##"{
                "type": "barWithErrorBars",
                "data": {
                    "labels": ["a", "b"],
                    "datasets": [{
                        "label": "runtime",
                        "data": [{"y": 4, "yMin": 3, "yMax": 5}, 6],
                        "backgroundColor": "rgba(255,99,132,0.2)",
                        "errorBarWhiskerSize": [10, 12]
                    }]
                },
                "options": {
                    "indexAxis": "y",
                    "errorBarColor": "#ff0000",
                    "scales": {"x": {"title": {"display": true, "text": "ms"}}}
                }
            }"##,
        )
        .expect("config");

        assert_eq!(config.chart_type, "barWithErrorBars");
        assert_eq!(config.options.index_axis, Axis::Y);
        assert!(config.options.error_bar_style.color.is_some());
        assert_eq!(config.options.scales.x.title.text, "ms");
        assert_eq!(config.options.scales.r.begin_at_zero, Some(true));

        let dataset = &config.data.datasets[0];
        assert_eq!(dataset.data[1].y, Some(6.0));
        assert!(dataset.error_bar_style.whisker_size.is_some());
        assert!(dataset.error_bar_style.line_width.is_none());
    }

    #[test]
    fn missing_type_is_a_json_error() {
        assert!(ChartConfig::from_json_str(r#"{"data": {}}"#).is_err());
        assert!(ChartConfig::from_json_str(r#"{"type": " "}"#).is_err());
    }

    #[test]
    fn category_labels_cover_longest_dataset() {
        let config = ChartConfig::new("lineWithErrorBars")
            .with_labels(["a"])
            .with_dataset(Dataset::new([1.0, 2.0, 3.0].map(ErrorDatum::value)));
        assert_eq!(config.category_labels(), vec!["a", "1", "2"]);
    }
}
