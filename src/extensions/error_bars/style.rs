use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Option value that is either shared by every stacked bar or indexed per bar.
///
/// Stack index `i` resolves to `values[i % len]`. The `{ "v": [...] }` form is
/// accepted on input for configs written against the object notation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleOption<T> {
    Scalar(T),
    Indexed(SmallVec<[T; 2]>),
    Wrapped { v: SmallVec<[T; 2]> },
}

impl<T: Copy> StyleOption<T> {
    #[must_use]
    pub fn indexed(values: impl IntoIterator<Item = T>) -> Self {
        Self::Indexed(values.into_iter().collect())
    }

    #[must_use]
    pub fn values(&self) -> &[T] {
        match self {
            Self::Scalar(value) => std::slice::from_ref(value),
            Self::Indexed(values) | Self::Wrapped { v: values } => values.as_slice(),
        }
    }

    /// Value for stacked bar `index`; `None` for an empty array.
    #[must_use]
    pub fn resolve(&self, index: usize) -> Option<T> {
        let values = self.values();
        if values.is_empty() {
            return None;
        }
        Some(values[index % values.len()])
    }
}

impl<T> From<T> for StyleOption<T> {
    fn from(value: T) -> Self {
        Self::Scalar(value)
    }
}

/// Resolved error-bar style of one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBarStyle {
    #[serde(rename = "errorBarLineWidth")]
    pub line_width: StyleOption<f64>,
    #[serde(rename = "errorBarColor")]
    pub color: StyleOption<Color>,
    #[serde(rename = "errorBarWhiskerLineWidth")]
    pub whisker_line_width: StyleOption<f64>,
    #[serde(rename = "errorBarWhiskerRatio")]
    pub whisker_ratio: StyleOption<f64>,
    #[serde(rename = "errorBarWhiskerSize")]
    pub whisker_size: StyleOption<f64>,
    #[serde(rename = "errorBarWhiskerColor")]
    pub whisker_color: StyleOption<Color>,
}

const DEFAULT_BAR_COLORS: [Color; 2] = [
    Color::rgb(44.0 / 255.0, 44.0 / 255.0, 44.0 / 255.0),
    Color::rgb(31.0 / 255.0, 31.0 / 255.0, 31.0 / 255.0),
];

impl Default for ErrorBarStyle {
    fn default() -> Self {
        Self {
            line_width: StyleOption::Indexed(smallvec![1.0, 3.0]),
            color: StyleOption::Indexed(SmallVec::from_buf(DEFAULT_BAR_COLORS)),
            whisker_line_width: StyleOption::Indexed(smallvec![1.0, 3.0]),
            whisker_ratio: StyleOption::Indexed(smallvec![0.2, 0.25]),
            whisker_size: StyleOption::Indexed(smallvec![20.0, 24.0]),
            whisker_color: StyleOption::Indexed(SmallVec::from_buf(DEFAULT_BAR_COLORS)),
        }
    }
}

/// Style of one stacked bar, after index resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackedBarStyle {
    pub line_width: f64,
    pub color: Color,
    pub whisker_line_width: f64,
    pub whisker_color: Color,
    pub half_size: f64,
}

impl ErrorBarStyle {
    /// Layers chart-level then dataset-level overrides onto the defaults.
    #[must_use]
    pub fn resolve(chart: &ErrorBarStyleOverrides, dataset: &ErrorBarStyleOverrides) -> Self {
        let mut style = Self::default();
        style.apply(chart);
        style.apply(dataset);
        style
    }

    pub fn apply(&mut self, overrides: &ErrorBarStyleOverrides) {
        if let Some(value) = &overrides.line_width {
            self.line_width = value.clone();
        }
        if let Some(value) = &overrides.color {
            self.color = value.clone();
        }
        if let Some(value) = &overrides.whisker_line_width {
            self.whisker_line_width = value.clone();
        }
        if let Some(value) = &overrides.whisker_ratio {
            self.whisker_ratio = value.clone();
        }
        if let Some(value) = &overrides.whisker_size {
            self.whisker_size = value.clone();
        }
        if let Some(value) = &overrides.whisker_color {
            self.whisker_color = value.clone();
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, option) in [
            ("errorBarLineWidth", &self.line_width),
            ("errorBarWhiskerLineWidth", &self.whisker_line_width),
            ("errorBarWhiskerRatio", &self.whisker_ratio),
            ("errorBarWhiskerSize", &self.whisker_size),
        ] {
            if option.values().is_empty() {
                return Err(empty_option(name));
            }
            if option
                .values()
                .iter()
                .any(|value| !value.is_finite() || *value < 0.0)
            {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` values must be finite and >= 0"
                )));
            }
        }
        for (name, option) in [
            ("errorBarColor", &self.color),
            ("errorBarWhiskerColor", &self.whisker_color),
        ] {
            if option.values().is_empty() {
                return Err(empty_option(name));
            }
            for color in option.values() {
                color.validate()?;
            }
        }
        Ok(())
    }

    /// Whisker half length for stacked bar `index`.
    ///
    /// Shapes with a thickness use `thickness * ratio / 2` while the ratio is
    /// positive; everything else falls back to `size / 2`.
    #[must_use]
    pub fn half_size(&self, thickness: Option<f64>, index: usize) -> f64 {
        let ratio = self.whisker_ratio.resolve(index).unwrap_or(0.0);
        match thickness {
            Some(total) if ratio > 0.0 => total * ratio * 0.5,
            _ => self.whisker_size.resolve(index).unwrap_or(0.0) * 0.5,
        }
    }

    #[must_use]
    pub fn stacked(&self, thickness: Option<f64>, index: usize) -> StackedBarStyle {
        StackedBarStyle {
            line_width: self.line_width.resolve(index).unwrap_or(1.0),
            color: self.color.resolve(index).unwrap_or(Color::BLACK),
            whisker_line_width: self.whisker_line_width.resolve(index).unwrap_or(1.0),
            whisker_color: self.whisker_color.resolve(index).unwrap_or(Color::BLACK),
            half_size: self.half_size(thickness, index),
        }
    }
}

fn empty_option(name: &str) -> ChartError {
    ChartError::InvalidData(format!("`{name}` must not be an empty array"))
}

/// Partially specified error-bar style, as found on chart options and datasets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorBarStyleOverrides {
    #[serde(
        rename = "errorBarLineWidth",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub line_width: Option<StyleOption<f64>>,
    #[serde(rename = "errorBarColor", default, skip_serializing_if = "Option::is_none")]
    pub color: Option<StyleOption<Color>>,
    #[serde(
        rename = "errorBarWhiskerLineWidth",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub whisker_line_width: Option<StyleOption<f64>>,
    #[serde(
        rename = "errorBarWhiskerRatio",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub whisker_ratio: Option<StyleOption<f64>>,
    #[serde(
        rename = "errorBarWhiskerSize",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub whisker_size: Option<StyleOption<f64>>,
    #[serde(
        rename = "errorBarWhiskerColor",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub whisker_color: Option<StyleOption<Color>>,
}

impl ErrorBarStyleOverrides {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
