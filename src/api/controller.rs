use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::api::chart_config::{
    ChartConfig, DEFAULT_BACKGROUND_COLOR, DEFAULT_BORDER_COLOR, Dataset,
};
use crate::api::elements::{ChartElement, ElementKind};
use crate::core::{
    Axis, CartesianScale, CategoryScale, ChartArea, ErrorDatum, LinearScale, ParsedDatum,
    PixelRange, RadialLinearScale, Viewport,
};
use crate::error::{ChartError, ChartResult};
use crate::extensions::error_bars::ErrorBarStyle;
use crate::render::Color;

/// Scale kinds a controller needs, by registry id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleKind {
    Category,
    Linear,
    RadialLinear,
}

impl ScaleKind {
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Linear => "linear",
            Self::RadialLinear => "radialLinear",
        }
    }
}

/// `Reset` lays elements out at their animation start positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UpdateMode {
    Reset,
    #[default]
    Default,
}

impl UpdateMode {
    #[must_use]
    pub fn is_reset(self) -> bool {
        self == Self::Reset
    }
}

/// Per chart type layout and labelling contract.
///
/// A controller parses dataset records so bound fields carry through, fits
/// the scales to the error-bar extents and lays out one element per record.
pub trait ChartController: Debug + Send + Sync {
    fn id(&self) -> &'static str;
    fn element_kind(&self) -> ElementKind;
    fn scale_kinds(&self) -> &'static [ScaleKind];

    fn update(
        &self,
        config: &ChartConfig,
        viewport: Viewport,
        mode: UpdateMode,
    ) -> ChartResult<ChartLayout>;

    /// Tooltip text for record `index` of dataset `dataset_index`.
    fn tooltip_label(
        &self,
        config: &ChartConfig,
        dataset_index: usize,
        index: usize,
    ) -> ChartResult<String>;
}

/// Cartesian axis scale: categories or linear values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AxisScale {
    Category(CategoryScale),
    Linear(LinearScale),
}

impl AxisScale {
    #[must_use]
    pub fn pixels(&self) -> PixelRange {
        match self {
            Self::Category(scale) => scale.pixels(),
            Self::Linear(scale) => scale.pixels(),
        }
    }
}

impl CartesianScale for AxisScale {
    fn axis(&self) -> Axis {
        match self {
            Self::Category(scale) => scale.axis(),
            Self::Linear(scale) => scale.axis(),
        }
    }

    fn pixel_for_value(&self, value: f64) -> f64 {
        match self {
            Self::Category(scale) => scale.pixel_for_value(value),
            Self::Linear(scale) => scale.pixel_for_value(value),
        }
    }

    fn base_pixel(&self) -> f64 {
        match self {
            Self::Category(scale) => scale.base_pixel(),
            Self::Linear(scale) => scale.base_pixel(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartScales {
    Cartesian { x: AxisScale, y: AxisScale },
    Radial(RadialLinearScale),
}

impl ChartScales {
    /// Plot rectangle the scales were fitted to.
    pub fn chart_area(&self) -> ChartResult<ChartArea> {
        match self {
            Self::Cartesian { x, y } => {
                let (x, y) = (x.pixels(), y.pixels());
                ChartArea::new(
                    x.start.min(x.end),
                    y.start.min(y.end),
                    x.start.max(x.end),
                    y.start.max(y.end),
                )
            }
            Self::Radial(scale) => {
                let (x, y) = scale.center();
                let radius = scale.drawing_area();
                ChartArea::new(x - radius, y - radius, x + radius, y + radius)
            }
        }
    }
}

/// Connecting-line style of a line dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSeriesStyle {
    pub border_color: Color,
    pub border_width: f64,
    /// Area color under the line, when filled.
    pub fill_color: Option<Color>,
    /// Pixel the filled area closes on.
    pub fill_base: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetLayout {
    pub dataset_index: usize,
    pub parsed: Vec<ParsedDatum>,
    pub elements: Vec<ChartElement>,
    pub line: Option<LineSeriesStyle>,
}

/// Result of one controller update pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub scales: ChartScales,
    pub datasets: Vec<DatasetLayout>,
}

impl ChartLayout {
    pub fn elements(&self) -> impl Iterator<Item = &ChartElement> {
        self.datasets
            .iter()
            .flat_map(|dataset| dataset.elements.iter())
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.datasets.iter().map(|dataset| dataset.elements.len()).sum()
    }

    #[must_use]
    pub fn element(&self, dataset_index: usize, index: usize) -> Option<&ChartElement> {
        self.datasets
            .iter()
            .find(|dataset| dataset.dataset_index == dataset_index)
            .and_then(|dataset| dataset.elements.iter().find(|element| element.index == index))
    }
}

/// Dataset colors with library defaults filled in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DatasetColors {
    pub background: Color,
    pub border: Color,
    pub border_width: Option<f64>,
}

impl DatasetColors {
    pub(crate) fn of(dataset: &Dataset) -> Self {
        Self {
            background: dataset.background_color.unwrap_or(DEFAULT_BACKGROUND_COLOR),
            border: dataset.border_color.unwrap_or(DEFAULT_BORDER_COLOR),
            border_width: dataset.border_width,
        }
    }
}

/// Error-bar style of a dataset: defaults, then chart options, then dataset.
pub(crate) fn dataset_error_bar_style(config: &ChartConfig, dataset: &Dataset) -> ErrorBarStyle {
    ErrorBarStyle::resolve(&config.options.error_bar_style, &dataset.error_bar_style)
}

pub(crate) fn dataset_at(config: &ChartConfig, dataset_index: usize) -> ChartResult<&Dataset> {
    config.data.datasets.get(dataset_index).ok_or_else(|| {
        ChartError::InvalidData(format!("dataset index {dataset_index} is out of range"))
    })
}

pub(crate) fn datum_at(
    config: &ChartConfig,
    dataset_index: usize,
    index: usize,
) -> ChartResult<&ErrorDatum> {
    dataset_at(config, dataset_index)?
        .data
        .get(index)
        .ok_or_else(|| {
            ChartError::InvalidData(format!(
                "data index {index} is out of range for dataset {dataset_index}"
            ))
        })
}
