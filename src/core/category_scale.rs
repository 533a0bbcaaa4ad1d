use serde::{Deserialize, Serialize};

use crate::core::scale::CartesianScale;
use crate::core::types::{Axis, PixelRange};
use crate::error::{ChartError, ChartResult};

/// Index axis over string labels.
///
/// With `offset` every label sits in the middle of its band (bar charts);
/// without it the first and last label touch the axis edges (line charts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScale {
    axis: Axis,
    labels: Vec<String>,
    pixels: PixelRange,
    offset: bool,
    #[serde(default)]
    label_max_chars: Option<usize>,
}

impl CategoryScale {
    pub fn new(
        axis: Axis,
        labels: Vec<String>,
        pixels: PixelRange,
        offset: bool,
    ) -> ChartResult<Self> {
        if !pixels.start.is_finite() || !pixels.end.is_finite() {
            return Err(ChartError::InvalidData(
                "category pixel range must be finite".to_owned(),
            ));
        }
        Ok(Self {
            axis,
            labels,
            pixels,
            offset,
            label_max_chars: None,
        })
    }

    /// Truncates tick labels to their first `max_chars` characters.
    #[must_use]
    pub fn with_label_max_chars(mut self, max_chars: Option<usize>) -> Self {
        self.label_max_chars = max_chars;
        self
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn pixels(&self) -> PixelRange {
        self.pixels
    }

    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Tick text for a label, truncated when a character limit is set.
    #[must_use]
    pub fn tick_label(&self, index: usize) -> Option<String> {
        let label = self.label(index)?;
        Some(match self.label_max_chars {
            Some(limit) => label.chars().take(limit).collect(),
            None => label.to_owned(),
        })
    }

    /// Pixel width of one category band.
    #[must_use]
    pub fn band_width(&self) -> f64 {
        let (_, range) = self.value_window();
        self.pixels.span() / range
    }

    #[must_use]
    pub fn pixel_for_index(&self, index: usize) -> f64 {
        self.pixel_for_value(index as f64)
    }

    fn value_window(&self) -> (f64, f64) {
        let count = self.labels.len().max(1) as f64;
        if self.offset {
            (-0.5, count)
        } else {
            (0.0, (count - 1.0).max(1.0))
        }
    }
}

impl CartesianScale for CategoryScale {
    fn axis(&self) -> Axis {
        self.axis
    }

    fn pixel_for_value(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return f64::NAN;
        }
        let (start_value, range) = self.value_window();
        self.pixels.lerp((value - start_value) / range)
    }

    fn base_pixel(&self) -> f64 {
        self.pixels.start
    }
}
