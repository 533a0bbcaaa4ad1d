use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn ensure_valid(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Data axis identifier. Bound fields are keyed by axis (`yMin`, `rMax`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    #[default]
    Y,
    R,
}

impl Axis {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::R => "r",
        }
    }
}

/// Plot rectangle inside the viewport, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ChartArea {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> ChartResult<Self> {
        if ![left, top, right, bottom].iter().all(|v| v.is_finite()) {
            return Err(ChartError::InvalidData(
                "chart area edges must be finite".to_owned(),
            ));
        }
        if right <= left || bottom <= top {
            return Err(ChartError::InvalidData(
                "chart area must have a positive size".to_owned(),
            ));
        }
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// Insets the viewport by the given paddings.
    pub fn inset(
        viewport: Viewport,
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    ) -> ChartResult<Self> {
        let viewport = viewport.ensure_valid()?;
        Self::new(
            left,
            top,
            f64::from(viewport.width) - right,
            f64::from(viewport.height) - bottom,
        )
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Pixel range for a Cartesian axis: x runs left to right, y bottom to top.
    #[must_use]
    pub fn pixel_range(self, axis: Axis) -> PixelRange {
        match axis {
            Axis::X => PixelRange::new(self.left, self.right),
            Axis::Y | Axis::R => PixelRange::new(self.bottom, self.top),
        }
    }
}

/// Pixel interval a scale maps its domain onto. `start` corresponds to the
/// domain minimum and may be greater than `end` (vertical axes).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRange {
    pub start: f64,
    pub end: f64,
}

impl PixelRange {
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.length().abs()
    }

    #[must_use]
    pub fn lerp(self, decimal: f64) -> f64 {
        self.start + decimal * self.length()
    }
}
