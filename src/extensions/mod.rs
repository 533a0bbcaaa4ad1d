//! Chart decorations layered on top of the core element shapes.

pub mod error_bars;

pub use error_bars::{ErrorBarPixels, ErrorBarStyle, ErrorBarStyleOverrides, Interpolate};
