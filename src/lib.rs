//! chart-errorbars: bar, line, scatter and polar-area charts with error bars.
//!
//! Charts are described by a serde-friendly [`ChartConfig`], laid out by a
//! per-type [`api::ChartController`] resolved through a [`ChartRegistry`], and
//! painted as a layered [`render::RenderFrame`] handed to any
//! [`render::Renderer`]. The [`loader`] module reads plain-text metric files
//! into chart data.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod loader;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEngine, ChartEngineConfig, ChartRegistry};
pub use error::{ChartError, ChartResult};
