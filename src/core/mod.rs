pub mod category_scale;
pub mod datum;
pub mod error_value;
pub mod parsed;
pub mod radial_scale;
pub mod scale;
pub mod ticks;
pub mod types;

pub use category_scale::CategoryScale;
pub use datum::ErrorDatum;
pub use error_value::{ErrorValue, format_number};
pub use parsed::{
    ParsedBounds, ParsedDatum, RangeSource, error_bar_extent, merge_extents,
    parse_error_number_data, value_extent,
};
pub use radial_scale::RadialLinearScale;
pub use scale::{CartesianScale, LinearScale, LinearScaleOptions};
pub use types::{Axis, ChartArea, PixelRange, Viewport};
