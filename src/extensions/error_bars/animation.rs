use smallvec::SmallVec;

use crate::core::ErrorValue;
use crate::extensions::error_bars::geometry::{AxisBounds, ErrorBarPixels};
use crate::extensions::error_bars::style::{ErrorBarStyle, StyleOption};
use crate::render::Color;

/// Property interpolation between two animation states.
///
/// `factor` is the eased progress in `[0, 1]`. Values whose shapes do not
/// line up jump straight to the target.
pub trait Interpolate: Sized {
    #[must_use]
    fn interpolate(&self, to: &Self, factor: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(&self, to: &Self, factor: f64) -> Self {
        if self == to {
            return *to;
        }
        self + (to - self) * factor
    }
}

impl Interpolate for Color {
    fn interpolate(&self, to: &Self, factor: f64) -> Self {
        if self == to {
            return *to;
        }
        to.mix(*self, factor)
    }
}

impl Interpolate for ErrorValue {
    fn interpolate(&self, to: &Self, factor: f64) -> Self {
        match (self, to) {
            (Self::Single(from), Self::Single(target)) => {
                Self::Single(from.interpolate(target, factor))
            }
            (Self::Stacked(from), Self::Stacked(target)) if from.len() == target.len() => {
                Self::Stacked(interpolate_slices(from, target, factor))
            }
            _ => to.clone(),
        }
    }
}

impl<T: Interpolate + Clone> Interpolate for Option<T> {
    fn interpolate(&self, to: &Self, factor: f64) -> Self {
        match (self, to) {
            (Some(from), Some(target)) => Some(from.interpolate(target, factor)),
            _ => to.clone(),
        }
    }
}

impl<T: Interpolate + Copy> Interpolate for StyleOption<T> {
    fn interpolate(&self, to: &Self, factor: f64) -> Self {
        match (self, to) {
            (Self::Scalar(from), Self::Scalar(target)) => {
                Self::Scalar(from.interpolate(target, factor))
            }
            (Self::Indexed(from), Self::Indexed(target)) if from.len() == target.len() => {
                Self::Indexed(interpolate_slices(from, target, factor))
            }
            (Self::Wrapped { v: from }, Self::Wrapped { v: target })
                if from.len() == target.len() =>
            {
                Self::Wrapped {
                    v: interpolate_slices(from, target, factor),
                }
            }
            _ => to.clone(),
        }
    }
}

impl Interpolate for AxisBounds {
    fn interpolate(&self, to: &Self, factor: f64) -> Self {
        Self {
            min: self.min.interpolate(&to.min, factor),
            max: self.max.interpolate(&to.max, factor),
        }
    }
}

impl Interpolate for ErrorBarPixels {
    fn interpolate(&self, to: &Self, factor: f64) -> Self {
        Self {
            x: self.x.interpolate(&to.x, factor),
            y: self.y.interpolate(&to.y, factor),
            r: self.r.interpolate(&to.r, factor),
        }
    }
}

impl Interpolate for ErrorBarStyle {
    fn interpolate(&self, to: &Self, factor: f64) -> Self {
        Self {
            line_width: self.line_width.interpolate(&to.line_width, factor),
            color: self.color.interpolate(&to.color, factor),
            whisker_line_width: self
                .whisker_line_width
                .interpolate(&to.whisker_line_width, factor),
            whisker_ratio: self.whisker_ratio.interpolate(&to.whisker_ratio, factor),
            whisker_size: self.whisker_size.interpolate(&to.whisker_size, factor),
            whisker_color: self.whisker_color.interpolate(&to.whisker_color, factor),
        }
    }
}

fn interpolate_slices<T: Interpolate>(from: &[T], to: &[T], factor: f64) -> SmallVec<[T; 2]> {
    from.iter()
        .zip(to)
        .map(|(from, to)| from.interpolate(to, factor))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::Interpolate;
    use crate::core::ErrorValue;
    use crate::extensions::error_bars::StyleOption;
    use crate::render::Color;

    #[test]
    fn numbers_interpolate_linearly() {
        assert_eq!(10.0_f64.interpolate(&20.0, 0.25), 12.5);
        assert_eq!(3.0_f64.interpolate(&3.0, 0.5), 3.0);
    }

    #[test]
    fn colors_reach_target_at_full_progress() {
        let from = Color::rgb(0.0, 0.0, 0.0);
        let to = Color::rgb(1.0, 0.5, 0.0);
        assert_eq!(from.interpolate(&to, 1.0), to);
        let mid = from.interpolate(&to, 0.5);
        assert!((mid.red - 0.5).abs() < 1e-12);
        assert!((mid.green - 0.25).abs() < 1e-12);
    }

    #[test]
    fn mismatched_shapes_jump_to_target() {
        let from = ErrorValue::stacked([1.0, 2.0]);
        let to = ErrorValue::stacked([3.0, 4.0, 5.0]);
        assert_eq!(from.interpolate(&to, 0.5), to);
        assert_eq!(
            ErrorValue::stacked([0.0, 10.0]).interpolate(&ErrorValue::stacked([10.0, 20.0]), 0.5),
            ErrorValue::stacked([5.0, 15.0])
        );

        let scalar = StyleOption::Scalar(1.0);
        let indexed = StyleOption::indexed([2.0, 4.0]);
        assert_eq!(scalar.interpolate(&indexed, 0.5), indexed);
        assert_eq!(
            StyleOption::indexed([0.0, 2.0]).interpolate(&indexed, 0.5),
            StyleOption::indexed([1.0, 3.0])
        );
    }
}
