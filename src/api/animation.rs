use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Easing curves for enter animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    EaseInOutQuad,
    #[default]
    EaseOutQuart,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` onto the curve.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOutQuad => {
                let t2 = t * 2.0;
                if t2 < 1.0 {
                    0.5 * t2 * t2
                } else {
                    let t2 = t2 - 1.0;
                    -0.5 * (t2 * (t2 - 2.0) - 1.0)
                }
            }
            Self::EaseOutQuart => -((t - 1.0).powi(4) - 1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnimationOptions {
    /// Milliseconds.
    pub duration: f64,
    pub easing: Easing,
    /// Polar areas sweep in from the start angle.
    pub animate_rotate: bool,
    /// Polar areas and their radial error bars grow from the center.
    pub animate_scale: bool,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration: 1000.0,
            easing: Easing::default(),
            animate_rotate: true,
            animate_scale: true,
        }
    }
}

impl AnimationOptions {
    pub fn validate(self) -> ChartResult<()> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(ChartError::InvalidData(
                "animation duration must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Eased progress after `elapsed_ms`; a zero duration completes at once.
    #[must_use]
    pub fn progress(self, elapsed_ms: f64) -> f64 {
        if self.duration <= 0.0 || !elapsed_ms.is_finite() {
            return 1.0;
        }
        self.easing.apply(elapsed_ms / self.duration)
    }

    #[must_use]
    pub fn is_complete(self, elapsed_ms: f64) -> bool {
        self.duration <= 0.0 || elapsed_ms >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimationOptions, Easing};

    #[test]
    fn easings_hit_both_ends() {
        for easing in [Easing::Linear, Easing::EaseInOutQuad, Easing::EaseOutQuart] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
        assert_eq!(Easing::EaseInOutQuad.apply(0.5), 0.5);
        assert_eq!(Easing::EaseOutQuart.apply(0.5), 0.9375);
    }

    #[test]
    fn progress_clamps_past_duration() {
        let options = AnimationOptions::default();
        assert_eq!(options.progress(0.0), 0.0);
        assert_eq!(options.progress(5000.0), 1.0);
        assert!(options.is_complete(1000.0));

        let instant = AnimationOptions {
            duration: 0.0,
            ..AnimationOptions::default()
        };
        assert_eq!(instant.progress(0.0), 1.0);
    }
}
