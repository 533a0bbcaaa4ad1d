use serde::{Deserialize, Serialize};

/// Canvas layers in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Background,
    Grid,
    Series,
    ErrorBars,
    Axis,
}

impl CanvasLayerKind {
    /// Paint order for one chart: series shapes first, error bars on top of
    /// them, axis labels last.
    pub const CANONICAL: [Self; 5] = [
        Self::Background,
        Self::Grid,
        Self::Series,
        Self::ErrorBars,
        Self::Axis,
    ];
}

#[cfg(test)]
mod tests {
    use super::CanvasLayerKind;

    #[test]
    fn error_bars_paint_after_series() {
        let order = CanvasLayerKind::CANONICAL;
        let series = order
            .iter()
            .position(|kind| *kind == CanvasLayerKind::Series)
            .expect("series");
        let bars = order
            .iter()
            .position(|kind| *kind == CanvasLayerKind::ErrorBars)
            .expect("error bars");
        assert!(series < bars);
    }
}
