//! Geometry and budget constants shared by layout and rendering.

/// Canvas, dot and legend geometry plus ingestion/layout budgets.
///
/// The layout math and the SVG surface both read from the same value, so the
/// drawing area never drifts from the coordinates the simulation produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    /// Width of the drawing area used by the layout math.
    pub width: f64,
    /// Height of the drawing area (and of the SVG surface).
    pub height: f64,
    /// Outer SVG width; the extra room on the right hosts the legend labels.
    pub outer_width: f64,
    pub dot_radius: f64,
    /// Records kept from an upload; the rest are dropped in file order.
    pub max_records: usize,
    /// Fixed number of relaxation steps per month band.
    pub layout_ticks: usize,
    /// Fractional padding between (and around) month bands.
    pub band_padding: f64,
    pub legend: LegendConfig,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendConfig {
    pub height: f64,
    pub width: f64,
    pub sections: usize,
    /// Distance of the legend's left edge from the right edge of the layout area.
    pub right_inset: f64,
}

impl ExplorerConfig {
    /// Minimum distance between two dot centers once the layout settles.
    pub fn min_separation(&self) -> f64 {
        2.0 * self.dot_radius + 1.0
    }

    /// Top-left corner of the legend group.
    pub fn legend_origin(&self) -> (f64, f64) {
        (self.width - self.legend.right_inset, self.height / 4.0)
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            outer_width: 850.0,
            dot_radius: 7.5,
            max_records: 300,
            layout_ticks: 300,
            band_padding: 0.2,
            legend: LegendConfig::default(),
        }
    }
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            height: 150.0,
            width: 20.0,
            sections: 10,
            right_inset: 50.0,
        }
    }
}
