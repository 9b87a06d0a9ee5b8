//! Render model: everything the SVG needs, computed without touching the DOM.

use crate::core::{Dataset, ExplorerConfig, RecordIndex, SelectionSet};

use super::color::{ColorMode, Rgb};
use super::layout::Layout;

const LABEL_X: f64 = 10.0;
const LEGEND_LABEL_GAP: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub outer_width: f64,
    pub height: f64,
    pub labels: Vec<MonthLabel>,
    pub dots: Vec<Dot>,
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub index: RecordIndex,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: Rgb,
    pub selected: bool,
}

/// Named end of the legend gradient; the view localizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPole {
    Positive,
    Negative,
    Subjective,
    Objective,
}

impl LegendPole {
    pub fn english(self) -> &'static str {
        match self {
            LegendPole::Positive => "Positive",
            LegendPole::Negative => "Negative",
            LegendPole::Subjective => "Subjective",
            LegendPole::Objective => "Objective",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendSection {
    pub y: f64,
    pub height: f64,
    pub value: f64,
    pub fill: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub mode: ColorMode,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub sections: Vec<LegendSection>,
    pub top: LegendPole,
    pub bottom: LegendPole,
    /// Label positions relative to the legend origin.
    pub label_x: f64,
    pub top_label_y: f64,
    pub bottom_label_y: f64,
}

/// Discretized vertical gradient. The top section carries the domain maximum
/// and the bottom one the minimum.
pub fn build_legend(mode: ColorMode, config: &ExplorerConfig) -> Legend {
    let scale = mode.scale();
    let (min, max) = scale.domain();
    let count = config.legend.sections.max(1);
    let section_height = config.legend.height / count as f64;
    let value_step = if count > 1 {
        (max - min) / (count - 1) as f64
    } else {
        0.0
    };

    let sections = (0..count)
        .map(|i| {
            let value = max - value_step * i as f64;
            LegendSection {
                y: section_height * i as f64,
                height: section_height,
                value,
                fill: scale.color_at(value),
            }
        })
        .collect();

    let (top, bottom) = match mode {
        ColorMode::Sentiment => (LegendPole::Positive, LegendPole::Negative),
        ColorMode::Subjectivity => (LegendPole::Subjective, LegendPole::Objective),
    };

    let (x, y) = config.legend_origin();
    Legend {
        mode,
        x,
        y,
        width: config.legend.width,
        height: config.legend.height,
        sections,
        top,
        bottom,
        label_x: config.legend.width + LEGEND_LABEL_GAP,
        top_label_y: -LEGEND_LABEL_GAP,
        bottom_label_y: config.legend.height + 10.0,
    }
}

pub fn build_scene(
    dataset: &Dataset,
    layout: &Layout,
    mode: ColorMode,
    selection: &SelectionSet,
    config: &ExplorerConfig,
) -> Scene {
    let labels = layout
        .bands
        .iter()
        .map(|band| MonthLabel {
            text: band.month.clone(),
            x: LABEL_X,
            y: band.center(),
        })
        .collect();

    let dots = dataset
        .records()
        .iter()
        .filter_map(|record| {
            let placement = layout.placement(record.index)?;
            Some(Dot {
                index: record.index,
                cx: placement.x,
                cy: placement.y,
                r: config.dot_radius,
                fill: mode.fill(record),
                selected: selection.contains(record.index),
            })
        })
        .collect();

    Scene {
        outer_width: config.outer_width,
        height: config.height,
        labels,
        dots,
        legend: build_legend(mode, config),
    }
}
