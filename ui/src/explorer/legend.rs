use dioxus::prelude::*;

use crate::t;
use crate::viz::{Legend, LegendPole};

/// Sectioned gradient legend. Rendered with the same key on every mode
/// change, so the previous legend is patched rather than duplicated.
#[component]
pub fn LegendView(legend: Legend) -> Element {
    let top = pole_label(legend.top);
    let bottom = pole_label(legend.bottom);

    rsx! {
        g {
            class: "explorer__legend",
            transform: "translate({legend.x}, {legend.y})",
            for (i, section) in legend.sections.iter().enumerate() {
                rect {
                    key: "{i}",
                    class: "explorer__legend-section",
                    x: "0",
                    y: "{section.y}",
                    width: "{legend.width}",
                    height: "{section.height}",
                    style: "fill: {section.fill};",
                }
            }
            text {
                class: "explorer__legend-label",
                x: "{legend.label_x}",
                y: "{legend.top_label_y}",
                "{top}"
            }
            text {
                class: "explorer__legend-label",
                x: "{legend.label_x}",
                y: "{legend.bottom_label_y}",
                "{bottom}"
            }
        }
    }
}

fn pole_label(pole: LegendPole) -> String {
    match pole {
        LegendPole::Positive => t!("legend-positive"),
        LegendPole::Negative => t!("legend-negative"),
        LegendPole::Subjective => t!("legend-subjective"),
        LegendPole::Objective => t!("legend-objective"),
    }
}
