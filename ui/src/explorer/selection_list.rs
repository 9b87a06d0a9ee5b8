use dioxus::prelude::*;

use crate::core::SelectedItem;
use crate::t;

#[component]
pub fn SelectionList(items: Vec<SelectedItem>) -> Element {
    rsx! {
        section { class: "explorer-card explorer-selection",
            div { class: "explorer-card__header",
                h3 { {t!("selection-title")} }
                if !items.is_empty() {
                    span { class: "explorer-card__meta", {t!("selection-count", count = items.len())} }
                }
            }

            if items.is_empty() {
                p { class: "explorer-card__placeholder", {t!("selection-empty")} }
            } else {
                ul { class: "explorer-selection__items",
                    for item in items.iter() {
                        li { key: "{item.index}", class: "explorer-selection__item", "{item.raw_text}" }
                    }
                }
            }
        }
    }
}
