//! Views page - read-only detail containers and fields.

use dioxus::prelude::*;
use panelkit_ui::{Dimension, ViewContainer, ViewField, ViewGrid};

use crate::context::use_layout;

#[component]
pub fn Views() -> Element {
    let layout = use_layout();
    let grid = layout.grid;

    rsx! {
        ViewContainer { title: "contact".to_string(), width: Dimension::from("60rem"),
            ViewGrid { columns: Some(2),
                ViewField { label: "name".to_string(), value: "Ada Lovelace".to_string() }
                ViewField { label: "email".to_string(), value: "ada@example.org".to_string() }
                ViewField { label: "phone".to_string() }
                ViewField { label: "notes".to_string(), value: "   ".to_string(), placeholder: "none".to_string() }
            }
        }

        ViewContainer { title: "metadata".to_string(), full_width: true,
            ViewGrid {
                columns: grid.columns,
                min_card_width: grid.min_card_width.clone(),
                gap: grid.gap.clone(),
                ViewField { label: "created".to_string(), value: "2026-10-19".to_string(), inline: true }
                ViewField { label: "owner".to_string(), value: "ops".to_string(), inline: true }
                ViewField { label: "tags".to_string(), inline: true }
            }
        }
    }
}
